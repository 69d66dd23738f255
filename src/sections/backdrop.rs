// Decorative point cloud behind the hero headline. Purely ornamental: if the
// canvas cannot be drawn on, the layer stays empty and nothing is reported
// to the visitor.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::particles::{generate_point_cloud, ParticlePoint};
use crate::surface::{draw_frame, CanvasSurface, RenderSurface, SurfaceError};

/// Owns the pending frame; dropping it stops the loop.
struct AnimationLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl AnimationLoop {
    fn start<S: RenderSurface + 'static>(surface: S, cloud: Vec<ParticlePoint>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let scene = Rc::new(RefCell::new(Scene { surface, cloud, started_ms: None }));
        schedule(pending.clone(), scene);
        Self { pending }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

struct Scene<S> {
    surface: S,
    cloud: Vec<ParticlePoint>,
    started_ms: Option<f64>,
}

impl<S: RenderSurface> Scene<S> {
    fn render(&mut self, now_ms: f64) {
        let start = *self.started_ms.get_or_insert(now_ms);
        let t = (now_ms - start) / 1000.0;
        draw_frame(&mut self.surface, &self.cloud, t);
    }
}

fn schedule<S: RenderSurface + 'static>(
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    scene: Rc<RefCell<Scene<S>>>,
) {
    let slot = pending.clone();
    let frame = request_animation_frame(move |now_ms| {
        scene.borrow_mut().render(now_ms);
        schedule(slot, scene);
    });
    *pending.borrow_mut() = Some(frame);
}

fn start_on(canvas: Option<HtmlCanvasElement>, count: usize) -> Result<AnimationLoop, SurfaceError> {
    let surface = CanvasSurface::new(canvas.ok_or(SurfaceError::NoCanvas)?)?;
    // Fresh random cloud for every mount.
    let cloud = generate_point_cloud(count, js_sys::Math::random);
    Ok(AnimationLoop::start(surface, cloud))
}

#[derive(Properties, PartialEq)]
pub struct WaveformBackdropProps {
    pub particle_count: usize,
}

#[function_component(WaveformBackdrop)]
pub fn waveform_backdrop(props: &WaveformBackdropProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.particle_count, move |count| {
            let running = match start_on(canvas_ref.cast::<HtmlCanvasElement>(), *count) {
                Ok(l) => Some(l),
                Err(e) => {
                    gloo::console::warn!(format!("hero backdrop disabled: {e}"));
                    None
                }
            };
            move || drop(running)
        });
    }

    html! {
        <div class="hero-backdrop" aria-hidden="true">
            <canvas ref={canvas_ref} class="hero-canvas"></canvas>
        </div>
    }
}
