use std::f64::consts::TAU;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::particles::{project, ParticlePoint, Rotation};

pub const POINT_COLOR: &str = "#3b82f6";
pub const POINT_OPACITY: f64 = 0.6;
/// Backing stores never go denser than this.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("canvas element not mounted")]
    NoCanvas,
    #[error("2d context unavailable")]
    NoContext,
    #[error("2d context has unexpected type")]
    WrongContext,
}

/// What the backdrop needs from whatever it draws on.
pub trait RenderSurface {
    /// Prepares a blank frame and returns its size in CSS pixels.
    fn begin_frame(&mut self) -> (f64, f64);
    fn dot(&mut self, x: f64, y: f64, size: f64);
}

/// Draws one frame of the cloud at `t` seconds; returns how many dots landed.
pub fn draw_frame<S: RenderSurface>(surface: &mut S, cloud: &[ParticlePoint], t: f64) -> usize {
    let (w, h) = surface.begin_frame();
    let rotation = Rotation::at(t);
    let mut drawn = 0;
    for p in cloud {
        if let Some(s) = project(rotation.apply(*p), w, h) {
            surface.dot(s.x, s.y, s.size);
            drawn += 1;
        }
    }
    drawn
}

/// Device pixel ratio limited to 1..=2; junk values fall back to 1.
pub fn clamp_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(1.0, MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size in device pixels for a `css_w` x `css_h` layout box.
pub fn backing_size(css_w: i32, css_h: i32, ratio: f64) -> (u32, u32) {
    let scale = |css: i32| (css.max(0) as f64 * ratio).round() as u32;
    (scale(css_w), scale(css_h))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::NoContext)?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::WrongContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Resizes the backing store to the laid-out size times the pixel ratio
    /// and returns the size in CSS pixels.
    fn fit_to_layout(&self) -> (f64, f64, f64) {
        let ratio = clamp_pixel_ratio(
            web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0),
        );
        let (css_w, css_h) = (self.canvas.client_width(), self.canvas.client_height());
        let (w, h) = backing_size(css_w, css_h, ratio);
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        (css_w.max(0) as f64, css_h.max(0) as f64, ratio)
    }
}

impl RenderSurface for CanvasSurface {
    fn begin_frame(&mut self) -> (f64, f64) {
        let (w, h, ratio) = self.fit_to_layout();
        // Resizing resets the transform, so it is set again every frame.
        self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).ok();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_global_alpha(POINT_OPACITY);
        self.ctx.set_fill_style_str(POINT_COLOR);
        (w, h)
    }

    fn dot(&mut self, x: f64, y: f64, size: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, size / 2.0, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::generate_point_cloud;

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        dots: Vec<(f64, f64, f64)>,
    }

    impl RenderSurface for Recorder {
        fn begin_frame(&mut self) -> (f64, f64) {
            self.frames += 1;
            self.dots.clear();
            (640.0, 480.0)
        }

        fn dot(&mut self, x: f64, y: f64, size: f64) {
            self.dots.push((x, y, size));
        }
    }

    #[test]
    fn points_near_origin_are_always_drawn() {
        // Within radius 4.5 no rotation can push a point past the near plane.
        let mut n = 0u32;
        let cloud: Vec<ParticlePoint> = generate_point_cloud(500, move || {
            n = n.wrapping_add(7919);
            (n % 1000) as f64 / 1000.0
        })
        .into_iter()
        .filter(|p| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt() < 4.5)
        .collect();
        assert!(!cloud.is_empty());

        let mut rec = Recorder::default();
        for t in [0.0, 1.0, 12.5, 100.0] {
            assert_eq!(draw_frame(&mut rec, &cloud, t), cloud.len());
            assert_eq!(rec.dots.len(), cloud.len());
        }
        assert_eq!(rec.frames, 4);
    }

    #[test]
    fn far_corner_swung_behind_camera_is_skipped() {
        // (-5, 0, 5) sits at z = 5 * sqrt(2) after an eighth turn.
        let cloud = [ParticlePoint { x: -5.0, y: 0.0, z: 5.0 }];
        let mut rec = Recorder::default();
        let t = std::f64::consts::FRAC_PI_4 / 0.1;
        // Tilt at this t is tiny and cannot pull the point back in front.
        assert_eq!(draw_frame(&mut rec, &cloud, t), 0);
        assert!(rec.dots.is_empty());
    }

    #[test]
    fn frames_move_over_time() {
        let cloud = [ParticlePoint { x: 3.0, y: 0.5, z: 0.0 }];
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &cloud, 0.0);
        let first = rec.dots[0];
        draw_frame(&mut rec, &cloud, 5.0);
        let later = rec.dots[0];
        assert_ne!(first, later);
    }

    #[test]
    fn empty_cloud_draws_blank_frame() {
        let mut rec = Recorder::default();
        assert_eq!(draw_frame(&mut rec, &[], 3.0), 0);
        assert_eq!(rec.frames, 1);
    }

    #[test]
    fn pixel_ratio_is_clamped() {
        assert_eq!(clamp_pixel_ratio(1.0), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_pixel_ratio(3.0), MAX_PIXEL_RATIO);
        assert_eq!(clamp_pixel_ratio(0.5), 1.0);
        assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
        assert_eq!(clamp_pixel_ratio(f64::INFINITY), 1.0);
    }

    #[test]
    fn backing_store_scales_with_ratio() {
        assert_eq!(backing_size(640, 480, 1.0), (640, 480));
        assert_eq!(backing_size(640, 480, 2.0), (1280, 960));
        assert_eq!(backing_size(333, 101, 1.5), (500, 152));
        assert_eq!(backing_size(-4, 0, 2.0), (0, 0));
    }
}
