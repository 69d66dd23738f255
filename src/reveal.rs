// Reveal-on-scroll, once per section per page load.
//
// Hidden --(first intersection)--> Revealing --(transition settles)--> Revealed
// Revealed is terminal; later scroll events never reset it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Base transition length, matches `--reveal-duration` in styles.css.
pub const REVEAL_DURATION_MS: u32 = 800;
const VISIBLE_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    EnteredViewport,
    LeftViewport,
    TransitionEnded,
}

impl RevealPhase {
    pub fn next(self, event: RevealEvent) -> Self {
        match (self, event) {
            (RevealPhase::Hidden, RevealEvent::EnteredViewport) => RevealPhase::Revealing,
            (RevealPhase::Revealing, RevealEvent::TransitionEnded) => RevealPhase::Revealed,
            (phase, _) => phase,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealPhase::Hidden => "is-hidden",
            RevealPhase::Revealing => "is-revealing",
            RevealPhase::Revealed => "is-revealed",
        }
    }
}

impl Reducible for RevealPhase {
    type Action = RevealEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Keeps the observer and its callback alive; dropping it disconnects.
struct RevealWatch {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    _settle: Rc<RefCell<Option<Timeout>>>,
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn settle_later(dispatch: UseReducerDispatcher<RevealPhase>, settle_ms: u32) -> Timeout {
    Timeout::new(settle_ms, move || dispatch.dispatch(RevealEvent::TransitionEnded))
}

fn watch(
    el: &Element,
    dispatch: UseReducerDispatcher<RevealPhase>,
    settle_ms: u32,
) -> Result<RevealWatch, JsValue> {
    let settle: Rc<RefCell<Option<Timeout>>> = Rc::default();

    let on_entries = {
        let settle = settle.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|e| e.is_intersecting());
                if !visible {
                    dispatch.dispatch(RevealEvent::LeftViewport);
                    return;
                }
                // First sighting is all we need.
                observer.disconnect();
                dispatch.dispatch(RevealEvent::EnteredViewport);
                settle
                    .borrow_mut()
                    .get_or_insert_with(|| settle_later(dispatch.clone(), settle_ms));
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);

    Ok(RevealWatch { observer, _on_entries: on_entries, _settle: settle })
}

/// Tracks when the element behind `node` first scrolls into view.
/// `settle_ms` is how long the section's longest staggered transition runs.
#[hook]
pub fn use_reveal_once(node: NodeRef, settle_ms: u32) -> RevealPhase {
    let phase = use_reducer(RevealPhase::default);

    {
        let dispatch = phase.dispatcher();
        use_effect_with(node, move |node| {
            let mut fallback: Option<Timeout> = None;
            let guard = match node.cast::<Element>() {
                Some(el) => match watch(&el, dispatch.clone(), settle_ms) {
                    Ok(w) => Some(w),
                    Err(e) => {
                        gloo::console::warn!("IntersectionObserver unavailable, revealing now", e);
                        dispatch.dispatch(RevealEvent::EnteredViewport);
                        fallback = Some(settle_later(dispatch, settle_ms));
                        None
                    }
                },
                None => None,
            };
            move || {
                drop(guard);
                drop(fallback);
            }
        });
    }

    *phase
}

/// Stagger delay for the card at `index`, as an inline style.
pub fn stagger_style(index: usize, step_secs: f64) -> String {
    format!("transition-delay: {:.1}s;", index as f64 * step_secs)
}

/// Settle time for a section whose last card waits `(count - 1) * step_secs`.
pub fn settle_ms_for(count: usize, step_secs: f64) -> u32 {
    let stagger = count.saturating_sub(1) as f64 * step_secs * 1000.0;
    REVEAL_DURATION_MS + stagger.round() as u32
}
