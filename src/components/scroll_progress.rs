use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::motion::{scroll_progress, Throttle, ThrottleDecision};

fn measure() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some(scroll_progress(scroll_y, f64::from(root.scroll_height()), viewport))
}

/// Thin bar across the top of the page showing how far the reader has
/// scrolled.
#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(RefCell::new(Throttle::new(config::SCROLL_THROTTLE_MS)));
                let update = Rc::new(move || {
                    if let Some(value) = measure() {
                        progress.set(value);
                    }
                });

                let scroll_callback = {
                    let update = update.clone();
                    Closure::wrap(Box::new(move || {
                        let decision = throttle.borrow_mut().call(Date::now());
                        match decision {
                            ThrottleDecision::Run => update(),
                            ThrottleDecision::Defer { already_scheduled: true, .. } => {}
                            ThrottleDecision::Defer { wait_ms, generation, .. } => {
                                let throttle = throttle.clone();
                                let update = update.clone();
                                Timeout::new(wait_ms.ceil() as u32, move || {
                                    if throttle.borrow_mut().flush(generation, Date::now()) {
                                        update();
                                    }
                                })
                                .forget();
                            }
                        }
                    }) as Box<dyn FnMut()>)
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                update(); // Initial position

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress" role="presentation">
            <div
                class="scroll-progress-fill"
                style={format!("transform: scaleX({:.4});", *progress)}
            />
        </div>
    }
}
