//! Browser side of the reveal engine: intersection observers, timers and the
//! reduced-motion media query.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::reveal::{
    MotionPreference, RevealConfig, RevealEngine, RevealEvent, SubscriptionId, Visibility,
};

/// Reads `prefers-reduced-motion`. Anything that goes wrong reading it
/// counts as "no preference".
pub fn motion_preference() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}

/// Engine shared by every reveal on the page.
#[derive(Clone, Default)]
pub struct RevealContext {
    engine: Rc<RefCell<RevealEngine>>,
    // None reads the media query at each registration.
    motion: Option<MotionPreference>,
}

impl RevealContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that ignores the media query and always uses `motion`.
    pub fn with_motion(motion: MotionPreference) -> Self {
        Self {
            motion: Some(motion),
            ..Self::default()
        }
    }

    fn motion(&self) -> MotionPreference {
        self.motion.unwrap_or_else(motion_preference)
    }
}

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine) && self.motion == other.motion
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One `IntersectionObserver` watching one element. Disconnects on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    /// Calls `on_ratio` with the element's visible fraction on every
    /// threshold crossing. Returning `false` stops observation.
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if !on_ratio(ratio) {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        // Watch the empty edge too so leaving the viewport is always reported.
        let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold));
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type Timers = Rc<RefCell<HashMap<SubscriptionId, Timeout>>>;
type Notify = Rc<dyn Fn(SubscriptionId, Visibility)>;

/// A component's registration with the reveal engine.
///
/// Owns the observer and any pending timers. Dropping it unregisters from the
/// engine, disconnects the observer and cancels the timers.
pub struct RevealBinding {
    engine: Rc<RefCell<RevealEngine>>,
    subscription: SubscriptionId,
    timers: Timers,
    _observer: Option<ViewportObserver>,
}

impl RevealBinding {
    pub fn single(
        context: &RevealContext,
        element: Option<Element>,
        config: RevealConfig,
        on_change: Callback<Visibility>,
    ) -> Self {
        let registration = context
            .engine
            .borrow_mut()
            .register(config, context.motion());
        let notify: Notify = Rc::new(move |_: SubscriptionId, visibility: Visibility| {
            on_change.emit(visibility)
        });
        Self::attach(
            context,
            registration.id,
            vec![registration.id],
            registration.observe,
            element,
            config.threshold_value(),
            notify,
        )
    }

    /// Reveals `child_count` children in order once `element` comes into
    /// view. `on_change` receives the child index.
    pub fn group(
        context: &RevealContext,
        element: Option<Element>,
        child_count: usize,
        stagger_ms: u32,
        config: RevealConfig,
        on_change: Callback<(usize, Visibility)>,
    ) -> Self {
        let registration = context.engine.borrow_mut().register_group(
            child_count,
            stagger_ms,
            config,
            context.motion(),
        );
        let children = registration.children.clone();
        let notify: Notify = Rc::new(move |id: SubscriptionId, visibility: Visibility| {
            if let Some(index) = children.iter().position(|child| *child == id) {
                on_change.emit((index, visibility));
            }
        });
        Self::attach(
            context,
            registration.container,
            registration.children,
            registration.observe,
            element,
            config.threshold_value(),
            notify,
        )
    }

    fn attach(
        context: &RevealContext,
        subscription: SubscriptionId,
        revealed: Vec<SubscriptionId>,
        observe: bool,
        element: Option<Element>,
        threshold: f64,
        notify: Notify,
    ) -> Self {
        let engine = context.engine.clone();
        let timers: Timers = Rc::default();

        if !observe {
            for id in revealed {
                notify(id, Visibility::Visible);
            }
            return Self {
                engine,
                subscription,
                timers,
                _observer: None,
            };
        }

        let observer = match element {
            Some(element) => {
                let engine = engine.clone();
                let timers = timers.clone();
                let notify = notify.clone();
                ViewportObserver::observe(&element, threshold, move |ratio| {
                    let events = engine.borrow_mut().on_intersection(subscription, ratio);
                    dispatch(&engine, &timers, &notify, events)
                })
            }
            None => Err(JsValue::from_str("element not mounted")),
        };

        let observer = match observer {
            Ok(observer) => Some(observer),
            Err(e) => {
                warn!("Intersection observer unavailable: {:?}", e);
                let events = engine.borrow_mut().fall_back_to_visible(subscription);
                dispatch(&engine, &timers, &notify, events);
                None
            }
        };

        Self {
            engine,
            subscription,
            timers,
            _observer: observer,
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => {
                engine.unregister(self.subscription);
            }
            Err(_) => {
                warn!(
                    "Reveal engine busy while dropping {:?}, unregistering on the next tick",
                    self.subscription
                );
                let engine = self.engine.clone();
                let subscription = self.subscription;
                Timeout::new(0, move || {
                    let unregistered = engine
                        .try_borrow_mut()
                        .map(|mut engine| engine.unregister(subscription));
                    if unregistered.is_err() {
                        warn!("Reveal target {:?} left registered", subscription);
                    }
                })
                .forget();
            }
        }
        if let Ok(mut timers) = self.timers.try_borrow_mut() {
            timers.clear();
        }
    }
}

/// Applies engine events to the page. Returns whether observation should
/// continue.
fn dispatch(
    engine: &Rc<RefCell<RevealEngine>>,
    timers: &Timers,
    notify: &Notify,
    events: Vec<RevealEvent>,
) -> bool {
    let mut keep_observing = true;
    for event in events {
        match event {
            RevealEvent::Changed {
                subscription,
                visibility,
            } => notify(subscription, visibility),
            RevealEvent::Scheduled { ticket, delay_ms } => {
                let engine = engine.clone();
                let notify = notify.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    let fired = engine.borrow_mut().fire(ticket);
                    if let Some(RevealEvent::Changed {
                        subscription,
                        visibility,
                    }) = fired
                    {
                        notify(subscription, visibility);
                    }
                });
                // Replacing an older timer for the same target cancels it.
                timers.borrow_mut().insert(ticket.subscription, timeout);
            }
            RevealEvent::Released { .. } => keep_observing = false,
        }
    }
    keep_observing
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |value: T| sink.borrow_mut().push(value)))
    }

    fn notify_into(on_change: Callback<Visibility>) -> Notify {
        Rc::new(move |_: SubscriptionId, visibility: Visibility| on_change.emit(visibility))
    }

    #[wasm_bindgen_test]
    fn unmounted_element_is_shown_at_once() {
        let context = RevealContext::with_motion(MotionPreference::Full);
        let (seen, on_change) = recorder::<Visibility>();
        let config = RevealConfig::new().delay(500);

        let binding = RevealBinding::single(&context, None, config, on_change);

        assert_eq!(*seen.borrow(), vec![Visibility::Visible]);
        assert!(!context.engine.borrow().is_observing(binding.subscription));
        drop(binding);
        assert!(context.engine.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    fn unmounted_group_shows_every_child() {
        let context = RevealContext::with_motion(MotionPreference::Full);
        let (seen, on_change) = recorder::<(usize, Visibility)>();

        let _binding =
            RevealBinding::group(&context, None, 3, 100, RevealConfig::new(), on_change);

        assert_eq!(
            *seen.borrow(),
            vec![
                (0, Visibility::Visible),
                (1, Visibility::Visible),
                (2, Visibility::Visible),
            ]
        );
    }

    #[wasm_bindgen_test]
    fn reduced_motion_reveals_every_child_index() {
        let context = RevealContext::with_motion(MotionPreference::Reduced);
        let (seen, on_change) = recorder::<(usize, Visibility)>();

        let binding = RevealBinding::group(&context, None, 4, 100, RevealConfig::new(), on_change);

        let indices: Vec<usize> = seen.borrow().iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(seen.borrow().iter().all(|(_, v)| v.is_visible()));
        assert!(binding._observer.is_none());
    }

    #[wasm_bindgen_test]
    fn observes_a_mounted_element() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        document.document_element().unwrap().append_child(&element).unwrap();

        let observer = ViewportObserver::observe(&element, 0.2, |_| true);
        assert!(observer.is_ok());
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn delayed_flip_fires_after_its_timer() {
        let engine = Rc::new(RefCell::new(RevealEngine::new()));
        let timers: Timers = Rc::default();
        let (seen, on_change) = recorder::<Visibility>();
        let registration = engine
            .borrow_mut()
            .register(RevealConfig::new().delay(20), MotionPreference::Full);

        let events = engine.borrow_mut().on_intersection(registration.id, 1.0);
        assert!(!dispatch(&engine, &timers, &notify_into(on_change), events));
        assert!(seen.borrow().is_empty());

        TimeoutFuture::new(80).await;
        assert_eq!(*seen.borrow(), vec![Visibility::Visible]);
    }

    #[wasm_bindgen_test]
    async fn newer_schedule_replaces_the_older_timer() {
        let engine = Rc::new(RefCell::new(RevealEngine::new()));
        let timers: Timers = Rc::default();
        let (seen, on_change) = recorder::<Visibility>();
        let notify = notify_into(on_change);
        let config = RevealConfig::new().delay(20).once(false);
        let id = engine.borrow_mut().register(config, MotionPreference::Full).id;

        for ratio in [1.0, 0.0, 1.0] {
            let events = engine.borrow_mut().on_intersection(id, ratio);
            assert!(dispatch(&engine, &timers, &notify, events));
        }
        assert_eq!(timers.borrow().len(), 1);

        TimeoutFuture::new(80).await;
        assert_eq!(*seen.borrow(), vec![Visibility::Visible]);
    }

    #[wasm_bindgen_test]
    async fn dropping_the_binding_cancels_pending_timers() {
        let context = RevealContext::with_motion(MotionPreference::Full);
        let engine = context.engine.clone();
        let timers: Timers = Rc::default();
        let (seen, on_change) = recorder::<Visibility>();
        let id = engine
            .borrow_mut()
            .register(RevealConfig::new().delay(20), MotionPreference::Full)
            .id;

        let events = engine.borrow_mut().on_intersection(id, 1.0);
        dispatch(&engine, &timers, &notify_into(on_change), events);
        assert_eq!(timers.borrow().len(), 1);

        let binding = RevealBinding {
            engine: engine.clone(),
            subscription: id,
            timers: timers.clone(),
            _observer: None,
        };
        drop(binding);
        assert!(timers.borrow().is_empty());
        assert!(engine.borrow().is_empty());

        TimeoutFuture::new(80).await;
        assert!(seen.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn drop_during_a_borrow_unregisters_later() {
        let context = RevealContext::with_motion(MotionPreference::Full);
        let engine = context.engine.clone();
        let binding = RevealBinding::single(&context, None, RevealConfig::new(), Callback::noop());

        {
            let _busy = engine.borrow();
            drop(binding);
        }
        assert!(!engine.borrow().is_empty());

        TimeoutFuture::new(20).await;
        assert!(engine.borrow().is_empty());
    }
}
