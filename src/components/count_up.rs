use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::motion::counter::{format_count, CountUp};
use crate::observer::motion_preference;
use crate::reveal::MotionPreference;

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting begins the first time this turns true.
    pub start: bool,
}

fn tick(count: CountUp, started_at: f64, value: UseStateHandle<u64>, cancelled: Rc<Cell<bool>>) {
    if cancelled.get() {
        return;
    }
    let elapsed = Date::now() - started_at;
    value.set(count.value_at(elapsed));
    if count.is_done(elapsed) {
        return;
    }
    Timeout::new(config::COUNTER_TICK_MS, move || {
        tick(count, started_at, value, cancelled)
    })
    .forget();
}

/// Statistic that counts up from zero once revealed.
#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let value = use_state(|| 0_u64);
    let started = use_mut_ref(|| false);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(start, target)| {
                let cancelled = Rc::new(Cell::new(false));
                let first_start = *start && !*started.borrow();
                if first_start {
                    *started.borrow_mut() = true;
                    if motion_preference() == MotionPreference::Reduced {
                        value.set(*target);
                    } else {
                        let count = CountUp::new(*target, config::COUNTER_DURATION_MS);
                        tick(count, Date::now(), value, cancelled.clone());
                    }
                } else if *start {
                    // Target changed after the count already ran.
                    value.set(*target);
                }
                move || cancelled.set(true)
            },
            (props.start, props.target),
        );
    }

    html! {
        <span class="count-up">{ format_count(*value) }{ props.suffix.clone() }</span>
    }
}
