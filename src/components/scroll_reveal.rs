use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::observer::{RevealBinding, RevealContext};
use crate::reveal::{Direction, RevealConfig, RevealStyle, Visibility};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(config::REVEAL_DURATION_MS)]
    pub duration: u32,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(config::REVEAL_DISTANCE_PX)]
    pub distance: f64,
    /// Told about every visibility flip, e.g. to start a counter.
    #[prop_or_default]
    pub on_change: Callback<Visibility>,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let context = use_context::<RevealContext>().unwrap_or_default();
    let node = use_node_ref();
    let visibility = use_state(|| Visibility::Hidden);

    let config = RevealConfig::new()
        .threshold(props.threshold)
        .delay(props.delay)
        .duration(props.duration)
        .direction(props.direction)
        .once(props.once)
        .distance(props.distance);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        let on_change = props.on_change.clone();
        use_effect_with_deps(
            move |config| {
                let binding = RevealBinding::single(
                    &context,
                    node.cast::<Element>(),
                    *config,
                    Callback::from(move |next: Visibility| {
                        visibility.set(next);
                        on_change.emit(next);
                    }),
                );
                move || drop(binding)
            },
            config,
        );
    }

    let style = RevealStyle::compute(*visibility, &config).to_css();

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or(config::STAGGER_DELAY_MS)]
    pub stagger: u32,
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(400)]
    pub duration: u32,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(30.0)]
    pub distance: f64,
}

#[derive(Default, PartialEq)]
struct StaggerState {
    items: Vec<Visibility>,
}

impl Reducible for StaggerState {
    type Action = (usize, Visibility);

    fn reduce(self: Rc<Self>, (index, visibility): Self::Action) -> Rc<Self> {
        if self.items.get(index) == Some(&visibility) {
            return self;
        }
        let mut items = self.items.clone();
        if items.len() <= index {
            items.resize(index + 1, Visibility::Hidden);
        }
        items[index] = visibility;
        Rc::new(Self { items })
    }
}

/// Wraps each child in its own revealed box; the container's intersection
/// triggers them one after another.
#[function_component(StaggerReveal)]
pub fn stagger_reveal(props: &StaggerRevealProps) -> Html {
    let context = use_context::<RevealContext>().unwrap_or_default();
    let node = use_node_ref();
    let state = use_reducer(StaggerState::default);
    let count = props.children.len();

    let config = RevealConfig::new()
        .threshold(props.threshold)
        .delay(props.delay)
        .duration(props.duration)
        .direction(props.direction)
        .once(props.once)
        .distance(props.distance);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(config, stagger, count)| {
                let binding = RevealBinding::group(
                    &context,
                    node.cast::<Element>(),
                    *count,
                    *stagger,
                    *config,
                    Callback::from(move |change: (usize, Visibility)| dispatcher.dispatch(change)),
                );
                move || drop(binding)
            },
            (config, props.stagger, count),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            {
                for props.children.iter().enumerate().map(|(index, child)| {
                    let visibility = state.items.get(index).copied().unwrap_or_default();
                    let style = RevealStyle::compute(visibility, &config).to_css();
                    html! {
                        <div class={props.item_class.clone()} style={style}>{ child }</div>
                    }
                })
            }
        </div>
    }
}
