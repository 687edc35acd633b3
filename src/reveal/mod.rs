//! Scroll-triggered entrance animations.
//!
//! [`RevealEngine`] holds the per-target state machine and is pure; the
//! browser side (intersection observers, timers) lives in
//! [`crate::observer`] and the components that use it.

mod config;
mod engine;
mod style;

pub use config::{Direction, RevealConfig};
pub use engine::{
    stagger_delay, FlipTicket, GroupRegistration, MotionPreference, Registration, RevealEngine,
    RevealEvent, SubscriptionId,
};
pub use style::{RevealStyle, Visibility};
