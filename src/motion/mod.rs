//! Small scroll and animation helpers used by the page sections.

pub mod counter;
pub mod progress;
pub mod throttle;

pub use counter::CountUp;
pub use progress::scroll_progress;
pub use throttle::{Throttle, ThrottleDecision};
