use log::Level;

use crate::i18n::Locale;

/// Locale every session starts in.
pub const DEFAULT_LOCALE: Locale = Locale::En;

// Reveal defaults
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_DURATION_MS: u32 = 600;
pub const REVEAL_DISTANCE_PX: f64 = 40.0;
pub const STAGGER_DELAY_MS: u32 = 100;
pub const REVEAL_BLUR_PX: f64 = 8.0;
pub const REVEAL_HIDDEN_SCALE: f64 = 0.9;

/// Minimum spacing between scroll handler runs (one frame at 60Hz).
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// How long the contact form shows its "sent" state before clearing.
pub const CONTACT_RESET_MS: u32 = 3000;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_TICK_MS: u32 = 30;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
