//! Bright Beginnings Books landing page.
//!
//! `reveal`, `i18n` and `motion` are plain Rust and run anywhere; `observer`,
//! `components` and `pages` drive the browser through Yew and web-sys.

pub mod components;
pub mod config;
pub mod i18n;
pub mod motion;
pub mod observer;
pub mod pages;
pub mod reveal;
