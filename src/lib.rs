//! **CodeLearn** is a web development course that runs in the browser as a
//! terminal user interface, built with [Ratatui] on top of [Ratzilla].
//!
//! It has four pages:
//!
//! - **Home**: a typewriter headline, animated statistics and a tutorial
//!   browser.
//! - **Tutorials**: the learning path with overall progress.
//! - **Playground**: HTML, CSS and JavaScript editors whose output runs in
//!   a sandboxed frame.
//! - **Quiz**: multiple choice quizzes with a score.
//!
//! A rain of glyphs is painted on a canvas behind the page.
//!
//! Everything except the [`backend`] module is plain Rust and runs on any
//! target.
//!
//! [Ratatui]: https://ratatui.rs
//! [Ratzilla]: https://github.com/orhun/ratzilla

/// Application shell.
pub mod app;
/// Background rain animation.
pub mod background;
/// Browser integration.
pub mod backend;
/// Document compositor.
pub mod compositor;
/// Configuration.
pub mod config;
/// Static catalog content.
pub mod content;
/// Stats counter animation.
pub mod counter;
/// Error type.
pub mod error;
/// Console logging.
pub mod logging;
/// Matrix rain state.
pub mod matrix;
/// Code playground.
pub mod playground;
/// Quiz sessions.
pub mod quiz;
/// Timer ownership.
pub mod timer;
/// Tutorial navigation.
pub mod tutorials;
/// Typewriter animation.
pub mod typewriter;
/// Page drawing.
pub mod ui;

pub use app::{App, Host, Page};
pub use config::Config;
pub use error::Error;
