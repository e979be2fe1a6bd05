//! Rendering core for quadbar.
//!
//! This crate contains the pure Braille bar renderer plus the shared
//! configuration and error types used across the quadbar workspace.

pub mod bar;
pub mod braille;
pub mod config;
pub mod error;
pub mod percent;

pub use bar::render_progress_bar;
pub use braille::braille_char;
pub use config::BarConfig;
pub use error::CoreError;
