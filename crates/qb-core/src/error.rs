use thiserror::Error;

/// Errors originating from the core crate.
///
/// The renderer itself raises nothing: out-of-range input is clamped, not
/// rejected. Only configuration loading can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },
}
