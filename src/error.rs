//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The global error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (write sink, config reading).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Failures reported by the cloud provider request collaborator.
    /// Created explicitly to avoid conflict with `General`.
    #[from(ignore)]
    #[display("Provider Error: {_0}")]
    Provider(String),

    /// Configuration file parse failures.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
