//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum BotError {
    /// Policy parameter file error.
    #[error("Parameter file error: {0}")]
    ParamFileError(String),

    /// Action lookup table error.
    #[error("Action table error: {0}")]
    ActionTableError(String),
}
