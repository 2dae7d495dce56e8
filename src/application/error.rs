//! Application-level errors

use thiserror::Error;

/// Rejected `symbols_per_card` input.
///
/// Generation is only attempted once the input passes every check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter the number of images per card")]
    Missing,

    #[error("please enter a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("the number of images per card must be greater than 1 (got {0})")]
    TooSmall(i64),

    #[error("the number of images per card is limited to {max} for performance (got {value})")]
    ExceedsLimit { value: i64, max: usize },
}

/// Application errors wrap input errors and add configuration concerns.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
