//! Application layer: services and use cases
//!
//! Sits between the CLI and the pure domain functions: validates raw input,
//! runs generation, and prepares results for display.

pub mod error;
pub mod input;
pub mod render;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InputError};
pub use input::{
    check_symbols_per_card, parse_symbols_per_card, MAX_SYMBOLS_PER_CARD, MIN_SYMBOLS_PER_CARD,
};
