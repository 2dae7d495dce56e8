//! Domain layer: deck construction, validation and filtering
//!
//! Pure functions over in-memory cards. No I/O, no CLI, no config loading.

pub mod arithmetic;
pub mod constructor;
pub mod entities;
pub mod filter;
pub mod validator;

pub use arithmetic::{common_symbol_count, order, total_symbols};
pub use constructor::construct_deck;
pub use entities::*;
pub use filter::filter_valid_cards;
pub use validator::{first_violation, is_valid_deck, Violation};
