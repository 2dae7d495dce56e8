//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod generator;

pub use generator::DeckGenerator;
