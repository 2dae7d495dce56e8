//! Deck generation service
//!
//! Construct first, validate after: the raw deck is only checked at runtime,
//! and an invalid construction degrades to the greedily filtered subset.

use tracing::{debug, info, warn};

use crate::domain::{
    construct_deck, filter_valid_cards, first_violation, total_symbols, GenerationResult,
};

/// Runs construction, validation and filtering for one card size.
///
/// Holds no state: every call builds an independent [`GenerationResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckGenerator;

impl DeckGenerator {
    /// Create a new deck generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the display deck for `symbols_per_card`.
    ///
    /// Expects a value accepted by
    /// [`parse_symbols_per_card`](crate::application::parse_symbols_per_card).
    /// Never fails; an invalid raw deck is reported through
    /// [`GenerationResult::is_valid`].
    pub fn generate(&self, symbols_per_card: usize) -> GenerationResult {
        debug!("generate: symbols_per_card={}", symbols_per_card);

        let raw = construct_deck(symbols_per_card);
        let raw_card_count = raw.len();
        debug!("generate: constructed {} cards", raw_card_count);

        let violation = first_violation(&raw);
        let valid = violation.is_none();
        let deck = match violation {
            None => raw,
            Some(v) => {
                debug!(
                    "generate: cards {} and {} share {} symbols",
                    v.first, v.second, v.common
                );
                let filtered = filter_valid_cards(&raw);
                warn!(
                    "raw deck invalid, kept {} of {} cards",
                    filtered.len(),
                    raw_card_count
                );
                filtered
            }
        };

        let total = self.total_symbols(symbols_per_card);
        info!(
            "generated {} cards ({} symbols per card, {} total symbols, valid={})",
            deck.len(),
            symbols_per_card,
            total,
            valid
        );

        GenerationResult::new(symbols_per_card, deck, valid, total, raw_card_count)
    }

    /// Number of distinct symbols for `symbols_per_card`: `n² + n + 1`.
    pub fn total_symbols(&self, symbols_per_card: usize) -> usize {
        total_symbols(symbols_per_card)
    }
}
