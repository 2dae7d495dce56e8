//! Display helpers for generation results
//!
//! Formats cards and summaries, and keeps the caller-owned "processed"
//! marks. Nothing here mutates a [`GenerationResult`].

use serde::Serialize;

use crate::domain::{order, Card, GenerationResult, Symbol};

/// Format a card as `[1, 2, 3]`.
pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// One list line for a card. `index` is 0-based, the label is 1-based.
///
/// A processed card shows only its label.
pub fn card_line(index: usize, card: &Card, processed: bool) -> String {
    if processed {
        format!("Card {}", index + 1)
    } else {
        format!("Card {}: {}", index + 1, format_card(card))
    }
}

/// Outcome message: full deck summary when valid, "Showing N of M" otherwise.
pub fn status_message(result: &GenerationResult) -> String {
    if result.is_valid() {
        format!(
            "Generated {} cards ({} symbols per card, {} total symbols)",
            result.raw_card_count(),
            result.symbols_per_card(),
            result.total_symbols()
        )
    } else {
        format!(
            "Showing {} of {} correct cards",
            result.deck().len(),
            result.raw_card_count()
        )
    }
}

/// Formula line: order, universe size and card count of a full plane.
pub fn formula_summary(symbols_per_card: usize, total_symbols: usize) -> String {
    format!(
        "Formula: n={}, symbols=n²+n+1={}, cards={}",
        order(symbols_per_card),
        total_symbols,
        total_symbols
    )
}

/// Per-card "processed" flags, parallel to a result's deck.
///
/// Belongs to the caller; a new generation needs a new set of marks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedMarks {
    marks: Vec<bool>,
}

impl ProcessedMarks {
    /// All cards unprocessed.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    pub fn for_result(result: &GenerationResult) -> Self {
        Self::new(result.deck().len())
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Out-of-range indices read as unprocessed.
    pub fn is_processed(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Set a mark. Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, processed: bool) -> bool {
        match self.marks.get_mut(index) {
            Some(mark) => {
                *mark = processed;
                true
            }
            None => false,
        }
    }

    /// Flip a mark, returning the new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let mark = self.marks.get_mut(index)?;
        *mark = !*mark;
        Some(*mark)
    }

    pub fn processed_count(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }
}

/// Card entry of a [`DeckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    /// 1-based position in the displayed deck
    pub number: usize,
    pub symbols: Vec<Symbol>,
    pub processed: bool,
}

/// Serializable view of one generation, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckReport {
    pub symbols_per_card: usize,
    pub order: usize,
    pub total_symbols: usize,
    pub valid: bool,
    pub raw_card_count: usize,
    pub card_count: usize,
    pub status: String,
    pub cards: Vec<CardEntry>,
}

impl DeckReport {
    pub fn new(result: &GenerationResult, marks: &ProcessedMarks) -> Self {
        let cards = result
            .deck()
            .iter()
            .enumerate()
            .map(|(i, card)| CardEntry {
                number: i + 1,
                symbols: card.symbols().to_vec(),
                processed: marks.is_processed(i),
            })
            .collect();

        Self {
            symbols_per_card: result.symbols_per_card(),
            order: order(result.symbols_per_card()),
            total_symbols: result.total_symbols(),
            valid: result.is_valid(),
            raw_card_count: result.raw_card_count(),
            card_count: result.deck().len(),
            status: status_message(result),
            cards,
        }
    }
}
