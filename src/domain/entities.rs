//! Domain entities: core data structures

use std::fmt;

use serde::Serialize;

/// Symbol identifier, 1-indexed within a universe of `n² + n + 1` symbols.
pub type Symbol = usize;

/// A card: an ordered sequence of unique symbols.
///
/// Order is insertion order. It does not affect validity but is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Card(Vec<Symbol>);

impl Card {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }
}

impl From<Vec<Symbol>> for Card {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Symbol> for Card {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        f.write_str("]")
    }
}

/// All cards produced by one generation run.
pub type Deck = Vec<Card>;

/// Outcome of one generation request.
///
/// Immutable once built: the deck shown to the user, whether the raw
/// construction was already valid, and the derived counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    symbols_per_card: usize,
    deck: Deck,
    valid: bool,
    total_symbols: usize,
    raw_card_count: usize,
}

impl GenerationResult {
    pub fn new(
        symbols_per_card: usize,
        deck: Deck,
        valid: bool,
        total_symbols: usize,
        raw_card_count: usize,
    ) -> Self {
        Self {
            symbols_per_card,
            deck,
            valid,
            total_symbols,
            raw_card_count,
        }
    }

    pub fn symbols_per_card(&self) -> usize {
        self.symbols_per_card
    }

    /// Cards to display: the raw deck when valid, otherwise the filtered subset.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// True when the raw construction satisfied the one-common-symbol rule.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn total_symbols(&self) -> usize {
        self.total_symbols
    }

    /// Number of cards produced by the construction before filtering.
    pub fn raw_card_count(&self) -> usize {
        self.raw_card_count
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_card_when_displayed_then_bracketed_comma_list() {
        let card = Card::new(vec![1, 6, 7]);
        assert_eq!(card.to_string(), "[1, 6, 7]");
    }

    #[test]
    fn given_empty_card_when_displayed_then_empty_brackets() {
        assert_eq!(Card::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn given_card_when_serialized_then_plain_array() {
        let card: Card = vec![2, 4, 6].into();
        assert_eq!(serde_json::to_string(&card).unwrap(), "[2,4,6]");
    }
}
