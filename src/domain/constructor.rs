//! Deck construction from the order-n incidence formula
//!
//! Symbols `1..=n+1` act as "directions": symbol 1 is shared by the base card
//! and the pencil cards, symbol `i + 2` anchors the grid cards of slope `i`.
//! The remaining `n²` symbols form an `n × n` grid, numbered row by row.
//!
//! The result is a valid deck only when arithmetic modulo `n` behaves like a
//! field (prime `n`). Nothing is checked here; the validator decides.

use tracing::trace;

use crate::domain::{order, Card, Deck, Symbol};

/// Build the raw candidate deck: `1 + n + n²` cards of `n + 1` symbols each.
///
/// Requires `symbols_per_card >= 2`.
pub fn construct_deck(symbols_per_card: usize) -> Deck {
    let n = order(symbols_per_card);
    let mut deck = Vec::with_capacity(1 + n + n * n);

    // base card
    deck.push((1..=n + 1).collect::<Card>());

    // pencil cards: symbol 1 plus one grid row each
    for i in 0..n {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(n + 1);
        symbols.push(1);
        symbols.extend((0..n).map(|j| grid_symbol(n, i, j)));
        deck.push(Card::new(symbols));
    }

    // grid cards: slope anchor plus one cell per row
    for i in 0..n {
        for j in 0..n {
            let mut symbols: Vec<Symbol> = Vec::with_capacity(n + 1);
            symbols.push(i + 2);
            symbols.extend((0..n).map(|k| grid_symbol(n, k, (i * k + j) % n)));
            deck.push(Card::new(symbols));
        }
    }

    trace!("construct_deck: n={} cards={}", n, deck.len());
    deck
}

/// 1-indexed symbol of grid cell (`row`, `col`).
fn grid_symbol(n: usize, row: usize, col: usize) -> Symbol {
    (n + 1) + row * n + col + 1
}
