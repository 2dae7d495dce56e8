//! Greedy extraction of a valid sub-deck
//!
//! Seeds with the first card, then repeatedly scans the unused cards in
//! original order and accepts the first one sharing exactly one symbol with
//! every accepted card. After each acceptance the scan restarts from the
//! beginning; it stops once a full scan accepts nothing.
//!
//! The result is deterministic for a given card order but is not guaranteed
//! to be the largest compatible subset.

use tracing::trace;

use crate::domain::{common_symbol_count, Card, Deck};

/// Select a pairwise-valid subset of `deck`, keeping acceptance order.
///
/// Never returns more cards than given. The first input card is always the
/// first output card.
pub fn filter_valid_cards(deck: &[Card]) -> Deck {
    let Some(first) = deck.first() else {
        return Vec::new();
    };

    let mut accepted: Deck = vec![first.clone()];
    let mut used = vec![false; deck.len()];
    used[0] = true;

    loop {
        let next = (1..deck.len()).find(|&i| !used[i] && fits_all(&deck[i], &accepted));
        let Some(index) = next else {
            break;
        };
        trace!("filter: accept card {} ({} accepted)", index, accepted.len() + 1);
        used[index] = true;
        accepted.push(deck[index].clone());
    }

    accepted
}

/// Candidate shares exactly one symbol with every accepted card.
fn fits_all(candidate: &Card, accepted: &[Card]) -> bool {
    accepted
        .iter()
        .all(|card| common_symbol_count(candidate, card) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{construct_deck, is_valid_deck};

    fn deck(cards: &[&[usize]]) -> Vec<Card> {
        cards.iter().map(|c| Card::new(c.to_vec())).collect()
    }

    #[test]
    fn given_empty_deck_when_filtering_then_empty() {
        assert!(filter_valid_cards(&[]).is_empty());
    }

    #[test]
    fn given_valid_deck_when_filtering_then_unchanged() {
        let d = construct_deck(4);
        assert_eq!(filter_valid_cards(&d), d);
    }

    #[test]
    fn given_broken_deck_when_filtering_then_drops_incompatible_cards() {
        let d = deck(&[&[1, 2, 3], &[4, 5, 6], &[1, 4, 7], &[1, 2, 8], &[2, 4, 9]]);
        let filtered = filter_valid_cards(&d);
        assert_eq!(filtered, deck(&[&[1, 2, 3], &[1, 4, 7], &[2, 4, 9]]));
        assert!(is_valid_deck(&filtered));
    }

    #[test]
    fn given_reordered_deck_when_filtering_then_result_follows_input_order() {
        let a = deck(&[&[1, 2], &[1, 3], &[2, 3], &[3, 4]]);
        let b = deck(&[&[3, 4], &[1, 3], &[2, 3], &[1, 2]]);
        assert_eq!(filter_valid_cards(&a), deck(&[&[1, 2], &[1, 3], &[2, 3]]));
        assert_eq!(filter_valid_cards(&b), deck(&[&[3, 4], &[1, 3], &[2, 3]]));
    }

    #[test]
    fn given_invalid_construction_when_filtering_then_keeps_first_card_first() {
        let d = construct_deck(5);
        let filtered = filter_valid_cards(&d);
        assert_eq!(filtered.len(), 13);
        assert_eq!(filtered[0], d[0]);
        assert!(is_valid_deck(&filtered));
    }
}
