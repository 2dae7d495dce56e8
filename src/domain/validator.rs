//! Deck validation: every pair of cards must share exactly one symbol

use itertools::Itertools;

use crate::domain::{common_symbol_count, Card};

/// A pair of cards breaking the one-common-symbol rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Index of the earlier card in the deck
    pub first: usize,
    /// Index of the later card in the deck
    pub second: usize,
    /// Number of symbols the two cards share (anything but 1)
    pub common: usize,
}

/// Find the first card pair (in deck order) that does not share exactly one symbol.
pub fn first_violation(deck: &[Card]) -> Option<Violation> {
    deck.iter()
        .enumerate()
        .tuple_combinations()
        .find_map(|((first, a), (second, b))| {
            let common = common_symbol_count(a, b);
            (common != 1).then_some(Violation {
                first,
                second,
                common,
            })
        })
}

/// True when every unordered pair of distinct cards shares exactly one symbol.
///
/// Stops at the first violating pair.
pub fn is_valid_deck(deck: &[Card]) -> bool {
    first_violation(deck).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(cards: &[&[usize]]) -> Vec<Card> {
        cards.iter().map(|c| Card::new(c.to_vec())).collect()
    }

    #[test]
    fn given_hand_built_triangle_when_validating_then_valid() {
        let d = deck(&[&[1, 2], &[1, 3], &[2, 3]]);
        assert!(is_valid_deck(&d));
        assert_eq!(first_violation(&d), None);
    }

    #[test]
    fn given_disjoint_pair_when_validating_then_reports_zero_common() {
        let d = deck(&[&[1, 2, 3], &[1, 4, 5], &[2, 4, 6], &[3, 5, 7], &[3, 6, 7]]);
        assert!(!is_valid_deck(&d));
        // [1,2,3]/[1,4,5]/[2,4,6] are fine, [1,4,5] and [3,6,7] share nothing
        assert_eq!(
            first_violation(&d),
            Some(Violation {
                first: 1,
                second: 4,
                common: 0
            })
        );
    }

    #[test]
    fn given_pair_sharing_two_symbols_when_validating_then_invalid() {
        let d = deck(&[&[1, 2, 3], &[1, 2, 4]]);
        assert_eq!(
            first_violation(&d),
            Some(Violation {
                first: 0,
                second: 1,
                common: 2
            })
        );
    }

    #[test]
    fn given_empty_or_single_card_deck_when_validating_then_valid() {
        assert!(is_valid_deck(&[]));
        assert!(is_valid_deck(&deck(&[&[1, 2, 3]])));
    }
}
