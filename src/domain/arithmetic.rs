//! Symbol arithmetic: universe size and card intersections

use crate::domain::Card;

/// Order `n` of the plane for a given card size: `symbols_per_card - 1`.
///
/// Requires `symbols_per_card >= 2`; callers validate input first.
pub fn order(symbols_per_card: usize) -> usize {
    debug_assert!(symbols_per_card >= 2, "symbols_per_card must be >= 2");
    symbols_per_card - 1
}

/// Total number of distinct symbols: `n² + n + 1`.
pub fn total_symbols(symbols_per_card: usize) -> usize {
    let n = order(symbols_per_card);
    n * n + n + 1
}

/// Count symbols present on both cards.
///
/// Plain nested scan; cards hold at most 15 symbols.
pub fn common_symbol_count(a: &Card, b: &Card) -> usize {
    let mut count = 0;
    for s1 in a.symbols() {
        for s2 in b.symbols() {
            if s1 == s2 {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 3)]
    #[case(3, 7)]
    #[case(4, 13)]
    #[case(8, 57)]
    #[case(15, 211)]
    fn given_symbols_per_card_when_total_symbols_then_n_squared_plus_n_plus_one(
        #[case] symbols_per_card: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(total_symbols(symbols_per_card), expected);
    }

    #[test]
    fn given_disjoint_cards_when_counting_then_zero() {
        let a = Card::new(vec![1, 2, 3]);
        let b = Card::new(vec![4, 5, 6]);
        assert_eq!(common_symbol_count(&a, &b), 0);
    }

    #[test]
    fn given_overlapping_cards_when_counting_then_counts_shared_symbols() {
        let a = Card::new(vec![1, 2, 3]);
        let b = Card::new(vec![3, 2, 9]);
        assert_eq!(common_symbol_count(&a, &b), 2);
        assert_eq!(common_symbol_count(&b, &a), 2);
    }

    #[test]
    fn given_same_card_when_counting_then_card_size() {
        let a = Card::new(vec![1, 4, 5]);
        assert_eq!(common_symbol_count(&a, &a), 3);
    }
}
