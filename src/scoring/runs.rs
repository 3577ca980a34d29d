use crate::cards::Card;
use crate::scoring::rank_counts::RankCounts;

/// Whether `cards` (in any order) form a run: at least three cards, no rank
/// repeated, and the spread between the highest and lowest ordinal equal to
/// the length minus one.
///
/// Suits never matter and aces are always low.
pub fn is_run(cards: &[Card]) -> bool {
    if cards.len() < 3 || !RankCounts::from_cards(cards).all_distinct() {
        return false;
    }
    let ordinals = cards.iter().map(|c| c.rank().ordinal());
    let (min, max) = ordinals.fold((u8::MAX, u8::MIN), |(lo, hi), o| (lo.min(o), hi.max(o)));
    usize::from(max - min) == cards.len() - 1
}

/// Whether the cards at `indices` of `cards` form a run.
pub fn is_run_at(cards: &[Card], indices: &[usize]) -> bool {
    let picked: Vec<Card> = indices.iter().map(|&i| cards[i]).collect();
    is_run(&picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn run(s: &str) -> bool {
        is_run(&parse_cards(s).unwrap())
    }

    #[test]
    fn order_does_not_matter() {
        assert!(run("Ah 2c 3d"));
        assert!(run("3d Ah 2c"));
        assert!(run("9s Jh Tc Qd Kh"));
    }

    #[test]
    fn repeated_ranks_never_run() {
        assert!(!run("9h 6c 9d 6s"));
        assert!(!run("4h 5c 5d 6s"));
    }

    #[test]
    fn gaps_and_short_sets_fail() {
        assert!(!run("Ah 2c 4d"));
        assert!(!run("Ah 2c"));
        assert!(!run(""));
    }

    #[test]
    fn ace_is_low_only() {
        assert!(!run("Qh Kc Ad"));
    }

    #[test]
    fn run_at_picks_indices() {
        let cards = parse_cards("Ah 5c 2d 3s").unwrap();
        assert!(is_run_at(&cards, &[0, 2, 3]));
        assert!(!is_run_at(&cards, &[0, 1, 2]));
    }
}
