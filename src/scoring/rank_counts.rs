use crate::cards::{Card, Rank};

/// Rank frequencies of a card set, kept in ascending rank order.
///
/// Example: 9 6 9 6 A counts as [(Ace, 1), (Six, 2), (Nine, 2)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    groups: Vec<(Rank, u8)>,
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        // indexed by ordinal (1-13)
        let mut counts = [0u8; 14];
        for card in cards {
            counts[card.rank().ordinal() as usize] += 1;
        }

        let groups = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.ordinal() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        Self { groups }
    }

    /// Ranks occurring at least twice with their multiplicity, ascending by rank.
    pub fn repeated(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.groups.iter().copied().filter(|(_, count)| *count >= 2)
    }

    /// True when no rank occurs more than once.
    pub fn all_distinct(&self) -> bool {
        self.groups.iter().all(|(_, count)| *count == 1)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn counts(s: &str) -> RankCounts {
        RankCounts::from_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn groups_ascend_by_rank() {
        let c = counts("9h 6c 9d 6s Ah");
        assert_eq!(c.groups(), &[(Rank::Ace, 1), (Rank::Six, 2), (Rank::Nine, 2)]);
        let repeated: Vec<_> = c.repeated().collect();
        assert_eq!(repeated, vec![(Rank::Six, 2), (Rank::Nine, 2)]);
    }

    #[test]
    fn quads_are_one_group() {
        let c = counts("2c 2d 2h 2s Kh");
        assert_eq!(c.repeated().collect::<Vec<_>>(), vec![(Rank::Two, 4)]);
        assert!(!c.all_distinct());
    }

    #[test]
    fn distinct_ranks() {
        assert!(counts("Ah 2h 3h").all_distinct());
        assert!(counts("").all_distinct());
    }
}
