use crate::cards::Card;
use crate::deck::POPULATION;
use crate::hand::{is_legal_play, Hand, HAND_SIZE};
use crate::scoring::{score_counting, score_pegging, total_points, Combinations, CountKind};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use super::{OpponentStrategy, PileState};

/// Difficulty tiers for bot play strength and mistake rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Configuration for a bot's play style and randomness.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    pub difficulty: Difficulty,
    /// Chance of replacing the best decision with a random legal one.
    pub mistake_rate: f64,
    /// Whether pegging avoids leaving the count on 5 or 21.
    pub guard_count: bool,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Create a profile with tuned defaults for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (mistake_rate, guard_count) = match difficulty {
            Difficulty::Easy => (0.4, false),
            Difficulty::Medium => (0.15, false),
            Difficulty::Hard => (0.0, true),
        };
        Self { difficulty, mistake_rate, guard_count, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Medium)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }

    fn blunders(&mut self, rate: f64) -> bool {
        rate > 0.0 && self.rng.random::<f64>() < rate
    }
}

/// A greedy opponent with adjustable difficulty.
///
/// Discards keep the four cards with the best average hand count over every
/// up-card that could still turn. Pegging takes the card that scores the most
/// right now; ties go to the lower card. Lower tiers sometimes pick at random
/// instead.
#[derive(Debug)]
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state }
    }
}

impl OpponentStrategy for BotAgent {
    fn choose_discards(&mut self, hand: &Hand) -> [Card; 2] {
        let cards: Vec<Card> = hand.cards().collect();
        assert!(cards.len() >= 2, "cannot discard two cards from a hand of {}", cards.len());

        if self.state.blunders(self.profile.mistake_rate) {
            let options: Vec<Vec<usize>> = Combinations::new(cards.len(), 2).collect();
            let pick = &options[self.state.rng.random_range(0..options.len())];
            return [cards[pick[0]], cards[pick[1]]];
        }

        let mut best: Option<(u32, [Card; 2])> = None;
        for discard in Combinations::new(cards.len(), 2) {
            let keep: Vec<Card> = (0..cards.len())
                .filter(|i| !discard.contains(i))
                .map(|i| cards[i])
                .collect();
            let Ok(keep) = <[Card; HAND_SIZE]>::try_from(keep) else {
                continue;
            };
            let score = expected_hand_points(&keep, &cards);
            if best.map_or(true, |(b, _)| score > b) {
                best = Some((score, [cards[discard[0]], cards[discard[1]]]));
            }
        }
        match best {
            Some((_, pair)) => pair,
            // fewer or more than six cards: fall back to the first two
            None => [cards[0], cards[1]],
        }
    }

    fn choose_play(&mut self, hand: &Hand, pile: PileState<'_>) -> Card {
        let legal: Vec<Card> = hand.cards().filter(|c| is_legal_play(*c, pile.count)).collect();
        assert!(!legal.is_empty(), "no legal play at count {}", pile.count);

        if self.state.blunders(self.profile.mistake_rate) {
            return legal[self.state.rng.random_range(0..legal.len())];
        }

        let mut best = (i64::MIN, legal[0]);
        for &card in &legal {
            let value = peg_value(card, pile, self.profile.guard_count);
            if value > best.0 {
                best = (value, card);
            }
        }
        best.1
    }

    fn name(&self) -> &'static str {
        match self.profile.difficulty {
            Difficulty::Easy => "bot-easy",
            Difficulty::Medium => "bot-medium",
            Difficulty::Hard => "bot-hard",
        }
    }
}

/// Sum of hand points over every up-card not among `seen`. Comparing sums
/// is equivalent to comparing averages since the divisor is shared.
fn expected_hand_points(keep: &[Card; HAND_SIZE], seen: &[Card]) -> u32 {
    POPULATION
        .iter()
        .filter(|c| !seen.contains(c))
        .map(|&up| total_points(&score_counting(keep, up, CountKind::Hand)))
        .sum()
}

fn peg_value(card: Card, pile: PileState<'_>, guard_count: bool) -> i64 {
    let mut next = pile.pile.to_vec();
    next.push(card);
    let points = i64::from(total_points(&score_pegging(&next, false))) * 2;
    let count = pile.count + card.value();
    if guard_count && (count == 5 || count == 21) {
        points - 1
    } else {
        points
    }
}
