use crate::cards::{Card, Rank, Suit};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in the population.
pub const DECK_SIZE: usize = 52;

/// Every card of a standard deck, suit-major, ace to king within a suit.
pub const POPULATION: [Card; DECK_SIZE] = build_population();

const fn build_population() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Ace, Suit::Clubs); DECK_SIZE];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// Return a uniform value in `0..span` from the generator's 32-bit output.
///
/// Outputs at or above the largest multiple of `span` that fits in 2^32 are
/// rejected before reducing modulo `span`, so no residue is favored.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, span: u32) -> u32 {
    assert!(span > 0, "cannot sample from an empty range");
    let range = u64::from(u32::MAX) + 1;
    let span = u64::from(span);
    let limit = range / span * span;
    loop {
        let r = u64::from(rng.next_u32());
        if r < limit {
            return (r % span) as u32;
        }
    }
}

/// Random card source over the full 52-card population.
///
/// Every [`Deck::draw`] samples from all 52 cards again; cards are not
/// removed between calls. Use a seed for reproducible games.
///
/// ```
/// use cribbage_rs::deck::Deck;
///
/// let mut deck = Deck::seeded(7);
/// let cards = deck.draw(13);
/// assert_eq!(cards.len(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    rng: ChaCha8Rng,
}

impl Deck {
    /// Deck driven by a seeded ChaCha8 generator for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Deck seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// Draw `n` distinct cards uniformly without replacement.
    ///
    /// Indices come from `uniform_below`, which rejects the biased tail of
    /// the generator's range. Seeded games replay the same deals only while
    /// this stays the sole consumer of the generator, so do not replace it
    /// with the `rand::seq` helpers.
    ///
    /// # Panics
    /// When `n` exceeds the population size.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= DECK_SIZE, "cannot draw {n} distinct cards from {DECK_SIZE}");
        let mut chosen = [false; DECK_SIZE];
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            let idx = uniform_below(&mut self.rng, DECK_SIZE as u32) as usize;
            if chosen[idx] {
                continue;
            }
            chosen[idx] = true;
            out.push(POPULATION[idx]);
        }
        out
    }

    /// Draw a single card.
    pub fn draw_one(&mut self) -> Card {
        POPULATION[uniform_below(&mut self.rng, DECK_SIZE as u32) as usize]
    }

    /// Uniform integer in `min..=max`.
    pub fn random_position(&mut self, min: u8, max: u8) -> u8 {
        assert!(min <= max, "empty position range {min}..={max}");
        let span = u32::from(max - min) + 1;
        min + uniform_below(&mut self.rng, span) as u8
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::from_entropy()
    }
}
