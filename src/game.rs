use crate::agents::{OpponentStrategy, PileState};
use crate::cards::{Card, Rank};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::hand::{is_legal_play, Hand, DEALT_CARDS, HAND_SIZE};
use crate::scoring::{
    score_counting, score_last_card, score_pegging, total_points, CountKind, ScoreEvent,
};
use std::fmt;
use tracing::{debug, info};

/// Most cards that can sit on the pegging pile before the count resets.
pub const PILE_CAPACITY: usize = 8;
/// Cut positions offered when choosing the dealer.
pub const CUT_POSITIONS: u8 = 13;
/// Points to the dealer when the up-card is a jack.
pub const NIBS_POINTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Human, Player::Opponent];

    /// Index into per-player arrays such as scores.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Name shown to the person at the keyboard.
    pub const fn label(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Opponent => "CPU",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    ChooseDealer,
    AnnounceDealer,
    ChooseCrib,
    AnnounceNibs,
    Pegging,
    AnnounceLastCard,
    AnnounceThirtyOne,
    Counting,
    Winner,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Phase::ChooseDealer => "choose-dealer",
            Phase::AnnounceDealer => "announce-dealer",
            Phase::ChooseCrib => "choose-crib",
            Phase::AnnounceNibs => "announce-nibs",
            Phase::Pegging => "pegging",
            Phase::AnnounceLastCard => "announce-last-card",
            Phase::AnnounceThirtyOne => "announce-thirty-one",
            Phase::Counting => "counting",
            Phase::Winner => "winner",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one [`Game::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The engine has more to do on its own; call `advance(0)` again.
    Continue,
    /// Render the scene and wait for the human.
    WaitForUser,
}

/// One hand scored during the count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandCount {
    pub owner: Player,
    pub kind: CountKind,
    pub cards: [Card; HAND_SIZE],
    pub events: Vec<ScoreEvent>,
}

impl HandCount {
    pub fn points(&self) -> u32 {
        total_points(&self.events)
    }
}

/// A single game of cribbage between the human and an automated opponent.
///
/// All state lives here and only [`Game::advance`] changes it. The caller
/// loops on `advance(0)` while it returns [`Advance::Continue`], renders
/// [`Game::render_scene`] and feeds the next human choice back in.
///
/// ```
/// use cribbage_rs::config::GameConfig;
/// use cribbage_rs::game::{Advance, Game, Phase};
///
/// let mut game = Game::new(GameConfig::new().with_seed(7));
/// assert_eq!(game.advance(0), Advance::WaitForUser);
/// assert_eq!(game.advance(4), Advance::Continue);
/// assert_eq!(game.advance(0), Advance::WaitForUser);
/// assert_eq!(game.phase(), Phase::AnnounceDealer);
/// assert!(game.dealer().is_some());
/// ```
#[non_exhaustive]
pub struct Game {
    pub(crate) phase: Phase,
    pub(crate) deck: Deck,
    pub(crate) strategy: Box<dyn OpponentStrategy>,

    pub(crate) scores: [u32; 2],
    pub(crate) hands: [Hand; 2],
    /// Kept hands snapshotted before pegging empties them.
    pub(crate) original_hands: [Option<[Card; HAND_SIZE]>; 2],
    pub(crate) crib: Vec<Card>,
    pub(crate) up_card: Option<Card>,
    pub(crate) dealer: Option<Player>,
    /// `None` between the cut and the first pegging entry.
    pub(crate) current: Option<Player>,

    pub(crate) cut_cards: [Option<Card>; 2],
    pub(crate) cut_slots: [Option<u8>; 2],
    /// 1-based slots of the human's discards.
    pub(crate) crib_choices: [Option<u8>; 2],

    pub(crate) pile: Vec<Card>,
    pub(crate) count: u8,
    pub(crate) called_go: [bool; 2],
    pub(crate) last_card_player: Option<Player>,
    pub(crate) last_events: Vec<ScoreEvent>,
    pub(crate) counts: Vec<HandCount>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("opponent", &self.strategy.name())
            .field("scores", &self.scores)
            .field("dealer", &self.dealer)
            .field("current", &self.current)
            .field("pile", &self.pile)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let deck = match config.seed {
            Some(seed) => Deck::seeded(seed),
            None => Deck::from_entropy(),
        };
        let strategy = config.opponent.build(config.seed);
        Self::with_strategy(deck, strategy)
    }

    /// Start a game with an explicit deck and opponent strategy.
    pub fn with_strategy(deck: Deck, strategy: Box<dyn OpponentStrategy>) -> Self {
        debug!(opponent = strategy.name(), "new game");
        let mut game = Self {
            phase: Phase::ChooseDealer,
            deck,
            strategy,
            scores: [0; 2],
            hands: [Hand::default(), Hand::default()],
            original_hands: [None; 2],
            crib: Vec::with_capacity(HAND_SIZE),
            up_card: None,
            dealer: None,
            current: None,
            cut_cards: [None; 2],
            cut_slots: [None; 2],
            crib_choices: [None; 2],
            pile: Vec::with_capacity(PILE_CAPACITY),
            count: 0,
            called_go: [false; 2],
            last_card_player: None,
            last_events: Vec::new(),
            counts: Vec::new(),
        };
        game.enter(Phase::ChooseDealer);
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Scores indexed by [`Player::index`].
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn dealer(&self) -> Option<Player> {
        self.dealer
    }

    pub fn current_player(&self) -> Option<Player> {
        self.current
    }

    /// Cards played since the count last reset, oldest first.
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn up_card(&self) -> Option<Card> {
        self.up_card
    }

    pub fn crib(&self) -> &[Card] {
        &self.crib
    }

    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    pub fn original_hand(&self, player: Player) -> Option<&[Card; HAND_SIZE]> {
        self.original_hands[player.index()].as_ref()
    }

    /// Cards still in hand during pegging.
    pub fn remaining(&self, player: Player) -> usize {
        self.hands[player.index()].remaining()
    }

    pub fn called_go(&self, player: Player) -> bool {
        self.called_go[player.index()]
    }

    pub fn last_card_player(&self) -> Option<Player> {
        self.last_card_player
    }

    /// Events from the most recent play or announcement.
    pub fn last_events(&self) -> &[ScoreEvent] {
        &self.last_events
    }

    /// Hands scored on entering the count, in counting order.
    pub fn counts(&self) -> &[HandCount] {
        &self.counts
    }

    pub fn crib_choices(&self) -> [Option<u8>; 2] {
        self.crib_choices
    }

    pub fn opponent_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Feed one choice into the state machine. `0` means "none" or "proceed";
    /// `1..=13` names a 1-based hand slot or cut position. Choices that make
    /// no sense for the phase leave the state untouched.
    pub fn advance(&mut self, choice: usize) -> Advance {
        debug!(choice, current = ?self.current, phase = %self.phase, "advancing");
        let result = match self.phase {
            Phase::ChooseDealer => self.advance_choose_dealer(choice),
            Phase::AnnounceDealer => {
                self.transition(Phase::ChooseCrib);
                Advance::WaitForUser
            }
            Phase::ChooseCrib => self.advance_choose_crib(choice),
            Phase::AnnounceNibs => {
                self.transition(Phase::Pegging);
                Advance::Continue
            }
            Phase::Pegging => self.advance_pegging(choice),
            Phase::AnnounceLastCard | Phase::AnnounceThirtyOne => self.advance_segment_end(),
            Phase::Counting | Phase::Winner => Advance::WaitForUser,
        };
        debug!(?result, current = ?self.current, phase = %self.phase, "advanced");
        result
    }

    pub(crate) fn transition(&mut self, to: Phase) {
        debug!(from = %self.phase, to = %to, "transition");
        self.phase = to;
        self.enter(to);
    }

    fn enter(&mut self, phase: Phase) {
        match phase {
            Phase::ChooseDealer => self.enter_choose_dealer(),
            Phase::AnnounceDealer => self.enter_announce_dealer(),
            Phase::ChooseCrib => self.enter_choose_crib(),
            Phase::AnnounceNibs => {
                let dealer = self.require_dealer();
                self.scores[dealer.index()] += NIBS_POINTS;
                info!(player = %dealer, score = self.scores[dealer.index()], "nibs");
            }
            Phase::Pegging => self.enter_pegging(),
            Phase::AnnounceLastCard => {
                if let Some(player) = self.last_card_player {
                    let events = score_last_card(&self.pile);
                    self.credit(player, &events);
                    self.last_events = events;
                }
            }
            Phase::AnnounceThirtyOne => {
                self.current = self.current.map(Player::next);
            }
            Phase::Counting => self.enter_counting(),
            Phase::Winner => {}
        }
    }

    fn enter_choose_dealer(&mut self) {
        self.scores = [0; 2];
        self.hands = [Hand::empty(DEALT_CARDS), Hand::empty(DEALT_CARDS)];
        self.original_hands = [None; 2];
        self.crib.clear();
        self.cut_cards = [None; 2];
        self.cut_slots = [None; 2];
        self.crib_choices = [None; 2];
        self.dealer = None;
        self.up_card = None;
        self.current = Some(Player::Human);
    }

    fn enter_announce_dealer(&mut self) {
        let dealer = match self.cut_cards {
            [Some(human), Some(opponent)] if human.rank() < opponent.rank() => Player::Human,
            _ => Player::Opponent,
        };
        info!(dealer = %dealer, cuts = ?self.cut_cards, "dealer chosen");
        self.dealer = Some(dealer);
        self.current = None;
    }

    fn enter_choose_crib(&mut self) {
        let cards = self.deck.draw(2 * DEALT_CARDS + 1);
        self.hands[Player::Human.index()] = Hand::dealt(cards[..DEALT_CARDS].to_vec());
        self.hands[Player::Opponent.index()] =
            Hand::dealt(cards[DEALT_CARDS..2 * DEALT_CARDS].to_vec());
        self.up_card = Some(cards[2 * DEALT_CARDS]);
        self.crib_choices = [None; 2];
    }

    fn enter_pegging(&mut self) {
        self.pile.clear();
        self.count = 0;
        self.called_go = [false; 2];
        self.last_events.clear();
        if self.current.is_none() {
            self.form_crib();
            self.current = Some(self.require_dealer().next());
        }
    }

    fn form_crib(&mut self) {
        let human = &self.hands[Player::Human.index()];
        let human_discards: Vec<Card> = self
            .crib_choices
            .iter()
            .flatten()
            .filter_map(|&slot| human.get(usize::from(slot).saturating_sub(1)))
            .collect();
        assert_eq!(human_discards.len(), 2, "crib needs two human discards");

        let opponent = &self.hands[Player::Opponent.index()];
        let opponent_discards = self.strategy.choose_discards(opponent);
        assert!(
            opponent_discards[0] != opponent_discards[1]
                && opponent_discards.iter().all(|c| opponent.position(*c).is_some()),
            "{} discarded cards it does not hold: {opponent_discards:?}",
            self.strategy.name()
        );

        for (player, discards) in
            [(Player::Human, &human_discards[..]), (Player::Opponent, &opponent_discards[..])]
        {
            let kept: Vec<Card> =
                self.hands[player.index()].cards().filter(|c| !discards.contains(c)).collect();
            assert_eq!(kept.len(), HAND_SIZE, "{player} must keep {HAND_SIZE} cards");
            self.hands[player.index()] = Hand::dealt(kept);
            self.original_hands[player.index()] = self.hands[player.index()]
                .cards()
                .collect::<Vec<_>>()
                .try_into()
                .ok();
        }

        self.crib = human_discards;
        self.crib.extend_from_slice(&opponent_discards);
        self.crib.sort();
        debug!(crib = ?self.crib, "crib formed");
    }

    fn enter_counting(&mut self) {
        let dealer = self.require_dealer();
        let Some(up_card) = self.up_card else {
            panic!("counting without an up-card");
        };
        let crib = <[Card; HAND_SIZE]>::try_from(self.crib.as_slice()).ok();
        let order = [
            (dealer.next(), CountKind::Hand, self.original_hands[dealer.next().index()]),
            (dealer, CountKind::Hand, self.original_hands[dealer.index()]),
            (dealer, CountKind::Crib, crib),
        ];

        self.counts.clear();
        for (owner, kind, cards) in order {
            let Some(cards) = cards else { continue };
            let events = score_counting(&cards, up_card, kind);
            self.credit(owner, &events);
            self.counts.push(HandCount { owner, kind, cards, events });
        }
    }

    fn advance_choose_dealer(&mut self, choice: usize) -> Advance {
        match self.current {
            Some(Player::Human) => {
                let slot = match u8::try_from(choice) {
                    Ok(slot) if (1..=CUT_POSITIONS).contains(&slot) => slot,
                    _ => return Advance::WaitForUser,
                };
                // the slot is cosmetic; the card is random either way
                let card = self.deck.draw_one();
                self.cut_cards[Player::Human.index()] = Some(card);
                self.cut_slots[Player::Human.index()] = Some(slot);
                self.current = Some(Player::Opponent);
                Advance::Continue
            }
            Some(Player::Opponent) => {
                let human_rank = self.cut_cards[Player::Human.index()].map(Card::rank);
                let card = loop {
                    let card = self.deck.draw_one();
                    if Some(card.rank()) != human_rank {
                        break card;
                    }
                };
                let slot = loop {
                    let slot = self.deck.random_position(1, CUT_POSITIONS);
                    if Some(slot) != self.cut_slots[Player::Human.index()] {
                        break slot;
                    }
                };
                self.cut_cards[Player::Opponent.index()] = Some(card);
                self.cut_slots[Player::Opponent.index()] = Some(slot);
                self.transition(Phase::AnnounceDealer);
                Advance::WaitForUser
            }
            None => panic!("deck cut with no current player"),
        }
    }

    fn advance_choose_crib(&mut self, choice: usize) -> Advance {
        let ready = self.crib_choices.iter().all(Option::is_some);
        if ready && choice == 0 {
            return if self.up_card.map(Card::rank) == Some(Rank::Jack) {
                self.transition(Phase::AnnounceNibs);
                Advance::WaitForUser
            } else {
                self.transition(Phase::Pegging);
                Advance::Continue
            };
        }

        let slot = match u8::try_from(choice) {
            Ok(slot) if (1..=DEALT_CARDS as u8).contains(&slot) => slot,
            _ => return Advance::WaitForUser,
        };
        if let Some(i) = self.crib_choices.iter().position(|c| *c == Some(slot)) {
            self.crib_choices[i] = None;
        } else if let Some(i) = self.crib_choices.iter().position(Option::is_none) {
            self.crib_choices[i] = Some(slot);
        }
        Advance::WaitForUser
    }

    fn advance_pegging(&mut self, choice: usize) -> Advance {
        if self.called_go.iter().all(|&go| go) {
            self.transition(Phase::AnnounceLastCard);
            return Advance::WaitForUser;
        }
        let Some(player) = self.current else {
            panic!("pegging with no current player");
        };

        if self.count == 31 {
            self.transition(Phase::AnnounceThirtyOne);
        } else if !self.hands[player.index()].has_legal_play(self.count) {
            debug!(player = %player, count = self.count, "go");
            self.called_go[player.index()] = true;
        } else {
            let card = match player {
                Player::Human => match self.take_human_play(choice) {
                    Some(card) => card,
                    None => return Advance::WaitForUser,
                },
                Player::Opponent => self.take_opponent_play(),
            };
            self.play(player, card);
        }

        self.current = self.current.map(Player::next);
        Advance::Continue
    }

    fn take_human_play(&mut self, choice: usize) -> Option<Card> {
        let slot = choice.checked_sub(1)?;
        let hand = &mut self.hands[Player::Human.index()];
        let card = hand.get(slot)?;
        if !is_legal_play(card, self.count) {
            return None;
        }
        hand.take(slot)
    }

    fn take_opponent_play(&mut self) -> Card {
        let hand = &self.hands[Player::Opponent.index()];
        let card = self.strategy.choose_play(hand, PileState::new(&self.pile, self.count));
        let slot = match hand.position(card) {
            Some(slot) if is_legal_play(card, self.count) => slot,
            _ => panic!(
                "{} chose {card} at count {}, which it cannot play",
                self.strategy.name(),
                self.count
            ),
        };
        self.hands[Player::Opponent.index()].take(slot);
        card
    }

    pub(crate) fn play(&mut self, player: Player, card: Card) {
        assert!(self.pile.len() < PILE_CAPACITY, "pegging pile is full");
        self.pile.push(card);
        self.count += card.value();
        debug!(player = %player, card = %card, count = self.count, "card played");

        let events = score_pegging(&self.pile, false);
        self.credit(player, &events);
        self.last_events = events;
        self.last_card_player = Some(player);
    }

    fn advance_segment_end(&mut self) -> Advance {
        let exhausted = Player::ALL.iter().all(|p| self.hands[p.index()].remaining() == 0);
        self.transition(if exhausted { Phase::Counting } else { Phase::Pegging });
        Advance::Continue
    }

    fn credit(&mut self, player: Player, events: &[ScoreEvent]) {
        let points = total_points(events);
        if points == 0 {
            return;
        }
        self.scores[player.index()] += points;
        info!(
            player = %player,
            points,
            events = ?events,
            score = self.scores[player.index()],
            "points scored"
        );
    }

    fn require_dealer(&self) -> Player {
        match self.dealer {
            Some(dealer) => dealer,
            None => panic!("{} needs a dealer", self.phase),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn seeded() -> Game {
        Game::new(GameConfig::new().with_seed(42))
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn to_crib(game: &mut Game) {
        assert_eq!(game.advance(3), Advance::Continue);
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.phase, Phase::ChooseCrib);
    }

    /// A game parked in pegging with the given hands, human to play.
    fn pegging(human: &str, opponent: &str, pile: &str) -> Game {
        let mut game = seeded();
        game.phase = Phase::Pegging;
        game.dealer = Some(Player::Opponent);
        game.current = Some(Player::Human);
        game.up_card = Some(card("2d"));
        game.hands = [human.parse().unwrap(), opponent.parse().unwrap()];
        game.pile = parse_cards(pile).unwrap();
        game.count = game.pile.iter().map(|c| c.value()).sum();
        game
    }

    #[test]
    fn starts_waiting_for_the_cut() {
        let mut game = seeded();
        assert_eq!(game.phase(), Phase::ChooseDealer);
        assert_eq!(game.current_player(), Some(Player::Human));
        assert_eq!(game.scores(), [0, 0]);
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.advance(14), Advance::WaitForUser);
        assert_eq!(game.phase(), Phase::ChooseDealer);
        assert!(game.cut_cards[0].is_none());
    }

    #[test]
    fn cut_picks_lower_rank_as_dealer() {
        let mut game = seeded();
        assert_eq!(game.advance(5), Advance::Continue);
        assert_eq!(game.current_player(), Some(Player::Opponent));
        assert_eq!(game.cut_slots[0], Some(5));
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.phase(), Phase::AnnounceDealer);

        let [Some(human), Some(opponent)] = game.cut_cards else { panic!("cuts missing") };
        assert_ne!(human.rank(), opponent.rank());
        assert_ne!(game.cut_slots[0], game.cut_slots[1]);
        let expected = if human.rank() < opponent.rank() { Player::Human } else { Player::Opponent };
        assert_eq!(game.dealer(), Some(expected));
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn crib_selection_toggles_and_caps_at_two() {
        let mut game = seeded();
        to_crib(&mut game);
        assert_eq!(game.hand(Player::Human).remaining(), 6);
        assert_eq!(game.hand(Player::Opponent).remaining(), 6);
        assert!(game.up_card().is_some());

        game.advance(1);
        assert_eq!(game.crib_choices(), [Some(1), None]);
        game.advance(1);
        assert_eq!(game.crib_choices(), [None, None]);
        game.advance(7);
        game.advance(0);
        assert_eq!(game.crib_choices(), [None, None]);
        assert_eq!(game.phase(), Phase::ChooseCrib);

        game.advance(4);
        game.advance(2);
        game.advance(6);
        assert_eq!(game.crib_choices(), [Some(4), Some(2)]);
        game.advance(4);
        game.advance(6);
        assert_eq!(game.crib_choices(), [Some(6), Some(2)]);
    }

    #[test]
    fn proceeding_forms_the_crib() {
        let mut game = seeded();
        to_crib(&mut game);
        game.up_card = Some(Card::new(Rank::Five, Suit::Hearts));
        let dealt: Vec<Card> = game.hand(Player::Human).cards().collect();
        game.advance(1);
        game.advance(2);
        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Pegging);

        assert_eq!(game.crib().len(), 4);
        assert!(game.crib().contains(&dealt[0]) && game.crib().contains(&dealt[1]));
        assert!(game.crib().windows(2).all(|w| w[0] <= w[1]));
        for p in Player::ALL {
            assert_eq!(game.remaining(p), 4);
            let kept: Vec<Card> = game.hand(p).cards().collect();
            assert_eq!(game.original_hand(p).map(|h| h.to_vec()), Some(kept));
        }
        let pone = game.dealer().map(Player::next);
        assert_eq!(game.current_player(), pone);
        assert_eq!(game.count(), 0);
    }

    #[test]
    fn jack_up_card_scores_nibs() {
        let mut game = seeded();
        to_crib(&mut game);
        game.up_card = Some(Card::new(Rank::Jack, Suit::Spades));
        game.advance(5);
        game.advance(6);
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.phase(), Phase::AnnounceNibs);
        let dealer = game.dealer().unwrap();
        assert_eq!(game.score(dealer), NIBS_POINTS);
        assert_eq!(game.score(dealer.next()), 0);
        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Pegging);
    }

    #[test]
    fn invalid_human_plays_change_nothing() {
        let mut game = pegging("2c 9c Kh", "4d 3d", "Ts 5s 7s");
        game.hands[0].take(0);
        // empty slot, a king that would bust 31, out of range, nothing
        for choice in [1, 3, 4, 99, 0] {
            let before = (game.pile.clone(), game.count, game.current, game.hands.clone());
            assert_eq!(game.advance(choice), Advance::WaitForUser, "choice {choice}");
            assert_eq!(before, (game.pile.clone(), game.count, game.current, game.hands.clone()));
        }
        assert_eq!(game.advance(2), Advance::Continue);
        assert_eq!(game.count(), 31);
        assert_eq!(game.remaining(Player::Human), 1);
    }

    #[test]
    fn reaching_thirty_one_goes_to_announcement() {
        let mut game = pegging("Ah 2c 3d 4s", "5d 6d 7d 8d", "Kh Qd Tc");
        game.called_go[Player::Opponent.index()] = true;
        assert_eq!(game.advance(1), Advance::Continue);
        assert_eq!(game.last_events(), &[ScoreEvent::ThirtyOne]);
        assert_eq!(game.score(Player::Human), 2);
        assert_eq!(game.current_player(), Some(Player::Opponent));

        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::AnnounceThirtyOne);
        // the player after the one who made 31 leads
        assert_eq!(game.current_player(), Some(Player::Opponent));

        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Pegging);
        assert!(game.pile().is_empty());
        assert_eq!(game.count(), 0);
        assert!(!game.called_go(Player::Opponent));
    }

    #[test]
    fn both_go_announces_last_card() {
        let mut game = pegging("Kh", "Qd", "Kc Tc 5c");
        game.last_card_player = Some(Player::Opponent);
        assert_eq!(game.advance(0), Advance::Continue);
        assert!(game.called_go(Player::Human));
        assert_eq!(game.advance(0), Advance::Continue);
        assert!(game.called_go(Player::Opponent));
        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.phase(), Phase::AnnounceLastCard);
        assert_eq!(game.last_events(), &[ScoreEvent::LastCard]);
        assert_eq!(game.score(Player::Opponent), 1);

        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Pegging);
        assert!(game.pile().is_empty());
        assert!(!game.called_go(Player::Human));
    }

    #[test]
    fn opponent_plays_through_strategy() {
        let mut game = pegging("9c", "Kd 2d", "");
        game.current = Some(Player::Opponent);
        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.pile(), &[card("2d")]);
        assert_eq!(game.remaining(Player::Opponent), 1);
        assert_eq!(game.last_card_player(), Some(Player::Opponent));
        assert_eq!(game.current_player(), Some(Player::Human));
    }

    #[test]
    fn exhausted_hands_move_to_counting() {
        let mut game = pegging("", "", "Ks 5h");
        game.hands = [Hand::empty(4), Hand::empty(4)];
        game.original_hands = [
            Some(parse_cards("9h 6c 9d 6s").unwrap().try_into().unwrap()),
            Some(parse_cards("3h 9c Ad Ks").unwrap().try_into().unwrap()),
        ];
        game.crib = parse_cards("2c 2d 2h 2s").unwrap();
        game.up_card = Some(card("Ac"));
        game.phase = Phase::AnnounceLastCard;

        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Counting);
        let counts = game.counts();
        assert_eq!(counts.len(), 3);
        assert_eq!((counts[0].owner, counts[0].kind), (Player::Human, CountKind::Hand));
        assert_eq!(counts[0].points(), 12);
        assert_eq!((counts[2].owner, counts[2].kind), (Player::Opponent, CountKind::Crib));
        assert_eq!(counts[2].events, vec![ScoreEvent::DoublePairRoyale]);
        assert_eq!(game.score(Player::Human), 12);
        assert_eq!(game.score(Player::Opponent), counts[1].points() + 12);

        assert_eq!(game.advance(0), Advance::WaitForUser);
        assert_eq!(game.phase(), Phase::Counting);
    }

    #[test]
    fn thirty_one_with_the_last_cards_moves_to_counting() {
        let mut game = pegging("Ah", "", "Kh Qd Tc");
        game.original_hands = [
            Some(parse_cards("9h 6c 9d 6s").unwrap().try_into().unwrap()),
            Some(parse_cards("4h 9c Ad Ks").unwrap().try_into().unwrap()),
        ];
        game.crib = parse_cards("3c 3d 3h 3s").unwrap();

        assert_eq!(game.advance(1), Advance::Continue);
        assert_eq!(game.count(), 31);
        assert_eq!(game.last_events(), &[ScoreEvent::ThirtyOne]);
        assert_eq!(game.score(Player::Human), 2);

        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::AnnounceThirtyOne);
        assert_eq!(game.advance(0), Advance::Continue);
        assert_eq!(game.phase(), Phase::Counting);

        let counts = game.counts();
        assert_eq!(counts.len(), 3);
        assert_eq!((counts[0].owner, counts[0].points()), (Player::Human, 12));
        assert_eq!(counts[2].events, vec![ScoreEvent::DoublePairRoyale]);
        // no last-card point on top of the 31
        assert_eq!(game.score(Player::Human), 14);
        assert_eq!(game.score(Player::Opponent), counts[1].points() + 12);
    }

    /// Ignores the rules: discards one card twice and plays an ace of clubs.
    struct Cheater;

    impl OpponentStrategy for Cheater {
        fn choose_discards(&mut self, _hand: &Hand) -> [Card; 2] {
            [card("Kh"), card("Kh")]
        }

        fn choose_play(&mut self, _hand: &Hand, _pile: PileState<'_>) -> Card {
            card("Ac")
        }

        fn name(&self) -> &'static str {
            "cheater"
        }
    }

    #[test]
    #[should_panic(expected = "cheater discarded cards it does not hold")]
    fn discarding_unheld_cards_panics() {
        let mut game = seeded();
        to_crib(&mut game);
        game.strategy = Box::new(Cheater);
        game.up_card = Some(card("2d"));
        game.advance(1);
        game.advance(2);
        game.advance(0);
    }

    #[test]
    #[should_panic(expected = "cheater chose Ac at count 0, which it cannot play")]
    fn playing_an_unheld_card_panics() {
        let mut game = pegging("9c", "Kd 2d", "");
        game.strategy = Box::new(Cheater);
        game.current = Some(Player::Opponent);
        game.advance(0);
    }

    #[test]
    #[should_panic(expected = "pile is full")]
    fn pile_overflow_panics() {
        let mut game = pegging("Ah", "Ad", "Ac As Ad Ah 2c 2d 2h 2s");
        game.play(Player::Human, card("3c"));
    }

    #[test]
    #[should_panic(expected = "no current player")]
    fn cut_without_current_player_panics() {
        let mut game = seeded();
        game.current = None;
        game.advance(1);
    }
}
