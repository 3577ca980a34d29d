//! Read-only presentation snapshots.
//!
//! A front end calls [`Game::render_scene`] whenever `advance` returns and
//! draws whatever comes back. Scenes carry game data only; layout and hit
//! testing belong to the front end.

use crate::cards::Card;
use crate::game::{Game, HandCount, Phase, Player};
use crate::scoring::ScoreEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderScene {
    Blank,
    DeckCut(DeckCutScene),
    AnnounceDealer(AnnounceDealerScene),
    ChooseCrib(ChooseCribScene),
    AnnounceNibs(AnnounceNibsScene),
    /// Shared by live pegging and the last-card and thirty-one announcements.
    Pegging(PeggingScene),
    Counting(CountingScene),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCutScene {
    pub human_card: Option<Card>,
    pub chosen_slot: Option<u8>,
}

/// Both cuts, indexed by [`Player::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceDealerScene {
    pub cut_cards: [Option<Card>; 2],
    pub cut_slots: [Option<u8>; 2],
    pub first_dealer: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseCribScene {
    pub human_cards: Vec<Option<Card>>,
    pub crib_choices: [Option<u8>; 2],
    /// Two cards are selected and choice 0 will proceed.
    pub ready: bool,
    pub crib_owner: Option<Player>,
    pub scores: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceNibsScene {
    /// The four cards the human keeps.
    pub human_cards: Vec<Card>,
    pub up_card: Option<Card>,
    pub scores: [u32; 2],
    pub dealer: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeggingScene {
    pub human_cards: Vec<Option<Card>>,
    pub up_card: Option<Card>,
    pub scores: [u32; 2],
    pub dealer: Option<Player>,
    pub pile: Vec<Card>,
    pub count: u8,
    pub current_player: Option<Player>,
    pub called_go: [bool; 2],
    pub opponent_remaining: usize,
    /// True only while the last card is being announced.
    pub last_card: bool,
    pub last_card_player: Option<Player>,
    /// What the latest play (or announcement) scored.
    pub events: Vec<ScoreEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingScene {
    pub up_card: Option<Card>,
    pub scores: [u32; 2],
    pub dealer: Option<Player>,
    pub counts: Vec<HandCount>,
}

impl Game {
    /// Snapshot of what the current phase should show.
    pub fn render_scene(&self) -> RenderScene {
        match self.phase {
            Phase::ChooseDealer => RenderScene::DeckCut(DeckCutScene {
                human_card: self.cut_cards[Player::Human.index()],
                chosen_slot: self.cut_slots[Player::Human.index()],
            }),
            Phase::AnnounceDealer => RenderScene::AnnounceDealer(AnnounceDealerScene {
                cut_cards: self.cut_cards,
                cut_slots: self.cut_slots,
                first_dealer: self.dealer,
            }),
            Phase::ChooseCrib => RenderScene::ChooseCrib(ChooseCribScene {
                human_cards: self.hands[Player::Human.index()].slots().to_vec(),
                crib_choices: self.crib_choices,
                ready: self.crib_choices.iter().all(Option::is_some),
                crib_owner: self.dealer,
                scores: self.scores,
            }),
            Phase::AnnounceNibs => RenderScene::AnnounceNibs(AnnounceNibsScene {
                human_cards: self.kept_before_crib(),
                up_card: self.up_card,
                scores: self.scores,
                dealer: self.dealer,
            }),
            Phase::Pegging | Phase::AnnounceLastCard | Phase::AnnounceThirtyOne => {
                RenderScene::Pegging(PeggingScene {
                    human_cards: self.hands[Player::Human.index()].slots().to_vec(),
                    up_card: self.up_card,
                    scores: self.scores,
                    dealer: self.dealer,
                    pile: self.pile.clone(),
                    count: self.count,
                    current_player: self.current,
                    called_go: self.called_go,
                    opponent_remaining: self.hands[Player::Opponent.index()].remaining(),
                    last_card: self.phase == Phase::AnnounceLastCard,
                    last_card_player: self.last_card_player,
                    events: self.last_events.clone(),
                })
            }
            Phase::Counting => RenderScene::Counting(CountingScene {
                up_card: self.up_card,
                scores: self.scores,
                dealer: self.dealer,
                counts: self.counts.clone(),
            }),
            Phase::Winner => RenderScene::Blank,
        }
    }

    /// The human's dealt cards minus the ones marked for the crib.
    fn kept_before_crib(&self) -> Vec<Card> {
        let hand = &self.hands[Player::Human.index()];
        hand.slots()
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.crib_choices.contains(&u8::try_from(i + 1).ok()))
            .filter_map(|(_, card)| *card)
            .collect()
    }
}
