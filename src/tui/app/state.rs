use crate::config::GameConfig;
use crate::game::{Advance, Game, Phase, Player, CUT_POSITIONS};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// A 1-based hand slot typed as a digit.
    Slot(u8),
    CursorLeft,
    CursorRight,
    /// Cut the deck at the cursor.
    Cut,
    /// Enter: acknowledge an announcement or confirm the crib.
    Proceed,
    NewGame,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub game: Game,
    pub config: GameConfig,
    /// Result of the last `advance`; `Continue` is drained on ticks.
    pub pending: Advance,
    pub games_started: u64,
    cut_cursor: u8,
    help_open: bool,
    notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config.clone()),
            config,
            pending: Advance::WaitForUser,
            games_started: 1,
            cut_cursor: 7,
            help_open: false,
            notice: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    /// 1-based deck position under the cursor during the cut.
    pub fn cut_cursor(&self) -> u8 {
        self.cut_cursor
    }

    /// One-line hint about the last rejected input.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the engine is waiting on the human.
    pub fn awaiting_input(&self) -> bool {
        self.pending == Advance::WaitForUser
    }

    /// Returns true when the input reached the game.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::NewGame => {
                self.new_game();
                false
            }
            InputAction::CursorLeft => {
                self.cut_cursor = if self.cut_cursor <= 1 { CUT_POSITIONS } else { self.cut_cursor - 1 };
                false
            }
            InputAction::CursorRight => {
                self.cut_cursor = if self.cut_cursor >= CUT_POSITIONS { 1 } else { self.cut_cursor + 1 };
                false
            }
            InputAction::Cut => {
                if self.game.phase() != Phase::ChooseDealer {
                    return false;
                }
                self.submit(usize::from(self.cut_cursor))
            }
            InputAction::Slot(slot) => {
                let before = self.game.pile().len();
                let acted = self.submit(usize::from(slot));
                if acted
                    && self.game.phase() == Phase::Pegging
                    && self.game.current_player() == Some(Player::Human)
                    && self.game.pile().len() == before
                {
                    self.notice = Some(format!("Slot {slot} can't be played at {}", self.game.count()));
                }
                acted
            }
            InputAction::Proceed => {
                if self.game.phase() == Phase::ChooseDealer {
                    return self.submit(usize::from(self.cut_cursor));
                }
                let acted = self.submit(0);
                if acted && self.game.phase() == Phase::ChooseCrib {
                    self.notice = Some("Pick two cards for the crib first".to_string());
                }
                acted
            }
        }
    }

    /// Drive automatic steps; called by the controller on every tick.
    pub fn on_tick(&mut self) {
        if self.pending == Advance::Continue {
            self.pending = self.game.advance(0);
        }
    }

    /// Drop the current game and deal a fresh one. Seeded sessions derive a
    /// new seed per game so replays stay reproducible.
    pub fn new_game(&mut self) {
        let mut config = self.config.clone();
        if let Some(seed) = config.seed {
            config = config.with_seed(seed.wrapping_add(self.games_started));
        }
        self.game = Game::new(config);
        self.games_started += 1;
        self.pending = Advance::WaitForUser;
        self.notice = None;
        self.help_open = false;
    }

    fn submit(&mut self, choice: usize) -> bool {
        if !self.awaiting_input() {
            return false;
        }
        self.notice = None;
        self.pending = self.game.advance(choice);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_around_the_deck() {
        let mut app = AppState::new(GameConfig::new().with_seed(1));
        for _ in 0..7 {
            app.handle_input(InputAction::CursorRight);
        }
        assert_eq!(app.cut_cursor(), 1);
        app.handle_input(InputAction::CursorLeft);
        assert_eq!(app.cut_cursor(), CUT_POSITIONS);
    }

    #[test]
    fn input_ignored_while_engine_is_busy() {
        let mut app = AppState::new(GameConfig::new().with_seed(1));
        assert!(app.handle_input(InputAction::Cut));
        assert_eq!(app.pending, Advance::Continue);
        assert!(!app.handle_input(InputAction::Proceed));
        app.on_tick();
        assert_eq!(app.game.phase(), Phase::AnnounceDealer);
        assert!(app.awaiting_input());
    }
}
