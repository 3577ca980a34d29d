use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Draw, poll keys, and step automatic engine moves once per tick so the
/// opponent's plays stay readable.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    info!(tick_ms = tick_rate.as_millis() as u64, opponent = app.game.opponent_name(), "tui started");
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    info!(games = app.games_started, scores = ?app.game.scores(), "tui stopped");
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::NewGame,
        KeyCode::Left => InputAction::CursorLeft,
        KeyCode::Right => InputAction::CursorRight,
        KeyCode::Char(' ') => InputAction::Cut,
        KeyCode::Enter => InputAction::Proceed,
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => InputAction::Slot(c as u8 - b'0'),
        _ => return false,
    };
    let acted = app.handle_input(action);
    debug!(?action, acted, phase = %app.game.phase(), "key handled");
    false
}
