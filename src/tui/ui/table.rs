use crate::cards::{Card, Rank, Suit};
use crate::game::{Phase, Player, CUT_POSITIONS};
use crate::scene::{
    AnnounceDealerScene, AnnounceNibsScene, ChooseCribScene, CountingScene, DeckCutScene,
    PeggingScene,
};
use crate::scoring::{total_points, CountKind, ScoreEvent};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_rect, centered_rect, inner, CARD_HEIGHT, CARD_WIDTH};

/// Header, scene body and status bar. The body is drawn by `body`.
pub(super) fn draw_frame(f: &mut Frame, app: &AppState, body: impl FnOnce(&mut Frame, Rect)) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // scene
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let game = &app.game;
    let dealer = game.dealer().map(Player::label).unwrap_or("--");
    let header = Paragraph::new(Line::from(format!(
        "You: {}   CPU: {}   Dealer: {}   Opponent: {}",
        game.score(Player::Human),
        game.score(Player::Opponent),
        dealer,
        game.opponent_name(),
    )))
    .block(Block::default().title(format!("cribbage-rs · {}", game.phase())).borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    body(f, chunks[1]);

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from(prompt(app))];
    if let Some(notice) = app.notice() {
        left_info.push(Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::Red))));
    }
    let right_keys = vec![Line::from(""), Line::from("? help • N new game • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn prompt(app: &AppState) -> String {
    if !app.awaiting_input() {
        return "...".to_string();
    }
    let game = &app.game;
    match game.phase() {
        Phase::ChooseDealer => "Cut the deck: Left/Right to move, Space to cut".to_string(),
        Phase::AnnounceDealer => "Enter to deal".to_string(),
        Phase::ChooseCrib => {
            let owner = if game.dealer() == Some(Player::Human) { "your" } else { "the CPU's" };
            format!("Pick two cards (1-6) for {owner} crib, Enter to confirm")
        }
        Phase::AnnounceNibs | Phase::AnnounceLastCard | Phase::AnnounceThirtyOne => {
            "Enter to continue".to_string()
        }
        Phase::Pegging => format!("Your play (1-4) at count {}", game.count()),
        Phase::Counting => "Hand over, N for a new game".to_string(),
        Phase::Winner => String::new(),
    }
}

pub(super) fn draw_deck_cut(f: &mut Frame, area: Rect, scene: &DeckCutScene, cursor: u8) {
    let block = Block::default().title("Cut for deal").borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(body);
    f.render_widget(Paragraph::new("Lowest card deals."), rows[0]);

    let positions: Vec<Option<Card>> = vec![None; usize::from(CUT_POSITIONS)];
    render_card_row(f, rows[1], &positions, |i| {
        let slot = i as u8 + 1;
        if scene.chosen_slot == Some(slot) {
            Some(Color::Green)
        } else if scene.chosen_slot.is_none() && slot == cursor {
            Some(Color::Yellow)
        } else {
            None
        }
    });
    if let Some(card) = scene.human_card {
        let line = Line::from(vec![Span::raw("You cut "), card_span(card)]);
        f.render_widget(Paragraph::new(line), rows[2]);
    }
}

pub(super) fn draw_announce_dealer(f: &mut Frame, area: Rect, scene: &AnnounceDealerScene) {
    let dealer = scene.first_dealer.map(Player::label).unwrap_or("--");
    let block = Block::default().title(format!("Dealer: {dealer}")).borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    for player in Player::ALL {
        let col = cols[player.index()];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT)])
            .split(col);
        let slot = scene.cut_slots[player.index()].map(|s| s.to_string()).unwrap_or_default();
        f.render_widget(Paragraph::new(format!("{} cut at {slot}", player.label())), rows[0]);
        let border = (scene.first_dealer == Some(player)).then_some(Color::Green);
        render_card_widget(f, card_rect(rows[1], 0), scene.cut_cards[player.index()], border);
    }
}

pub(super) fn draw_choose_crib(f: &mut Frame, area: Rect, scene: &ChooseCribScene) {
    let owner = scene.crib_owner.map(Player::label).unwrap_or("--");
    let title = if scene.ready { "Crib ready" } else { "Choose crib" };
    let block = Block::default().title(format!("{title} · crib: {owner}")).borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(body);
    f.render_widget(Paragraph::new(slot_labels(scene.human_cards.len())), rows[0]);
    render_card_row(f, rows[1], &scene.human_cards, |i| {
        let slot = u8::try_from(i + 1).ok();
        scene.crib_choices.contains(&slot).then_some(Color::Cyan)
    });
}

pub(super) fn draw_announce_nibs(f: &mut Frame, area: Rect, scene: &AnnounceNibsScene) {
    let dealer = scene.dealer.map(Player::label).unwrap_or("--");
    let block =
        Block::default().title(format!("His heels! {dealer} pegs 2")).borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(body);
    f.render_widget(Paragraph::new("Up-card"), rows[0]);
    render_card_widget(f, card_rect(rows[1], 0), scene.up_card, Some(Color::Yellow));
    let kept: Vec<Option<Card>> = scene.human_cards.iter().copied().map(Some).collect();
    let hand_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(CARD_HEIGHT)])
        .split(rows[2]);
    f.render_widget(Paragraph::new("Your hand"), hand_rows[0]);
    render_card_row(f, hand_rows[1], &kept, |_| None);
}

pub(super) fn draw_pegging(f: &mut Frame, area: Rect, scene: &PeggingScene, phase: Phase) {
    let title = match phase {
        Phase::AnnounceLastCard => {
            let who = scene.last_card_player.map(Player::label).unwrap_or("--");
            format!("Last card: {who}")
        }
        Phase::AnnounceThirtyOne => "Thirty-one".to_string(),
        _ => format!("Count {}", scene.count),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT), // up-card and pile
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT), // hand
            Constraint::Min(0),
        ])
        .split(body);

    let mut facts = vec![Span::raw(format!(
        "CPU holds {}   Up-card / pile (count {})",
        scene.opponent_remaining, scene.count
    ))];
    for player in Player::ALL {
        if scene.called_go[player.index()] {
            facts.push(Span::styled(
                format!("   {} said go", player.label()),
                Style::default().fg(Color::Magenta),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(facts)), rows[0]);

    let mut table: Vec<Option<Card>> = vec![scene.up_card];
    table.extend(scene.pile.iter().copied().map(Some));
    render_card_row(f, rows[1], &table, |i| match i {
        0 => Some(Color::Yellow),
        i if i == scene.pile.len() => Some(Color::Green),
        _ => None,
    });

    if !scene.events.is_empty() {
        let who = scene.last_card_player.map(Player::label).unwrap_or("--");
        f.render_widget(Paragraph::new(events_line(who, &scene.events)), rows[2]);
    }

    let turn = match scene.current_player {
        Some(Player::Human) if phase == Phase::Pegging => "Your turn",
        Some(Player::Opponent) if phase == Phase::Pegging => "CPU's turn",
        _ => "",
    };
    f.render_widget(Paragraph::new(format!("Your hand   {turn}")), rows[3]);
    render_card_row(f, rows[4], &scene.human_cards, |i| {
        let card = scene.human_cards.get(i).copied().flatten()?;
        (card.value() + scene.count > 31).then_some(Color::DarkGray)
    });
}

pub(super) fn draw_counting(f: &mut Frame, area: Rect, scene: &CountingScene) {
    let block = Block::default().title("The count").borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(CARD_HEIGHT)];
    for _ in &scene.counts {
        constraints.extend([Constraint::Length(1), Constraint::Length(CARD_HEIGHT)]);
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::default().direction(Direction::Vertical).constraints(constraints).split(body);

    f.render_widget(Paragraph::new("Up-card"), rows[0]);
    render_card_widget(f, card_rect(rows[1], 0), scene.up_card, Some(Color::Yellow));

    for (i, count) in scene.counts.iter().enumerate() {
        let whose = match (count.owner, count.kind) {
            (Player::Human, CountKind::Hand) => "Your hand",
            (Player::Opponent, CountKind::Hand) => "CPU hand",
            (Player::Human, CountKind::Crib) => "Your crib",
            (Player::Opponent, CountKind::Crib) => "CPU crib",
        };
        let label = format!("{whose}: {}", count.points());
        f.render_widget(Paragraph::new(events_line(&label, &count.events)), rows[2 + 2 * i]);
        let cards: Vec<Option<Card>> = count.cards.iter().copied().map(Some).collect();
        render_card_row(f, rows[3 + 2 * i], &cards, |_| None);
    }
}

fn events_line(who: &str, events: &[ScoreEvent]) -> Line<'static> {
    let listed = events.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ");
    let total = total_points(events);
    let mut spans = vec![Span::styled(who.to_string(), Style::default().add_modifier(Modifier::BOLD))];
    if total > 0 {
        spans.push(Span::raw(format!("  {listed}")));
    }
    Line::from(spans)
}

fn slot_labels(n: usize) -> String {
    (1..=n).map(|i| format!("{i:^width$}", width = CARD_WIDTH as usize)).collect()
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Cut:", bold)),
        Line::from("- Left / Right: move along the deck"),
        Line::from("- Space or Enter: cut"),
        Line::from(""),
        Line::from(Span::styled("Crib:", bold)),
        Line::from("- 1-6: mark / unmark a card"),
        Line::from("- Enter: send the two marked cards"),
        Line::from(""),
        Line::from(Span::styled("Pegging:", bold)),
        Line::from("- 1-4: play a card"),
        Line::from("- Go is called for you when nothing fits under 31"),
        Line::from("- Enter: dismiss an announcement"),
        Line::from(""),
        Line::from("- N: new game"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn card_span(c: Card) -> Span<'static> {
    Span::styled(format!("{}{}", rank_label(c.rank()), c.suit().symbol()), suit_style(c.suit()))
}

fn render_card_row(
    f: &mut Frame,
    row: Rect,
    cards: &[Option<Card>],
    border: impl Fn(usize) -> Option<Color>,
) {
    for (i, card) in cards.iter().enumerate() {
        let area = card_rect(row, i as u16);
        if area.width < 3 {
            break;
        }
        render_card_widget(f, area, *card, border(i));
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from("░░"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
