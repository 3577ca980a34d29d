use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

pub(super) const CARD_WIDTH: u16 = 7;
pub(super) const CARD_HEIGHT: u16 = 3;

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Popup rect taking the given percentages of `r`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Slot `i` of a row of fixed-width cards, clipped to the row.
pub(super) fn card_rect(row: Rect, i: u16) -> Rect {
    let x = row.x.saturating_add(i.saturating_mul(CARD_WIDTH)).min(row.right());
    let width = CARD_WIDTH.min(row.right().saturating_sub(x));
    Rect { x, y: row.y, width, height: CARD_HEIGHT.min(row.height) }
}
