//! The menu widget
//!
//! Renders a snapshot as a small card: when the menu was checked, which meal
//! it is, and one line per menu item, over a dark vertical gradient.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::snapshot::Snapshot;

/// Widget colours
pub mod colors {
    use ratatui::style::Color;

    /// Gradient start (top)
    pub const BG_TOP: (u8, u8, u8) = (0x29, 0x32, 0x3c);
    /// Gradient end (bottom)
    pub const BG_BOTTOM: (u8, u8, u8) = (0x1c, 0x1c, 0x1c);
    /// Menu item text
    pub const MEAL: Color = Color::Rgb(0xff, 0x66, 0x63);
}

/// Name of the dining hall shown in the heading
pub const DINING_HALL: &str = "Commons Dining Hall";

/// Rows taken by padding above and below the text
const VERTICAL_PADDING: u16 = 2;

/// Builds the text lines of the widget
pub fn widget_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.items.len() + 2);

    lines.push(Line::from(Span::styled(
        format!("Last check: {}", snapshot.checked_at.format("%-I:%M %p")),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} - {}", DINING_HALL, snapshot.label),
        Style::default().fg(Color::White),
    )));

    for item in &snapshot.items {
        lines.push(Line::from(Span::styled(
            item.clone(),
            Style::default().fg(colors::MEAL),
        )));
    }

    lines
}

/// Number of terminal rows the widget needs
pub fn widget_height(snapshot: &Snapshot) -> u16 {
    let text_rows = u16::try_from(snapshot.items.len() + 2).unwrap_or(u16::MAX);
    text_rows.saturating_add(VERTICAL_PADDING)
}

/// Linear interpolation between the gradient stops for `row` of `rows`
pub fn gradient_color(row: u16, rows: u16) -> Color {
    let (r0, g0, b0) = colors::BG_TOP;
    let (r1, g1, b1) = colors::BG_BOTTOM;

    if rows <= 1 {
        return Color::Rgb(r0, g0, b0);
    }

    let t = f64::from(row.min(rows - 1)) / f64::from(rows - 1);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Renders the widget into the whole frame
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.area();

    let buffer = frame.buffer_mut();
    for row in 0..area.height {
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        buffer.set_style(line, Style::default().bg(gradient_color(row, area.height)));
    }

    let block = Block::default().padding(Padding::new(2, 1, 1, 1));
    let paragraph = Paragraph::new(widget_lines(snapshot)).block(block);

    frame.render_widget(paragraph, area);
}
