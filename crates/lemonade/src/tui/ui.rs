//! Stateless rendering of the lemonade screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::assets::RenderedView;

const TOP_BAR: Color = Color::Rgb(0xF9, 0xE7, 0x1E);
const IMAGE_BACKGROUND: Color = Color::Rgb(0xC3, 0xE9, 0xDC);

/// Draws one frame and returns the area of the tappable image.
pub fn draw(frame: &mut Frame, view: &RenderedView) -> Rect {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Image and text
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new(view.title.as_str())
        .style(
            Style::default()
                .bg(TOP_BAR)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(title, chunks[0]);

    let image_area = draw_body(frame, chunks[1], view);

    let hints = Paragraph::new("Enter/Space/click: tap   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[2]);

    image_area
}

fn draw_body(frame: &mut Frame, area: Rect, view: &RenderedView) -> Rect {
    let art_width = cells(view.image.lines().map(|l| l.chars().count()).max().unwrap_or(0));
    let art_height = cells(view.image.lines().count());
    let title_width = cells(view.description.chars().count());

    // Border plus one cell of padding on each side.
    let image_width = art_width.max(title_width).saturating_add(4);
    let image_height = art_height.saturating_add(4);
    let text_height: u16 = if view.readout.is_some() { 4 } else { 2 };

    let column = center_rect(area, image_width.max(40), image_height.saturating_add(text_height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(image_height),
            Constraint::Length(text_height),
        ])
        .split(column);

    let image_area = center_rect(rows[0], image_width, image_height);
    let image = Paragraph::new(Text::from(view.image.as_str()))
        .style(Style::default().bg(IMAGE_BACKGROUND).fg(Color::Black))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(view.description.as_str()).centered())
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(image, image_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(view.instruction.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(readout) = &view.readout {
        lines.push(Line::from(""));
        lines.push(Line::from(readout.as_str()).style(Style::default().fg(Color::Gray)));
    }
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, rows[1]);

    image_area
}

/// Clamps a character count to terminal cells.
fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
