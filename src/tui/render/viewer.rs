//! Content viewer
//!
//! Shows the active app's title and payload. The payload is displayed as-is.

use super::{ACTIVE_FG, MAIN_BG};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render `content` under `title` and return the scroll offset actually
/// used, clamped so the last line stays on screen.
pub fn render_viewer(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll: u16,
) -> u16 {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACTIVE_FG).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Rgb(120, 120, 120)))
        .style(Style::default().bg(MAIN_BG).fg(Color::Rgb(44, 62, 80)));

    let inner = block.inner(area);
    let text = Paragraph::new(content.to_string()).wrap(Wrap { trim: false });
    // Count before attaching the block so borders are not included
    let rows = if inner.width == 0 {
        0
    } else {
        text.line_count(inner.width)
    };
    let max_scroll = rows
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16;
    let scroll = scroll.min(max_scroll);

    f.render_widget(text.block(block).scroll((scroll, 0)), area);
    scroll
}
