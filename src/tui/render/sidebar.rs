//! Sidebar rendering
//!
//! Brand header, one menu entry per registry item, and the footer label.

use super::super::layout::SidebarLayout;
use super::utils::truncate_to_width;
use super::{ACTIVE_FG, FOOTER_FG, MAIN_BG, MUTED_FG, SIDEBAR_BG};
use crate::registry::{AppKey, Registry};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

pub(super) const BRAND: &str = "MATEAPPS";
pub(super) const BRAND_ICON: &str = "🧮";
pub(super) const FOOTER: &str = "Monoennio Piombino";

pub(super) fn render_sidebar(
    f: &mut Frame,
    layout: &SidebarLayout,
    registry: &Registry,
    active: AppKey,
    hovered: Option<AppKey>,
) {
    f.render_widget(Clear, layout.area);
    f.render_widget(
        Block::default().style(Style::default().bg(SIDEBAR_BG)),
        layout.area,
    );

    render_brand(f, layout.brand);

    for (key, rect) in &layout.entries {
        let entry = registry.get(*key);
        render_entry(
            f,
            *rect,
            key.icon().glyph,
            &entry.title,
            *key == active,
            hovered == Some(*key),
        );
    }

    let footer = Paragraph::new(FOOTER)
        .style(
            Style::default()
                .fg(FOOTER_FG)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(footer, layout.footer);
}

fn render_brand(f: &mut Frame, area: Rect) {
    let brand = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(BRAND_ICON),
            Span::raw(" "),
            Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    f.render_widget(brand, area);
}

fn render_entry(
    f: &mut Frame,
    area: Rect,
    glyph: &str,
    title: &str,
    active: bool,
    hovered: bool,
) {
    let style = if active {
        Style::default()
            .bg(MAIN_BG)
            .fg(ACTIVE_FG)
            .add_modifier(Modifier::BOLD)
    } else if hovered {
        Style::default()
            .bg(Color::Rgb(58, 76, 94))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_FG).add_modifier(Modifier::BOLD)
    };

    // Hovered entries nudge right by one column
    let indent = if hovered && !active { "  " } else { " " };
    let prefix_width = indent.len() + 2;
    let title = truncate_to_width(title, (area.width as usize).saturating_sub(prefix_width));

    let line = Line::from(vec![
        Span::raw(indent),
        Span::raw(glyph.to_string()),
        Span::raw(" "),
        Span::raw(title),
    ]);
    let entry = Paragraph::new(vec![Line::from(""), line]).style(style);
    f.render_widget(entry, area);
}
