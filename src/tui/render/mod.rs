//! TUI Rendering
//!
//! Draws the shell: sidebar (or mobile toggle), overlay, and content viewer.

mod sidebar;
mod utils;
mod viewer;

use super::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Clear, Paragraph},
};

pub use viewer::render_viewer;

pub(super) const SIDEBAR_BG: Color = Color::Rgb(44, 62, 80);
pub(super) const MAIN_BG: Color = Color::Rgb(240, 242, 245);
pub(super) const ACTIVE_FG: Color = Color::Rgb(21, 101, 192);
pub(super) const MUTED_FG: Color = Color::Rgb(203, 213, 225);
pub(super) const FOOTER_FG: Color = Color::Rgb(148, 163, 184);
const OVERLAY_BG: Color = Color::Rgb(20, 20, 20);

/// Render the entire UI
pub fn render(f: &mut Frame, app: &mut App) {
    app.area = f.area();
    let layout = app.layout();
    let state = app.shell.state();
    let entry = app.shell.active_entry();

    f.render_widget(
        Block::default().style(Style::default().bg(MAIN_BG)),
        layout.main,
    );
    app.scroll = render_viewer(f, layout.content, &entry.title, &entry.content, app.scroll);

    if let Some(overlay) = layout.overlay {
        f.render_widget(
            Block::default().style(Style::default().bg(OVERLAY_BG).fg(Color::DarkGray)),
            overlay,
        );
    }

    if let Some(ref sidebar_layout) = layout.sidebar {
        sidebar::render_sidebar(
            f,
            sidebar_layout,
            app.shell.registry(),
            state.active,
            app.shell.hovered(),
        );
    }

    if let Some(toggle) = layout.toggle {
        render_toggle(f, toggle);
    }
}

/// Round menu button in the mobile header
fn render_toggle(f: &mut Frame, area: Rect) {
    let button = Paragraph::new("\n ≡ ").style(
        Style::default()
            .bg(SIDEBAR_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(Clear, area);
    f.render_widget(button, area);
}
