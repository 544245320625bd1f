//! TUI Application State
//!
//! Wraps the shell controller with terminal-only concerns: menu cursor,
//! viewer scroll, the last frame area and the quit flag.

use super::events::{EventHandler, TuiEvent};
use super::layout::{Hit, ShellLayout};
use crate::registry::AppKey;
use crate::shell::ShellController;
use crate::shell::viewport::columns_to_px;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// Rows moved by one PgUp/PgDn
const PAGE_ROWS: u16 = 5;

pub struct App {
    pub shell: ShellController,
    /// Menu entry under the keyboard cursor
    pub cursor: usize,
    /// Viewer scroll offset in rows
    pub scroll: u16,
    pub should_quit: bool,
    /// Frame area used for mouse hit-testing
    pub area: Rect,
    scrolled_app: AppKey,
    event_handler: EventHandler,
}

impl App {
    pub fn new(shell: ShellController, area: Rect) -> Self {
        let active = shell.state().active;
        Self {
            cursor: active.index(),
            shell,
            scroll: 0,
            should_quit: false,
            area,
            scrolled_app: active,
            event_handler: EventHandler::new(),
        }
    }

    pub fn event_sender(&self) -> mpsc::UnboundedSender<TuiEvent> {
        self.event_handler.sender()
    }

    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        self.event_handler.next().await
    }

    pub fn try_next_event(&mut self) -> Option<TuiEvent> {
        self.event_handler.try_next()
    }

    pub fn layout(&self) -> ShellLayout {
        ShellLayout::compute(self.area, &self.shell.state(), &AppKey::ALL)
    }

    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => self.handle_key(key),
            TuiEvent::Mouse(mouse) => self.handle_mouse(mouse),
            TuiEvent::Resize(width, height) => {
                self.area = Rect::new(0, 0, width, height);
                self.shell.resize(columns_to_px(width));
            }
            TuiEvent::InputClosed => {
                tracing::warn!("Terminal input closed, shutting down");
                self.should_quit = true;
            }
        }

        let active = self.shell.state().active;
        if active != self.scrolled_app {
            self.scrolled_app = active;
            self.scroll = 0;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let state = self.shell.state();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(app) = AppKey::from_index(index) {
                    self.cursor = index;
                    self.shell.select_app(app);
                }
            }
            KeyCode::Up | KeyCode::Char('k') if state.sidebar_visible() => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') if state.sidebar_visible() => self.move_cursor(1),
            KeyCode::Enter if state.sidebar_visible() => {
                if let Some(app) = AppKey::from_index(self.cursor) {
                    self.shell.select_app(app);
                }
            }
            KeyCode::Char('m') | KeyCode::Tab if state.is_mobile => self.shell.toggle_sidebar(),
            KeyCode::Esc if state.is_mobile && state.sidebar_open => self.shell.dismiss_sidebar(),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE_ROWS),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_ROWS),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = AppKey::ALL.len() as isize;
        let next = (self.cursor as isize + delta).rem_euclid(len) as usize;
        self.cursor = next;
        self.shell.hover(AppKey::from_index(next));
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = self.layout().hit(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let hovered = match hit {
                    Hit::Entry(key) => Some(key),
                    _ => None,
                };
                if let Some(key) = hovered {
                    self.cursor = key.index();
                }
                self.shell.hover(hovered);
            }
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Hit::Entry(key) => {
                    self.cursor = key.index();
                    self.shell.select_app(key);
                }
                Hit::Toggle => self.shell.toggle_sidebar(),
                Hit::Overlay => self.shell.dismiss_sidebar(),
                Hit::Sidebar | Hit::Content | Hit::Outside => {}
            },
            MouseEventKind::ScrollDown if hit == Hit::Content => {
                self.scroll = self.scroll.saturating_add(1);
            }
            MouseEventKind::ScrollUp if hit == Hit::Content => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::SilentFeedback;
    use crate::registry::Registry;
    use crate::shell::SidebarMode;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn test_app(cols: u16, rows: u16) -> App {
        let shell = ShellController::new(
            Registry::builtin(),
            AppKey::default(),
            columns_to_px(cols),
            Box::new(SilentFeedback),
        );
        App::new(shell, Rect::new(0, 0, cols, rows))
    }

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> TuiEvent {
        TuiEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(column: u16, row: u16) -> TuiEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn entry_center(app: &App, key: AppKey) -> (u16, u16) {
        let layout = app.layout();
        let sidebar = layout.sidebar.expect("sidebar visible");
        let (_, rect) = sidebar
            .entries
            .iter()
            .find(|(k, _)| *k == key)
            .copied()
            .expect("entry laid out");
        (rect.x + 2, rect.y + 1)
    }

    #[test]
    fn test_click_entry_selects_on_desktop() {
        let mut app = test_app(140, 30);
        let (x, y) = entry_center(&app, AppKey::Sudoku);
        app.handle_event(click(x, y));
        assert_eq!(app.shell.state().active, AppKey::Sudoku);
        assert_eq!(app.cursor, AppKey::Sudoku.index());
    }

    #[test]
    fn test_mobile_toggle_select_flow() {
        let mut app = test_app(80, 24);
        assert_eq!(app.shell.state().mode(), SidebarMode::MobileClosed);

        app.handle_event(click(2, 1));
        assert_eq!(app.shell.state().mode(), SidebarMode::MobileOpen);

        let (x, y) = entry_center(&app, AppKey::Termometro);
        app.handle_event(click(x, y));
        assert_eq!(app.shell.state().active, AppKey::Termometro);
        assert_eq!(app.shell.state().mode(), SidebarMode::MobileClosed);
    }

    #[test]
    fn test_overlay_click_dismisses() {
        let mut app = test_app(80, 24);
        app.handle_event(key(KeyCode::Char('m')));
        assert!(app.shell.state().sidebar_open);
        app.handle_event(click(70, 20));
        assert!(!app.shell.state().sidebar_open);
        assert_eq!(app.shell.state().active, AppKey::default());
    }

    #[test]
    fn test_toggle_key_ignored_on_desktop() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::Tab));
        assert!(!app.shell.state().sidebar_open);
    }

    #[test]
    fn test_resize_event_reclassifies() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::Char('4')));
        app.handle_event(TuiEvent::Resize(62, 30));
        let state = app.shell.state();
        assert!(state.is_mobile);
        assert_eq!(state.active, AppKey::Sudoku);
        assert!(!state.sidebar_open);
        assert_eq!(app.area.width, 62);
    }

    #[test]
    fn test_keyboard_cursor_wraps_and_selects() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.cursor, 3);
        assert_eq!(app.shell.hovered(), Some(AppKey::Sudoku));
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.shell.state().active, AppKey::Termometro);
    }

    #[test]
    fn test_cursor_keys_ignored_while_mobile_sidebar_hidden() {
        let mut app = test_app(80, 24);
        app.handle_event(key(KeyCode::Down));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.shell.state().active, AppKey::Espressioni);
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::Char('9')));
        assert_eq!(app.shell.state().active, AppKey::Espressioni);
    }

    #[test]
    fn test_hover_tracks_mouse() {
        let mut app = test_app(140, 30);
        let (x, y) = entry_center(&app, AppKey::Mcmmcd);
        app.handle_event(mouse(MouseEventKind::Moved, x, y));
        assert_eq!(app.shell.hovered(), Some(AppKey::Mcmmcd));
        app.handle_event(mouse(MouseEventKind::Moved, 100, 20));
        assert_eq!(app.shell.hovered(), None);
    }

    #[test]
    fn test_scroll_resets_when_active_changes() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::PageDown));
        app.handle_event(key(KeyCode::PageDown));
        assert_eq!(app.scroll, 10);
        app.handle_event(key(KeyCode::Char('2')));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(140, 30);
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = test_app(140, 30);
        app.handle_event(TuiEvent::InputClosed);
        assert!(app.should_quit);
    }
}
