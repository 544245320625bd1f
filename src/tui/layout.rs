//! Screen geometry and hit-testing.
//!
//! Computed from the frame area and the shell state, shared by the renderer
//! and the mouse handler so both agree on where everything is.

use crate::registry::AppKey;
use crate::shell::viewport::CELL_WIDTH_PX;
use crate::shell::{ShellState, SidebarMode};
use ratatui::layout::{Position, Rect};

/// Sidebar width in logical pixels
const SIDEBAR_WIDTH_PX: u32 = 280;
const BRAND_HEIGHT: u16 = 4;
const ENTRY_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
/// Mobile top spacer, also hosts the toggle button
const MOBILE_HEADER_HEIGHT: u16 = 3;
const TOGGLE_WIDTH: u16 = 5;

/// What sits under a pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Entry(AppKey),
    Toggle,
    Overlay,
    Sidebar,
    Content,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    pub area: Rect,
    pub sidebar: Option<SidebarLayout>,
    /// Dimmed backdrop behind the open mobile sidebar
    pub overlay: Option<Rect>,
    /// Menu button shown while the mobile sidebar is closed
    pub toggle: Option<Rect>,
    pub main: Rect,
    /// Empty row block above the content on mobile
    pub spacer: Option<Rect>,
    pub content: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLayout {
    pub area: Rect,
    pub brand: Rect,
    pub entries: Vec<(AppKey, Rect)>,
    pub footer: Rect,
}

fn sidebar_columns(area: Rect) -> u16 {
    let cols = (SIDEBAR_WIDTH_PX / CELL_WIDTH_PX) as u16;
    cols.min(area.width)
}

impl SidebarLayout {
    fn compute(area: Rect, keys: &[AppKey]) -> Self {
        let brand = Rect {
            height: BRAND_HEIGHT.min(area.height),
            ..area
        };
        let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(brand.height));
        let footer = Rect {
            y: area.bottom().saturating_sub(footer_height),
            height: footer_height,
            ..area
        };

        let mut entries = Vec::with_capacity(keys.len());
        let mut y = brand.bottom();
        for key in keys {
            if y + ENTRY_HEIGHT > footer.y {
                break;
            }
            let rect = Rect {
                x: area.x + 1,
                y,
                width: area.width.saturating_sub(1),
                height: ENTRY_HEIGHT,
            };
            entries.push((*key, rect));
            y += ENTRY_HEIGHT;
        }

        Self {
            area,
            brand,
            entries,
            footer,
        }
    }

    pub fn entry_at(&self, pos: Position) -> Option<AppKey> {
        self.entries
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(key, _)| *key)
    }
}

impl ShellLayout {
    pub fn compute(area: Rect, state: &ShellState, keys: &[AppKey]) -> Self {
        let side_w = sidebar_columns(area);
        let side_area = Rect {
            width: side_w,
            ..area
        };

        let (sidebar, overlay, toggle, main) = match state.mode() {
            SidebarMode::Desktop => {
                let main = Rect {
                    x: area.x + side_w,
                    width: area.width - side_w,
                    ..area
                };
                (
                    Some(SidebarLayout::compute(side_area, keys)),
                    None,
                    None,
                    main,
                )
            }
            SidebarMode::MobileOpen => (
                Some(SidebarLayout::compute(side_area, keys)),
                Some(area),
                None,
                area,
            ),
            SidebarMode::MobileClosed => {
                let toggle = Rect {
                    x: area.x + 1,
                    y: area.y,
                    width: TOGGLE_WIDTH.min(area.width.saturating_sub(1)),
                    height: MOBILE_HEADER_HEIGHT.min(area.height),
                };
                (None, None, Some(toggle), area)
            }
        };

        let (spacer, content) = if state.is_mobile {
            let h = MOBILE_HEADER_HEIGHT.min(main.height);
            (
                Some(Rect { height: h, ..main }),
                Rect {
                    y: main.y + h,
                    height: main.height - h,
                    ..main
                },
            )
        } else {
            (None, main)
        };

        Self {
            area,
            sidebar,
            overlay,
            toggle,
            main,
            spacer,
            content,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);
        if !self.area.contains(pos) {
            return Hit::Outside;
        }
        if let Some(ref sidebar) = self.sidebar
            && sidebar.area.contains(pos)
        {
            return sidebar.entry_at(pos).map_or(Hit::Sidebar, Hit::Entry);
        }
        if self.toggle.is_some_and(|t| t.contains(pos)) {
            return Hit::Toggle;
        }
        if self.overlay.is_some_and(|o| o.contains(pos)) {
            return Hit::Overlay;
        }
        Hit::Content
    }
}
