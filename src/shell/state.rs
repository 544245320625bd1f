//! Shell State
//!
//! Active selection, sidebar visibility and layout class. Every transition is
//! a pure function from the old state to the new one.

use super::viewport::is_mobile_width;
use crate::registry::AppKey;

/// Visible layout, derived from [`ShellState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    MobileOpen,
    MobileClosed,
    /// Sidebar always rendered; `sidebar_open` is ignored
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub active: AppKey,
    pub sidebar_open: bool,
    pub is_mobile: bool,
}

impl ShellState {
    /// Start-up state: `initial` active, sidebar closed, layout from `width_px`
    pub fn new(initial: AppKey, width_px: u32) -> Self {
        Self {
            active: initial,
            sidebar_open: false,
            is_mobile: is_mobile_width(width_px),
        }
    }

    pub fn mode(&self) -> SidebarMode {
        match (self.is_mobile, self.sidebar_open) {
            (false, _) => SidebarMode::Desktop,
            (true, true) => SidebarMode::MobileOpen,
            (true, false) => SidebarMode::MobileClosed,
        }
    }

    /// Whether the sidebar is on screen
    pub fn sidebar_visible(&self) -> bool {
        self.mode() != SidebarMode::MobileClosed
    }

    #[must_use]
    pub fn select(self, key: AppKey) -> Self {
        Self {
            active: key,
            sidebar_open: if self.is_mobile {
                false
            } else {
                self.sidebar_open
            },
            ..self
        }
    }

    #[must_use]
    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    /// Overlay click: close without touching anything else
    #[must_use]
    pub fn dismiss_sidebar(self) -> Self {
        Self {
            sidebar_open: false,
            ..self
        }
    }

    /// Re-classify the viewport. `sidebar_open` is kept across crossings.
    #[must_use]
    pub fn resize(self, width_px: u32) -> Self {
        Self {
            is_mobile: is_mobile_width(width_px),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn desktop() -> ShellState {
        ShellState::new(AppKey::default(), 1280)
    }

    fn mobile_open() -> ShellState {
        ShellState::new(AppKey::default(), 400).toggle_sidebar()
    }

    fn any_key() -> impl Strategy<Value = AppKey> {
        (0..AppKey::ALL.len()).prop_map(|i| AppKey::ALL[i])
    }

    fn any_state() -> impl Strategy<Value = ShellState> {
        (any_key(), any::<bool>(), any::<bool>()).prop_map(|(active, sidebar_open, is_mobile)| {
            ShellState {
                active,
                sidebar_open,
                is_mobile,
            }
        })
    }

    #[test]
    fn test_initial_state() {
        let s = desktop();
        assert_eq!(s.active, AppKey::Espressioni);
        assert!(!s.sidebar_open);
        assert!(!s.is_mobile);
        assert_eq!(s.mode(), SidebarMode::Desktop);
        assert!(ShellState::new(AppKey::default(), 850).is_mobile);
    }

    #[test]
    fn test_select_on_mobile_closes_sidebar() {
        let s = mobile_open();
        assert_eq!(s.mode(), SidebarMode::MobileOpen);
        let s = s.select(AppKey::Termometro);
        assert_eq!(s.active, AppKey::Termometro);
        assert!(!s.sidebar_open);
        assert_eq!(s.mode(), SidebarMode::MobileClosed);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_select_on_desktop_keeps_sidebar_flag(#[case] open: bool) {
        let s = ShellState {
            sidebar_open: open,
            ..desktop()
        };
        assert_eq!(s.select(AppKey::Mcmmcd).sidebar_open, open);
    }

    #[test]
    fn test_resize_into_mobile_keeps_active() {
        let s = ShellState::new(AppKey::Mcmmcd, 900);
        assert!(!s.is_mobile);
        let s = s.resize(800);
        assert!(s.is_mobile);
        assert_eq!(s.active, AppKey::Mcmmcd);
    }

    #[test]
    fn test_select_then_shrink_scenario() {
        let s = desktop().select(AppKey::Sudoku).resize(500);
        assert_eq!(s.active, AppKey::Sudoku);
        assert!(s.is_mobile);
        assert!(!s.sidebar_open);
    }

    #[test]
    fn test_breakpoint_crossing_retains_sidebar_flag() {
        let s = mobile_open().resize(1200);
        assert_eq!(s.mode(), SidebarMode::Desktop);
        assert!(s.sidebar_open);
        assert!(s.sidebar_visible());
        let s = s.resize(600);
        assert_eq!(s.mode(), SidebarMode::MobileOpen);
    }

    #[test]
    fn test_dismiss_only_closes() {
        let s = mobile_open().dismiss_sidebar();
        assert!(!s.sidebar_open);
        assert_eq!(s.active, AppKey::default());
        assert_eq!(s.dismiss_sidebar(), s);
    }

    proptest! {
        #[test]
        fn prop_select_sets_active(s in any_state(), key in any_key()) {
            prop_assert_eq!(s.select(key).active, key);
        }

        #[test]
        fn prop_select_never_opens_sidebar(s in any_state(), key in any_key()) {
            let next = s.select(key);
            prop_assert!(!next.sidebar_open || s.sidebar_open);
            if s.is_mobile {
                prop_assert!(!next.sidebar_open);
            } else {
                prop_assert_eq!(next.sidebar_open, s.sidebar_open);
            }
        }

        #[test]
        fn prop_toggle_is_involution(s in any_state()) {
            prop_assert_eq!(s.toggle_sidebar().toggle_sidebar(), s);
        }

        #[test]
        fn prop_resize_keeps_selection(s in any_state(), width in 0u32..4000) {
            let next = s.resize(width);
            prop_assert_eq!(next.active, s.active);
            prop_assert_eq!(next.sidebar_open, s.sidebar_open);
            prop_assert_eq!(next.is_mobile, width <= 850);
        }
    }
}
