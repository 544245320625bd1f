//! Selection & sidebar controller.
//!
//! Binds user events to [`ShellState`] transitions and fires the matching
//! feedback cue first. Cue failures never affect the transition.

use super::state::ShellState;
use crate::feedback::{self, Cue, Feedback};
use crate::registry::{AppEntry, AppKey, Registry};

pub struct ShellController {
    state: ShellState,
    registry: Registry,
    feedback: Box<dyn Feedback>,
    /// Entry currently under the pointer or keyboard cursor
    hovered: Option<AppKey>,
}

impl ShellController {
    pub fn new(
        registry: Registry,
        initial: AppKey,
        width_px: u32,
        feedback: Box<dyn Feedback>,
    ) -> Self {
        tracing::debug!(
            "Shell starting on '{}' at {}px with {} feedback",
            initial,
            width_px,
            feedback.name()
        );
        Self {
            state: ShellState::new(initial, width_px),
            registry,
            feedback,
            hovered: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn active_entry(&self) -> &AppEntry {
        self.registry.get(self.state.active)
    }

    pub fn hovered(&self) -> Option<AppKey> {
        self.hovered
    }

    pub fn select_app(&mut self, key: AppKey) {
        feedback::play(self.feedback.as_ref(), Cue::Click);
        let before = self.state;
        self.state = self.state.select(key);
        self.drop_hidden_hover();
        tracing::debug!("select {} ({:?} -> {:?})", key, before.mode(), self.state.mode());
    }

    pub fn toggle_sidebar(&mut self) {
        feedback::play(self.feedback.as_ref(), Cue::Click);
        self.state = self.state.toggle_sidebar();
        self.drop_hidden_hover();
        tracing::debug!("sidebar toggled, open={}", self.state.sidebar_open);
    }

    pub fn dismiss_sidebar(&mut self) {
        self.state = self.state.dismiss_sidebar();
        self.drop_hidden_hover();
    }

    /// Pointer or cursor moved onto `key` (or off every entry with `None`).
    ///
    /// The hover cue plays only when a new entry is entered.
    pub fn hover(&mut self, key: Option<AppKey>) {
        if key == self.hovered {
            return;
        }
        self.hovered = key;
        if key.is_some() {
            feedback::play(self.feedback.as_ref(), Cue::Hover);
        }
    }

    pub fn resize(&mut self, width_px: u32) {
        let was_mobile = self.state.is_mobile;
        self.state = self.state.resize(width_px);
        self.drop_hidden_hover();
        if was_mobile != self.state.is_mobile {
            tracing::debug!("layout now {:?} at {}px", self.state.mode(), width_px);
        }
    }

    /// Entries that are off screen cannot stay hovered
    fn drop_hidden_hover(&mut self) {
        if !self.state.sidebar_visible() {
            self.hovered = None;
        }
    }
}
