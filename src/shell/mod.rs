//! Shell Module
//!
//! Navigation state for the mini-app shell, independent of any renderer.

mod controller;
mod state;
pub mod viewport;

pub use controller::ShellController;
pub use state::{ShellState, SidebarMode};
pub use viewport::{LayoutClass, MOBILE_BREAKPOINT_PX};
