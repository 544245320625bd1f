//! Terminal User Interface
//!
//! ratatui front-end for the shell: event plumbing, layout, rendering and the
//! main loop.

pub mod app;
pub mod events;
pub mod layout;
pub mod render;
pub mod runner;

pub use app::App;
pub use runner::run;
