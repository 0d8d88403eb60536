//! Terminal UI for the tareas application.
//!
//! This crate provides a Ratatui-based terminal interface over the kanban
//! board and the to-do list held in `tareas-board`.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, view, and open overlays
//! - [`input`]: Text inputs behind the prompt and the edit form
//! - [`drag`]: Mouse and keyboard drag gesture providers
//! - [`layout`]: Shared layout measurements
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use tareas_board::{BoardController, TodoList};
//! use tareas_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(true)?;
//!
//!     let mut app = App::new(BoardController::new(), TodoList::new());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod drag;
pub mod event;
pub mod input;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
