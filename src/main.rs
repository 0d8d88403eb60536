//! tareas - a terminal to-do list and kanban board.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use anyhow::Context;
use tareas_board::demo::{demo_controller, demo_todo_list};
use tareas_board::{BoardController, TodoList};
use tareas_config::Config;
use tareas_tui::{App, terminal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()
        .await
        .context("failed to load configuration")?;

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = logging::init(&config.logging)?;
    info!(view = ?config.view, demo = config.demo, mouse = config.mouse, "starting tareas");

    let (controller, todos) = if config.demo {
        (demo_controller(), demo_todo_list())
    } else {
        (BoardController::new(), TodoList::new())
    };

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal(config.mouse)?;

    let mut app = App::with_config(controller, todos, config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        error!(error = %err, "application exited with an error");
    }
    result
}
