//! Application state management.
//!
//! This module defines the state the TUI keeps around the board controller
//! and the to-do list: which view is showing, what is selected, and which
//! prompt or form is open.

use tareas_board::{BoardController, Column, Position, Status, Task, TodoItem, TodoList};
use tareas_config::StartView;

use crate::input::{EditForm, Prompt};

/// The application state.
#[derive(Debug)]
pub struct AppState {
    /// The kanban board and its edit/delete overlays.
    pub controller: BoardController,
    /// The basic to-do list.
    pub todos: TodoList,
    /// Which view is showing.
    pub view: StartView,
    /// The focused board column.
    pub selected_column: Status,
    /// Index of the selected task within the focused column, if any.
    pub selected_task: Option<usize>,
    /// Index of the selected to-do item, if any.
    pub selected_item: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The open "new task" / "new item" prompt.
    pub prompt: Option<Prompt>,
    /// Cursor and focus of the edit form while a task is being edited.
    pub edit_form: Option<EditForm>,
    /// The last thing that happened, shown in the status line.
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{BoardController, Status, TodoList};
    /// use tareas_config::StartView;
    /// use tareas_tui::AppState;
    ///
    /// let state = AppState::new(BoardController::new(), TodoList::new(), StartView::Board);
    /// assert_eq!(state.selected_column, Status::Pending);
    /// assert!(state.selected_task.is_none());
    /// ```
    #[must_use]
    pub fn new(controller: BoardController, todos: TodoList, view: StartView) -> Self {
        Self {
            controller,
            todos,
            view,
            selected_column: Status::Pending,
            selected_task: None,
            selected_item: None,
            help_visible: false,
            prompt: None,
            edit_form: None,
            status_message: None,
        }
    }

    fn column(&self) -> &Column {
        self.controller.board().column(self.selected_column)
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Switches between the board and the list.
    pub fn switch_view(&mut self) {
        self.view = self.view.toggle();
    }

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        self.selected_column = self.selected_column.previous().unwrap_or(Status::Processed);
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        self.selected_column = self.selected_column.next().unwrap_or(Status::Pending);
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column, wrapping.
    pub fn navigate_up(&mut self) {
        self.selected_task = step_back(self.selected_task, self.column().len());
    }

    /// Moves the task selection down within the current column, wrapping.
    pub fn navigate_down(&mut self) {
        self.selected_task = step_forward(self.selected_task, self.column().len());
    }

    /// Moves the list selection up, wrapping.
    pub fn navigate_list_up(&mut self) {
        self.selected_item = step_back(self.selected_item, self.todos.len());
    }

    /// Moves the list selection down, wrapping.
    pub fn navigate_list_down(&mut self) {
        self.selected_item = step_forward(self.selected_item, self.todos.len());
    }

    /// Selects the card at `position`, clamping to the column.
    pub fn select(&mut self, position: Position) {
        self.selected_column = position.column;
        self.selected_task = Some(position.index);
        self.clamp_task_selection();
    }

    /// Returns the selected board slot, if a task is selected.
    #[must_use]
    pub fn selected_position(&self) -> Option<Position> {
        self.selected_task
            .map(|index| Position::new(self.selected_column, index))
    }

    /// Returns the selected task, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{BoardController, TodoList};
    /// use tareas_config::StartView;
    /// use tareas_tui::AppState;
    ///
    /// let mut controller = BoardController::new();
    /// controller.add_task("Water plants");
    ///
    /// let mut state = AppState::new(controller, TodoList::new(), StartView::Board);
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_task().unwrap().text, "Water plants");
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.column().tasks.get(self.selected_task?)
    }

    /// Returns the selected to-do item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.todos.items().get(self.selected_item?)
    }

    /// Clears the selection of the current view.
    pub fn clear_selection(&mut self) {
        match self.view {
            StartView::Board => self.selected_task = None,
            StartView::List => self.selected_item = None,
        }
    }

    /// Ensures both selections point at something that exists.
    pub fn clamp_selections(&mut self) {
        self.clamp_task_selection();
        self.selected_item = clamp(self.selected_item, self.todos.len());
    }

    fn clamp_task_selection(&mut self) {
        self.selected_task = clamp(self.selected_task, self.column().len());
    }
}

fn clamp(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        selected.map(|idx| idx.min(len - 1))
    }
}

fn step_back(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(idx) if idx > 0 => Some(idx - 1),
        Some(_) => Some(len - 1),
        None => Some(0),
    }
}

fn step_forward(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(idx) if idx + 1 < len => Some(idx + 1),
        Some(_) | None => Some(0),
    }
}
