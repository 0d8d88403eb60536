//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tareas_board::{
    Board, BoardController, BoardEvent, DragGestureProvider, EditField, Message, Status, TodoList,
};
use tareas_config::{Config, StartView};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::{
    AppState,
    drag::{BoardHitMap, KeyGesture, KeyboardDrag, MouseDrag, MouseGesture},
    event::{InputMode, event_to_message, poll_event},
    input::{EditForm, FormField, Prompt, PromptTarget},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        board_area,
    },
    terminal::AppTerminal,
    widgets::{
        render_board, render_confirm_modal, render_edit_modal, render_help_overlay, render_prompt,
        render_status_bar, render_todo_list, status_bar::MOVE_HINTS, view_hints,
    },
};

/// The main application struct.
///
/// Owns the state, both drag providers, and the receiving end of the board
/// controller's event stream.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    mouse_drag: MouseDrag,
    keyboard_drag: KeyboardDrag,
    /// Events emitted by the board controller since the last update.
    events: UnboundedReceiver<BoardEvent>,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application over a board controller and a to-do list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{BoardController, TodoList};
    /// use tareas_tui::App;
    ///
    /// let app = App::new(BoardController::new(), TodoList::new());
    /// ```
    #[must_use]
    pub fn new(controller: BoardController, todos: TodoList) -> Self {
        Self::with_config(controller, todos, Config::default())
    }

    /// Creates a new application with the given configuration.
    ///
    /// The configured start view decides whether the board or the list is
    /// shown first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{BoardController, TodoList};
    /// use tareas_config::{Config, StartView};
    /// use tareas_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.view = StartView::List;
    ///
    /// let app = App::with_config(BoardController::new(), TodoList::new(), config);
    /// assert_eq!(app.state().view, StartView::List);
    /// ```
    #[must_use]
    pub fn with_config(mut controller: BoardController, todos: TodoList, config: Config) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        controller.subscribe(Box::new(move |event: &BoardEvent| {
            let _ = tx.send(*event);
        }));

        Self {
            state: AppState::new(controller, todos, config.view),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            mouse_drag: MouseDrag::new(),
            keyboard_drag: KeyboardDrag::new(),
            events,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns which key mapping applies to the next key press.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.controller.pending_delete().is_some() {
            InputMode::Confirm
        } else if self.state.prompt.is_some() || self.state.edit_form.is_some() {
            InputMode::Text
        } else {
            InputMode::Normal
        }
    }

    /// Updates the application state based on a message.
    ///
    /// Open overlays take messages first: help, then the delete
    /// confirmation, the edit form, the prompt, and a keyboard move in
    /// progress. Board events raised along the way are applied to the
    /// selection and the status line afterwards.
    pub fn update(&mut self, msg: Message) {
        self.handle(msg);
        // Overlays take the mouse release, so a pressed card would stay grabbed.
        if self.overlay_open() {
            self.mouse_drag.cancel();
        }
        self.drain_events();
    }

    fn overlay_open(&self) -> bool {
        self.state.help_visible
            || self.state.prompt.is_some()
            || self.state.edit_form.is_some()
            || self.state.controller.pending_delete().is_some()
            || self.keyboard_drag.is_dragging()
    }

    fn handle(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        // Any key other than Quit closes help
        if self.state.dismiss_help() {
            return;
        }

        if self.state.controller.pending_delete().is_some() {
            self.handle_confirm(msg);
        } else if self.state.edit_form.is_some() {
            self.handle_edit(msg);
        } else if self.state.prompt.is_some() {
            self.handle_prompt(msg);
        } else if self.keyboard_drag.source().is_some() {
            self.handle_keyboard_drag(msg);
        } else {
            self.handle_normal(msg);
        }
    }

    fn handle_confirm(&mut self, msg: Message) {
        match msg {
            Message::Confirm => {
                if self.state.controller.confirm_delete().is_none() {
                    self.state.status_message = Some("Nothing deleted".to_string());
                }
            }
            Message::Cancel | Message::Escape => {
                self.state.controller.cancel_delete();
            }
            _ => {}
        }
    }

    fn handle_edit(&mut self, msg: Message) {
        let Some(form) = self.state.edit_form.as_mut() else {
            return;
        };

        match msg {
            Message::Confirm => {
                if form.text.is_blank() {
                    self.state.status_message = Some("Task text cannot be empty".to_string());
                    return;
                }
                self.state.edit_form = None;
                if !self.state.controller.commit_edit() {
                    self.state.status_message = Some("Task no longer exists".to_string());
                }
                return;
            }
            Message::Cancel | Message::Escape => {
                self.state.edit_form = None;
                self.state.controller.cancel_edit();
                return;
            }
            Message::NextField => {
                form.focus = form.focus.next();
                return;
            }
            Message::PreviousField => {
                form.focus = form.focus.previous();
                return;
            }
            Message::NavigateLeft if form.focus == FormField::Priority => {
                form.priority = form.priority.cycle_down();
            }
            Message::NavigateRight if form.focus == FormField::Priority => {
                form.priority = form.priority.cycle_up();
            }
            Message::NavigateLeft => {
                if let Some(input) = form.focused_input() {
                    input.move_left();
                }
                return;
            }
            Message::NavigateRight => {
                if let Some(input) = form.focused_input() {
                    input.move_right();
                }
                return;
            }
            Message::Input { ch } => match form.focused_input() {
                Some(input) => input.insert_char(ch),
                None => return,
            },
            Message::Backspace => match form.focused_input() {
                Some(input) => input.backspace(),
                None => return,
            },
            _ => return,
        }

        // The focused field changed; mirror it into the staged copy.
        let field = match form.focus {
            FormField::Text => EditField::Text(form.text.value().to_string()),
            FormField::Priority => EditField::Priority(form.priority),
            FormField::Comment => EditField::Comment(
                (!form.comment.is_blank()).then(|| form.comment.value().to_string()),
            ),
        };
        self.state.controller.update_edit_field(field);
    }

    fn handle_prompt(&mut self, msg: Message) {
        let Some(prompt) = self.state.prompt.as_mut() else {
            return;
        };

        match msg {
            Message::Input { ch } => prompt.input.insert_char(ch),
            Message::Backspace => prompt.input.backspace(),
            Message::NavigateLeft => prompt.input.move_left(),
            Message::NavigateRight => prompt.input.move_right(),
            Message::Cancel | Message::Escape => self.state.prompt = None,
            Message::Confirm => {
                let Some(Prompt { target, input }) = self.state.prompt.take() else {
                    return;
                };
                let text = input.into_value();
                match target {
                    PromptTarget::Task => {
                        self.state.controller.add_task(&text);
                    }
                    PromptTarget::TodoItem => {
                        if self.state.todos.add(&text).is_some() {
                            self.state.selected_item = Some(self.state.todos.len() - 1);
                            self.state.status_message = Some("Item added".to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_keyboard_drag(&mut self, msg: Message) {
        let gesture = match msg {
            Message::NavigateLeft => KeyGesture::Left,
            Message::NavigateRight => KeyGesture::Right,
            Message::NavigateUp => KeyGesture::Up,
            Message::NavigateDown => KeyGesture::Down,
            Message::Select | Message::Grab => KeyGesture::Drop,
            Message::Escape => KeyGesture::Cancel,
            _ => return,
        };

        let source = self.keyboard_drag.source();
        let moved = self
            .state
            .controller
            .drive(&mut self.keyboard_drag, gesture);

        if let Some(target) = self.keyboard_drag.target() {
            // Still dragging: the selection follows the drop target.
            self.state.selected_column = target.column;
            self.state.selected_task = Some(target.index);
        } else if !moved && let Some(source) = source {
            self.state.select(source);
        }
    }

    fn handle_normal(&mut self, msg: Message) {
        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::SwitchView => self.state.switch_view(),
            Message::Escape => self.state.clear_selection(),
            Message::MouseDown { column, row } => self.handle_mouse_down(column, row),
            Message::MouseUp { column, row } => self.handle_mouse_up(column, row),
            _ => match self.state.view {
                StartView::Board => self.handle_board(msg),
                StartView::List => self.handle_list(msg),
            },
        }
    }

    fn handle_board(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::NewTask => self.state.prompt = Some(Prompt::new(PromptTarget::Task)),
            Message::Select => {
                if let Some(task) = self.state.selected_task().cloned() {
                    self.state.edit_form = Some(EditForm::for_task(&task));
                    self.state.controller.begin_edit(&task);
                }
            }
            Message::Delete => {
                if let Some(id) = self.state.selected_task().map(|task| task.id) {
                    self.state
                        .controller
                        .request_delete(self.state.selected_column, id);
                }
            }
            Message::Grab => {
                if let Some(source) = self.state.selected_position() {
                    let board = self.state.controller.board();
                    let lengths = Status::all().map(|status| board.column(status).len());
                    self.state
                        .controller
                        .drive(&mut self.keyboard_drag, KeyGesture::Grab { source, lengths });
                }
            }
            _ => {}
        }
    }

    fn handle_list(&mut self, msg: Message) {
        match msg {
            Message::NavigateUp => self.state.navigate_list_up(),
            Message::NavigateDown => self.state.navigate_list_down(),
            Message::NewTask => self.state.prompt = Some(Prompt::new(PromptTarget::TodoItem)),
            Message::Toggle | Message::Select => {
                if let Some(id) = self.state.selected_item().map(|item| item.id)
                    && let Some(completed) = self.state.todos.toggle(id)
                {
                    let text = if completed { "Marked done" } else { "Marked not done" };
                    self.state.status_message = Some(text.to_string());
                }
            }
            Message::Delete => {
                if let Some(id) = self.state.selected_item().map(|item| item.id)
                    && self.state.todos.delete(id)
                {
                    self.state.clamp_selections();
                    self.state.status_message = Some("Item deleted".to_string());
                }
            }
            _ => {}
        }
    }

    /// Area the board or list was last drawn into.
    fn content_area(&self) -> Rect {
        board_area(self.last_area, self.header_visible)
    }

    fn handle_mouse_down(&mut self, column: u16, row: u16) {
        let area = self.content_area();
        match self.state.view {
            StartView::Board => {
                let hit_map = BoardHitMap::new(
                    self.state.controller.board(),
                    area,
                    self.state.selected_position(),
                );
                self.mouse_drag.set_hit_map(hit_map);
                self.state
                    .controller
                    .drive(&mut self.mouse_drag, MouseGesture::Press { x: column, y: row });
                if let Some(source) = self.mouse_drag.source() {
                    self.state.select(source);
                }
            }
            StartView::List => {
                let (selected, len) = (self.state.selected_item, self.state.todos.len());
                if let Some(index) = list_row_at(area, selected, len, column, row) {
                    self.state.selected_item = Some(index);
                }
            }
        }
    }

    fn handle_mouse_up(&mut self, column: u16, row: u16) {
        match self.state.view {
            StartView::Board => {
                self.state
                    .controller
                    .drive(&mut self.mouse_drag, MouseGesture::Release { x: column, y: row });
            }
            StartView::List => self.mouse_drag.cancel(),
        }
    }

    /// Applies queued board events to the selection and the status line.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "applying board event");
            match event {
                BoardEvent::TaskAdded { id } => {
                    if self.state.view == StartView::Board
                        && let Some(position) = self.state.controller.board().locate(id)
                    {
                        self.state.select(position);
                    }
                }
                BoardEvent::TaskMoved { to, .. } => self.state.select(to),
                BoardEvent::TaskDeleted { .. } => self.state.clamp_selections(),
                _ => {}
            }
            if let Some(message) = describe_event(&event, self.state.controller.board()) {
                self.state.status_message = Some(message);
            }
        }
    }

    /// Renders the application UI.
    ///
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if show_header {
            self.render_header(frame, header_area);
        }

        let buf = frame.buffer_mut();
        match self.state.view {
            StartView::Board => {
                let grabbed = self.keyboard_drag.source().or(self.mouse_drag.source());
                render_board(
                    self.state.controller.board(),
                    self.state.selected_column,
                    self.state.selected_task,
                    grabbed,
                    content_area,
                    buf,
                );
            }
            StartView::List => {
                render_todo_list(&self.state.todos, self.state.selected_item, content_area, buf);
            }
        }

        let hints = if self.keyboard_drag.is_dragging() {
            MOVE_HINTS
        } else {
            view_hints(self.state.view)
        };
        render_status_bar(self.state.status_message.as_deref(), hints, status_area, buf);

        if let Some(prompt) = &self.state.prompt {
            render_prompt(prompt, area, buf);
        }
        if let (Some(task), Some(form)) = (self.state.controller.editing(), &self.state.edit_form) {
            render_edit_modal(task, form, area, buf);
        }
        if let Some(pending) = self.state.controller.pending_delete() {
            render_confirm_modal(self.state.controller.board(), pending, area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tareas_board::{BoardController, TodoList};
    /// use tareas_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(BoardController::new(), TodoList::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(view = ?self.state.view, mouse = self.config.mouse, "starting event loop");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let msg = event_to_message(&event, self.input_mode())
                    .filter(|msg| self.config.mouse || !msg.is_mouse());
                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("event loop finished");
        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "tareas",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                self.state.view.display_name(),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}

/// Maps a click to a to-do list row.
///
/// The list is drawn inside a border and scrolled just far enough to keep
/// the selection on screen.
fn list_row_at(area: Rect, selected: Option<usize>, len: usize, x: u16, y: u16) -> Option<usize> {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if !inner.contains(ratatui::layout::Position { x, y }) {
        return None;
    }

    let height = usize::from(inner.height);
    let offset = selected.map_or(0, |s| (s + 1).saturating_sub(height));
    let index = offset + usize::from(y - inner.y);
    (index < len).then_some(index)
}

/// Describes a board event for the status line.
fn describe_event(event: &BoardEvent, board: &Board) -> Option<String> {
    let text_of = |id| board.get_task(id).map(|task| format!("\"{}\"", task.text));

    match *event {
        BoardEvent::TaskAdded { id } => Some(format!(
            "Added {} to Pending",
            text_of(id).unwrap_or_else(|| "task".to_string())
        )),
        BoardEvent::TaskMoved { id, to, .. } => Some(format!(
            "Moved {} to {}",
            text_of(id).unwrap_or_else(|| "task".to_string()),
            to.column.display_name()
        )),
        BoardEvent::EditCommitted { .. } => Some("Changes saved".to_string()),
        BoardEvent::EditCancelled { .. } => Some("Changes discarded".to_string()),
        BoardEvent::TaskDeleted { column, .. } => {
            Some(format!("Deleted task from {}", column.display_name()))
        }
        BoardEvent::DeleteCancelled { .. } => Some("Kept task".to_string()),
        BoardEvent::EditStarted { .. }
        | BoardEvent::EditUpdated { .. }
        | BoardEvent::DeleteRequested { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tareas_board::{IdGenerator, Position, Priority, demo::demo_controller};

    use super::*;

    fn app_with(texts: &[&str]) -> App {
        let mut controller =
            BoardController::with_board(Board::new(), IdGenerator::with_clock(|| 1_000));
        for text in texts {
            controller.add_task(text);
        }
        App::new(controller, TodoList::new())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(Message::Input { ch });
        }
    }

    fn pending_texts(app: &App) -> Vec<&str> {
        app.state
            .controller
            .board()
            .column(Status::Pending)
            .tasks
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn app_new_starts_on_board() {
        let app = app_with(&[]);

        assert!(!app.should_quit());
        assert_eq!(app.state.view, StartView::Board);
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = app_with(&[]);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let mut app = app_with(&["a"]);
        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::NavigateDown);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_task, None, "key only closed help");
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut app = app_with(&[]);
        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn new_task_prompt_adds_and_selects() {
        let mut app = app_with(&["first"]);

        app.update(Message::NewTask);
        assert_eq!(app.input_mode(), InputMode::Text);
        type_text(&mut app, "second");
        app.update(Message::Confirm);

        assert!(app.state.prompt.is_none());
        assert_eq!(pending_texts(&app), ["first", "second"]);
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::Pending, 1)));
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Added \"second\" to Pending")
        );
    }

    #[test]
    fn blank_prompt_adds_nothing() {
        let mut app = app_with(&[]);
        app.update(Message::NewTask);
        type_text(&mut app, "   ");
        app.update(Message::Confirm);

        assert!(app.state.prompt.is_none());
        assert_eq!(app.state.controller.board().total_tasks(), 0);
    }

    #[test]
    fn prompt_cancel_discards_text() {
        let mut app = app_with(&[]);
        app.update(Message::NewTask);
        type_text(&mut app, "nope");
        app.update(Message::Cancel);

        assert!(app.state.prompt.is_none());
        assert_eq!(app.state.controller.board().total_tasks(), 0);
    }

    #[test]
    fn edit_form_stages_and_commits() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::NavigateDown);
        app.update(Message::Select);
        assert!(app.state.controller.editing().is_some());
        assert_eq!(app.input_mode(), InputMode::Text);

        type_text(&mut app, "!");
        app.update(Message::NextField);
        app.update(Message::NavigateRight);
        app.update(Message::NextField);
        type_text(&mut app, "oat");

        // Nothing reaches the board before the commit.
        assert_eq!(pending_texts(&app), ["Buy milk"]);

        app.update(Message::Confirm);
        assert!(app.state.edit_form.is_none());
        let task = &app.state.controller.board().column(Status::Pending).tasks[0];
        assert_eq!(task.text, "Buy milk!");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.comment.as_deref(), Some("oat"));
        assert_eq!(app.state.status_message.as_deref(), Some("Changes saved"));
    }

    #[test]
    fn edit_cancel_leaves_task_untouched() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::NavigateDown);
        app.update(Message::Select);
        app.update(Message::Backspace);
        app.update(Message::Cancel);

        assert!(app.state.controller.editing().is_none());
        assert_eq!(pending_texts(&app), ["Buy milk"]);
    }

    #[test]
    fn edit_refuses_blank_text() {
        let mut app = app_with(&["ab"]);
        app.update(Message::NavigateDown);
        app.update(Message::Select);
        app.update(Message::Backspace);
        app.update(Message::Backspace);
        app.update(Message::Confirm);

        assert!(app.state.edit_form.is_some(), "form stays open");
        assert_eq!(pending_texts(&app), ["ab"]);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app_with(&["keep", "drop"]);
        app.update(Message::NavigateUp);
        assert_eq!(app.state.selected_task, Some(0));
        app.update(Message::NavigateUp);
        app.update(Message::Delete);
        assert_eq!(app.input_mode(), InputMode::Confirm);

        app.update(Message::Cancel);
        assert_eq!(pending_texts(&app), ["keep", "drop"]);

        app.update(Message::Delete);
        app.update(Message::Confirm);
        assert_eq!(pending_texts(&app), ["keep"]);
        assert_eq!(app.state.selected_task, Some(0), "selection clamped");
    }

    #[test]
    fn keyboard_move_across_columns() {
        let mut app = app_with(&["a", "b"]);
        app.update(Message::NavigateDown);
        app.update(Message::Grab);
        assert!(app.keyboard_drag.is_dragging());

        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_column, Status::InProgress);
        app.update(Message::Select);

        assert!(!app.keyboard_drag.is_dragging());
        assert_eq!(pending_texts(&app), ["b"]);
        let in_progress = &app.state.controller.board().column(Status::InProgress).tasks;
        assert_eq!(in_progress[0].text, "a");
        assert_eq!(in_progress[0].status, Status::InProgress);
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::InProgress, 0)));
    }

    #[test]
    fn keyboard_move_cancel_restores_selection() {
        let mut app = app_with(&["a", "b"]);
        app.update(Message::NavigateDown);
        app.update(Message::Grab);
        app.update(Message::NavigateRight);
        app.update(Message::Escape);

        assert!(!app.keyboard_drag.is_dragging());
        assert_eq!(pending_texts(&app), ["a", "b"]);
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::Pending, 0)));
    }

    #[test]
    fn mouse_drag_moves_card() {
        let mut app = app_with(&["a", "b"]);
        // 90 wide: columns of 30; header takes rows 0-2, column border row 3
        app.last_area = Rect::new(0, 0, 90, 24);

        app.update(Message::MouseDown { column: 5, row: 5 });
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::Pending, 0)));

        app.update(Message::MouseUp { column: 65, row: 10 });
        assert_eq!(pending_texts(&app), ["b"]);
        let processed = &app.state.controller.board().column(Status::Processed).tasks;
        assert_eq!(processed[0].text, "a");
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::Processed, 0)));
    }

    #[test]
    fn mouse_release_outside_board_changes_nothing() {
        let mut app = app_with(&["a"]);
        app.last_area = Rect::new(0, 0, 90, 24);

        app.update(Message::MouseDown { column: 5, row: 5 });
        // The status line sits below the board.
        app.update(Message::MouseUp { column: 5, row: 23 });
        assert_eq!(pending_texts(&app), ["a"]);
    }

    #[test]
    fn opening_edit_mid_press_releases_the_card() {
        let mut app = app_with(&["a", "b"]);
        app.last_area = Rect::new(0, 0, 90, 24);

        app.update(Message::MouseDown { column: 5, row: 5 });
        assert!(app.mouse_drag.source().is_some());

        app.update(Message::Select);
        assert!(app.state.edit_form.is_some());
        assert_eq!(app.mouse_drag.source(), None);

        app.update(Message::Cancel);
        app.update(Message::MouseUp { column: 65, row: 10 });
        assert_eq!(pending_texts(&app), ["a", "b"]);
        assert!(!render(&mut app, 90, 24).contains('»'));
    }

    #[test]
    fn switching_view_mid_press_releases_the_card() {
        let mut app = app_with(&["a"]);
        app.last_area = Rect::new(0, 0, 90, 24);

        app.update(Message::MouseDown { column: 5, row: 5 });
        app.update(Message::SwitchView);
        app.update(Message::MouseUp { column: 5, row: 5 });
        assert_eq!(app.mouse_drag.source(), None);

        app.update(Message::SwitchView);
        assert!(!render(&mut app, 90, 24).contains('»'));
    }

    #[test]
    fn mouse_works_in_compact_mode() {
        let mut app = app_with(&["a"]);
        app.last_area = Rect::new(0, 0, 90, 11);
        app.header_visible = false;

        app.update(Message::MouseDown { column: 5, row: 2 });
        assert_eq!(app.state.selected_position(), Some(Position::new(Status::Pending, 0)));
    }

    #[test]
    fn list_view_add_toggle_delete() {
        let mut app = app_with(&[]);
        app.update(Message::SwitchView);
        assert_eq!(app.state.view, StartView::List);

        app.update(Message::NewTask);
        type_text(&mut app, "Water plants");
        app.update(Message::Confirm);
        assert_eq!(app.state.todos.len(), 1);
        assert_eq!(app.state.selected_item, Some(0));
        assert_eq!(app.state.controller.board().total_tasks(), 0);

        app.update(Message::Toggle);
        assert_eq!(app.state.todos.remaining(), 0);
        assert_eq!(app.state.status_message.as_deref(), Some("Marked done"));

        app.update(Message::Delete);
        assert!(app.state.todos.is_empty());
        assert_eq!(app.state.selected_item, None);
    }

    #[test]
    fn list_click_selects_row() {
        let mut todos = TodoList::new();
        todos.add("one");
        todos.add("two");
        let mut config = Config::default();
        config.view = StartView::List;
        let mut app = App::with_config(BoardController::new(), todos, config);
        app.last_area = Rect::new(0, 0, 80, 24);

        // Header rows 0-2, list border row 3, first item row 4.
        app.update(Message::MouseDown { column: 10, row: 5 });
        assert_eq!(app.state.selected_item, Some(1));
    }

    #[test]
    fn list_row_mapping_follows_scroll() {
        let area = Rect::new(0, 0, 40, 5);
        // Three visible rows; selecting item 5 scrolls by 3.
        assert_eq!(list_row_at(area, Some(5), 10, 2, 1), Some(3));
        assert_eq!(list_row_at(area, None, 10, 2, 1), Some(0));
        assert_eq!(list_row_at(area, None, 1, 2, 2), None);
        assert_eq!(list_row_at(area, None, 10, 2, 0), None);
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let mut app = app_with(&[]);

        let content = render(&mut app, 80, 8);
        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));

        let content = render(&mut app, 30, 24);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = app_with(&[]);

        let content = render(&mut app, 80, 11);
        assert!(!app.header_visible);
        assert!(content.contains("Pending"));
    }

    #[test]
    fn app_view_shows_header_and_status_line() {
        let mut app = App::new(demo_controller(), TodoList::new());

        let content = render(&mut app, 90, 24);
        assert!(app.header_visible);
        assert!(content.contains("tareas - Board"));
        assert!(content.contains("Buy groceries"));
        assert!(content.contains("Enter Edit"));
    }

    #[test]
    fn app_view_renders_overlays() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::NavigateDown);
        app.update(Message::Delete);

        let content = render(&mut app, 90, 24);
        assert!(content.contains("Delete \"Buy milk\" from Pending?"));

        app.update(Message::Cancel);
        app.update(Message::Select);
        let content = render(&mut app, 90, 24);
        assert!(content.contains("Edit task"));
    }

    #[test]
    fn app_view_renders_list() {
        let mut app = app_with(&[]);
        app.update(Message::SwitchView);

        let content = render(&mut app, 80, 24);
        assert!(content.contains("tareas - To-do"));
        assert!(content.contains("Nothing to do"));
    }

    #[test]
    fn describe_event_names_the_task() {
        let mut board = Board::new();
        board.push(tareas_board::Task::new(tareas_board::TaskId::from_raw(3), "Pay rent"));
        let id = tareas_board::TaskId::from_raw(3);

        let moved = BoardEvent::TaskMoved {
            id,
            from: Position::new(Status::Pending, 0),
            to: Position::new(Status::Processed, 0),
        };
        assert_eq!(
            describe_event(&moved, &board).as_deref(),
            Some("Moved \"Pay rent\" to Processed")
        );
        assert_eq!(describe_event(&BoardEvent::EditStarted { id }, &board), None);
    }
}
