//! Text entry state for prompts and the edit form.
//!
//! The cursor is a byte offset into the value and always sits on a
//! character boundary.

use tareas_board::{Priority, Task};

/// A single-line text input with a cursor.
///
/// # Examples
///
/// ```
/// use tareas_tui::input::TextInput;
///
/// let mut input = TextInput::with_value("héllo");
/// input.backspace();
/// input.insert_char('!');
/// assert_eq!(input.value(), "héll!");
///
/// input.move_left();
/// input.move_left();
/// input.backspace();
/// assert_eq!(input.value(), "hél!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in bytes.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the value is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Returns the text before the cursor, the character under it (if
    /// any), and the text after that character.
    #[must_use]
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let (before, rest) = self.value.split_at(self.cursor);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Consumes the input, returning its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}

/// What a prompt creates once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    /// A task in the pending column.
    Task,
    /// An item of the to-do list.
    TodoItem,
}

impl PromptTarget {
    /// Returns the prompt title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Task => " New task ",
            Self::TodoItem => " New to-do ",
        }
    }
}

/// The one-line prompt used to create tasks and to-do items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What gets created on submit.
    pub target: PromptTarget,
    /// The text typed so far.
    pub input: TextInput,
}

impl Prompt {
    /// Opens an empty prompt.
    #[must_use]
    pub fn new(target: PromptTarget) -> Self {
        Self {
            target,
            input: TextInput::new(),
        }
    }
}

/// Fields of the edit form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The task text.
    #[default]
    Text,
    /// The priority selector.
    Priority,
    /// The optional comment.
    Comment,
}

impl FormField {
    /// Returns all fields in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Text, Self::Priority, Self::Comment]
    }

    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Text => Self::Priority,
            Self::Priority => Self::Comment,
            Self::Comment => Self::Text,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Text => Self::Comment,
            Self::Priority => Self::Text,
            Self::Comment => Self::Priority,
        }
    }

    /// Returns the label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Priority => "Priority",
            Self::Comment => "Comment",
        }
    }
}

/// Cursor and focus state of the edit form.
///
/// The working copy itself lives in the board controller; this only keeps
/// what the controller has no use for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// The focused field.
    pub focus: FormField,
    /// Text field input.
    pub text: TextInput,
    /// Comment field input.
    pub comment: TextInput,
    /// Priority shown in the selector.
    pub priority: Priority,
}

impl EditForm {
    /// Opens the form on a task, focusing the text field.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            focus: FormField::Text,
            text: TextInput::with_value(task.text.clone()),
            comment: TextInput::with_value(task.comment.clone().unwrap_or_default()),
            priority: task.priority,
        }
    }

    /// Returns the focused text input, if the focus is on a text field.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Text => Some(&mut self.text),
            FormField::Comment => Some(&mut self.comment),
            FormField::Priority => None,
        }
    }
}
