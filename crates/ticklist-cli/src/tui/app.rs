//! Application state and main event loop.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tracing::{debug, info};

use ticklist_core::{Config, Filter, Storage, TodoId, TodoItem, TodoStore};

use super::event::{Event, EventHandler};
use super::ui;

/// Input mode for the application.
///
/// `Editing` holds the id of the item whose text is bound to the keyboard.
/// At most one item is edited at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the new-item input
    Adding,
    /// Editing an item's text in place
    Editing(TodoId),
}

/// Main application state.
///
/// Everything durable lives in the store; the fields here are screen state
/// that is thrown away on exit.
pub struct App<S: Storage> {
    /// The to-do store
    pub store: TodoStore<S>,
    /// Configuration
    pub config: Config,
    /// Current input mode
    pub input_mode: InputMode,
    /// New-item text being typed
    pub input_buffer: String,
    /// Index of the highlighted row among the visible items
    pub selected: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl<S: Storage> App<S> {
    /// Create a new app instance.
    pub fn new(config: Config, store: TodoStore<S>) -> Self {
        let mut app = Self {
            store,
            config,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            selected: 0,
            status_message: None,
            should_quit: false,
        };

        if app.store.items().is_empty() {
            app.status_message = Some("Nothing to do yet. Press [a] to add an item.".to_string());
        }

        app
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> color_eyre::Result<()> {
        let mut events = EventHandler::new(Duration::from_millis(self.config.ui.tick_rate_ms));
        info!(items = self.store.items().len(), "TUI started");

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Tick) | Some(Event::Resize) => {}
                None => break,
            }

            if self.should_quit {
                break;
            }
        }

        info!("TUI stopped");
        Ok(())
    }

    /// Items currently shown, in list order.
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.store.visible_items()
    }

    /// Id of the highlighted row, if the list is not empty.
    pub fn selected_id(&self) -> Option<TodoId> {
        self.visible_items().get(self.selected).map(|item| item.id)
    }

    /// Id of the item being edited, if any.
    pub fn editing_id(&self) -> Option<TodoId> {
        match self.input_mode {
            InputMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Adding => self.handle_adding_mode_key(key),
            InputMode::Editing(id) => self.handle_editing_mode_key(id, key),
        }
        self.clamp_selection();
        self.report_persist_error();
    }

    /// Handle key in normal mode.
    fn handle_normal_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('i') | KeyCode::Char('a') => {
                self.input_mode = InputMode::Adding;
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle_complete(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.store.delete_todo(id);
                    self.status_message = Some("Item deleted".to_string());
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    debug!(id = %id, "Editing item");
                    self.input_mode = InputMode::Editing(id);
                }
            }
            KeyCode::Char('A') => self.store.toggle_all(),
            KeyCode::Char('c') => {
                let removed = self.store.clear_completed();
                self.status_message = Some(format!("Cleared {} completed", removed));
            }
            KeyCode::Char('1') => self.store.set_filter(Filter::All),
            KeyCode::Char('2') => self.store.set_filter(Filter::Active),
            KeyCode::Char('3') => self.store.set_filter(Filter::Completed),
            KeyCode::Tab | KeyCode::Right => {
                let next = self.store.filter().next();
                self.store.set_filter(next);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let previous = self.store.filter().previous();
                self.store.set_filter(previous);
            }
            _ => {}
        }
    }

    /// Handle key while typing a new item.
    fn handle_adding_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }

    /// Handle key while editing an item. Every change is written through.
    fn handle_editing_mode_key(&mut self, id: TodoId, key: KeyEvent) {
        let Some(mut text) = self.store.get(id).map(|item| item.text.clone()) else {
            self.input_mode = InputMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                text.push(c);
                self.store.edit_todo(id, text);
            }
            KeyCode::Backspace => {
                if text.pop().is_some() {
                    self.store.edit_todo(id, text);
                }
            }
            _ => {}
        }
    }

    /// Submit the new-item input. The text is kept when the store refuses it.
    fn submit_input(&mut self) {
        match self.store.add_todo(&self.input_buffer) {
            Ok(_) => {
                self.input_buffer.clear();
                self.status_message = None;
                // Keep the new item in view
                let last = self.visible_items().len().saturating_sub(1);
                self.selected = last;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn select_next(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the highlight on a visible row.
    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Show the last save failure, and drop that notice once a save succeeds.
    fn report_persist_error(&mut self) {
        match self.store.last_persist_error() {
            Some(error) => {
                self.status_message = Some(format!("{}{}", NOT_SAVED_PREFIX, error));
            }
            None => {
                let showing_error = self
                    .status_message
                    .as_deref()
                    .is_some_and(|message| message.starts_with(NOT_SAVED_PREFIX));
                if showing_error {
                    self.status_message = None;
                }
            }
        }
    }
}

/// Status line prefix for a failed save.
const NOT_SAVED_PREFIX: &str = "Not saved: ";

/// True for keys that type a character. Control and Alt chords are commands.
fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
