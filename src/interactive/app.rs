//! TUI application state and logic

use crate::commands::{AddOutcome, Dictionary, TreeStats};
use crate::core::{Word, compare_keys};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cmp::Ordering;
use std::io;

/// Words shown in the neighbourhood panel
const WINDOW_SIZE: usize = 12;

/// Application state
pub struct App {
    pub dictionary: Dictionary,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: TreeStats,
    pub session: SessionStats,
    /// Sorted words around the last word touched
    pub window: Vec<String>,
    /// Stored spelling of the last word inserted or found
    pub focus: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Insert,
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Insert => Self::Search,
            Self::Search => Self::Insert,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub lookups: usize,
    pub hits: usize,
}

impl App {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let stats = TreeStats::collect(dictionary.words());
        let mut app = Self {
            dictionary,
            input_mode: InputMode::Insert,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            session: SessionStats::default(),
            window: Vec::new(),
            focus: None,
            should_quit: false,
        };

        app.add_message(
            &format!(
                "Loaded {} words from {}",
                app.stats.size,
                app.dictionary.store().path().display()
            ),
            MessageStyle::Info,
        );
        if let Some(err) = app.dictionary.load_error() {
            let text = format!("Starting empty: {err}");
            app.add_message(&text, MessageStyle::Error);
        }
        app.add_message(
            "Type a word and press Enter. TAB switches between insert and search.",
            MessageStyle::Info,
        );
        app.refresh_window();
        app
    }

    pub fn toggle_mode(&mut self) {
        self.input_mode = self.input_mode.toggled();
        self.input_buffer.clear();
    }

    /// Submit the input buffer in the current mode
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Insert => self.handle_insert(&input),
            InputMode::Search => self.handle_search(&input),
        }
    }

    pub fn handle_insert(&mut self, input: &str) {
        let word = match Word::new(input) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.dictionary.add(&word) {
            AddOutcome::Added => {
                self.session.inserted += 1;
                self.add_message(&format!("Added '{word}'"), MessageStyle::Success);
            }
            AddOutcome::AddedNotPersisted(err) => {
                self.session.inserted += 1;
                self.add_message(
                    &format!("Added '{word}' for this session only: {err}"),
                    MessageStyle::Error,
                );
            }
            AddOutcome::AlreadyPresent => {
                self.session.duplicates += 1;
                self.add_message(
                    &format!("'{word}' is already in the dictionary"),
                    MessageStyle::Info,
                );
            }
        }

        self.stats = TreeStats::collect(self.dictionary.words());
        self.focus = self.dictionary.lookup(word.text()).map(str::to_string);
        self.refresh_window();
    }

    pub fn handle_search(&mut self, input: &str) {
        let query = input.trim();
        if query.is_empty() {
            self.add_message("Enter a word to look up", MessageStyle::Error);
            return;
        }

        self.session.lookups += 1;
        if let Some(stored) = self.dictionary.lookup(query).map(str::to_string) {
            self.session.hits += 1;
            self.add_message(&format!("Found '{stored}'"), MessageStyle::Success);
            self.focus = Some(stored);
        } else {
            self.add_message(&format!("'{query}' not found"), MessageStyle::Error);
            // Show where it would go
            self.focus = Some(query.to_string());
        }
        self.refresh_window();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Recompute the sorted window centred on the focus word
    fn refresh_window(&mut self) {
        let words = self.dictionary.words();
        let position = self.focus.as_deref().map_or(0, |focus| {
            words
                .iter()
                .take_while(|word| compare_keys(word, focus) == Ordering::Less)
                .count()
        });

        let start = position
            .saturating_sub(WINDOW_SIZE / 2)
            .min(words.len().saturating_sub(WINDOW_SIZE));
        self.window = words
            .iter()
            .skip(start)
            .take(WINDOW_SIZE)
            .map(str::to_string)
            .collect();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => app.toggle_mode(),
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
