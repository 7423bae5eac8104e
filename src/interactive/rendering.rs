//! TUI rendering with ratatui
//!
//! Panels for the dictionary tree, the sorted neighbourhood of the last word and the
//! message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::keys_equal;
use crate::output::formatters::color_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_tree_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌳 WORD TREE - Red-Black Dictionary")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tree_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Tree shape
            Constraint::Length(3), // Height gauge
            Constraint::Min(5),    // Word window
        ])
        .split(area);

    render_shape(f, app, chunks[0]);
    render_height_gauge(f, app, chunks[1]);
    render_window(f, app, chunks[2]);
}

fn render_shape(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let (status, status_color) = match &stats.violation {
        None => ("all invariants hold".to_string(), Color::Green),
        Some(violation) => (violation.to_string(), Color::Red),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Words:        "),
            Span::styled(
                stats.size.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Height:       {}", stats.height)),
        Line::from(format!("Black height: {}", stats.black_height)),
        Line::from(format!("Root color:   {}", color_label(stats.root_color))),
        Line::from(vec![
            Span::raw("Status:       "),
            Span::styled(status, Style::default().fg(status_color)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Tree ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_height_gauge(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let ratio = if stats.height_bound > 0.0 {
        (stats.height as f64 / stats.height_bound).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Height vs 2·log2(n+1) ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} / {:.2}", stats.height, stats.height_bound));

    f.render_widget(gauge, area);
}

fn render_window(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.window.is_empty() {
        vec![ListItem::new("(empty dictionary)").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.window
            .iter()
            .map(|word| {
                let focused = app
                    .focus
                    .as_deref()
                    .is_some_and(|focus| keys_equal(word, focus));
                let style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let marker = if focused { "▶ " } else { "  " };
                ListItem::new(format!("{marker}{word}")).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Words (in order) ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    render_session(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_session(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let content = vec![
        Line::from(format!("Inserted:   {}", session.inserted)),
        Line::from(format!("Duplicates: {}", session.duplicates)),
        Line::from(format!(
            "Lookups:    {} ({} found)",
            session.lookups, session.hits
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Insert => (" Insert word | TAB to search ", Color::Yellow),
        InputMode::Search => (" Look up word | TAB to insert ", Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mode = match app.input_mode {
        InputMode::Insert => "Mode: Insert",
        InputMode::Search => "Mode: Search",
    };
    let text = format!(
        "{mode} | {} | Enter: Submit | TAB: Switch | Esc: Quit",
        app.dictionary.store().path().display()
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Dictionary;
    use crate::wordlists::WordStore;
    use ratatui::{Terminal, backend::TestBackend};
    use std::fs;

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_tree_and_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        fs::write(&path, "banana\nApple\ncherry\n").unwrap();
        let app = App::new(Dictionary::open(WordStore::new(path)));

        let text = rendered_text(&app);

        assert!(text.contains("Black height: 1"));
        assert!(text.contains("all invariants hold"));
        assert!(text.contains("Apple"));
        assert!(text.contains("cherry"));
        assert!(text.contains("Mode: Insert"));
    }
}
