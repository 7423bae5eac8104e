//! Simple interactive CLI mode
//!
//! Text menu over the dictionary without the TUI: insert, look up, exit.

use super::dictionary::{AddOutcome, Dictionary};
use crate::core::Word;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input or writing to the terminal fails.
pub fn run_simple(dictionary: &mut Dictionary) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(dictionary, stdin.lock(), stdout.lock())
}

/// Menu loop over any input/output pair; ends on "exit" or end of input
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_menu<R: BufRead, W: Write>(
    dictionary: &mut Dictionary,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                Word Dictionary - Interactive Mode            ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "{} words loaded from {}\n",
        dictionary.words().len(),
        dictionary.store().path().display()
    )?;

    if let Some(err) = dictionary.load_error() {
        writeln!(output, "{} {err}\n", "⚠".yellow())?;
    }

    loop {
        writeln!(output, "  1. Insert a word")?;
        writeln!(output, "  2. Look up a word")?;
        writeln!(output, "  3. Exit\n")?;

        let Some(choice) = prompt(&mut input, &mut output, "Choice")? else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "1" | "i" | "insert" => {
                let Some(text) = prompt(&mut input, &mut output, "Word to insert")? else {
                    break;
                };
                report_insert(dictionary, &text, &mut output)?;
            }
            "2" | "s" | "search" | "lookup" => {
                let Some(text) = prompt(&mut input, &mut output, "Word to look up")? else {
                    break;
                };
                report_lookup(dictionary, &text, &mut output)?;
            }
            "3" | "q" | "quit" | "exit" => break,
            _ => writeln!(output, "{} Invalid choice! Enter 1, 2 or 3.\n", "❌".red())?,
        }
    }

    writeln!(output, "\n👋 Goodbye!\n")?;
    Ok(())
}

fn report_insert<W: Write>(dictionary: &mut Dictionary, text: &str, output: &mut W) -> Result<()> {
    let word = match Word::new(text) {
        Ok(word) => word,
        Err(err) => {
            writeln!(output, "{} {err}\n", "❌".red())?;
            return Ok(());
        }
    };

    match dictionary.add(&word) {
        AddOutcome::Added => {
            writeln!(output, "{} Added '{}'\n", "✓".green(), word.text().bold())?;
        }
        AddOutcome::AddedNotPersisted(err) => {
            writeln!(
                output,
                "{} Added '{}' for this session only: {err}\n",
                "⚠".yellow(),
                word.text().bold()
            )?;
        }
        AddOutcome::AlreadyPresent => {
            writeln!(
                output,
                "'{}' is already in the dictionary\n",
                word.text().bold()
            )?;
        }
    }
    Ok(())
}

fn report_lookup<W: Write>(dictionary: &Dictionary, text: &str, output: &mut W) -> Result<()> {
    let query = text.trim();
    match dictionary.lookup(query) {
        Some(stored) if stored == query => {
            writeln!(output, "{} '{}' found\n", "✓".green(), query.bold())?;
        }
        Some(stored) => {
            writeln!(
                output,
                "{} '{}' found (stored as '{stored}')\n",
                "✓".green(),
                query.bold()
            )?;
        }
        None => writeln!(output, "{} '{}' not found\n", "✗".red(), query.bold())?,
    }
    Ok(())
}

/// Read one trimmed line after printing a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use std::fs;

    fn run_script(dictionary: &mut Dictionary, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        run_menu(dictionary, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn insert_then_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        let mut dictionary = Dictionary::open(WordStore::new(&path));

        let output = run_script(&mut dictionary, "1\nApple\n2\napple\n2\npear\n3\n");

        assert!(output.contains("Added 'Apple'"));
        assert!(output.contains("'apple' found (stored as 'Apple')"));
        assert!(output.contains("'pear' not found"));
        assert!(output.contains("Goodbye"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Apple\n");
    }

    #[test]
    fn duplicate_and_invalid_inserts() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = Dictionary::open(WordStore::new(dir.path().join("Dictionary.txt")));

        let output = run_script(&mut dictionary, "i\nfig\ni\nFIG\ni\n   \n9\nq\n");

        assert!(output.contains("'FIG' is already in the dictionary"));
        assert!(output.contains("Word must not be empty"));
        assert!(output.contains("Invalid choice"));
        assert_eq!(dictionary.words().len(), 1);
    }

    #[test]
    fn end_of_input_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = Dictionary::open(WordStore::new(dir.path().join("Dictionary.txt")));

        let output = run_script(&mut dictionary, "1\n");
        assert!(output.contains("Goodbye"));
        assert!(dictionary.words().is_empty());
    }

    #[test]
    fn reports_missing_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = Dictionary::open(WordStore::new(dir.path().join("absent.txt")));

        let output = run_script(&mut dictionary, "3\n");
        assert!(output.contains("0 words loaded"));
        assert!(output.contains("cannot read word list"));
    }
}
