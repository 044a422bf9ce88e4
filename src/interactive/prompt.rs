//! Input sources for the interactive shell

use super::{MenuChoice, Selection};
use crate::error::{CinemaError, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads menu selections, free-text answers and ids
pub trait Prompter {
    /// Ask which menu entry to run
    fn select_action(&mut self) -> Result<Selection>;

    /// Ask for one line of text. `None` means the input was closed.
    fn read_text(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask for an entity id. Text that is not a valid id is an
    /// [`CinemaError::InvalidInput`] naming the kind of id.
    fn read_id<T>(&mut self, prompt: &str) -> Result<Option<T>>
    where
        T: FromStr<Err = CinemaError>,
    {
        match self.read_text(prompt)? {
            Some(text) => text.parse().map(Some),
            None => Ok(None),
        }
    }
}

/// Arrow-key menu and inline editing on a real terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select_action(&mut self) -> Result<Selection> {
        let items: Vec<String> = MenuChoice::ALL.iter().map(MenuChoice::menu_line).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Choose an action")
            .items(&items)
            .default(0)
            .interact_opt()?;

        // Esc or q closes the menu
        Ok(selection.map_or(Selection::Closed, |index| {
            Selection::Choice(MenuChoice::ALL[index])
        }))
    }

    fn read_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value.trim().to_string()))
    }
}

/// Numbered menu over any line-based reader and writer.
///
/// Used for piped stdin, `--plain`, and tests.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Next input line, trimmed. Bytes that are not UTF-8 become U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select_action(&mut self) -> Result<Selection> {
        writeln!(self.writer, "Choose an action:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.writer, "{}", choice.menu_line())?;
        }
        self.writer.flush()?;

        Ok(match self.read_line()? {
            None => Selection::Closed,
            Some(text) => MenuChoice::parse(&text)
                .map_or(Selection::Invalid(text), Selection::Choice),
        })
    }

    fn read_text(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.writer, "{prompt}:")?;
        self.writer.flush()?;
        self.read_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UserId;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        prompter_from_bytes(input.as_bytes())
    }

    fn prompter_from_bytes(input: &[u8]) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_select_action_parses_numbers() {
        let mut prompter = prompter("1\n 4 \nabc\n\n");

        assert_eq!(
            prompter.select_action().unwrap(),
            Selection::Choice(MenuChoice::AddMovie)
        );
        assert_eq!(
            prompter.select_action().unwrap(),
            Selection::Choice(MenuChoice::BuyTicket)
        );
        assert_eq!(
            prompter.select_action().unwrap(),
            Selection::Invalid("abc".to_string())
        );
        assert_eq!(
            prompter.select_action().unwrap(),
            Selection::Invalid(String::new())
        );
        assert_eq!(prompter.select_action().unwrap(), Selection::Closed);
    }

    #[test]
    fn test_select_action_prints_menu() {
        let mut prompter = prompter("6\n");
        prompter.select_action().unwrap();

        let printed = String::from_utf8(prompter.writer).unwrap();
        assert!(printed.contains("1. Add a new movie"));
        assert!(printed.contains("6. Exit"));
        assert!(printed.contains("8. Show all tickets"));
    }

    #[test]
    fn test_read_text_keeps_spaces_inside_names() {
        let mut prompter = prompter("  The Grand Budapest Hotel \n");

        assert_eq!(
            prompter.read_text("Movie name").unwrap(),
            Some("The Grand Budapest Hotel".to_string())
        );
        assert_eq!(prompter.read_text("Movie name").unwrap(), None);
    }

    #[test]
    fn test_non_utf8_selection_is_invalid() {
        let mut prompter = prompter_from_bytes(&[0xff, 0xfe, b'\n', b'3', b'\n']);

        assert!(matches!(
            prompter.select_action().unwrap(),
            Selection::Invalid(text) if text.contains('\u{FFFD}')
        ));
        assert_eq!(
            prompter.select_action().unwrap(),
            Selection::Choice(MenuChoice::AddUser)
        );
    }

    #[test]
    fn test_read_id() {
        let mut prompter = prompter("7\nabc\n");

        let id: Option<UserId> = prompter.read_id("User ID").unwrap();
        assert_eq!(id, Some(UserId::new(7)));

        let err = prompter.read_id::<UserId>("User ID").unwrap_err();
        assert_eq!(err.user_message(), "Invalid user ID: abc");

        assert_eq!(prompter.read_id::<UserId>("User ID").unwrap(), None);
    }
}
