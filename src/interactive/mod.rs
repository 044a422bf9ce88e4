//! Interactive menu for cinema-ticket
//!
//! Runs the numbered menu loop: read a selection, gather the arguments the
//! chosen action needs, execute it against the store and print the result.

mod prompt;

pub use prompt::{LinePrompter, Prompter, TerminalPrompter};

use crate::cli::handlers::{Request, execute, render, render_error};
use crate::cli::output::OutputFormatter;
use crate::error::{CinemaError, Result};
use crate::store::TicketingStore;
use tracing::debug;

/// Printed above the menu on every iteration
pub const BANNER: &str = "Welcome to the cinema ticket management system!";

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMovie,
    ShowMovies,
    AddUser,
    BuyTicket,
    CancelTicket,
    Exit,
    ShowUsers,
    ShowTickets,
}

impl MenuChoice {
    pub const ALL: [Self; 8] = [
        Self::AddMovie,
        Self::ShowMovies,
        Self::AddUser,
        Self::BuyTicket,
        Self::CancelTicket,
        Self::Exit,
        Self::ShowUsers,
        Self::ShowTickets,
    ];

    /// Number typed to select this entry
    pub const fn number(self) -> u8 {
        match self {
            Self::AddMovie => 1,
            Self::ShowMovies => 2,
            Self::AddUser => 3,
            Self::BuyTicket => 4,
            Self::CancelTicket => 5,
            Self::Exit => 6,
            Self::ShowUsers => 7,
            Self::ShowTickets => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AddMovie => "Add a new movie",
            Self::ShowMovies => "Show all movies",
            Self::AddUser => "Add a new user",
            Self::BuyTicket => "Buy a ticket",
            Self::CancelTicket => "Cancel a ticket",
            Self::Exit => "Exit",
            Self::ShowUsers => "Show all users",
            Self::ShowTickets => "Show all tickets",
        }
    }

    /// `"<number>. <label>"`
    pub fn menu_line(&self) -> String {
        format!("{}. {}", self.number(), self.label())
    }

    /// Map typed text to an entry; anything but a listed number is `None`
    pub fn parse(text: &str) -> Option<Self> {
        let number = text.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

/// What the user picked at the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Choice(MenuChoice),
    /// Text that matches no menu entry
    Invalid(String),
    /// The input was closed
    Closed,
}

/// The menu loop, bound to one store for its whole run
pub struct CinemaShell<'a, P> {
    store: &'a mut TicketingStore,
    prompter: P,
    output: &'a OutputFormatter,
    show_banner: bool,
}

impl<'a, P: Prompter> CinemaShell<'a, P> {
    pub fn new(store: &'a mut TicketingStore, prompter: P, output: &'a OutputFormatter) -> Self {
        Self {
            store,
            prompter,
            output,
            show_banner: true,
        }
    }

    #[must_use]
    pub fn show_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Run until Exit is chosen or the input is closed
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.show_banner && !self.output.is_json() {
                self.output.info("");
                self.output.heading(BANNER);
            }

            let choice = match self.prompter.select_action()? {
                Selection::Choice(MenuChoice::Exit) | Selection::Closed => break,
                Selection::Choice(choice) => choice,
                Selection::Invalid(text) => {
                    debug!(input = %text, "Unrecognised menu selection");
                    render_error(&CinemaError::invalid_input("Invalid choice"), self.output)?;
                    continue;
                },
            };

            debug!(?choice, "Menu selection");

            let request = match self.request_for(choice) {
                Ok(Some(request)) => request,
                Ok(None) => break,
                Err(e) if e.is_recoverable() => {
                    render_error(&e, self.output)?;
                    continue;
                },
                Err(e) => return Err(e),
            };

            match execute(self.store, request) {
                Ok(outcome) => render(&outcome, self.output)?,
                Err(e) if e.is_recoverable() => render_error(&e, self.output)?,
                Err(e) => return Err(e),
            }
        }

        if !self.output.is_json() {
            self.output.info("Goodbye.");
        }
        Ok(())
    }

    /// Gather the arguments for `choice`. `Ok(None)` ends the session: the
    /// input closed while prompting, or `choice` was Exit.
    fn request_for(&mut self, choice: MenuChoice) -> Result<Option<Request>> {
        let request = match choice {
            MenuChoice::AddMovie => {
                let Some(name) = self.prompter.read_text("Movie name")? else {
                    return Ok(None);
                };
                Request::AddMovie { name }
            },
            MenuChoice::ShowMovies => Request::ListMovies,
            MenuChoice::AddUser => {
                let Some(name) = self.prompter.read_text("User name")? else {
                    return Ok(None);
                };
                Request::AddUser { name }
            },
            MenuChoice::BuyTicket => {
                let Some(user_id) = self.prompter.read_id("User ID")? else {
                    return Ok(None);
                };
                let Some(movie_id) = self.prompter.read_id("Movie ID")? else {
                    return Ok(None);
                };
                Request::BuyTicket { user_id, movie_id }
            },
            MenuChoice::CancelTicket => {
                let Some(ticket_id) = self.prompter.read_id("Ticket ID to cancel")? else {
                    return Ok(None);
                };
                Request::CancelTicket { ticket_id }
            },
            MenuChoice::ShowUsers => Request::ListUsers,
            MenuChoice::ShowTickets => Request::ListTickets,
            MenuChoice::Exit => return Ok(None),
        };

        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MovieId, TicketId, UserId};
    use crate::test_utils::ticket_ids;
    use std::io::Cursor;

    fn run_script(store: &mut TicketingStore, script: &str) {
        run_bytes(store, script.as_bytes());
    }

    fn run_bytes(store: &mut TicketingStore, input: &[u8]) {
        let output = OutputFormatter::new(false, true);
        let prompter = LinePrompter::new(Cursor::new(input.to_vec()), Vec::new());
        CinemaShell::new(store, prompter, &output)
            .show_banner(false)
            .run()
            .expect("Shell run failed");
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_original_menu_numbering() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddMovie));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::CancelTicket));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_shell_scenario() {
        let mut store = TicketingStore::new();
        run_script(
            &mut store,
            "1\nDune\n1\nArrival\n3\nAlice\n4\n1\n1\n4\n1\n99\n5\n1\n5\n1\n6\n",
        );

        assert_eq!(store.list_movies().len(), 2);
        assert_eq!(store.list_users().len(), 1);
        // Ticket 1 was bought then cancelled, the bad purchase created nothing
        assert!(store.list_tickets().is_empty());
    }

    #[test]
    fn test_shell_stops_at_exit() {
        let mut store = TicketingStore::new();
        run_script(&mut store, "1\nDune\n6\n1\nIgnored\n");

        assert_eq!(store.list_movies().len(), 1);
    }

    #[test]
    fn test_shell_stops_at_end_of_input() {
        let mut store = TicketingStore::new();
        run_script(&mut store, "3\nAlice\n");

        assert_eq!(store.list_users().len(), 1);
    }

    #[test]
    fn test_input_closed_mid_purchase() {
        let mut store = crate::test_utils::store_with_catalog();
        run_script(&mut store, "4\n1\n");

        assert!(store.list_tickets().is_empty());
    }

    #[test]
    fn test_invalid_selection_is_a_no_op() {
        let mut store = TicketingStore::new();
        run_script(&mut store, "42\nhello\n\n2\n6\n");

        assert!(store.list_movies().is_empty());
        assert!(store.list_users().is_empty());
    }

    #[test]
    fn test_invalid_id_returns_to_menu() {
        let mut store = crate::test_utils::store_with_catalog();
        run_script(&mut store, "4\nalice\n4\n2\n2\n8\n6\n");

        assert_eq!(ticket_ids(&store), vec![1]);
        let ticket = store.ticket(TicketId::new(1)).unwrap();
        assert_eq!(ticket.user_id, UserId::new(2));
        assert_eq!(ticket.movie_id, MovieId::new(2));
    }

    #[test]
    fn test_names_with_spaces() {
        let mut store = TicketingStore::new();
        run_script(&mut store, "1\nThe Seventh Seal\n3\nMary Ann\n");

        assert_eq!(store.list_movies()[0].name, "The Seventh Seal");
        assert_eq!(store.list_users()[0].name, "Mary Ann");
    }

    #[test]
    fn test_non_utf8_selection_keeps_shell_running() {
        let mut store = TicketingStore::new();
        let mut input = b"1\nDune\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"3\nAlice\n6\n");

        run_bytes(&mut store, &input);

        assert_eq!(store.list_movies().len(), 1);
        assert_eq!(store.list_users().len(), 1);
        assert_eq!(store.list_users()[0].name, "Alice");
    }
}
