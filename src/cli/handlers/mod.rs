//! Menu action handlers
//!
//! Each menu action is turned into a [`Request`], executed against the
//! store by [`execute`], and the resulting [`Outcome`] is printed by
//! [`render`]. Keeping execution free of I/O lets the shell logic be tested
//! without a terminal.

use crate::cli::output::OutputFormatter;
use crate::core::{Movie, MovieId, Ticket, TicketId, User, UserId};
use crate::error::{CinemaError, Result};
use crate::store::TicketingStore;
use serde_json::json;

/// A store operation requested from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    AddMovie { name: String },
    ListMovies,
    AddUser { name: String },
    BuyTicket { user_id: UserId, movie_id: MovieId },
    CancelTicket { ticket_id: TicketId },
    ListUsers,
    ListTickets,
}

/// Successful result of a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MovieAdded(MovieId),
    Movies(Vec<Movie>),
    UserAdded(UserId),
    TicketPurchased(TicketId),
    TicketCancelled(Ticket),
    Users(Vec<User>),
    Tickets(Vec<Ticket>),
}

/// Run a request against the store
pub fn execute(store: &mut TicketingStore, request: Request) -> Result<Outcome> {
    tracing::debug!(?request, "Executing request");

    let outcome = match request {
        Request::AddMovie { name } => Outcome::MovieAdded(store.add_movie(name)),
        Request::ListMovies => Outcome::Movies(store.list_movies().to_vec()),
        Request::AddUser { name } => Outcome::UserAdded(store.add_user(name)),
        Request::BuyTicket { user_id, movie_id } => {
            Outcome::TicketPurchased(store.buy_ticket(user_id, movie_id)?)
        },
        Request::CancelTicket { ticket_id } => {
            Outcome::TicketCancelled(store.cancel_ticket(ticket_id)?)
        },
        Request::ListUsers => Outcome::Users(store.list_users().to_vec()),
        Request::ListTickets => Outcome::Tickets(store.list_tickets().to_vec()),
    };

    Ok(outcome)
}

/// Print an outcome
pub fn render(outcome: &Outcome, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(&outcome_json(outcome));
    }

    match outcome {
        Outcome::MovieAdded(id) => output.success(&format!("Movie added with ID {id}")),
        Outcome::UserAdded(id) => output.success(&format!("User added with ID {id}")),
        Outcome::TicketPurchased(id) => {
            output.success(&format!("Ticket purchased with ID {id}"));
        },
        Outcome::TicketCancelled(_) => output.success("Ticket cancelled successfully"),
        Outcome::Movies(movies) => {
            output.heading("Available movies:");
            for movie in movies {
                output.info(&format!("{}. {}", movie.id, movie.name));
            }
        },
        Outcome::Users(users) => {
            output.heading("Registered users:");
            for user in users {
                output.info(&format!("{}. {}", user.id, user.name));
            }
        },
        Outcome::Tickets(tickets) => {
            output.heading("Tickets:");
            for ticket in tickets {
                output.info(&format!(
                    "{}. user {} -> movie {}",
                    ticket.id, ticket.user_id, ticket.movie_id
                ));
            }
        },
    }

    Ok(())
}

/// Print a recoverable error raised while executing a request
pub fn render_error(error: &CinemaError, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(&json!({
            "status": "error",
            "error": error.to_string(),
            "not_found": error.is_not_found(),
        }));
    }

    output.error(&error.user_message());
    Ok(())
}

fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::MovieAdded(id) => json!({ "status": "success", "movie_id": id }),
        Outcome::UserAdded(id) => json!({ "status": "success", "user_id": id }),
        Outcome::TicketPurchased(id) => json!({ "status": "success", "ticket_id": id }),
        Outcome::TicketCancelled(ticket) => json!({
            "status": "success",
            "cancelled": ticket,
        }),
        Outcome::Movies(movies) => json!({ "movies": movies, "count": movies.len() }),
        Outcome::Users(users) => json!({ "users": users, "count": users.len() }),
        Outcome::Tickets(tickets) => json!({ "tickets": tickets, "count": tickets.len() }),
    }
}
