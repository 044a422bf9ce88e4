//! In-memory ticketing store
//!
//! [`TicketingStore`] owns every movie, user and ticket together with the
//! per-kind id counters. All state is volatile and lives as long as the
//! store value does.
//!
//! Collections are kept in insertion order, which doubles as display order.
//! Lookups are linear scans; the data sets handled by a single cinema
//! session are small.

use crate::core::{IdCounter, Movie, MovieId, Ticket, TicketId, User, UserId};
use crate::error::{CinemaError, Result};
use tracing::{debug, info, warn};

/// Owner of all ticketing state
#[derive(Debug, Default)]
pub struct TicketingStore {
    movies: Vec<Movie>,
    users: Vec<User>,
    tickets: Vec<Ticket>,
    movie_ids: IdCounter,
    user_ids: IdCounter,
    ticket_ids: IdCounter,
}

impl TicketingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a movie and return its id.
    ///
    /// The name is stored as given, empty names included.
    pub fn add_movie(&mut self, name: impl Into<String>) -> MovieId {
        let id: MovieId = self.movie_ids.next_id();
        let name = name.into();
        info!(movie_id = %id, %name, "Movie added");
        self.movies.push(Movie { id, name });
        id
    }

    /// All movies in the order they were added
    pub fn list_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Register a user and return its id
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        let id: UserId = self.user_ids.next_id();
        let name = name.into();
        info!(user_id = %id, %name, "User added");
        self.users.push(User { id, name });
        id
    }

    /// All users in the order they were added
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    /// Live tickets in purchase order
    pub fn list_tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Buy a ticket for `user_id` to see `movie_id`.
    ///
    /// Both records must exist. When either is missing nothing is changed
    /// and [`CinemaError::UserOrMovieNotFound`] is returned; the error does
    /// not say which of the two was missing.
    pub fn buy_ticket(&mut self, user_id: UserId, movie_id: MovieId) -> Result<TicketId> {
        let user_exists = self.user(user_id).is_some();
        let movie_exists = self.movie(movie_id).is_some();

        if !user_exists || !movie_exists {
            warn!(%user_id, %movie_id, "Ticket purchase rejected");
            return Err(CinemaError::UserOrMovieNotFound { user_id, movie_id });
        }

        let id: TicketId = self.ticket_ids.next_id();
        self.tickets.push(Ticket {
            id,
            user_id,
            movie_id,
        });
        info!(ticket_id = %id, %user_id, %movie_id, "Ticket purchased");
        Ok(id)
    }

    /// Cancel a ticket, returning the removed record.
    ///
    /// The relative order of the remaining tickets is preserved and the
    /// ticket id is never handed out again.
    pub fn cancel_ticket(&mut self, id: TicketId) -> Result<Ticket> {
        let Some(position) = self.tickets.iter().position(|t| t.id == id) else {
            warn!(ticket_id = %id, "Cancellation of unknown ticket");
            return Err(CinemaError::TicketNotFound { id });
        };

        let ticket = self.tickets.remove(position);
        info!(ticket_id = %id, "Ticket cancelled");
        debug!(remaining = self.tickets.len(), "Tickets left after cancellation");
        Ok(ticket)
    }
}
