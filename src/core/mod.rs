//! Core domain types: movies, users, tickets and their identifiers

mod entities;
mod ids;

pub use entities::{Movie, Ticket, User};
pub use ids::{IdCounter, MovieId, TicketId, UserId};
