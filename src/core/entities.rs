use super::{MovieId, TicketId, UserId};
use serde::{Deserialize, Serialize};

/// A movie that tickets can be bought for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
}

/// A registered cinema customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// A purchased seat for one user at one movie.
///
/// The user and movie ids are copied at purchase time; the ticket keeps no
/// live reference to either record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub user_id: UserId,
    pub movie_id: MovieId,
}
