use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a typed, positive integer identifier.
///
/// Each entity kind gets its own type so a user id cannot be passed where a
/// movie id is expected.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Raw numeric value
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::error::CinemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self).map_err(|_| {
                    crate::error::CinemaError::invalid_input(format!(
                        "Invalid {} ID: {}",
                        $label,
                        s.trim()
                    ))
                })
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Movie`](super::Movie)
    MovieId,
    "movie"
);
entity_id!(
    /// Identifier of a [`User`](super::User)
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a [`Ticket`](super::Ticket)
    TicketId,
    "ticket"
);

/// Monotonic id source for one entity kind.
///
/// Hands out 1, 2, 3, ... and never goes back, even when the entity that
/// received an id is later removed.
#[derive(Debug, Default, Clone)]
pub struct IdCounter {
    last: u64,
}

impl IdCounter {
    /// Allocate the next id
    pub fn next_id<T: From<u64>>(&mut self) -> T {
        self.last += 1;
        T::from(self.last)
    }
}
