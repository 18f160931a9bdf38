// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{AccountId, DomainError, MovieId, TicketId};

use crate::store::StoreError;

/// Coarse classification of ledger failures.
///
/// Transports map each kind to their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A movie, client or ticket reference is dangling.
    NotFound,
    /// No seats remain.
    SoldOut,
    /// The client account is deactivated.
    ClientInactive,
    /// A capacity change would undersell existing tickets.
    InvalidCapacity,
    /// Input failed validation.
    InvalidInput,
    /// The record is still referenced.
    Referenced,
    /// Concurrent writers kept colliding.
    Conflict,
    /// A seat counter was observed outside `0..=capacity`.
    ConsistencyViolation,
    /// The backing store failed.
    Internal,
}

/// Errors returned by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The movie does not exist.
    MovieNotFound(MovieId),
    /// The client does not exist or is not a client account.
    ClientNotFound(AccountId),
    /// The ticket does not exist.
    TicketNotFound(TicketId),
    /// The client account is deactivated.
    ClientInactive(AccountId),
    /// No seats remain for the movie.
    SoldOut(MovieId),
    /// The new capacity is below the number of sold seats.
    InvalidCapacity {
        /// The movie being changed.
        movie_id: MovieId,
        /// The requested capacity.
        requested: u32,
        /// Seats held by tickets.
        sold: u32,
    },
    /// Input failed domain validation.
    InvalidInput(DomainError),
    /// The movie cannot be removed while tickets reference it.
    MovieHasTickets(MovieId),
    /// Optimistic retries were exhausted.
    Conflict {
        /// The ledger operation that gave up.
        operation: &'static str,
        /// How many attempts were made.
        attempts: u32,
    },
    /// A seat counter left `0..=capacity`. Always a bug, never user error.
    ConsistencyViolation(String),
    /// The backing store failed.
    Store(StoreError),
}

impl LedgerError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MovieNotFound(_) | Self::ClientNotFound(_) | Self::TicketNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::ClientInactive(_) => ErrorKind::ClientInactive,
            Self::SoldOut(_) => ErrorKind::SoldOut,
            Self::InvalidCapacity { .. } => ErrorKind::InvalidCapacity,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::MovieHasTickets(_) => ErrorKind::Referenced,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::ConsistencyViolation(_) => ErrorKind::ConsistencyViolation,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MovieNotFound(id) => write!(f, "Movie not found: {id}"),
            Self::ClientNotFound(id) => write!(f, "Client not found: {id}"),
            Self::TicketNotFound(id) => write!(f, "Ticket not found: {id}"),
            Self::ClientInactive(id) => write!(f, "Client {id} is not active"),
            Self::SoldOut(id) => write!(f, "Movie {id} is sold out"),
            Self::InvalidCapacity {
                movie_id,
                requested,
                sold,
            } => write!(
                f,
                "Capacity {requested} for movie {movie_id} is below the {sold} seats already sold"
            ),
            Self::InvalidInput(err) => write!(f, "Invalid input: {err}"),
            Self::MovieHasTickets(id) => {
                write!(f, "Movie {id} cannot be deleted: tickets still reference it")
            }
            Self::Conflict {
                operation,
                attempts,
            } => write!(
                f,
                "{operation} abandoned after {attempts} conflicting attempts"
            ),
            Self::ConsistencyViolation(msg) => write!(f, "Consistency violation: {msg}"),
            Self::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl std::error::Error for LedgerError {}
