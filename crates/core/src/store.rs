// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts consumed by the ledger.
//!
//! A `BookingStore` durably holds movies and tickets. It may be a document
//! store or a relational database; the ledger only relies on two things:
//!
//! - every multi-record write is applied as one atomic unit
//! - every movie write is guarded by the `version` the movie was loaded
//!   with, failing with `StoreError::Conflict` if another writer got there
//!   first, and bumping the stored version on success

use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Ticket, TicketId};

/// Errors reported by store implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),
    /// The record changed since it was loaded.
    #[error("Concurrent modification: {0}")]
    Conflict(String),
    /// The record is still referenced and cannot be removed.
    #[error("Record is referenced: {0}")]
    Referenced(String),
    /// A stored record violates a ledger invariant.
    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),
    /// The backing store failed.
    #[error("Store backend failure: {0}")]
    Backend(String),
}

/// Selects which tickets to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFilter {
    /// Every ticket.
    All,
    /// Tickets for one movie.
    ForMovie(MovieId),
    /// Tickets held by one client.
    ForClient(AccountId),
}

impl TicketFilter {
    /// Returns true if the ticket is selected by this filter.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::ForMovie(movie_id) => ticket.movie_id() == *movie_id,
            Self::ForClient(client_id) => ticket.client_id() == *client_id,
        }
    }
}

/// Durable storage for movies and tickets.
pub trait BookingStore {
    /// Loads a movie.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the movie does not exist.
    fn load_movie(&self, movie_id: MovieId) -> Result<Movie, StoreError>;

    /// Lists every movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Inserts a new movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the movie cannot be written.
    fn insert_movie(&self, movie: &Movie) -> Result<(), StoreError>;

    /// Replaces a movie, guarded by `movie.version()`.
    ///
    /// Returns the movie exactly as this write committed it.
    ///
    /// # Errors
    ///
    /// `StoreError::Conflict` if the stored version differs, or
    /// `StoreError::NotFound` if the movie is gone.
    fn update_movie(&self, movie: &Movie) -> Result<Movie, StoreError>;

    /// Deletes a movie that no ticket references.
    ///
    /// # Errors
    ///
    /// `StoreError::Referenced` if tickets exist for the movie, or
    /// `StoreError::NotFound` if the movie does not exist.
    fn delete_movie(&self, movie_id: MovieId) -> Result<(), StoreError>;

    /// Writes the decremented movie and the new ticket as one unit.
    ///
    /// # Errors
    ///
    /// `StoreError::Conflict` if the movie changed since it was loaded.
    /// Nothing is applied on error.
    fn save_movie_and_ticket(&self, movie: &Movie, ticket: &Ticket) -> Result<(), StoreError>;

    /// Loads a ticket.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the ticket does not exist.
    fn load_ticket(&self, ticket_id: TicketId) -> Result<Ticket, StoreError>;

    /// Lists tickets selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, StoreError>;

    /// Replaces a ticket's mutable fields.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the ticket does not exist.
    fn update_ticket(&self, ticket: &Ticket) -> Result<(), StoreError>;

    /// Deletes the ticket and writes the incremented movie as one unit.
    ///
    /// # Errors
    ///
    /// `StoreError::Conflict` if the movie changed since it was loaded, or
    /// `StoreError::NotFound` if the ticket was already removed. Nothing is
    /// applied on error.
    fn delete_ticket_and_release_movie(
        &self,
        ticket: &Ticket,
        movie: &Movie,
    ) -> Result<(), StoreError>;
}

/// Lookup of the accounts that may book tickets.
pub trait IdentityDirectory {
    /// Finds an account by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn find_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Returns true if the account exists, is a client and is active.
    ///
    /// For callers that only need a yes or no. `Ledger::reserve` reads the
    /// account itself so it can report a missing client apart from an
    /// inactive one.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn is_client_active(&self, client_id: AccountId) -> Result<bool, StoreError> {
        Ok(self
            .find_account(client_id)?
            .is_some_and(|account| account.can_book()))
    }
}
