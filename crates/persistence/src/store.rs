// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The relational store as seen by the ledger.
//!
//! One connection sits behind a mutex. Each trait call holds the lock only
//! for its own statement or transaction, so a ledger read-modify-write unit
//! can interleave with other callers and is kept honest by the movie
//! version guard, not by the lock.

use std::sync::{Mutex, MutexGuard};

use cinema_ledger::{BookingStore, IdentityDirectory, StoreError, TicketFilter};
use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Ticket, TicketId};

use crate::Persistence;
use crate::error::PersistenceError;

/// A `Persistence` shared between threads.
pub struct SharedPersistence {
    inner: Mutex<Persistence>,
}

impl SharedPersistence {
    #[must_use]
    pub const fn new(persistence: Persistence) -> Self {
        Self {
            inner: Mutex::new(persistence),
        }
    }

    /// Locks the underlying adapter for direct use.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked.
    pub fn lock(&self) -> Result<MutexGuard<'_, Persistence>, PersistenceError> {
        self.inner
            .lock()
            .map_err(|_| PersistenceError::Other(String::from("persistence lock poisoned")))
    }

    fn with<T>(
        &self,
        op: impl FnOnce(&mut Persistence) -> Result<T, PersistenceError>,
    ) -> Result<T, StoreError> {
        let mut persistence = self.lock()?;
        op(&mut persistence).map_err(StoreError::from)
    }
}

impl BookingStore for SharedPersistence {
    fn load_movie(&self, movie_id: MovieId) -> Result<Movie, StoreError> {
        self.with(|p| p.get_movie(movie_id))?
            .ok_or_else(|| StoreError::NotFound(format!("movie {movie_id}")))
    }

    fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.with(Persistence::list_movies)
    }

    fn insert_movie(&self, movie: &Movie) -> Result<(), StoreError> {
        self.with(|p| p.insert_movie(movie))
    }

    fn update_movie(&self, movie: &Movie) -> Result<Movie, StoreError> {
        self.with(|p| p.write_movie(movie))?;
        Ok(movie.committed())
    }

    fn delete_movie(&self, movie_id: MovieId) -> Result<(), StoreError> {
        self.with(|p| p.delete_movie(movie_id))
    }

    fn save_movie_and_ticket(&self, movie: &Movie, ticket: &Ticket) -> Result<(), StoreError> {
        self.with(|p| p.save_movie_and_ticket(movie, ticket))
    }

    fn load_ticket(&self, ticket_id: TicketId) -> Result<Ticket, StoreError> {
        self.with(|p| p.get_ticket(ticket_id))?
            .ok_or_else(|| StoreError::NotFound(format!("ticket {ticket_id}")))
    }

    fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, StoreError> {
        self.with(|p| p.list_tickets(filter))
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<(), StoreError> {
        self.with(|p| p.update_ticket(ticket))
    }

    fn delete_ticket_and_release_movie(
        &self,
        ticket: &Ticket,
        movie: &Movie,
    ) -> Result<(), StoreError> {
        self.with(|p| p.delete_ticket_and_release_movie(ticket, movie))
    }
}

impl IdentityDirectory for SharedPersistence {
    fn find_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        self.with(|p| p.get_account(account_id))
    }
}
