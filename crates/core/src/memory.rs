// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process document store.
//!
//! Movies, tickets and accounts are held as whole documents. Reads clone a
//! document out under a shared lock and release it, so concurrent ledger
//! calls really do race on the same movie version; writes take the
//! exclusive lock and apply the version check and every document change
//! together.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Ticket, TicketId};
use tracing::debug;

use crate::store::{BookingStore, IdentityDirectory, StoreError, TicketFilter};

#[derive(Debug, Default)]
struct Documents {
    movies: HashMap<MovieId, Movie>,
    tickets: HashMap<TicketId, Ticket>,
    accounts: HashMap<AccountId, Account>,
}

/// A versioned in-memory store implementing both ledger collaborators.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store lock is poisoned.
    pub fn insert_account(&self, account: Account) -> Result<(), StoreError> {
        self.write()?.accounts.insert(account.account_id(), account);
        Ok(())
    }

    /// Sets an account's active flag.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the account does not exist.
    pub fn set_account_active(&self, account_id: AccountId, active: bool) -> Result<(), StoreError> {
        let mut documents = self.write()?;
        let account: &mut Account = documents
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| StoreError::NotFound(format!("account {account_id}")))?;
        *account = account.with_active(active);
        Ok(())
    }

    /// Imports an existing ticket document without touching seat counters.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store lock is poisoned.
    #[cfg(test)]
    pub(crate) fn import_ticket(&self, ticket: Ticket) -> Result<(), StoreError> {
        self.write()?.tickets.insert(ticket.ticket_id(), ticket);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Documents>, StoreError> {
        self.documents
            .read()
            .map_err(|_| StoreError::Backend(String::from("memory store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Documents>, StoreError> {
        self.documents
            .write()
            .map_err(|_| StoreError::Backend(String::from("memory store lock poisoned")))
    }
}

/// Checks the stored version and returns the document to write back.
fn next_version(documents: &Documents, movie: &Movie) -> Result<Movie, StoreError> {
    let stored: &Movie = documents
        .movies
        .get(&movie.movie_id())
        .ok_or_else(|| StoreError::NotFound(format!("movie {}", movie.movie_id())))?;

    if stored.version() != movie.version() {
        return Err(StoreError::Conflict(format!(
            "movie {} is at version {}, write expected {}",
            movie.movie_id(),
            stored.version(),
            movie.version()
        )));
    }

    Ok(movie.committed())
}

impl BookingStore for MemoryStore {
    fn load_movie(&self, movie_id: MovieId) -> Result<Movie, StoreError> {
        self.read()?
            .movies
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("movie {movie_id}")))
    }

    fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let mut movies: Vec<Movie> = self.read()?.movies.values().cloned().collect();
        movies.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(movies)
    }

    fn insert_movie(&self, movie: &Movie) -> Result<(), StoreError> {
        self.write()?.movies.insert(movie.movie_id(), movie.clone());
        Ok(())
    }

    fn update_movie(&self, movie: &Movie) -> Result<Movie, StoreError> {
        let mut documents = self.write()?;
        let next: Movie = next_version(&documents, movie)?;
        documents.movies.insert(next.movie_id(), next.clone());
        Ok(next)
    }

    fn delete_movie(&self, movie_id: MovieId) -> Result<(), StoreError> {
        let mut documents = self.write()?;
        if documents
            .tickets
            .values()
            .any(|ticket| ticket.movie_id() == movie_id)
        {
            return Err(StoreError::Referenced(format!("movie {movie_id}")));
        }
        documents
            .movies
            .remove(&movie_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("movie {movie_id}")))
    }

    fn save_movie_and_ticket(&self, movie: &Movie, ticket: &Ticket) -> Result<(), StoreError> {
        let mut documents = self.write()?;
        let next: Movie = next_version(&documents, movie)?;

        debug!(
            movie_id = %next.movie_id(),
            version = next.version(),
            ticket_id = %ticket.ticket_id(),
            "Committing reservation"
        );
        documents.movies.insert(next.movie_id(), next);
        documents.tickets.insert(ticket.ticket_id(), ticket.clone());
        Ok(())
    }

    fn load_ticket(&self, ticket_id: TicketId) -> Result<Ticket, StoreError> {
        self.read()?
            .tickets
            .get(&ticket_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("ticket {ticket_id}")))
    }

    fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, StoreError> {
        let mut tickets: Vec<Ticket> = self
            .read()?
            .tickets
            .values()
            .filter(|ticket| filter.matches(ticket))
            .cloned()
            .collect();
        tickets.sort_by_key(Ticket::movie_time);
        Ok(tickets)
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<(), StoreError> {
        let mut documents = self.write()?;
        let stored: &mut Ticket = documents
            .tickets
            .get_mut(&ticket.ticket_id())
            .ok_or_else(|| StoreError::NotFound(format!("ticket {}", ticket.ticket_id())))?;
        *stored = ticket.clone();
        Ok(())
    }

    fn delete_ticket_and_release_movie(
        &self,
        ticket: &Ticket,
        movie: &Movie,
    ) -> Result<(), StoreError> {
        let mut documents = self.write()?;
        let next: Movie = next_version(&documents, movie)?;
        if !documents.tickets.contains_key(&ticket.ticket_id()) {
            return Err(StoreError::NotFound(format!("ticket {}", ticket.ticket_id())));
        }

        documents.tickets.remove(&ticket.ticket_id());
        documents.movies.insert(next.movie_id(), next);
        Ok(())
    }
}

impl IdentityDirectory for MemoryStore {
    fn find_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.read()?.accounts.get(&account_id).cloned())
    }
}
