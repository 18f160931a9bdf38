// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie writes that another caller overtakes right after they commit.

use std::sync::atomic::{AtomicBool, Ordering};

use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Ticket, TicketId};
use rust_decimal_macros::dec;

use crate::tests::helpers::{create_test_caller, create_test_movie};
use crate::{
    BookingStore, IdentityDirectory, Ledger, LedgerError, MemoryStore, MovieDetails, StoreError,
    TicketFilter,
};

/// What the other caller does once the first movie write has committed.
#[derive(Clone, Copy)]
enum Overtake {
    RemoveMovie,
    Resize(u32),
}

/// Lets another caller act on the movie between a commit and anything after it.
struct OvertakenStore {
    inner: MemoryStore,
    overtake: Overtake,
    done: AtomicBool,
}

impl OvertakenStore {
    fn new(overtake: Overtake) -> Self {
        Self {
            inner: MemoryStore::new(),
            overtake,
            done: AtomicBool::new(false),
        }
    }

    fn overtake(&self, movie_id: MovieId) -> Result<(), StoreError> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        match self.overtake {
            Overtake::RemoveMovie => self.inner.delete_movie(movie_id),
            Overtake::Resize(capacity) => {
                let current: Movie = self.inner.load_movie(movie_id)?;
                let resized: Movie = current
                    .with_capacity(capacity)
                    .map_err(|err| StoreError::Backend(err.to_string()))?;
                self.inner.update_movie(&resized).map(|_| ())
            }
        }
    }
}

impl BookingStore for OvertakenStore {
    fn load_movie(&self, movie_id: MovieId) -> Result<Movie, StoreError> {
        self.inner.load_movie(movie_id)
    }

    fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.inner.list_movies()
    }

    fn insert_movie(&self, movie: &Movie) -> Result<(), StoreError> {
        self.inner.insert_movie(movie)
    }

    fn update_movie(&self, movie: &Movie) -> Result<Movie, StoreError> {
        let committed: Movie = self.inner.update_movie(movie)?;
        self.overtake(movie.movie_id())?;
        Ok(committed)
    }

    fn delete_movie(&self, movie_id: MovieId) -> Result<(), StoreError> {
        self.inner.delete_movie(movie_id)
    }

    fn save_movie_and_ticket(&self, movie: &Movie, ticket: &Ticket) -> Result<(), StoreError> {
        self.inner.save_movie_and_ticket(movie, ticket)
    }

    fn load_ticket(&self, ticket_id: TicketId) -> Result<Ticket, StoreError> {
        self.inner.load_ticket(ticket_id)
    }

    fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, StoreError> {
        self.inner.list_tickets(filter)
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<(), StoreError> {
        self.inner.update_ticket(ticket)
    }

    fn delete_ticket_and_release_movie(
        &self,
        ticket: &Ticket,
        movie: &Movie,
    ) -> Result<(), StoreError> {
        self.inner.delete_ticket_and_release_movie(ticket, movie)
    }
}

impl IdentityDirectory for OvertakenStore {
    fn find_account(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        self.inner.find_account(account_id)
    }
}

fn create_test_overtaken_ledger(overtake: Overtake) -> (Ledger<OvertakenStore>, MovieId) {
    let ledger = Ledger::new(OvertakenStore::new(overtake));
    let movie_id: MovieId = create_test_movie(&ledger.store().inner, dec!(20), 4);
    (ledger, movie_id)
}

#[test]
fn test_update_capacity_reports_commit_when_movie_removed_right_after() {
    let (ledger, movie_id) = create_test_overtaken_ledger(Overtake::RemoveMovie);

    let movie: Movie = ledger
        .update_capacity(&create_test_caller(), movie_id, 6)
        .unwrap();

    assert_eq!(movie.movie_id(), movie_id);
    assert_eq!(movie.capacity(), 6);
    assert_eq!(movie.available_seats(), 6);
    assert_eq!(movie.version(), 1);
    assert_eq!(
        ledger.movie(movie_id),
        Err(LedgerError::MovieNotFound(movie_id))
    );
}

#[test]
fn test_update_capacity_returns_its_own_change_not_a_later_one() {
    let (ledger, movie_id) = create_test_overtaken_ledger(Overtake::Resize(9));

    let movie: Movie = ledger
        .update_capacity(&create_test_caller(), movie_id, 6)
        .unwrap();

    assert_eq!(movie.capacity(), 6);
    assert_eq!(movie.version(), 1);

    let stored: Movie = ledger.movie(movie_id).unwrap();
    assert_eq!(stored.capacity(), 9);
    assert_eq!(stored.version(), 2);
}

#[test]
fn test_update_movie_details_reports_commit_when_movie_removed_right_after() {
    let (ledger, movie_id) = create_test_overtaken_ledger(Overtake::RemoveMovie);

    let movie: Movie = ledger
        .update_movie_details(
            &create_test_caller(),
            movie_id,
            &MovieDetails {
                title: String::from("Joker"),
                base_price: dec!(50),
                screening_room: 3,
            },
        )
        .unwrap();

    assert_eq!(movie.title(), "Joker");
    assert_eq!(movie.base_price(), dec!(50));
    assert_eq!(movie.version(), 1);
    assert!(ledger.movies().unwrap().is_empty());
}
