// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking ledger.
//!
//! The ledger is the only writer of `Movie::available_seats` and the only
//! creator of tickets. Each mutating operation is a single read-modify-write
//! unit against the store:
//!
//! 1. load the current records
//! 2. apply a domain transition to a copy
//! 3. commit the copy, guarded by the version observed in step 1
//!
//! When the commit loses a race (`StoreError::Conflict`) the whole unit is
//! re-run from step 1, up to `LedgerConfig::max_conflict_retries` times.
//! Business failures such as `SoldOut` are returned immediately.

use cinema_ledger_domain::{
    Account, AccountId, DomainError, Movie, MovieId, Role, Ticket, TicketId, TicketType,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, error, info, info_span, warn};

use crate::caller::Caller;
use crate::error::LedgerError;
use crate::store::{BookingStore, IdentityDirectory, StoreError, TicketFilter};

/// Default number of times a conflicting unit is re-run.
pub const DEFAULT_MAX_CONFLICT_RETRIES: u32 = 8;

/// Tuning for the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Re-runs allowed after an optimistic conflict. Zero disables retrying.
    pub max_conflict_retries: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: DEFAULT_MAX_CONFLICT_RETRIES,
        }
    }
}

/// Descriptive fields of a movie, as supplied by an administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub base_price: Decimal,
    pub screening_room: u32,
}

/// Owns seat accounting and ticket creation over a store.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    config: LedgerConfig,
}

impl<S> Ledger<S> {
    /// Creates a ledger with the default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    #[must_use]
    pub const fn with_config(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> LedgerConfig {
        self.config
    }
}

impl<S> Ledger<S>
where
    S: BookingStore + IdentityDirectory,
{
    /// Reserves one seat and issues a ticket for it.
    ///
    /// The client must exist, hold the client role and be active. The seat
    /// decrement and the ticket insert are committed together; a failed call
    /// leaves no trace in the store.
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` / `ClientInactive` for an unusable client
    /// - `MovieNotFound` if the movie does not exist
    /// - `SoldOut` if no seats remain
    /// - `Conflict` if concurrent writers exhausted the retry budget
    pub fn reserve(
        &self,
        caller: &Caller,
        movie_id: MovieId,
        client_id: AccountId,
        movie_time: OffsetDateTime,
        ticket_type: TicketType,
    ) -> Result<Ticket, LedgerError> {
        let span = info_span!(
            "reserve",
            caller = %caller,
            movie_id = %movie_id,
            client_id = %client_id,
            ticket_type = %ticket_type
        );
        let _entered = span.enter();

        self.require_bookable_client(client_id)?;

        let ticket: Ticket = self.with_conflict_retry("reserve", || {
            let movie: Movie = self.load_movie(movie_id)?;
            let reserved: Movie = movie.reserve_seat().map_err(translate_domain_error)?;
            let ticket: Ticket = Ticket::issue(
                TicketId::generate(),
                client_id,
                &reserved,
                movie_time,
                ticket_type,
            )
            .map_err(translate_domain_error)?;

            self.store
                .save_movie_and_ticket(&reserved, &ticket)
                .map_err(|err| movie_store_error(err, movie_id))?;

            debug!(
                available_seats = reserved.available_seats(),
                capacity = reserved.capacity(),
                "Seat reserved"
            );
            Ok(ticket)
        })?;

        info!(
            ticket_id = %ticket.ticket_id(),
            final_price = %ticket.final_price(),
            "Ticket reserved"
        );
        Ok(ticket)
    }

    /// Deletes a ticket and returns its seat to the movie.
    ///
    /// # Errors
    ///
    /// - `TicketNotFound` if the ticket does not exist
    /// - `ConsistencyViolation` if releasing would exceed the capacity
    /// - `Conflict` if concurrent writers exhausted the retry budget
    pub fn cancel(&self, caller: &Caller, ticket_id: TicketId) -> Result<(), LedgerError> {
        let span = info_span!("cancel", caller = %caller, ticket_id = %ticket_id);
        let _entered = span.enter();

        let movie_id: MovieId = self.with_conflict_retry("cancel", || {
            let ticket: Ticket = self.load_ticket(ticket_id)?;
            let movie: Movie = self.load_movie(ticket.movie_id()).map_err(|err| match err {
                LedgerError::MovieNotFound(movie_id) => consistency_violation(&format!(
                    "ticket {ticket_id} references missing movie {movie_id}"
                )),
                other => other,
            })?;
            let released: Movie = movie.release_seat().map_err(translate_domain_error)?;

            self.store
                .delete_ticket_and_release_movie(&ticket, &released)
                .map_err(|err| match err {
                    StoreError::NotFound(_) => LedgerError::TicketNotFound(ticket_id),
                    other => translate_store_error(other),
                })?;

            Ok(released.movie_id())
        })?;

        info!(movie_id = %movie_id, "Ticket cancelled, seat released");
        Ok(())
    }

    /// Moves a ticket to a new movie time. Price and seat are unchanged.
    ///
    /// No past-time validation is applied.
    ///
    /// # Errors
    ///
    /// - `TicketNotFound` if the ticket does not exist
    /// - `InvalidInput` if the new time has no UTC representation
    pub fn reschedule(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        new_movie_time: OffsetDateTime,
    ) -> Result<Ticket, LedgerError> {
        let span = info_span!("reschedule", caller = %caller, ticket_id = %ticket_id);
        let _entered = span.enter();

        let ticket: Ticket = self.load_ticket(ticket_id)?;
        let moved: Ticket = ticket
            .rescheduled(new_movie_time)
            .map_err(translate_domain_error)?;

        self.store
            .update_ticket(&moved)
            .map_err(|err| match err {
                StoreError::NotFound(_) => LedgerError::TicketNotFound(ticket_id),
                other => translate_store_error(other),
            })?;

        info!(movie_time = %moved.movie_time(), "Ticket rescheduled");
        Ok(moved)
    }

    /// Changes a movie's capacity, keeping every sold seat sold.
    ///
    /// Returns the movie as this change committed it.
    ///
    /// # Errors
    ///
    /// - `MovieNotFound` if the movie does not exist
    /// - `InvalidCapacity` if `new_capacity` is below the sold seats
    /// - `Conflict` if concurrent writers exhausted the retry budget
    pub fn update_capacity(
        &self,
        caller: &Caller,
        movie_id: MovieId,
        new_capacity: u32,
    ) -> Result<Movie, LedgerError> {
        let span = info_span!(
            "update_capacity",
            caller = %caller,
            movie_id = %movie_id,
            new_capacity
        );
        let _entered = span.enter();

        let committed: Movie = self.with_conflict_retry("update_capacity", || {
            let movie: Movie = self.load_movie(movie_id)?;
            let resized: Movie = movie
                .with_capacity(new_capacity)
                .map_err(translate_domain_error)?;
            self.store
                .update_movie(&resized)
                .map_err(|err| movie_store_error(err, movie_id))
        })?;

        info!(
            available_seats = committed.available_seats(),
            version = committed.version(),
            "Movie capacity updated"
        );
        Ok(committed)
    }

    /// Creates a movie with every seat available.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if any field fails validation.
    pub fn register_movie(
        &self,
        caller: &Caller,
        details: &MovieDetails,
        capacity: u32,
    ) -> Result<Movie, LedgerError> {
        let span = info_span!("register_movie", caller = %caller, title = %details.title);
        let _entered = span.enter();

        let movie: Movie = Movie::new(
            MovieId::generate(),
            &details.title,
            details.base_price,
            details.screening_room,
            capacity,
        )
        .map_err(translate_domain_error)?;

        self.store
            .insert_movie(&movie)
            .map_err(translate_store_error)?;

        info!(movie_id = %movie.movie_id(), capacity, "Movie registered");
        Ok(movie)
    }

    /// Replaces a movie's title, base price and room.
    ///
    /// Existing tickets keep the price they were sold at.
    ///
    /// # Errors
    ///
    /// - `MovieNotFound` if the movie does not exist
    /// - `InvalidInput` if any field fails validation
    pub fn update_movie_details(
        &self,
        caller: &Caller,
        movie_id: MovieId,
        details: &MovieDetails,
    ) -> Result<Movie, LedgerError> {
        let span = info_span!("update_movie_details", caller = %caller, movie_id = %movie_id);
        let _entered = span.enter();

        let committed: Movie = self.with_conflict_retry("update_movie_details", || {
            let movie: Movie = self.load_movie(movie_id)?;
            let updated: Movie = movie
                .with_details(&details.title, details.base_price, details.screening_room)
                .map_err(translate_domain_error)?;
            self.store
                .update_movie(&updated)
                .map_err(|err| movie_store_error(err, movie_id))
        })?;

        info!(version = committed.version(), "Movie details updated");
        Ok(committed)
    }

    /// Deletes a movie that has no tickets.
    ///
    /// # Errors
    ///
    /// - `MovieNotFound` if the movie does not exist
    /// - `MovieHasTickets` if any ticket still references it
    pub fn remove_movie(&self, caller: &Caller, movie_id: MovieId) -> Result<(), LedgerError> {
        let span = info_span!("remove_movie", caller = %caller, movie_id = %movie_id);
        let _entered = span.enter();

        self.store.delete_movie(movie_id).map_err(|err| match err {
            StoreError::Referenced(_) => LedgerError::MovieHasTickets(movie_id),
            other => movie_store_error(other, movie_id),
        })?;

        info!("Movie removed");
        Ok(())
    }

    /// Loads a movie.
    ///
    /// # Errors
    ///
    /// `MovieNotFound` if the movie does not exist.
    pub fn movie(&self, movie_id: MovieId) -> Result<Movie, LedgerError> {
        self.load_movie(movie_id)
    }

    /// Lists every movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn movies(&self) -> Result<Vec<Movie>, LedgerError> {
        self.store.list_movies().map_err(translate_store_error)
    }

    /// Loads a ticket.
    ///
    /// # Errors
    ///
    /// `TicketNotFound` if the ticket does not exist.
    pub fn ticket(&self, ticket_id: TicketId) -> Result<Ticket, LedgerError> {
        self.load_ticket(ticket_id)
    }

    /// Lists tickets selected by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, LedgerError> {
        self.store
            .list_tickets(filter)
            .map_err(translate_store_error)
    }

    fn require_bookable_client(&self, client_id: AccountId) -> Result<(), LedgerError> {
        let account: Account = self
            .store
            .find_account(client_id)
            .map_err(translate_store_error)?
            .ok_or(LedgerError::ClientNotFound(client_id))?;

        if account.role() != Role::Client {
            debug!(role = %account.role(), "Account is not a client");
            return Err(LedgerError::ClientNotFound(client_id));
        }
        if !account.is_active() {
            return Err(LedgerError::ClientInactive(client_id));
        }
        Ok(())
    }

    fn load_movie(&self, movie_id: MovieId) -> Result<Movie, LedgerError> {
        self.store
            .load_movie(movie_id)
            .map_err(|err| movie_store_error(err, movie_id))
    }

    fn load_ticket(&self, ticket_id: TicketId) -> Result<Ticket, LedgerError> {
        self.store.load_ticket(ticket_id).map_err(|err| match err {
            StoreError::NotFound(_) => LedgerError::TicketNotFound(ticket_id),
            other => translate_store_error(other),
        })
    }

    /// Runs `unit` until it commits without an optimistic conflict.
    fn with_conflict_retry<T>(
        &self,
        operation: &'static str,
        mut unit: impl FnMut() -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let attempts: u32 = self.config.max_conflict_retries.saturating_add(1);

        for attempt in 1..=attempts {
            match unit() {
                Err(LedgerError::Store(StoreError::Conflict(detail))) => {
                    debug!(operation, attempt, detail = %detail, "Optimistic conflict");
                }
                outcome => return outcome,
            }
        }

        warn!(operation, attempts, "Giving up after repeated conflicts");
        Err(LedgerError::Conflict {
            operation,
            attempts,
        })
    }
}

/// Translates a domain error raised by a ledger transition.
fn translate_domain_error(err: DomainError) -> LedgerError {
    match err {
        DomainError::SoldOut(movie_id) => LedgerError::SoldOut(movie_id),
        DomainError::InvalidCapacity {
            movie_id,
            requested,
            sold,
        } => LedgerError::InvalidCapacity {
            movie_id,
            requested,
            sold,
        },
        DomainError::SeatCounterOutOfRange { .. } => consistency_violation(&err.to_string()),
        other => LedgerError::InvalidInput(other),
    }
}

/// Translates a store error. Conflicts pass through for the retry loop.
fn translate_store_error(err: StoreError) -> LedgerError {
    match err {
        StoreError::Corrupt(detail) => consistency_violation(&detail),
        other => LedgerError::Store(other),
    }
}

fn movie_store_error(err: StoreError, movie_id: MovieId) -> LedgerError {
    match err {
        StoreError::NotFound(_) => LedgerError::MovieNotFound(movie_id),
        other => translate_store_error(other),
    }
}

/// Records an integrity failure. These indicate a bug and are never retried.
fn consistency_violation(detail: &str) -> LedgerError {
    error!(detail, "Seat accounting integrity violated");
    LedgerError::ConsistencyViolation(detail.to_string())
}
