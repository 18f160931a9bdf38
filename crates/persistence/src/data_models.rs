// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row shapes and their conversion to domain values.
//!
//! Identifiers and decimals are stored as text so both backends hold them
//! without loss. Integer columns are range-checked on the way back in.

use std::str::FromStr;

use cinema_ledger_domain::{
    Account, AccountId, Movie, MovieId, Role, Ticket, TicketId, TicketType, format_movie_time,
    parse_movie_time,
};
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::diesel_schema::{accounts, movies, tickets};
use crate::error::PersistenceError;

/// Account record including password material.
///
/// Never leaves the persistence and authentication layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: String,
    pub login: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

impl AccountData {
    /// Converts this record to a domain account.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored id or role is malformed.
    pub fn to_account(&self) -> Result<Account, PersistenceError> {
        Ok(Account::restore(
            parse_field::<AccountId>("account_id", &self.account_id)?,
            self.login.clone(),
            parse_field::<Role>("role", &self.role)?,
            self.is_active,
        ))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
pub(crate) struct AccountRow {
    pub account_id: String,
    pub login: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: i32,
    pub created_at: String,
}

impl From<AccountRow> for AccountData {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            login: row.login,
            password_hash: row.password_hash,
            role: row.role,
            is_active: row.is_active != 0,
            created_at: row.created_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = movies)]
pub(crate) struct MovieRow {
    pub movie_id: String,
    pub title: String,
    pub base_price: String,
    pub screening_room: i32,
    pub capacity: i32,
    pub available_seats: i32,
    pub version: i64,
}

impl MovieRow {
    pub(crate) fn into_movie(self) -> Result<Movie, PersistenceError> {
        let movie_id: MovieId = parse_field("movie_id", &self.movie_id)?;
        let available_seats: u32 = self.available_seats.to_u32().ok_or_else(|| {
            PersistenceError::CorruptRecord(format!(
                "movie {movie_id} has negative available seats: {}",
                self.available_seats
            ))
        })?;

        Movie::restore(
            movie_id,
            self.title,
            parse_field::<Decimal>("base_price", &self.base_price)?,
            to_u32("screening_room", self.screening_room)?,
            to_u32("capacity", self.capacity)?,
            available_seats,
            self.version
                .to_u64()
                .ok_or_else(|| invalid_column("version", &self.version.to_string()))?,
        )
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = tickets)]
pub(crate) struct TicketRow {
    pub ticket_id: String,
    pub client_id: String,
    pub movie_id: String,
    pub movie_time: String,
    pub ticket_type: String,
    pub final_price: String,
}

impl TicketRow {
    pub(crate) fn into_ticket(self) -> Result<Ticket, PersistenceError> {
        let movie_time: OffsetDateTime = parse_movie_time(&self.movie_time)
            .map_err(|e| invalid_column("movie_time", &e.to_string()))?;

        Ticket::restore(
            parse_field::<TicketId>("ticket_id", &self.ticket_id)?,
            parse_field::<AccountId>("client_id", &self.client_id)?,
            parse_field::<MovieId>("movie_id", &self.movie_id)?,
            movie_time,
            parse_field::<TicketType>("ticket_type", &self.ticket_type)?,
            parse_field::<Decimal>("final_price", &self.final_price)?,
        )
        .map_err(|e| invalid_column("movie_time", &e.to_string()))
    }
}

/// Column values for a movie write.
pub(crate) struct MovieColumns {
    pub movie_id: String,
    pub title: String,
    pub base_price: String,
    pub screening_room: i32,
    pub capacity: i32,
    pub available_seats: i32,
    pub version: i64,
}

impl MovieColumns {
    pub(crate) fn from_movie(movie: &Movie) -> Result<Self, PersistenceError> {
        Ok(Self {
            movie_id: movie.movie_id().to_string(),
            title: movie.title().to_string(),
            base_price: movie.base_price().to_string(),
            screening_room: to_i32("screening_room", movie.screening_room())?,
            capacity: to_i32("capacity", movie.capacity())?,
            available_seats: to_i32("available_seats", movie.available_seats())?,
            version: movie
                .version()
                .to_i64()
                .ok_or_else(|| invalid_column("version", &movie.version().to_string()))?,
        })
    }
}

/// Column values for a ticket write.
pub(crate) struct TicketColumns {
    pub ticket_id: String,
    pub client_id: String,
    pub movie_id: String,
    pub movie_time: String,
    pub ticket_type: String,
    pub final_price: String,
}

impl TicketColumns {
    pub(crate) fn from_ticket(ticket: &Ticket) -> Result<Self, PersistenceError> {
        Ok(Self {
            ticket_id: ticket.ticket_id().to_string(),
            client_id: ticket.client_id().to_string(),
            movie_id: ticket.movie_id().to_string(),
            movie_time: format_movie_time(ticket.movie_time())
                .map_err(|e| invalid_column("movie_time", &e.to_string()))?,
            ticket_type: ticket.ticket_type().as_str().to_string(),
            final_price: ticket.final_price().to_string(),
        })
    }
}

fn parse_field<T>(column: &str, value: &str) -> Result<T, PersistenceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| invalid_column(column, &format!("{value} ({e})")))
}

fn to_u32(column: &str, value: i32) -> Result<u32, PersistenceError> {
    value
        .to_u32()
        .ok_or_else(|| invalid_column(column, &value.to_string()))
}

fn to_i32(column: &str, value: u32) -> Result<i32, PersistenceError> {
    value
        .to_i32()
        .ok_or_else(|| invalid_column(column, &value.to_string()))
}

fn invalid_column(column: &str, detail: &str) -> PersistenceError {
    PersistenceError::ReconstructionError(format!("invalid {column}: {detail}"))
}
