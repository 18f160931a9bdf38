// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::movie::Movie;
use crate::pricing::final_price;
use crate::types::{AccountId, MovieId, TicketId, TicketType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// A sold seat for a movie showing.
///
/// Tickets are issued against a movie whose seat has already been reserved.
/// After issue only the movie time may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    ticket_id: TicketId,
    client_id: AccountId,
    movie_id: MovieId,
    #[serde(with = "time::serde::rfc3339")]
    movie_time: OffsetDateTime,
    ticket_type: TicketType,
    final_price: Decimal,
}

impl Ticket {
    /// Issues a ticket priced from the movie's current base price.
    ///
    /// The movie time is normalised to UTC.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the movie time has no UTC
    /// representation.
    pub fn issue(
        ticket_id: TicketId,
        client_id: AccountId,
        movie: &Movie,
        movie_time: OffsetDateTime,
        ticket_type: TicketType,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            ticket_id,
            client_id,
            movie_id: movie.movie_id(),
            movie_time: to_utc(movie_time)?,
            ticket_type,
            final_price: final_price(movie.base_price(), ticket_type),
        })
    }

    /// Rebuilds a ticket from stored fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the movie time has no UTC
    /// representation.
    pub fn restore(
        ticket_id: TicketId,
        client_id: AccountId,
        movie_id: MovieId,
        movie_time: OffsetDateTime,
        ticket_type: TicketType,
        final_price: Decimal,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            ticket_id,
            client_id,
            movie_id,
            movie_time: to_utc(movie_time)?,
            ticket_type,
            final_price,
        })
    }

    #[must_use]
    pub const fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    #[must_use]
    pub const fn client_id(&self) -> AccountId {
        self.client_id
    }

    #[must_use]
    pub const fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    #[must_use]
    pub const fn movie_time(&self) -> OffsetDateTime {
        self.movie_time
    }

    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    #[must_use]
    pub const fn final_price(&self) -> Decimal {
        self.final_price
    }

    /// Returns a copy of this ticket moved to a new movie time.
    ///
    /// Price, type and seat are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the movie time has no UTC
    /// representation.
    pub fn rescheduled(&self, movie_time: OffsetDateTime) -> Result<Self, DomainError> {
        Ok(Self {
            movie_time: to_utc(movie_time)?,
            ..self.clone()
        })
    }
}

/// Shifts a movie time to UTC.
///
/// A local time near the ends of the supported year range can land outside
/// it once the offset is removed.
fn to_utc(movie_time: OffsetDateTime) -> Result<OffsetDateTime, DomainError> {
    movie_time
        .checked_to_offset(UtcOffset::UTC)
        .ok_or_else(|| {
            DomainError::InvalidTimestamp(format!("{movie_time} is outside the UTC year range"))
        })
}

/// Formats a movie time as RFC 3339.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value cannot be formatted.
pub fn format_movie_time(movie_time: OffsetDateTime) -> Result<String, DomainError> {
    to_utc(movie_time)?
        .format(&Rfc3339)
        .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))
}

/// Parses an RFC 3339 movie time.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value is not RFC 3339 or
/// falls outside the supported year range in UTC.
pub fn parse_movie_time(value: &str) -> Result<OffsetDateTime, DomainError> {
    let parsed: OffsetDateTime = OffsetDateTime::parse(value.trim(), &Rfc3339)
        .map_err(|e| DomainError::InvalidTimestamp(format!("{value}: {e}")))?;
    to_utc(parsed)
}
