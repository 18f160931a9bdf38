// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::types::MovieId;

/// Errors that can occur during domain validation and seat accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Movie title is empty or too long.
    InvalidTitle(String),
    /// Base price is negative or above the allowed maximum.
    InvalidBasePrice {
        /// The rejected price.
        price: Decimal,
        /// The highest accepted price.
        max: Decimal,
    },
    /// Screening room number is outside the allowed range.
    InvalidScreeningRoom {
        /// The rejected room number.
        room: u32,
        /// The highest room number.
        max: u32,
    },
    /// Capacity exceeds the largest screening room.
    CapacityAboveLimit {
        /// The requested capacity.
        requested: u32,
        /// The largest accepted capacity.
        max: u32,
    },
    /// A capacity change would invalidate seats that are already sold.
    InvalidCapacity {
        /// The movie whose capacity was being changed.
        movie_id: MovieId,
        /// The requested capacity.
        requested: u32,
        /// Seats currently held by tickets.
        sold: u32,
    },
    /// No seats remain for the movie.
    SoldOut(MovieId),
    /// The seat counter is outside `0..=capacity`.
    SeatCounterOutOfRange {
        /// The affected movie.
        movie_id: MovieId,
        /// The observed available seat count.
        available_seats: u32,
        /// The movie capacity.
        capacity: u32,
    },
    /// Account login is malformed.
    InvalidLogin(String),
    /// Role name is not recognised.
    InvalidRole(String),
    /// Ticket type name is not recognised.
    InvalidTicketType(String),
    /// An identifier could not be parsed.
    InvalidIdentifier(String),
    /// A timestamp could not be parsed or formatted.
    InvalidTimestamp(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidBasePrice { price, max } => {
                write!(f, "Invalid base price {price}: must be between 0 and {max}")
            }
            Self::InvalidScreeningRoom { room, max } => {
                write!(f, "Invalid screening room {room}: must be between 1 and {max}")
            }
            Self::CapacityAboveLimit { requested, max } => {
                write!(f, "Capacity {requested} exceeds the maximum of {max} seats")
            }
            Self::InvalidCapacity {
                movie_id,
                requested,
                sold,
            } => write!(
                f,
                "Capacity {requested} for movie {movie_id} is below the {sold} seats already sold"
            ),
            Self::SoldOut(movie_id) => write!(f, "Movie {movie_id} is sold out"),
            Self::SeatCounterOutOfRange {
                movie_id,
                available_seats,
                capacity,
            } => write!(
                f,
                "Seat counter for movie {movie_id} out of range: {available_seats} available of {capacity}"
            ),
            Self::InvalidLogin(msg) => write!(f, "Invalid login: {msg}"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidTicketType(kind) => write!(f, "Invalid ticket type: {kind}"),
            Self::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {msg}"),
            Self::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
