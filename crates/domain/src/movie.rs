// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movies and their seat pool.
//!
//! A movie owns a single seat counter, `available_seats`, with exactly two
//! legal transitions:
//!
//! - `reserve_seat` (decrement), guarded by `available_seats > 0`
//! - `release_seat` (increment), guarded by `available_seats < capacity`
//!
//! Capacity changes are a separate administrative transition that keeps the
//! number of sold seats constant. Every transition returns a new `Movie`; the
//! original value is left untouched so a failed commit never leaves a
//! half-applied counter behind.

use crate::error::DomainError;
use crate::types::MovieId;
use crate::validation::{
    validate_base_price, validate_capacity, validate_screening_room, validate_title,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A movie showing and its seat inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    movie_id: MovieId,
    title: String,
    base_price: Decimal,
    screening_room: u32,
    capacity: u32,
    available_seats: u32,
    /// Optimistic concurrency token. Stores bump it on every committed write.
    version: u64,
}

impl Movie {
    /// Creates a new movie with every seat available.
    ///
    /// # Errors
    ///
    /// Returns an error if the title, price, room or capacity is invalid.
    pub fn new(
        movie_id: MovieId,
        title: &str,
        base_price: Decimal,
        screening_room: u32,
        capacity: u32,
    ) -> Result<Self, DomainError> {
        validate_title(title)?;
        validate_base_price(base_price)?;
        validate_screening_room(screening_room)?;
        validate_capacity(capacity)?;

        Ok(Self {
            movie_id,
            title: title.trim().to_string(),
            base_price,
            screening_room,
            capacity,
            available_seats: capacity,
            version: 0,
        })
    }

    /// Rebuilds a movie from stored fields.
    ///
    /// Stored descriptive fields are trusted. The seat counter is not: a
    /// counter above capacity means the store was written outside the
    /// ledger and is reported as `SeatCounterOutOfRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatCounterOutOfRange` if `available_seats`
    /// exceeds `capacity`.
    pub fn restore(
        movie_id: MovieId,
        title: String,
        base_price: Decimal,
        screening_room: u32,
        capacity: u32,
        available_seats: u32,
        version: u64,
    ) -> Result<Self, DomainError> {
        if available_seats > capacity {
            return Err(DomainError::SeatCounterOutOfRange {
                movie_id,
                available_seats,
                capacity,
            });
        }

        Ok(Self {
            movie_id,
            title,
            base_price,
            screening_room,
            capacity,
            available_seats,
            version,
        })
    }

    #[must_use]
    pub const fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn base_price(&self) -> Decimal {
        self.base_price
    }

    #[must_use]
    pub const fn screening_room(&self) -> u32 {
        self.screening_room
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub const fn available_seats(&self) -> u32 {
        self.available_seats
    }

    /// Returns the version observed when this value was loaded.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns this movie as a store holds it after a version-guarded write.
    #[must_use]
    pub fn committed(&self) -> Self {
        Self {
            version: self.version + 1,
            ..self.clone()
        }
    }

    /// Returns the number of seats currently held by tickets.
    #[must_use]
    pub const fn sold_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.available_seats)
    }

    /// Returns true when no seats remain.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }

    /// Takes one seat out of the pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SoldOut` if no seats remain.
    pub fn reserve_seat(&self) -> Result<Self, DomainError> {
        let available_seats: u32 = self
            .available_seats
            .checked_sub(1)
            .ok_or(DomainError::SoldOut(self.movie_id))?;

        Ok(Self {
            available_seats,
            ..self.clone()
        })
    }

    /// Returns one seat to the pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatCounterOutOfRange` if the pool is already
    /// full. That state means a ticket existed without a sold seat.
    pub fn release_seat(&self) -> Result<Self, DomainError> {
        if self.available_seats >= self.capacity {
            return Err(DomainError::SeatCounterOutOfRange {
                movie_id: self.movie_id,
                available_seats: self.available_seats.saturating_add(1),
                capacity: self.capacity,
            });
        }

        Ok(Self {
            available_seats: self.available_seats + 1,
            ..self.clone()
        })
    }

    /// Changes the capacity while keeping every sold seat sold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `new_capacity` is below the
    /// number of sold seats, or `DomainError::CapacityAboveLimit` if it
    /// exceeds the largest room.
    pub fn with_capacity(&self, new_capacity: u32) -> Result<Self, DomainError> {
        let sold: u32 = self.sold_seats();
        if new_capacity < sold {
            return Err(DomainError::InvalidCapacity {
                movie_id: self.movie_id,
                requested: new_capacity,
                sold,
            });
        }
        validate_capacity(new_capacity)?;

        Ok(Self {
            capacity: new_capacity,
            available_seats: new_capacity - sold,
            ..self.clone()
        })
    }

    /// Replaces the descriptive fields, leaving the seat pool unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the title, price or room is invalid.
    pub fn with_details(
        &self,
        title: &str,
        base_price: Decimal,
        screening_room: u32,
    ) -> Result<Self, DomainError> {
        validate_title(title)?;
        validate_base_price(base_price)?;
        validate_screening_room(screening_room)?;

        Ok(Self {
            title: title.trim().to_string(),
            base_price,
            screening_room,
            ..self.clone()
        })
    }
}
