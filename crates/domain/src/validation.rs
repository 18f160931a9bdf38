// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;

/// Longest accepted movie title, in characters.
pub const MAX_TITLE_LENGTH: usize = 150;

/// Highest accepted base price.
pub const MAX_BASE_PRICE: Decimal = Decimal::ONE_HUNDRED;

/// Highest screening room number.
pub const MAX_SCREENING_ROOM: u32 = 30;

/// Largest seat capacity of any screening room.
pub const MAX_CAPACITY: u32 = 120;

/// Shortest accepted login, in characters.
pub const MIN_LOGIN_LENGTH: usize = 8;

/// Longest accepted login, in characters.
pub const MAX_LOGIN_LENGTH: usize = 20;

/// Validates a movie title.
///
/// # Errors
///
/// Returns `DomainError::InvalidTitle` if the title is blank or longer
/// than `MAX_TITLE_LENGTH` characters.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let trimmed: &str = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }
    let length: usize = trimmed.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "Title is {length} characters, maximum is {MAX_TITLE_LENGTH}"
        )));
    }
    Ok(())
}

/// Validates a base price.
///
/// # Errors
///
/// Returns `DomainError::InvalidBasePrice` if the price is negative or
/// above `MAX_BASE_PRICE`.
pub fn validate_base_price(price: Decimal) -> Result<(), DomainError> {
    if price < Decimal::ZERO || price > MAX_BASE_PRICE {
        return Err(DomainError::InvalidBasePrice {
            price,
            max: MAX_BASE_PRICE,
        });
    }
    Ok(())
}

/// Validates a screening room number.
///
/// # Errors
///
/// Returns `DomainError::InvalidScreeningRoom` if the room is outside
/// `1..=MAX_SCREENING_ROOM`.
pub const fn validate_screening_room(room: u32) -> Result<(), DomainError> {
    if room == 0 || room > MAX_SCREENING_ROOM {
        return Err(DomainError::InvalidScreeningRoom {
            room,
            max: MAX_SCREENING_ROOM,
        });
    }
    Ok(())
}

/// Validates a seat capacity against the largest room.
///
/// # Errors
///
/// Returns `DomainError::CapacityAboveLimit` if the capacity exceeds
/// `MAX_CAPACITY`.
pub const fn validate_capacity(capacity: u32) -> Result<(), DomainError> {
    if capacity > MAX_CAPACITY {
        return Err(DomainError::CapacityAboveLimit {
            requested: capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}

/// Validates an account login.
///
/// Logins are between `MIN_LOGIN_LENGTH` and `MAX_LOGIN_LENGTH` characters
/// and contain no whitespace.
///
/// # Errors
///
/// Returns `DomainError::InvalidLogin` describing the first rule violated.
pub fn validate_login(login: &str) -> Result<(), DomainError> {
    let length: usize = login.chars().count();
    if !(MIN_LOGIN_LENGTH..=MAX_LOGIN_LENGTH).contains(&length) {
        return Err(DomainError::InvalidLogin(format!(
            "Login must be between {MIN_LOGIN_LENGTH} and {MAX_LOGIN_LENGTH} characters, got {length}"
        )));
    }
    if login.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidLogin(String::from(
            "Login cannot contain whitespace",
        )));
    }
    Ok(())
}
