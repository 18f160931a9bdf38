// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod account;
mod error;
mod movie;
mod pricing;
mod ticket;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use account::Account;
pub use error::DomainError;
pub use movie::Movie;
pub use pricing::final_price;
pub use ticket::{Ticket, format_movie_time, parse_movie_time};
pub use types::{AccountId, MovieId, Role, TicketId, TicketType};
pub use validation::{
    MAX_BASE_PRICE, MAX_CAPACITY, MAX_LOGIN_LENGTH, MAX_SCREENING_ROOM, MAX_TITLE_LENGTH,
    MIN_LOGIN_LENGTH, validate_base_price, validate_capacity, validate_login,
    validate_screening_room, validate_title,
};
