// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Role, Ticket, TicketId, TicketType};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::Persistence;

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_PASSWORD_COST: u32 = 4;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .expect("in-memory database")
        .with_password_cost(TEST_PASSWORD_COST)
}

pub fn create_test_account(persistence: &mut Persistence, login: &str, role: Role) -> Account {
    let account: Account = Account::new(AccountId::generate(), login, role).unwrap();
    persistence.create_account(&account, TEST_PASSWORD).unwrap();
    account
}

pub fn create_test_movie(
    persistence: &mut Persistence,
    title: &str,
    base_price: Decimal,
    capacity: u32,
) -> Movie {
    let movie: Movie = Movie::new(MovieId::generate(), title, base_price, 4, capacity).unwrap();
    persistence.insert_movie(&movie).unwrap();
    movie
}

pub fn create_test_movie_time() -> OffsetDateTime {
    datetime!(2026-05-02 18:15 UTC)
}

/// Reserves one seat directly through the adapter and returns the ticket.
pub fn create_test_ticket(
    persistence: &mut Persistence,
    movie: &Movie,
    client: &Account,
    ticket_type: TicketType,
) -> Ticket {
    let stored: Movie = persistence.get_movie(movie.movie_id()).unwrap().unwrap();
    let reserved: Movie = stored.reserve_seat().unwrap();
    let ticket: Ticket = Ticket::issue(
        TicketId::generate(),
        client.account_id(),
        &reserved,
        create_test_movie_time(),
        ticket_type,
    )
    .unwrap();
    persistence.save_movie_and_ticket(&reserved, &ticket).unwrap();
    ticket
}
