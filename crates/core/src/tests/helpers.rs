// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Role};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;

use crate::{BookingStore, Caller, Ledger, MemoryStore};

pub fn create_test_caller() -> Caller {
    Caller::system("ledger-tests")
}

pub fn create_test_movie_time() -> OffsetDateTime {
    datetime!(2026-03-14 20:30 UTC)
}

/// A valid local time whose UTC instant lies past the end of year 9999.
pub fn create_test_unrepresentable_time() -> OffsetDateTime {
    OffsetDateTime::parse("9999-12-31T23:30:00-01:00", &Rfc3339).unwrap()
}

pub fn create_test_ledger() -> Ledger<MemoryStore> {
    Ledger::new(MemoryStore::new())
}

pub fn create_test_client(store: &MemoryStore, login: &str) -> AccountId {
    let account: Account = Account::new(AccountId::generate(), login, Role::Client).unwrap();
    let account_id: AccountId = account.account_id();
    store.insert_account(account).unwrap();
    account_id
}

pub fn create_test_account(store: &MemoryStore, login: &str, role: Role) -> AccountId {
    let account: Account = Account::new(AccountId::generate(), login, role).unwrap();
    let account_id: AccountId = account.account_id();
    store.insert_account(account).unwrap();
    account_id
}

pub fn create_test_movie(store: &MemoryStore, base_price: Decimal, capacity: u32) -> MovieId {
    let movie: Movie =
        Movie::new(MovieId::generate(), "Test Showing", base_price, 1, capacity).unwrap();
    store.insert_movie(&movie).unwrap();
    movie.movie_id()
}
