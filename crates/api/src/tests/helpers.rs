// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use cinema_ledger::Ledger;
use cinema_ledger_domain::{Account, AccountId, Role};
use cinema_ledger_persistence::{Persistence, SharedPersistence};
use rust_decimal_macros::dec;

use crate::{
    AuthenticatedActor, BookingLedger, CreateMovieRequest, MovieInfo, ReserveRequest,
    create_movie,
};

pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_MOVIE_TIME: &str = "2026-05-02T18:15:00Z";

pub fn create_test_ledger() -> BookingLedger {
    let persistence: Persistence = Persistence::new_in_memory()
        .expect("in-memory database")
        .with_password_cost(4);
    Ledger::new(SharedPersistence::new(persistence))
}

pub fn create_test_account(ledger: &BookingLedger, login: &str, role: Role) -> AuthenticatedActor {
    let account: Account = Account::new(AccountId::generate(), login, role).unwrap();
    ledger
        .store()
        .lock()
        .unwrap()
        .create_account(&account, TEST_PASSWORD)
        .unwrap();
    AuthenticatedActor::from_account(&account)
}

pub fn create_test_staff(ledger: &BookingLedger) -> AuthenticatedActor {
    create_test_account(ledger, "StaffMember1", Role::Staff)
}

pub fn create_test_admin(ledger: &BookingLedger) -> AuthenticatedActor {
    create_test_account(ledger, "AdminUser1", Role::Admin)
}

pub fn create_test_client(ledger: &BookingLedger, login: &str) -> AuthenticatedActor {
    create_test_account(ledger, login, Role::Client)
}

pub fn create_test_movie(
    ledger: &BookingLedger,
    staff: &AuthenticatedActor,
    capacity: u32,
) -> MovieInfo {
    let request: CreateMovieRequest = CreateMovieRequest {
        title: String::from("Pulp Fiction"),
        base_price: dec!(45.75),
        screening_room: 1,
        capacity,
    };
    create_movie(ledger, &request, staff).unwrap().movie
}

pub fn create_test_reserve_request(
    movie: &MovieInfo,
    client_id: Option<String>,
    ticket_type: &str,
) -> ReserveRequest {
    ReserveRequest {
        movie_id: movie.movie_id.clone(),
        client_id,
        movie_time: String::from(TEST_MOVIE_TIME),
        ticket_type: ticket_type.to_string(),
    }
}
