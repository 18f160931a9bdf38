// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{AccountId, DomainError, Movie, MovieId, TicketType};
use rust_decimal_macros::dec;

use crate::tests::helpers::{
    create_test_caller, create_test_client, create_test_ledger, create_test_movie,
    create_test_movie_time,
};
use crate::{ErrorKind, LedgerError};

#[test]
fn test_update_capacity_below_sold_seats_fails_with_invalid_capacity() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 2);
    ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();

    let result: Result<Movie, LedgerError> =
        ledger.update_capacity(&create_test_caller(), movie_id, 0);

    assert_eq!(
        result,
        Err(LedgerError::InvalidCapacity {
            movie_id,
            requested: 0,
            sold: 1,
        })
    );
    let movie: Movie = ledger.movie(movie_id).unwrap();
    assert_eq!(movie.capacity(), 2);
    assert_eq!(movie.available_seats(), 1);
}

#[test]
fn test_update_capacity_preserves_sold_seats() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 2);
    ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();

    let movie: Movie = ledger
        .update_capacity(&create_test_caller(), movie_id, 6)
        .unwrap();

    assert_eq!(movie.capacity(), 6);
    assert_eq!(movie.available_seats(), 5);
    assert_eq!(movie.sold_seats(), 1);
}

#[test]
fn test_update_capacity_to_exactly_sold_seats_sells_out() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 2);
    ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();

    let movie: Movie = ledger
        .update_capacity(&create_test_caller(), movie_id, 1)
        .unwrap();
    assert!(movie.is_sold_out());

    let err: LedgerError = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SoldOut);
}

#[test]
fn test_update_capacity_above_room_limit_is_invalid_input() {
    let ledger = create_test_ledger();
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 2);

    let result: Result<Movie, LedgerError> =
        ledger.update_capacity(&create_test_caller(), movie_id, 500);

    assert!(matches!(
        result,
        Err(LedgerError::InvalidInput(DomainError::CapacityAboveLimit { .. }))
    ));
}

#[test]
fn test_update_capacity_unknown_movie_fails_with_not_found() {
    let ledger = create_test_ledger();
    let movie_id: MovieId = MovieId::generate();

    let result: Result<Movie, LedgerError> =
        ledger.update_capacity(&create_test_caller(), movie_id, 10);

    assert_eq!(result, Err(LedgerError::MovieNotFound(movie_id)));
}
