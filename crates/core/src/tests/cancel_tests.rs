// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{AccountId, Movie, MovieId, Ticket, TicketId, TicketType};
use rust_decimal_macros::dec;

use crate::tests::helpers::{
    create_test_caller, create_test_client, create_test_ledger, create_test_movie,
    create_test_movie_time,
};
use crate::{ErrorKind, LedgerError, TicketFilter};

#[test]
fn test_cancel_reverses_reserve() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(12.5), 10);
    // Take one seat first so the pool is not full.
    ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();
    let available_before: u32 = ledger.movie(movie_id).unwrap().available_seats();

    let ticket: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Reduced,
        )
        .unwrap();
    ledger
        .cancel(&create_test_caller(), ticket.ticket_id())
        .unwrap();

    assert_eq!(
        ledger.movie(movie_id).unwrap().available_seats(),
        available_before
    );
    assert_eq!(
        ledger.ticket(ticket.ticket_id()),
        Err(LedgerError::TicketNotFound(ticket.ticket_id()))
    );
}

#[test]
fn test_cancel_unknown_ticket_fails_with_not_found() {
    let ledger = create_test_ledger();
    let ticket_id: TicketId = TicketId::generate();

    let result: Result<(), LedgerError> = ledger.cancel(&create_test_caller(), ticket_id);

    assert_eq!(result, Err(LedgerError::TicketNotFound(ticket_id)));
}

#[test]
fn test_cancel_twice_fails_second_time() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(12.5), 1);
    let ticket: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();

    ledger
        .cancel(&create_test_caller(), ticket.ticket_id())
        .unwrap();
    let second: Result<(), LedgerError> = ledger.cancel(&create_test_caller(), ticket.ticket_id());

    assert_eq!(second, Err(LedgerError::TicketNotFound(ticket.ticket_id())));
    let movie: Movie = ledger.movie(movie_id).unwrap();
    assert_eq!(movie.available_seats(), movie.capacity());
}

#[test]
fn test_cancel_never_pushes_seats_above_capacity() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(12.5), 2);
    // A ticket whose seat was never taken from the pool.
    let movie: Movie = ledger.movie(movie_id).unwrap();
    let orphan: Ticket = Ticket::issue(
        TicketId::generate(),
        client_id,
        &movie,
        create_test_movie_time(),
        TicketType::Standard,
    )
    .unwrap();
    ledger.store().import_ticket(orphan.clone()).unwrap();

    let err: LedgerError = ledger
        .cancel(&create_test_caller(), orphan.ticket_id())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConsistencyViolation);
    assert_eq!(ledger.movie(movie_id).unwrap().available_seats(), 2);
    assert_eq!(ledger.tickets(TicketFilter::All).unwrap().len(), 1);
}
