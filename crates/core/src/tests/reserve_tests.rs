// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{AccountId, DomainError, Movie, MovieId, Role, Ticket, TicketType};
use rust_decimal_macros::dec;

use crate::tests::helpers::{
    create_test_account, create_test_caller, create_test_client, create_test_ledger,
    create_test_movie, create_test_movie_time, create_test_unrepresentable_time,
};
use crate::{BookingStore, ErrorKind, LedgerError, TicketFilter};

#[test]
fn test_reserve_standard_ticket_charges_base_price() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(45.75), 100);

    let ticket: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();

    assert_eq!(ticket.final_price(), dec!(45.75));
    assert_eq!(ticket.client_id(), client_id);
    assert_eq!(ticket.movie_id(), movie_id);
    assert_eq!(ticket.movie_time(), create_test_movie_time());
}

#[test]
fn test_reserve_reduced_ticket_charges_three_quarters() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(40.0), 10);

    let ticket: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Reduced,
        )
        .unwrap();

    assert_eq!(ticket.final_price(), dec!(30.0));
}

#[test]
fn test_reserve_decrements_available_seats() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 3);

    for _ in 0..2 {
        ledger
            .reserve(
                &create_test_caller(),
                movie_id,
                client_id,
                create_test_movie_time(),
                TicketType::Standard,
            )
            .unwrap();
    }

    let movie: Movie = ledger.movie(movie_id).unwrap();
    assert_eq!(movie.available_seats(), 1);
    assert_eq!(movie.version(), 2);
    assert_eq!(
        ledger.tickets(TicketFilter::ForMovie(movie_id)).unwrap().len(),
        2
    );
}

#[test]
fn test_reserved_ticket_reads_back_identically() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(45.75), 100);

    let ticket: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Reduced,
        )
        .unwrap();

    let loaded: Ticket = ledger.store().load_ticket(ticket.ticket_id()).unwrap();
    assert_eq!(loaded, ticket);
}

#[test]
fn test_reserve_on_sold_out_movie_fails_without_side_effects() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 1);
    ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();
    let before: Movie = ledger.movie(movie_id).unwrap();

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        client_id,
        create_test_movie_time(),
        TicketType::Standard,
    );

    assert_eq!(result, Err(LedgerError::SoldOut(movie_id)));
    assert_eq!(ledger.movie(movie_id).unwrap(), before);
    assert_eq!(ledger.tickets(TicketFilter::All).unwrap().len(), 1);
}

#[test]
fn test_reserve_on_zero_capacity_movie_is_sold_out() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 0);

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
    assert_eq!(ledger.movie(movie_id).unwrap().available_seats(), 0);
}

#[test]
fn test_reserve_unknown_movie_fails_with_movie_not_found() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = MovieId::generate();

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        client_id,
        create_test_movie_time(),
        TicketType::Standard,
    );

    assert_eq!(result, Err(LedgerError::MovieNotFound(movie_id)));
}

#[test]
fn test_reserve_unknown_client_fails_with_client_not_found() {
    let ledger = create_test_ledger();
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 5);
    let client_id: AccountId = AccountId::generate();

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        client_id,
        create_test_movie_time(),
        TicketType::Standard,
    );

    assert_eq!(result, Err(LedgerError::ClientNotFound(client_id)));
    assert_eq!(ledger.movie(movie_id).unwrap().available_seats(), 5);
}

#[test]
fn test_reserve_for_staff_account_fails_with_client_not_found() {
    let ledger = create_test_ledger();
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 5);
    let staff_id: AccountId = create_test_account(ledger.store(), "staffmember", Role::Staff);

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        staff_id,
        create_test_movie_time(),
        TicketType::Standard,
    );

    assert_eq!(result, Err(LedgerError::ClientNotFound(staff_id)));
}

#[test]
fn test_reserve_for_inactive_client_fails_with_client_inactive() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(10), 5);
    ledger.store().set_account_active(client_id, false).unwrap();

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        client_id,
        create_test_movie_time(),
        TicketType::Standard,
    );

    assert_eq!(result, Err(LedgerError::ClientInactive(client_id)));
    assert_eq!(ledger.movie(movie_id).unwrap().available_seats(), 5);
    assert!(ledger.tickets(TicketFilter::All).unwrap().is_empty());
}

#[test]
fn test_reserve_uses_base_price_at_reservation_time() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(20), 5);

    let first: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Standard,
        )
        .unwrap();
    ledger
        .update_movie_details(
            &create_test_caller(),
            movie_id,
            &crate::MovieDetails {
                title: String::from("Test Showing"),
                base_price: dec!(24),
                screening_room: 1,
            },
        )
        .unwrap();
    let second: Ticket = ledger
        .reserve(
            &create_test_caller(),
            movie_id,
            client_id,
            create_test_movie_time(),
            TicketType::Reduced,
        )
        .unwrap();

    assert_eq!(ledger.ticket(first.ticket_id()).unwrap().final_price(), dec!(20));
    assert_eq!(second.final_price(), dec!(18));
}

#[test]
fn test_reserve_rejects_movie_time_past_utc_range_without_side_effects() {
    let ledger = create_test_ledger();
    let client_id: AccountId = create_test_client(ledger.store(), "clientone");
    let movie_id: MovieId = create_test_movie(ledger.store(), dec!(40), 3);

    let result: Result<Ticket, LedgerError> = ledger.reserve(
        &create_test_caller(),
        movie_id,
        client_id,
        create_test_unrepresentable_time(),
        TicketType::Standard,
    );

    assert!(matches!(
        result,
        Err(LedgerError::InvalidInput(DomainError::InvalidTimestamp(_)))
    ));
    let movie: Movie = ledger.movie(movie_id).unwrap();
    assert_eq!(movie.available_seats(), 3);
    assert_eq!(movie.version(), 0);
    assert!(ledger.tickets(TicketFilter::All).unwrap().is_empty());
}
