// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket mutations.
//!
//! Reservation and cancellation each touch a movie row and a ticket row.
//! Both happen inside one transaction: the version-guarded movie write and
//! the ticket insert or delete commit together or not at all.

use cinema_ledger_domain::{Movie, Ticket};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::data_models::TicketColumns;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;
use crate::mutations::movies::{write_movie_mysql, write_movie_sqlite};

backend_fn! {
/// Inserts a ticket row.
///
/// # Errors
///
/// Returns an error if the row cannot be inserted.
fn insert_ticket(conn: &mut _, ticket: &Ticket) -> Result<(), PersistenceError> {
    let columns: TicketColumns = TicketColumns::from_ticket(ticket)?;

    diesel::insert_into(tickets::table)
        .values((
            tickets::ticket_id.eq(&columns.ticket_id),
            tickets::client_id.eq(&columns.client_id),
            tickets::movie_id.eq(&columns.movie_id),
            tickets::movie_time.eq(&columns.movie_time),
            tickets::ticket_type.eq(&columns.ticket_type),
            tickets::final_price.eq(&columns.final_price),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a ticket row.
///
/// # Errors
///
/// Returns `PersistenceError::TicketNotFound` if the row is already gone.
fn remove_ticket(conn: &mut _, ticket_id: &str) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(tickets::table)
        .filter(tickets::ticket_id.eq(ticket_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::TicketNotFound(ticket_id.to_string()));
    }
    Ok(())
}
}

backend_fn! {
/// Updates a ticket's movie time.
///
/// Price, type and references are fixed at reservation and never rewritten.
///
/// # Errors
///
/// Returns `PersistenceError::TicketNotFound` if the ticket does not exist.
pub fn update_ticket(conn: &mut _, ticket: &Ticket) -> Result<(), PersistenceError> {
    let columns: TicketColumns = TicketColumns::from_ticket(ticket)?;

    info!(ticket_id = %columns.ticket_id, movie_time = %columns.movie_time, "Updating ticket");

    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::ticket_id.eq(&columns.ticket_id))
        .set(tickets::movie_time.eq(&columns.movie_time))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::TicketNotFound(columns.ticket_id));
    }
    Ok(())
}
}

/// Commits a reservation: the decremented movie and the new ticket (`SQLite` version).
///
/// # Errors
///
/// Returns `PersistenceError::VersionConflict` if the movie changed since it
/// was loaded. Nothing is written on error.
pub fn save_movie_and_ticket_sqlite(
    conn: &mut SqliteConnection,
    movie: &Movie,
    ticket: &Ticket,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        write_movie_sqlite(conn, movie)?;
        insert_ticket_sqlite(conn, ticket)
    })?;

    info!(
        movie_id = %movie.movie_id(),
        ticket_id = %ticket.ticket_id(),
        "Reservation committed"
    );
    Ok(())
}

/// Commits a reservation: the decremented movie and the new ticket (`MySQL` version).
///
/// # Errors
///
/// Returns `PersistenceError::VersionConflict` if the movie changed since it
/// was loaded. Nothing is written on error.
pub fn save_movie_and_ticket_mysql(
    conn: &mut MysqlConnection,
    movie: &Movie,
    ticket: &Ticket,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        write_movie_mysql(conn, movie)?;
        insert_ticket_mysql(conn, ticket)
    })?;

    info!(
        movie_id = %movie.movie_id(),
        ticket_id = %ticket.ticket_id(),
        "Reservation committed"
    );
    Ok(())
}

/// Commits a cancellation: ticket removal and the incremented movie (`SQLite` version).
///
/// # Errors
///
/// Returns `PersistenceError::TicketNotFound` if the ticket is gone or
/// `PersistenceError::VersionConflict` if the movie changed since it was
/// loaded. Nothing is written on error.
pub fn delete_ticket_and_release_movie_sqlite(
    conn: &mut SqliteConnection,
    ticket: &Ticket,
    movie: &Movie,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        remove_ticket_sqlite(conn, &ticket.ticket_id().to_string())?;
        write_movie_sqlite(conn, movie)
    })?;

    info!(
        movie_id = %movie.movie_id(),
        ticket_id = %ticket.ticket_id(),
        "Cancellation committed"
    );
    Ok(())
}

/// Commits a cancellation: ticket removal and the incremented movie (`MySQL` version).
///
/// # Errors
///
/// Returns `PersistenceError::TicketNotFound` if the ticket is gone or
/// `PersistenceError::VersionConflict` if the movie changed since it was
/// loaded. Nothing is written on error.
pub fn delete_ticket_and_release_movie_mysql(
    conn: &mut MysqlConnection,
    ticket: &Ticket,
    movie: &Movie,
) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        remove_ticket_mysql(conn, &ticket.ticket_id().to_string())?;
        write_movie_mysql(conn, movie)
    })?;

    info!(
        movie_id = %movie.movie_id(),
        ticket_id = %ticket.ticket_id(),
        "Cancellation committed"
    );
    Ok(())
}
