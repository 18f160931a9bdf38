// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket queries.

use cinema_ledger::TicketFilter;
use cinema_ledger_domain::Ticket;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::TicketRow;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a ticket by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
/// Returns `Ok(None)` if the ticket is not found.
pub fn get_ticket(conn: &mut _, ticket_id: &str) -> Result<Option<Ticket>, PersistenceError> {
    debug!("Looking up ticket by ID: {}", ticket_id);

    tickets::table
        .filter(tickets::ticket_id.eq(ticket_id))
        .select(TicketRow::as_select())
        .first(conn)
        .optional()?
        .map(TicketRow::into_ticket)
        .transpose()
}
}

backend_fn! {
/// Lists tickets selected by `filter`, ordered by movie time.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_tickets(conn: &mut _, filter: TicketFilter) -> Result<Vec<Ticket>, PersistenceError> {
    let mut query = tickets::table
        .select(TicketRow::as_select())
        .order((tickets::movie_time.asc(), tickets::ticket_id.asc()))
        .into_boxed();

    match filter {
        TicketFilter::All => {}
        TicketFilter::ForMovie(movie_id) => {
            query = query.filter(tickets::movie_id.eq(movie_id.to_string()));
        }
        TicketFilter::ForClient(client_id) => {
            query = query.filter(tickets::client_id.eq(client_id.to_string()));
        }
    }

    let rows: Vec<TicketRow> = query.load(conn)?;
    rows.into_iter().map(TicketRow::into_ticket).collect()
}
}
