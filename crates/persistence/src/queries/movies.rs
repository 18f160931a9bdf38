// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie queries.

use cinema_ledger_domain::Movie;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::MovieRow;
use crate::diesel_schema::{movies, tickets};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a movie by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
/// Returns `Ok(None)` if the movie is not found.
pub fn get_movie(conn: &mut _, movie_id: &str) -> Result<Option<Movie>, PersistenceError> {
    debug!("Looking up movie by ID: {}", movie_id);

    movies::table
        .filter(movies::movie_id.eq(movie_id))
        .select(MovieRow::as_select())
        .first(conn)
        .optional()?
        .map(MovieRow::into_movie)
        .transpose()
}
}

backend_fn! {
/// Lists every movie ordered by title.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_movies(conn: &mut _) -> Result<Vec<Movie>, PersistenceError> {
    let rows: Vec<MovieRow> = movies::table
        .select(MovieRow::as_select())
        .order((movies::title.asc(), movies::movie_id.asc()))
        .load(conn)?;

    rows.into_iter().map(MovieRow::into_movie).collect()
}
}

backend_fn! {
/// Counts the tickets referencing a movie.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_tickets_for_movie(conn: &mut _, movie_id: &str) -> Result<i64, PersistenceError> {
    Ok(tickets::table
        .filter(tickets::movie_id.eq(movie_id))
        .count()
        .get_result(conn)?)
}
}
