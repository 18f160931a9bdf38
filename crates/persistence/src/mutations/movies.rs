// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie mutations.
//!
//! Every write to an existing movie row goes through `write_movie`, which
//! only matches the row at the version the caller loaded and bumps it. A
//! stale version updates nothing and is reported as a conflict.

use cinema_ledger_domain::Movie;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::MovieColumns;
use crate::diesel_schema::movies;
use crate::error::PersistenceError;
use crate::queries::movies::{count_tickets_for_movie_mysql, count_tickets_for_movie_sqlite};

backend_fn! {
/// Inserts a new movie row.
///
/// # Errors
///
/// Returns an error if the row cannot be inserted.
pub fn insert_movie(conn: &mut _, movie: &Movie) -> Result<(), PersistenceError> {
    let columns: MovieColumns = MovieColumns::from_movie(movie)?;

    info!(movie_id = %columns.movie_id, title = %columns.title, "Inserting movie");

    diesel::insert_into(movies::table)
        .values((
            movies::movie_id.eq(&columns.movie_id),
            movies::title.eq(&columns.title),
            movies::base_price.eq(&columns.base_price),
            movies::screening_room.eq(columns.screening_room),
            movies::capacity.eq(columns.capacity),
            movies::available_seats.eq(columns.available_seats),
            movies::version.eq(columns.version),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Writes a movie row if it is still at `movie.version()`.
///
/// On success the stored version becomes `movie.version() + 1`.
///
/// # Errors
///
/// Returns `PersistenceError::VersionConflict` if the stored version moved
/// on, or `PersistenceError::MovieNotFound` if the row is gone.
pub fn write_movie(conn: &mut _, movie: &Movie) -> Result<(), PersistenceError> {
    let columns: MovieColumns = MovieColumns::from_movie(movie)?;

    let rows_affected: usize = diesel::update(movies::table)
        .filter(movies::movie_id.eq(&columns.movie_id))
        .filter(movies::version.eq(columns.version))
        .set((
            movies::title.eq(&columns.title),
            movies::base_price.eq(&columns.base_price),
            movies::screening_room.eq(columns.screening_room),
            movies::capacity.eq(columns.capacity),
            movies::available_seats.eq(columns.available_seats),
            movies::version.eq(columns.version + 1),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        let exists: i64 = movies::table
            .filter(movies::movie_id.eq(&columns.movie_id))
            .count()
            .get_result(conn)?;

        if exists == 0 {
            return Err(PersistenceError::MovieNotFound(columns.movie_id));
        }
        return Err(PersistenceError::VersionConflict {
            movie_id: columns.movie_id,
            expected_version: movie.version(),
        });
    }

    debug!(
        movie_id = %columns.movie_id,
        version = columns.version + 1,
        available_seats = columns.available_seats,
        "Movie written"
    );
    Ok(())
}
}

/// Deletes a movie that no ticket references (`SQLite` version).
///
/// # Errors
///
/// Returns an error if:
/// - Tickets still reference the movie
/// - The movie does not exist
/// - The database operation fails
pub fn delete_movie_sqlite(
    conn: &mut SqliteConnection,
    movie_id: &str,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete movie ID: {}", movie_id);

    conn.transaction::<(), PersistenceError, _>(|conn| {
        if count_tickets_for_movie_sqlite(conn, movie_id)? > 0 {
            return Err(PersistenceError::MovieReferenced {
                movie_id: movie_id.to_string(),
            });
        }

        let rows_affected: usize = diesel::delete(movies::table)
            .filter(movies::movie_id.eq(movie_id))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::MovieNotFound(movie_id.to_string()));
        }
        Ok(())
    })?;

    info!("Deleted movie ID: {}", movie_id);
    Ok(())
}

/// Deletes a movie that no ticket references (`MySQL` version).
///
/// # Errors
///
/// Returns an error if:
/// - Tickets still reference the movie
/// - The movie does not exist
/// - The database operation fails
pub fn delete_movie_mysql(
    conn: &mut MysqlConnection,
    movie_id: &str,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete movie ID: {}", movie_id);

    conn.transaction::<(), PersistenceError, _>(|conn| {
        if count_tickets_for_movie_mysql(conn, movie_id)? > 0 {
            return Err(PersistenceError::MovieReferenced {
                movie_id: movie_id.to_string(),
            });
        }

        let rows_affected: usize = diesel::delete(movies::table)
            .filter(movies::movie_id.eq(movie_id))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::MovieNotFound(movie_id.to_string()));
        }
        Ok(())
    })?;

    info!("Deleted movie ID: {}", movie_id);
    Ok(())
}
