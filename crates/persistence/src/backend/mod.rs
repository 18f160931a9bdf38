// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations and the checks Diesel DSL cannot express.
//! Booking queries and mutations live in `queries/` and `mutations/` and
//! must work on every supported backend.
//!
//! - `sqlite`: `SQLite` backend (default for development and testing)
//! - `mysql`: MySQL/MariaDB backend (validated via opt-in tests)

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Backend checks run against an open connection.
pub trait PersistenceBackend: Connection {
    /// Verifies that foreign key enforcement is enabled.
    ///
    /// Tickets reference accounts and movies with `ON DELETE RESTRICT`; the
    /// store refuses to start if the backend would ignore those constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
