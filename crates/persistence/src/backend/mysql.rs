// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB-specific persistence utilities.
//!
//! ## Usage
//!
//! The CLI connects here when `--mysql-url` is given. The backend is
//! validated by tests marked `#[ignore]`, executed only via
//! `cargo xtask test-mariadb`, which:
//!
//! 1. Starts a `MariaDB` container via Docker
//! 2. Sets `DATABASE_URL` and `CINEMA_LEDGER_TEST_BACKEND`
//! 3. Runs ignored tests explicitly
//! 4. Stops and removes the container
//!
//! ## Compilation Requirements
//!
//! `MySQL` support is compiled by default (no feature flags) and needs the
//! `MySQL` client development libraries plus `pkg-config` at build time.
//!
//! ## Schema Parity
//!
//! `migrations_mysql/` must stay schema-equivalent to `migrations/`: same
//! tables, columns, constraints, foreign keys and indexes. Change both
//! directories together.

use diesel::sql_types::Integer;
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

/// Result type for foreign key check query.
#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// `MySQL`-specific migrations.
pub const MYSQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

/// Initialize a `MySQL` database at the given URL and run migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Initializing MySQL database");

    let mut conn: MysqlConnection = MysqlConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Run pending migrations on the provided `MySQL` connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut MysqlConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running MySQL database migrations");
    conn.run_pending_migrations(MYSQL_MIGRATIONS)?;
    Ok(())
}

/// Verify that foreign key enforcement is enabled on `MySQL`.
///
/// `MySQL` enforces foreign keys when using the `InnoDB` engine and
/// `foreign_key_checks` is on.
///
/// # Errors
///
/// Returns an error if verification fails.
pub fn verify_foreign_key_enforcement(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    // NOTE: raw SQL (Diesel has no system variable query DSL)
    let check: ForeignKeyCheck = diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks")
        .get_result(conn)
        .map_err(|e| {
            PersistenceError::QueryFailed(format!(
                "Failed to verify foreign key enforcement: {e}"
            ))
        })?;

    if check.fk_checks != 1 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("MySQL foreign key enforcement is enabled");
    Ok(())
}
