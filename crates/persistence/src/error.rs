// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger::StoreError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A stored row could not be turned back into a domain value.
    ReconstructionError(String),
    /// A stored row violates a seat-accounting invariant.
    CorruptRecord(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested account was not found.
    AccountNotFound(String),
    /// The login is already taken.
    DuplicateLogin(String),
    /// The requested movie was not found.
    MovieNotFound(String),
    /// The requested ticket was not found.
    TicketNotFound(String),
    /// The movie changed since it was loaded.
    VersionConflict {
        /// The movie whose write was rejected.
        movie_id: String,
        /// The version the write expected.
        expected_version: u64,
    },
    /// The movie cannot be deleted because tickets reference it.
    MovieReferenced { movie_id: String },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::ReconstructionError(msg) => write!(f, "Row reconstruction error: {msg}"),
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::AccountNotFound(msg) => write!(f, "Account not found: {msg}"),
            Self::DuplicateLogin(login) => write!(f, "Login already exists: {login}"),
            Self::MovieNotFound(msg) => write!(f, "Movie not found: {msg}"),
            Self::TicketNotFound(msg) => write!(f, "Ticket not found: {msg}"),
            Self::VersionConflict {
                movie_id,
                expected_version,
            } => write!(
                f,
                "Movie {movie_id} is no longer at version {expected_version}"
            ),
            Self::MovieReferenced { movie_id } => {
                write!(f, "Movie {movie_id} cannot be deleted: referenced by tickets")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::AccountNotFound(msg)
            | PersistenceError::MovieNotFound(msg)
            | PersistenceError::TicketNotFound(msg)
            | PersistenceError::NotFound(msg) => Self::NotFound(msg),
            PersistenceError::VersionConflict { .. } => Self::Conflict(err.to_string()),
            PersistenceError::MovieReferenced { .. } => Self::Referenced(err.to_string()),
            PersistenceError::CorruptRecord(msg) => Self::Corrupt(msg),
            other => Self::Backend(other.to_string()),
        }
    }
}
