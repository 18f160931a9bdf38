// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_api::ApiError;
use cinema_ledger_persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// The database could not be opened.
    #[error("Failed to open database: {0}")]
    Database(#[from] PersistenceError),

    /// The command needs credentials that were not given.
    #[error("{0} is required for this command (flag or environment variable)")]
    MissingCredential(&'static str),

    /// The operation was refused or failed.
    #[error("{0} (status {status})", status = .0.status_code())]
    Api(#[from] ApiError),

    /// The response could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
