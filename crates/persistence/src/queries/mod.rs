// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `accounts`: Account lookups and listings
//! - `movies`: Movie lookups and ticket reference counts
//! - `tickets`: Ticket lookups and filtered listings
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod accounts;
pub mod movies;
pub mod tickets;

pub use accounts::{
    get_account_by_id_mysql, get_account_by_id_sqlite, get_account_by_login_mysql,
    get_account_by_login_sqlite, list_accounts_mysql, list_accounts_sqlite,
};
pub use movies::{get_movie_mysql, get_movie_sqlite, list_movies_mysql, list_movies_sqlite};
pub use tickets::{get_ticket_mysql, get_ticket_sqlite, list_tickets_mysql, list_tickets_sqlite};
