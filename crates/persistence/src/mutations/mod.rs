// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Single-statement mutations are generated for both backends by `backend_fn!`.
//! Multi-statement units that call other backend-specific helpers inside one
//! transaction are written out once per backend.
//!
//! ## Module Organization
//!
//! - `accounts`: Account creation, activation and password changes
//! - `movies`: Movie inserts, version-guarded writes and deletion
//! - `tickets`: Reservation and cancellation units, ticket updates

pub mod accounts;
pub mod movies;
pub mod tickets;

pub use accounts::{
    create_account_mysql, create_account_sqlite, set_account_active_mysql,
    set_account_active_sqlite, update_password_mysql, update_password_sqlite,
};
pub use movies::{
    delete_movie_mysql, delete_movie_sqlite, insert_movie_mysql, insert_movie_sqlite,
    write_movie_mysql, write_movie_sqlite,
};
pub use tickets::{
    delete_ticket_and_release_movie_mysql, delete_ticket_and_release_movie_sqlite,
    save_movie_and_ticket_mysql, save_movie_and_ticket_sqlite, update_ticket_mysql,
    update_ticket_sqlite,
};
