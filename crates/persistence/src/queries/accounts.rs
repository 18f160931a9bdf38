// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{AccountData, AccountRow};
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut _,
    account_id: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by ID: {}", account_id);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}
}

backend_fn! {
/// Retrieves an account by login.
///
/// Logins are matched exactly.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no account has this login.
pub fn get_account_by_login(
    conn: &mut _,
    login: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by login: {}", login);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::login.eq(login))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}
}

backend_fn! {
/// Lists accounts ordered by login, optionally restricted to one role.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_accounts(
    conn: &mut _,
    role: Option<&str>,
) -> Result<Vec<AccountData>, PersistenceError> {
    let mut query = accounts::table
        .select(AccountRow::as_select())
        .order(accounts::login.asc())
        .into_boxed();

    if let Some(role) = role {
        query = query.filter(accounts::role.eq(role));
    }

    let rows: Vec<AccountRow> = query.load(conn)?;
    Ok(rows.into_iter().map(AccountData::from).collect())
}
}
