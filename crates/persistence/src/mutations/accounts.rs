// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account mutations.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{MysqlConnection, SqliteConnection};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new, active account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `account_id` - The account ID
/// * `login` - The login, stored exactly as given
/// * `password` - The plain-text password (will be hashed)
/// * `role` - The role name
/// * `password_cost` - The bcrypt cost factor
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateLogin` if the login already exists,
/// or another error if the account cannot be created.
pub fn create_account(
    conn: &mut _,
    account_id: &str,
    login: &str,
    password: &str,
    role: &str,
    password_cost: u32,
) -> Result<(), PersistenceError> {
    info!(account_id, login, role, "Creating account");

    let password_hash: String = bcrypt::hash(password, password_cost)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;
    let created_at: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))?;

    let result: Result<usize, DieselError> = diesel::insert_into(accounts::table)
        .values((
            accounts::account_id.eq(account_id),
            accounts::login.eq(login),
            accounts::password_hash.eq(&password_hash),
            accounts::role.eq(role),
            accounts::is_active.eq(1),
            accounts::created_at.eq(&created_at),
        ))
        .execute(conn);

    match result {
        Ok(_) => {
            info!(account_id, "Account created successfully");
            Ok(())
        }
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::DuplicateLogin(login.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Activates or deactivates an account.
///
/// # Errors
///
/// Returns `PersistenceError::AccountNotFound` if no account has this ID.
pub fn set_account_active(
    conn: &mut _,
    account_id: &str,
    active: bool,
) -> Result<(), PersistenceError> {
    info!(account_id, active, "Setting account active flag");

    let rows_affected: usize = diesel::update(accounts::table)
        .filter(accounts::account_id.eq(account_id))
        .set(accounts::is_active.eq(i32::from(active)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AccountNotFound(format!(
            "Account with ID {account_id} not found"
        )));
    }
    Ok(())
}
}

backend_fn! {
/// Replaces an account's password.
///
/// # Errors
///
/// Returns `PersistenceError::AccountNotFound` if no account has this ID.
pub fn update_password(
    conn: &mut _,
    account_id: &str,
    password: &str,
    password_cost: u32,
) -> Result<(), PersistenceError> {
    info!(account_id, "Updating account password");

    let password_hash: String = bcrypt::hash(password, password_cost)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let rows_affected: usize = diesel::update(accounts::table)
        .filter(accounts::account_id.eq(account_id))
        .set(accounts::password_hash.eq(&password_hash))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AccountNotFound(format!(
            "Account with ID {account_id} not found"
        )));
    }
    Ok(())
}
}
