// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AccountId, Role};
use crate::validation::validate_login;
use serde::{Deserialize, Serialize};

/// A client, admin or staff account.
///
/// Password material is owned by the persistence layer and never appears
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    account_id: AccountId,
    login: String,
    role: Role,
    active: bool,
}

impl Account {
    /// Creates a new, active account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLogin` if the login is malformed.
    pub fn new(account_id: AccountId, login: &str, role: Role) -> Result<Self, DomainError> {
        validate_login(login)?;
        Ok(Self {
            account_id,
            login: login.to_string(),
            role,
            active: true,
        })
    }

    /// Rebuilds an account from stored fields.
    #[must_use]
    pub const fn restore(account_id: AccountId, login: String, role: Role, active: bool) -> Self {
        Self {
            account_id,
            login,
            role,
            active,
        }
    }

    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true for an active account holding the `Client` role.
    #[must_use]
    pub const fn can_book(&self) -> bool {
        self.active && matches!(self.role, Role::Client)
    }

    /// Returns a copy with the active flag set.
    #[must_use]
    pub fn with_active(&self, active: bool) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }
}
