// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{Account, AccountId, Role};

/// The identity on whose behalf a ledger operation runs.
///
/// Callers are resolved by the authentication layer and passed explicitly
/// into every mutating operation, where they are recorded on the
/// operation's tracing span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The account behind the call, if any.
    pub account_id: Option<AccountId>,
    /// A human-readable label (login or subsystem name).
    pub label: String,
    /// The account role, if the caller is an account.
    pub role: Option<Role>,
}

impl Caller {
    /// Creates a caller for an authenticated account.
    #[must_use]
    pub fn account(account: &Account) -> Self {
        Self {
            account_id: Some(account.account_id()),
            label: account.login().to_string(),
            role: Some(account.role()),
        }
    }

    /// Creates a caller for an internal subsystem such as seeding.
    #[must_use]
    pub fn system(label: &str) -> Self {
        Self {
            account_id: None,
            label: label.to_string(),
            role: None,
        }
    }
}

impl std::fmt::Display for Caller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.account_id, self.role) {
            (Some(id), Some(role)) => write!(f, "{}[{role}:{id}]", self.label),
            _ => write!(f, "system:{}", self.label),
        }
    }
}
