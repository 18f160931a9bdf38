// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Account, AccountId, DomainError, Role};

#[test]
fn test_new_account_is_active() {
    let account: Account = Account::new(AccountId::generate(), "clientone", Role::Client).unwrap();
    assert!(account.is_active());
    assert!(account.can_book());
}

#[test]
fn test_only_active_clients_can_book() {
    let client: Account = Account::new(AccountId::generate(), "clientone", Role::Client).unwrap();
    let staff: Account = Account::new(AccountId::generate(), "staffmember", Role::Staff).unwrap();

    assert!(!client.with_active(false).can_book());
    assert!(!staff.can_book());
}

#[test]
fn test_new_account_rejects_short_login() {
    assert!(matches!(
        Account::new(AccountId::generate(), "short", Role::Client),
        Err(DomainError::InvalidLogin(_))
    ));
}
