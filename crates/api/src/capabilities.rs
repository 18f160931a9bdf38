// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what an account is permitted to do. They are
//! advisory only and do not replace the checks in the handlers.

use cinema_ledger_domain::Role;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::AuthError;
use crate::request_response::{Capabilities, Capability};

/// Computes the capabilities of an authenticated account.
///
/// Every flag is derived from the same `AuthorizationService` rule the
/// matching handler enforces.
#[must_use]
pub fn compute_capabilities(actor: &AuthenticatedActor) -> Capabilities {
    let allowed = |result: Result<(), AuthError>| Capability::from_bool(result.is_ok());

    Capabilities {
        can_read_movies: allowed(AuthorizationService::authorize_read_movies(actor)),
        can_manage_movies: allowed(AuthorizationService::authorize_manage_movies(
            actor,
            "manage_movies",
        )),
        can_reserve_for_self: allowed(AuthorizationService::authorize_reserve(
            actor,
            actor.account_id,
        )),
        // Only Staff book on behalf of someone else
        can_reserve_for_others: Capability::from_bool(actor.role == Role::Staff),
        can_list_all_tickets: allowed(AuthorizationService::authorize_list_tickets(actor)),
        can_list_accounts: allowed(AuthorizationService::authorize_list_accounts(actor)),
        can_manage_accounts: allowed(AuthorizationService::authorize_manage_accounts(
            actor,
            "manage_accounts",
        )),
    }
}
