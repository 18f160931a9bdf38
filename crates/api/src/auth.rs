// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use cinema_ledger::Caller;
use cinema_ledger_domain::{Account, AccountId, Role, Ticket};
use cinema_ledger_persistence::{AccountData, Persistence};
use tracing::{info, warn};

use crate::error::AuthError;

/// An authenticated account with its role.
///
/// Produced only by `AuthenticationService::login`, or by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The account's identifier.
    pub account_id: AccountId,
    /// The account's login.
    pub login: String,
    /// The role assigned to the account.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(account_id: AccountId, login: String, role: Role) -> Self {
        Self {
            account_id,
            login,
            role,
        }
    }

    /// Creates an actor for an account.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self::new(
            account.account_id(),
            account.login().to_string(),
            account.role(),
        )
    }

    /// Converts this actor into the caller identity recorded by the ledger.
    #[must_use]
    pub fn to_caller(&self) -> Caller {
        Caller {
            account_id: Some(self.account_id),
            label: self.login.clone(),
            role: Some(self.role),
        }
    }
}

fn require_role(
    actor: &AuthenticatedActor,
    action: &str,
    allowed: &[Role],
) -> Result<(), AuthError> {
    if allowed.contains(&actor.role) {
        return Ok(());
    }

    let required_role: String = allowed
        .iter()
        .map(Role::as_str)
        .collect::<Vec<&str>>()
        .join(" or ");
    Err(AuthError::Unauthorized {
        action: action.to_string(),
        required_role,
    })
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Only Staff may create, edit, resize or delete movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Staff role.
    pub fn authorize_manage_movies(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        require_role(actor, action, &[Role::Staff])
    }

    /// Staff and Clients may read movies.
    ///
    /// # Errors
    ///
    /// Returns an error for Admin actors.
    pub fn authorize_read_movies(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_role(actor, "read_movies", &[Role::Staff, Role::Client])
    }

    /// Staff may reserve for any client; a Client only for itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not book for `client_id`.
    pub fn authorize_reserve(
        actor: &AuthenticatedActor,
        client_id: AccountId,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Staff => Ok(()),
            Role::Client if actor.account_id == client_id => Ok(()),
            Role::Client => Err(AuthError::Forbidden {
                action: String::from("reserve"),
                reason: String::from("clients may only reserve tickets for themselves"),
            }),
            Role::Admin => require_role(actor, "reserve", &[Role::Staff, Role::Client]),
        }
    }

    /// Staff may read any ticket; a Client only its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not see the ticket.
    pub fn authorize_read_ticket(
        actor: &AuthenticatedActor,
        ticket: &Ticket,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Staff => Ok(()),
            Role::Client => Self::require_ticket_owner(actor, ticket, "read_ticket"),
            Role::Admin => require_role(actor, "read_ticket", &[Role::Staff, Role::Client]),
        }
    }

    /// Only the owning Client may reschedule or cancel a ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not the Client holding the ticket.
    pub fn authorize_modify_ticket(
        actor: &AuthenticatedActor,
        ticket: &Ticket,
        action: &str,
    ) -> Result<(), AuthError> {
        require_role(actor, action, &[Role::Client])?;
        Self::require_ticket_owner(actor, ticket, action)
    }

    /// Only Staff may list tickets across clients or per movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Staff role.
    pub fn authorize_list_tickets(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_role(actor, "list_tickets", &[Role::Staff])
    }

    /// Clients may list their own tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Client role.
    pub fn authorize_list_own_tickets(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_role(actor, "list_own_tickets", &[Role::Client])
    }

    /// Staff and Admins may list accounts.
    ///
    /// # Errors
    ///
    /// Returns an error for Client actors.
    pub fn authorize_list_accounts(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_role(actor, "list_accounts", &[Role::Staff, Role::Admin])
    }

    /// Only Admins may create accounts of any role or toggle activation.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_accounts(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        require_role(actor, action, &[Role::Admin])
    }

    fn require_ticket_owner(
        actor: &AuthenticatedActor,
        ticket: &Ticket,
        action: &str,
    ) -> Result<(), AuthError> {
        if ticket.client_id() == actor.account_id {
            return Ok(());
        }
        Err(AuthError::Forbidden {
            action: action.to_string(),
            reason: String::from("ticket belongs to another client"),
        })
    }
}

/// Credential checks against stored accounts.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates an account by login and password.
    ///
    /// Unknown logins and wrong passwords produce the same error.
    ///
    /// # Returns
    ///
    /// The authenticated actor and the stored account record.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong or the account is
    /// deactivated.
    pub fn login(
        persistence: &mut Persistence,
        login: &str,
        password: &str,
    ) -> Result<(AuthenticatedActor, AccountData), AuthError> {
        let account: AccountData = persistence
            .get_account_data_by_login(login)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(Self::invalid_credentials)?;

        let password_valid: bool = Persistence::verify_password(password, &account.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Password verification failed: {e}"),
            })?;
        if !password_valid {
            warn!(login, "Rejected login: wrong password");
            return Err(Self::invalid_credentials());
        }

        if !account.is_active {
            warn!(login, "Rejected login: account is deactivated");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is deactivated"),
            });
        }

        let domain_account: Account =
            account
                .to_account()
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Stored account is invalid: {e}"),
                })?;

        info!(login, role = %domain_account.role(), "Account authenticated");
        Ok((AuthenticatedActor::from_account(&domain_account), account))
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid login or password"),
        }
    }
}
