// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinema_ledger::{ErrorKind, LedgerError};
use cinema_ledger_domain::DomainError;
use cinema_ledger_persistence::PersistenceError;

use crate::password_policy::PasswordPolicyError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor's role does not allow the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The role allows the action, but not on this record.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// Why the record is off limits.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden: '{action}': {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The actor may not touch this particular record.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// Why the record is off limits.
        reason: String,
    },
    /// A booking rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Concurrent writers kept colliding; the request may be retried.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code a transport should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } | Self::PasswordPolicyViolation { .. } => 400,
            Self::AuthenticationFailed { .. } => 401,
            Self::Unauthorized { .. } | Self::Forbidden { .. } => 403,
            Self::ResourceNotFound { .. } => 404,
            Self::DomainRuleViolation { .. } | Self::Conflict { .. } => 409,
            Self::Internal { .. } => 500,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden: '{action}': {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
            AuthError::Forbidden { action, reason } => Self::Forbidden { action, reason },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidTitle(_) => invalid_input("title", message),
        DomainError::InvalidBasePrice { .. } => invalid_input("base_price", message),
        DomainError::InvalidScreeningRoom { .. } => invalid_input("screening_room", message),
        DomainError::CapacityAboveLimit { .. } => invalid_input("capacity", message),
        DomainError::InvalidLogin(_) => invalid_input("login", message),
        DomainError::InvalidRole(_) => invalid_input("role", message),
        DomainError::InvalidTicketType(_) => invalid_input("ticket_type", message),
        DomainError::InvalidIdentifier(_) => invalid_input("id", message),
        DomainError::InvalidTimestamp(_) => invalid_input("movie_time", message),
        DomainError::InvalidCapacity { .. } => ApiError::DomainRuleViolation {
            rule: String::from("capacity_covers_sold_seats"),
            message,
        },
        DomainError::SoldOut(_) => ApiError::DomainRuleViolation {
            rule: String::from("seat_available"),
            message,
        },
        DomainError::SeatCounterOutOfRange { .. } => ApiError::Internal { message },
    }
}

/// Translates a ledger error into an API error.
///
/// The error kind decides the shape; the message carries the detail.
#[must_use]
pub fn translate_ledger_error(err: LedgerError) -> ApiError {
    let kind: ErrorKind = err.kind();
    let message: String = err.to_string();
    match err {
        LedgerError::InvalidInput(domain_err) => translate_domain_error(domain_err),
        LedgerError::MovieNotFound(_) => not_found("Movie", message),
        LedgerError::ClientNotFound(_) => not_found("Client", message),
        LedgerError::TicketNotFound(_) => not_found("Ticket", message),
        _ => match kind {
            ErrorKind::SoldOut => rule_violation("seat_available", message),
            ErrorKind::ClientInactive => rule_violation("client_active", message),
            ErrorKind::InvalidCapacity => rule_violation("capacity_covers_sold_seats", message),
            ErrorKind::Referenced => rule_violation("movie_unreferenced", message),
            ErrorKind::Conflict => ApiError::Conflict { message },
            ErrorKind::NotFound
            | ErrorKind::InvalidInput
            | ErrorKind::ConsistencyViolation
            | ErrorKind::Internal => ApiError::Internal { message },
        },
    }
}

/// Translates a persistence error raised by account operations.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateLogin(login) => ApiError::DomainRuleViolation {
            rule: String::from("unique_login"),
            message: format!("Login '{login}' is already taken"),
        },
        PersistenceError::AccountNotFound(msg) => not_found("Account", msg),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message,
    }
}

fn rule_violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message,
    }
}
