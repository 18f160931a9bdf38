// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Generates an opaque UUID-backed identifier type.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| DomainError::InvalidIdentifier(format!("{s}: {e}")))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id! {
    /// Identifies a movie showing.
    MovieId
}

opaque_id! {
    /// Identifies a ticket.
    TicketId
}

opaque_id! {
    /// Identifies an account (client, admin or staff).
    AccountId
}

/// The role an account plays in the booking system.
///
/// Clients, admins and staff share one account record; behavior
/// differences dispatch on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Books and manages its own tickets.
    Client,
    /// Manages accounts.
    Admin,
    /// Manages movies and books on behalf of clients.
    Staff,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLIENT" => Ok(Self::Client),
            "ADMIN" => Ok(Self::Admin),
            "STAFF" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fare class of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full price.
    Standard,
    /// Discounted price.
    Reduced,
}

impl TicketType {
    /// Returns the multiplier applied to a movie's base price.
    ///
    /// `Standard` is exactly 1.0 and `Reduced` is exactly 0.75.
    #[must_use]
    pub const fn discount_factor(&self) -> Decimal {
        match self {
            Self::Standard => Decimal::ONE,
            Self::Reduced => Decimal::from_parts(75, 0, 0, false, 2),
        }
    }

    /// Converts this ticket type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Reduced => "REDUCED",
        }
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "REDUCED" => Ok(Self::Reduced),
            _ => Err(DomainError::InvalidTicketType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
