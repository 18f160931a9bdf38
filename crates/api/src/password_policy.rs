// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for account credentials.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password is too long.
    #[error("Password must be at most {max_length} characters long")]
    TooLong { max_length: usize },

    /// Password matches a forbidden value.
    #[error("Password must not match {field}")]
    MatchesForbiddenField { field: String },

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length in characters.
    pub min_length: usize,
    /// Maximum password length in characters.
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 200,
        }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `confirmation` - The password confirmation
    /// * `login` - The account login (password must not match)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet policy requirements.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        login: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        let length: usize = password.chars().count();
        if length < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max_length: self.max_length,
            });
        }

        // Case-insensitive
        if password.to_lowercase() == login.to_lowercase() {
            return Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("login"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let policy = PasswordPolicy::default();
        assert!(
            policy
                .validate("opensesame", "opensesame", "ticketfan")
                .is_ok()
        );
    }

    #[test]
    fn test_password_too_short() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("short", "short", "ticketfan");
        assert_eq!(result, Err(PasswordPolicyError::TooShort { min_length: 8 }));
    }

    #[test]
    fn test_password_too_long() {
        let policy = PasswordPolicy::default();
        let long: String = "x".repeat(201);
        let result = policy.validate(&long, &long, "ticketfan");
        assert_eq!(result, Err(PasswordPolicyError::TooLong { max_length: 200 }));
    }

    #[test]
    fn test_password_at_bounds() {
        let policy = PasswordPolicy::default();
        let longest: String = "y".repeat(200);
        assert!(policy.validate("eightchr", "eightchr", "ticketfan").is_ok());
        assert!(policy.validate(&longest, &longest, "ticketfan").is_ok());
    }

    #[test]
    fn test_password_matches_login() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("TicketFan", "TicketFan", "ticketfan");
        assert_eq!(
            result,
            Err(PasswordPolicyError::MatchesForbiddenField {
                field: String::from("login"),
            })
        );
    }

    #[test]
    fn test_confirmation_mismatch() {
        let policy = PasswordPolicy::default();
        let result = policy.validate("opensesame", "opensesamE", "ticketfan");
        assert_eq!(result, Err(PasswordPolicyError::ConfirmationMismatch));
    }
}
