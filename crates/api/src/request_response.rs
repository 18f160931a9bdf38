// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Identifiers, roles, ticket types and movie times travel as strings and
//! are parsed by the handlers. Prices travel as decimal strings.

use cinema_ledger_domain::{Account, DomainError, Movie, Ticket, format_movie_time};
use cinema_ledger_persistence::SeedSummary;
use rust_decimal::Decimal;

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The account login.
    pub login: String,
    /// The account password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The account identifier.
    pub account_id: String,
    /// The account login.
    pub login: String,
    /// The account role.
    pub role: String,
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// What an account may do, for UI gating only.
///
/// Handlers enforce authorization independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Capabilities {
    /// Whether the account can browse movies.
    pub can_read_movies: Capability,
    /// Whether the account can create, edit, resize and delete movies.
    pub can_manage_movies: Capability,
    /// Whether the account can reserve for itself.
    pub can_reserve_for_self: Capability,
    /// Whether the account can reserve for any client.
    pub can_reserve_for_others: Capability,
    /// Whether the account can list every ticket.
    pub can_list_all_tickets: Capability,
    /// Whether the account can list accounts.
    pub can_list_accounts: Capability,
    /// Whether the account can create accounts and toggle activation.
    pub can_manage_accounts: Capability,
}

/// API response for the "who am I" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WhoAmIResponse {
    /// The account identifier.
    pub account_id: String,
    /// The account login.
    pub login: String,
    /// The account role.
    pub role: String,
    /// Advisory capabilities.
    pub capabilities: Capabilities,
}

/// Account information without password material.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountInfo {
    /// The account identifier.
    pub account_id: String,
    /// The account login.
    pub login: String,
    /// The account role.
    pub role: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id().to_string(),
            login: account.login().to_string(),
            role: account.role().as_str().to_string(),
            is_active: account.is_active(),
        }
    }
}

/// API request for self-service client registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterClientRequest {
    /// The desired login.
    pub login: String,
    /// The password.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
}

/// API request to create an account of any role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAccountRequest {
    /// The desired login.
    pub login: String,
    /// The password.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
    /// The role (CLIENT, ADMIN or STAFF).
    pub role: String,
}

/// API response for a created account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAccountResponse {
    /// The created account.
    pub account: AccountInfo,
    /// A success message.
    pub message: String,
}

/// API request to change the caller's own password.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The new password.
    pub new_password: String,
    /// The new password confirmation.
    pub new_password_confirmation: String,
}

/// API response for a password change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangePasswordResponse {
    /// A success message.
    pub message: String,
}

/// API request to list accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListAccountsRequest {
    /// Restrict the listing to one role.
    pub role: Option<String>,
}

/// API response listing accounts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListAccountsResponse {
    /// Accounts ordered by login.
    pub accounts: Vec<AccountInfo>,
}

/// API request to activate or deactivate an account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetAccountActiveRequest {
    /// The target account.
    pub account_id: String,
    /// The desired active flag.
    pub active: bool,
}

/// API response for an activation change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetAccountActiveResponse {
    /// The target account.
    pub account_id: String,
    /// The resulting active flag.
    pub is_active: bool,
    /// A success message.
    pub message: String,
}

/// Movie information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieInfo {
    /// The movie identifier.
    pub movie_id: String,
    /// The title.
    pub title: String,
    /// The base ticket price.
    pub base_price: Decimal,
    /// The screening room number.
    pub screening_room: u32,
    /// Total seats.
    pub capacity: u32,
    /// Seats still available.
    pub available_seats: u32,
}

impl From<&Movie> for MovieInfo {
    fn from(movie: &Movie) -> Self {
        Self {
            movie_id: movie.movie_id().to_string(),
            title: movie.title().to_string(),
            base_price: movie.base_price(),
            screening_room: movie.screening_room(),
            capacity: movie.capacity(),
            available_seats: movie.available_seats(),
        }
    }
}

/// API request to create a movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateMovieRequest {
    /// The title.
    pub title: String,
    /// The base ticket price.
    pub base_price: Decimal,
    /// The screening room number.
    pub screening_room: u32,
    /// Total seats.
    pub capacity: u32,
}

/// API request to edit a movie's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateMovieRequest {
    /// The movie to edit.
    pub movie_id: String,
    /// The new title.
    pub title: String,
    /// The new base price. Existing tickets keep their price.
    pub base_price: Decimal,
    /// The new screening room.
    pub screening_room: u32,
}

/// API request to change a movie's capacity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateCapacityRequest {
    /// The movie to resize.
    pub movie_id: String,
    /// The new total seat count.
    pub capacity: u32,
}

/// API response carrying a single movie after a change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieResponse {
    /// The movie after the change.
    pub movie: MovieInfo,
    /// A success message.
    pub message: String,
}

/// API response for a movie deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteMovieResponse {
    /// The deleted movie.
    pub movie_id: String,
    /// A success message.
    pub message: String,
}

/// API response listing movies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListMoviesResponse {
    /// Movies ordered by title.
    pub movies: Vec<MovieInfo>,
}

/// Ticket information.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketInfo {
    /// The ticket identifier.
    pub ticket_id: String,
    /// The holding client.
    pub client_id: String,
    /// The movie.
    pub movie_id: String,
    /// The screening time (RFC 3339, UTC).
    pub movie_time: String,
    /// STANDARD or REDUCED.
    pub ticket_type: String,
    /// The price charged.
    pub final_price: Decimal,
}

impl TicketInfo {
    /// Builds ticket information from a domain ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the movie time cannot be formatted.
    pub fn from_ticket(ticket: &Ticket) -> Result<Self, DomainError> {
        Ok(Self {
            ticket_id: ticket.ticket_id().to_string(),
            client_id: ticket.client_id().to_string(),
            movie_id: ticket.movie_id().to_string(),
            movie_time: format_movie_time(ticket.movie_time())?,
            ticket_type: ticket.ticket_type().as_str().to_string(),
            final_price: ticket.final_price(),
        })
    }
}

/// API request to reserve a seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReserveRequest {
    /// The movie.
    pub movie_id: String,
    /// The client to book for. Defaults to the caller.
    pub client_id: Option<String>,
    /// The screening time (RFC 3339).
    pub movie_time: String,
    /// STANDARD or REDUCED.
    pub ticket_type: String,
}

/// API request to move a ticket to another screening time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RescheduleRequest {
    /// The ticket.
    pub ticket_id: String,
    /// The new screening time (RFC 3339).
    pub movie_time: String,
}

/// API response carrying a single ticket after a change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketResponse {
    /// The ticket after the change.
    pub ticket: TicketInfo,
    /// A success message.
    pub message: String,
}

/// API response for a cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelResponse {
    /// The cancelled ticket.
    pub ticket_id: String,
    /// A success message.
    pub message: String,
}

/// API request to list tickets.
///
/// At most one of the filters may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTicketsRequest {
    /// Only tickets for this movie.
    pub movie_id: Option<String>,
    /// Only tickets held by this client.
    pub client_id: Option<String>,
}

/// API response listing tickets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTicketsResponse {
    /// Tickets ordered by movie time.
    pub tickets: Vec<TicketInfo>,
}

/// API response for a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeedResponse {
    /// Movies created by this run.
    pub movies_created: usize,
    /// Accounts created by this run.
    pub accounts_created: usize,
    /// A success message.
    pub message: String,
}

impl From<SeedSummary> for SeedResponse {
    fn from(summary: SeedSummary) -> Self {
        Self {
            movies_created: summary.movies_created,
            accounts_created: summary.accounts_created,
            message: format!(
                "Seeded {} movies and {} accounts",
                summary.movies_created, summary.accounts_created
            ),
        }
    }
}
