// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the cinema booking ledger.
//!
//! Authenticates accounts, authorizes each operation by role, translates
//! flat request shapes into ledger calls and ledger errors into
//! transport-neutral API errors with HTTP status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

use cinema_ledger::Ledger;
use cinema_ledger_persistence::SharedPersistence;

/// The ledger as served by the API: backed by the relational store.
pub type BookingLedger = Ledger<SharedPersistence>;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
pub use capabilities::compute_capabilities;
pub use error::{
    ApiError, AuthError, translate_domain_error, translate_ledger_error,
    translate_persistence_error,
};
pub use handlers::{
    authenticate, cancel, change_password, create_account, create_movie, delete_movie, get_movie,
    get_ticket, list_accounts, list_movies, list_own_tickets, list_tickets, login,
    register_client, reschedule, reserve, seed, set_account_active, update_capacity,
    update_movie, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AccountInfo, CancelResponse, Capabilities, Capability, ChangePasswordRequest,
    ChangePasswordResponse, CreateAccountRequest, CreateAccountResponse, CreateMovieRequest,
    DeleteMovieResponse, ListAccountsRequest, ListAccountsResponse, ListMoviesResponse,
    ListTicketsRequest, ListTicketsResponse, LoginRequest, LoginResponse, MovieInfo,
    MovieResponse, RegisterClientRequest, RescheduleRequest, ReserveRequest, SeedResponse,
    SetAccountActiveRequest, SetAccountActiveResponse, TicketInfo, TicketResponse,
    UpdateCapacityRequest, UpdateMovieRequest, WhoAmIResponse,
};
