// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler authorizes first, then parses its request, then calls the
//! ledger (movies and tickets) or the account store (accounts). Account
//! handlers hold the persistence lock only for their own calls and never
//! while a ledger operation runs.

use std::str::FromStr;
use std::sync::MutexGuard;

use cinema_ledger::{MovieDetails, TicketFilter};
use cinema_ledger_domain::{
    Account, AccountId, DomainError, Movie, MovieId, Role, Ticket, TicketId, TicketType,
    parse_movie_time,
};
use cinema_ledger_persistence::{AccountData, Persistence, SeedSummary, seed_demo_data};
use time::OffsetDateTime;
use tracing::info;

use crate::BookingLedger;
use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::capabilities::compute_capabilities;
use crate::error::{
    ApiError, translate_domain_error, translate_ledger_error, translate_persistence_error,
};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AccountInfo, CancelResponse, ChangePasswordRequest, ChangePasswordResponse,
    CreateAccountRequest, CreateAccountResponse, CreateMovieRequest, DeleteMovieResponse,
    ListAccountsRequest, ListAccountsResponse, ListMoviesResponse, ListTicketsRequest,
    ListTicketsResponse, LoginRequest, LoginResponse, MovieInfo, MovieResponse,
    RegisterClientRequest, RescheduleRequest, ReserveRequest, SeedResponse,
    SetAccountActiveRequest, SetAccountActiveResponse, TicketInfo, TicketResponse,
    UpdateCapacityRequest, UpdateMovieRequest, WhoAmIResponse,
};

fn lock_persistence(ledger: &BookingLedger) -> Result<MutexGuard<'_, Persistence>, ApiError> {
    ledger.store().lock().map_err(translate_persistence_error)
}

fn parse_value<T>(value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse::<T>().map_err(translate_domain_error)
}

fn parse_time(value: &str) -> Result<OffsetDateTime, ApiError> {
    parse_movie_time(value).map_err(translate_domain_error)
}

fn ticket_info(ticket: &Ticket) -> Result<TicketInfo, ApiError> {
    TicketInfo::from_ticket(ticket).map_err(translate_domain_error)
}

fn ticket_infos(tickets: &[Ticket]) -> Result<Vec<TicketInfo>, ApiError> {
    tickets.iter().map(ticket_info).collect()
}

// ============================================================================
// Authentication and accounts
// ============================================================================

/// Authenticates an account and returns the actor for later calls.
///
/// # Errors
///
/// Returns `AuthenticationFailed` for wrong credentials or a deactivated
/// account.
pub fn authenticate(
    ledger: &BookingLedger,
    login: &str,
    password: &str,
) -> Result<AuthenticatedActor, ApiError> {
    let (actor, _account): (AuthenticatedActor, AccountData) =
        AuthenticationService::login(&mut *lock_persistence(ledger)?, login, password)?;
    Ok(actor)
}

/// Logs an account in.
///
/// # Errors
///
/// Returns `AuthenticationFailed` for wrong credentials or a deactivated
/// account.
pub fn login(ledger: &BookingLedger, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let actor: AuthenticatedActor = authenticate(ledger, &request.login, &request.password)?;

    Ok(LoginResponse {
        account_id: actor.account_id.to_string(),
        login: actor.login,
        role: actor.role.as_str().to_string(),
    })
}

/// Returns the caller's identity with advisory capabilities.
#[must_use]
pub fn whoami(actor: &AuthenticatedActor) -> WhoAmIResponse {
    WhoAmIResponse {
        account_id: actor.account_id.to_string(),
        login: actor.login.clone(),
        role: actor.role.as_str().to_string(),
        capabilities: compute_capabilities(actor),
    }
}

fn create_account_with_role(
    ledger: &BookingLedger,
    login: &str,
    password: &str,
    password_confirmation: &str,
    role: Role,
) -> Result<CreateAccountResponse, ApiError> {
    let account: Account =
        Account::new(AccountId::generate(), login, role).map_err(translate_domain_error)?;

    let policy: PasswordPolicy = PasswordPolicy::default();
    policy.validate(password, password_confirmation, account.login())?;

    lock_persistence(ledger)?
        .create_account(&account, password)
        .map_err(translate_persistence_error)?;

    info!(account_id = %account.account_id(), login = account.login(), %role, "Account created");
    Ok(CreateAccountResponse {
        account: AccountInfo::from(&account),
        message: format!("Created {role} account '{}'", account.login()),
    })
}

/// Registers a new client account. Needs no authentication.
///
/// # Errors
///
/// Returns an error if:
/// - The login is malformed or already taken
/// - The password does not meet the policy
/// - Database operations fail
pub fn register_client(
    ledger: &BookingLedger,
    request: &RegisterClientRequest,
) -> Result<CreateAccountResponse, ApiError> {
    create_account_with_role(
        ledger,
        &request.login,
        &request.password,
        &request.password_confirmation,
        Role::Client,
    )
}

/// Creates an account of any role.
///
/// Only Admin actors may create accounts this way.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Admin
/// - The role or login is malformed, or the login is taken
/// - The password does not meet the policy
/// - Database operations fail
pub fn create_account(
    ledger: &BookingLedger,
    request: &CreateAccountRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateAccountResponse, ApiError> {
    AuthorizationService::authorize_manage_accounts(actor, "create_account")?;
    let role: Role = parse_value(&request.role)?;

    create_account_with_role(
        ledger,
        &request.login,
        &request.password,
        &request.password_confirmation,
        role,
    )
}

/// Changes the caller's own password.
///
/// # Errors
///
/// Returns an error if:
/// - The current password is incorrect
/// - The new password does not meet the policy
/// - Database operations fail
pub fn change_password(
    ledger: &BookingLedger,
    request: &ChangePasswordRequest,
    actor: &AuthenticatedActor,
) -> Result<ChangePasswordResponse, ApiError> {
    let mut persistence = lock_persistence(ledger)?;
    let account: AccountData = persistence
        .get_account_data(actor.account_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Account"),
            message: format!("Account {} not found", actor.account_id),
        })?;

    let password_valid: bool =
        Persistence::verify_password(&request.current_password, &account.password_hash)
            .map_err(translate_persistence_error)?;
    if !password_valid {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Current password is incorrect"),
        });
    }

    let policy: PasswordPolicy = PasswordPolicy::default();
    policy.validate(
        &request.new_password,
        &request.new_password_confirmation,
        &account.login,
    )?;

    persistence
        .update_password(actor.account_id, &request.new_password)
        .map_err(translate_persistence_error)?;
    drop(persistence);

    info!(account_id = %actor.account_id, "Password changed");
    Ok(ChangePasswordResponse {
        message: String::from("Password changed successfully"),
    })
}

/// Lists accounts, optionally for one role.
///
/// Staff and Admin actors may list accounts.
///
/// # Errors
///
/// Returns an error if the actor is a Client, the role filter is
/// malformed, or the query fails.
pub fn list_accounts(
    ledger: &BookingLedger,
    request: &ListAccountsRequest,
    actor: &AuthenticatedActor,
) -> Result<ListAccountsResponse, ApiError> {
    AuthorizationService::authorize_list_accounts(actor)?;
    let role: Option<Role> = request.role.as_deref().map(parse_value::<Role>).transpose()?;

    let accounts: Vec<Account> = lock_persistence(ledger)?
        .list_accounts(role)
        .map_err(translate_persistence_error)?;

    Ok(ListAccountsResponse {
        accounts: accounts.iter().map(AccountInfo::from).collect(),
    })
}

/// Activates or deactivates an account.
///
/// Only Admin actors may do this, and an Admin may not deactivate itself.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Admin
/// - The actor targets its own account for deactivation
/// - The account does not exist
pub fn set_account_active(
    ledger: &BookingLedger,
    request: &SetAccountActiveRequest,
    actor: &AuthenticatedActor,
) -> Result<SetAccountActiveResponse, ApiError> {
    let action: &str = if request.active {
        "activate_account"
    } else {
        "deactivate_account"
    };
    AuthorizationService::authorize_manage_accounts(actor, action)?;
    let account_id: AccountId = parse_value(&request.account_id)?;

    if account_id == actor.account_id && !request.active {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("no_self_deactivation"),
            message: String::from("Admins cannot deactivate their own account"),
        });
    }

    lock_persistence(ledger)?
        .set_account_active(account_id, request.active)
        .map_err(translate_persistence_error)?;

    info!(%account_id, active = request.active, admin = %actor.login, "Account activation changed");
    Ok(SetAccountActiveResponse {
        account_id: account_id.to_string(),
        is_active: request.active,
        message: if request.active {
            format!("Account {account_id} activated")
        } else {
            format!("Account {account_id} deactivated")
        },
    })
}

/// Seeds the demo catalogue and one account per role.
///
/// Runs before any account exists, so no actor is required. Existing
/// records are left alone.
///
/// # Errors
///
/// Returns an error if the password does not meet the policy or a write
/// fails.
pub fn seed(ledger: &BookingLedger, password: &str) -> Result<SeedResponse, ApiError> {
    let policy: PasswordPolicy = PasswordPolicy::default();
    policy.validate(password, password, "")?;

    let summary: SeedSummary = seed_demo_data(&mut *lock_persistence(ledger)?, password)
        .map_err(translate_persistence_error)?;

    info!(
        movies_created = summary.movies_created,
        accounts_created = summary.accounts_created,
        "Demo data seeded"
    );
    Ok(SeedResponse::from(summary))
}

// ============================================================================
// Movies
// ============================================================================

/// Creates a movie with every seat available.
///
/// Only Staff actors may create movies.
///
/// # Errors
///
/// Returns an error if the actor is not Staff or a field fails validation.
pub fn create_movie(
    ledger: &BookingLedger,
    request: &CreateMovieRequest,
    actor: &AuthenticatedActor,
) -> Result<MovieResponse, ApiError> {
    AuthorizationService::authorize_manage_movies(actor, "create_movie")?;

    let details: MovieDetails = MovieDetails {
        title: request.title.clone(),
        base_price: request.base_price,
        screening_room: request.screening_room,
    };
    let movie: Movie = ledger
        .register_movie(&actor.to_caller(), &details, request.capacity)
        .map_err(translate_ledger_error)?;

    Ok(MovieResponse {
        message: format!("Created movie '{}'", movie.title()),
        movie: MovieInfo::from(&movie),
    })
}

/// Edits a movie's title, base price and screening room.
///
/// Only Staff actors may edit movies.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the movie does not exist,
/// or a field fails validation.
pub fn update_movie(
    ledger: &BookingLedger,
    request: &UpdateMovieRequest,
    actor: &AuthenticatedActor,
) -> Result<MovieResponse, ApiError> {
    AuthorizationService::authorize_manage_movies(actor, "update_movie")?;
    let movie_id: MovieId = parse_value(&request.movie_id)?;

    let details: MovieDetails = MovieDetails {
        title: request.title.clone(),
        base_price: request.base_price,
        screening_room: request.screening_room,
    };
    let movie: Movie = ledger
        .update_movie_details(&actor.to_caller(), movie_id, &details)
        .map_err(translate_ledger_error)?;

    Ok(MovieResponse {
        message: format!("Updated movie '{}'", movie.title()),
        movie: MovieInfo::from(&movie),
    })
}

/// Changes a movie's capacity, keeping sold seats sold.
///
/// Only Staff actors may resize movies.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the movie does not exist,
/// or the new capacity is below the seats already sold.
pub fn update_capacity(
    ledger: &BookingLedger,
    request: &UpdateCapacityRequest,
    actor: &AuthenticatedActor,
) -> Result<MovieResponse, ApiError> {
    AuthorizationService::authorize_manage_movies(actor, "update_capacity")?;
    let movie_id: MovieId = parse_value(&request.movie_id)?;

    let movie: Movie = ledger
        .update_capacity(&actor.to_caller(), movie_id, request.capacity)
        .map_err(translate_ledger_error)?;

    Ok(MovieResponse {
        message: format!(
            "Movie '{}' now has {} seats, {} available",
            movie.title(),
            movie.capacity(),
            movie.available_seats()
        ),
        movie: MovieInfo::from(&movie),
    })
}

/// Deletes a movie that no ticket references.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, the movie does not exist,
/// or tickets still reference it.
pub fn delete_movie(
    ledger: &BookingLedger,
    movie_id: &str,
    actor: &AuthenticatedActor,
) -> Result<DeleteMovieResponse, ApiError> {
    AuthorizationService::authorize_manage_movies(actor, "delete_movie")?;
    let movie_id: MovieId = parse_value(movie_id)?;

    ledger
        .remove_movie(&actor.to_caller(), movie_id)
        .map_err(translate_ledger_error)?;

    Ok(DeleteMovieResponse {
        movie_id: movie_id.to_string(),
        message: format!("Deleted movie {movie_id}"),
    })
}

/// Lists every movie.
///
/// # Errors
///
/// Returns an error if the actor is an Admin or the read fails.
pub fn list_movies(
    ledger: &BookingLedger,
    actor: &AuthenticatedActor,
) -> Result<ListMoviesResponse, ApiError> {
    AuthorizationService::authorize_read_movies(actor)?;

    let movies: Vec<Movie> = ledger.movies().map_err(translate_ledger_error)?;
    Ok(ListMoviesResponse {
        movies: movies.iter().map(MovieInfo::from).collect(),
    })
}

/// Returns one movie.
///
/// # Errors
///
/// Returns an error if the actor is an Admin or the movie does not exist.
pub fn get_movie(
    ledger: &BookingLedger,
    movie_id: &str,
    actor: &AuthenticatedActor,
) -> Result<MovieInfo, ApiError> {
    AuthorizationService::authorize_read_movies(actor)?;
    let movie_id: MovieId = parse_value(movie_id)?;

    let movie: Movie = ledger.movie(movie_id).map_err(translate_ledger_error)?;
    Ok(MovieInfo::from(&movie))
}

// ============================================================================
// Tickets
// ============================================================================

/// Reserves one seat and issues a ticket.
///
/// Clients book for themselves (`client_id` may be omitted); Staff book
/// for any client.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not book for the client
/// - An identifier, the movie time or the ticket type is malformed
/// - The client or movie does not exist, or the client is inactive
/// - The movie is sold out
/// - Concurrent writers exhausted the retry budget
pub fn reserve(
    ledger: &BookingLedger,
    request: &ReserveRequest,
    actor: &AuthenticatedActor,
) -> Result<TicketResponse, ApiError> {
    let client_id: AccountId = match &request.client_id {
        Some(value) => parse_value(value)?,
        None => actor.account_id,
    };
    AuthorizationService::authorize_reserve(actor, client_id)?;

    let movie_id: MovieId = parse_value(&request.movie_id)?;
    let movie_time: OffsetDateTime = parse_time(&request.movie_time)?;
    let ticket_type: TicketType = parse_value(&request.ticket_type)?;

    let ticket: Ticket = ledger
        .reserve(
            &actor.to_caller(),
            movie_id,
            client_id,
            movie_time,
            ticket_type,
        )
        .map_err(translate_ledger_error)?;

    Ok(TicketResponse {
        message: format!(
            "Reserved a {ticket_type} seat for {}",
            ticket.final_price()
        ),
        ticket: ticket_info(&ticket)?,
    })
}

/// Returns one ticket.
///
/// Staff may read any ticket; a Client only its own.
///
/// # Errors
///
/// Returns an error if the ticket does not exist or the actor may not
/// see it.
pub fn get_ticket(
    ledger: &BookingLedger,
    ticket_id: &str,
    actor: &AuthenticatedActor,
) -> Result<TicketInfo, ApiError> {
    let ticket_id: TicketId = parse_value(ticket_id)?;
    let ticket: Ticket = ledger.ticket(ticket_id).map_err(translate_ledger_error)?;
    AuthorizationService::authorize_read_ticket(actor, &ticket)?;

    ticket_info(&ticket)
}

/// Lists tickets, for one movie, one client, or all.
///
/// Only Staff actors may list tickets this way.
///
/// # Errors
///
/// Returns an error if the actor is not Staff, both filters are set, or
/// an identifier is malformed.
pub fn list_tickets(
    ledger: &BookingLedger,
    request: &ListTicketsRequest,
    actor: &AuthenticatedActor,
) -> Result<ListTicketsResponse, ApiError> {
    AuthorizationService::authorize_list_tickets(actor)?;

    let filter: TicketFilter = match (&request.movie_id, &request.client_id) {
        (None, None) => TicketFilter::All,
        (Some(movie_id), None) => TicketFilter::ForMovie(parse_value(movie_id)?),
        (None, Some(client_id)) => TicketFilter::ForClient(parse_value(client_id)?),
        (Some(_), Some(_)) => {
            return Err(ApiError::InvalidInput {
                field: String::from("filter"),
                message: String::from("Filter by movie or by client, not both"),
            });
        }
    };

    let tickets: Vec<Ticket> = ledger.tickets(filter).map_err(translate_ledger_error)?;
    Ok(ListTicketsResponse {
        tickets: ticket_infos(&tickets)?,
    })
}

/// Lists the calling client's own tickets.
///
/// # Errors
///
/// Returns an error if the actor is not a Client or the read fails.
pub fn list_own_tickets(
    ledger: &BookingLedger,
    actor: &AuthenticatedActor,
) -> Result<ListTicketsResponse, ApiError> {
    AuthorizationService::authorize_list_own_tickets(actor)?;

    let tickets: Vec<Ticket> = ledger
        .tickets(TicketFilter::ForClient(actor.account_id))
        .map_err(translate_ledger_error)?;
    Ok(ListTicketsResponse {
        tickets: ticket_infos(&tickets)?,
    })
}

/// Moves a ticket to another screening time of the same movie.
///
/// Only the Client holding the ticket may reschedule it. The seat and the
/// price are unchanged.
///
/// # Errors
///
/// Returns an error if the ticket does not exist, the actor does not hold
/// it, or the movie time is malformed.
pub fn reschedule(
    ledger: &BookingLedger,
    request: &RescheduleRequest,
    actor: &AuthenticatedActor,
) -> Result<TicketResponse, ApiError> {
    let ticket_id: TicketId = parse_value(&request.ticket_id)?;
    let ticket: Ticket = ledger.ticket(ticket_id).map_err(translate_ledger_error)?;
    AuthorizationService::authorize_modify_ticket(actor, &ticket, "reschedule")?;

    let movie_time: OffsetDateTime = parse_time(&request.movie_time)?;
    let rescheduled: Ticket = ledger
        .reschedule(&actor.to_caller(), ticket_id, movie_time)
        .map_err(translate_ledger_error)?;

    Ok(TicketResponse {
        message: String::from("Ticket rescheduled"),
        ticket: ticket_info(&rescheduled)?,
    })
}

/// Cancels a ticket and releases its seat.
///
/// Only the Client holding the ticket may cancel it.
///
/// # Errors
///
/// Returns an error if the ticket does not exist or the actor does not
/// hold it.
pub fn cancel(
    ledger: &BookingLedger,
    ticket_id: &str,
    actor: &AuthenticatedActor,
) -> Result<CancelResponse, ApiError> {
    let ticket_id: TicketId = parse_value(ticket_id)?;
    let ticket: Ticket = ledger.ticket(ticket_id).map_err(translate_ledger_error)?;
    AuthorizationService::authorize_modify_ticket(actor, &ticket, "cancel")?;

    ledger
        .cancel(&actor.to_caller(), ticket_id)
        .map_err(translate_ledger_error)?;

    Ok(CancelResponse {
        ticket_id: ticket_id.to_string(),
        message: String::from("Ticket cancelled and seat released"),
    })
}
