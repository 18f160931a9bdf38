// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opens the ledger and dispatches each subcommand to its API handler.

use cinema_ledger::{Ledger, LedgerConfig};
use cinema_ledger_api::{
    AuthenticatedActor, BookingLedger, ChangePasswordRequest, CreateAccountRequest,
    CreateMovieRequest, ListAccountsRequest, ListTicketsRequest, RegisterClientRequest,
    RescheduleRequest, ReserveRequest, SetAccountActiveRequest, UpdateCapacityRequest,
    UpdateMovieRequest, authenticate, cancel, change_password, create_account, create_movie,
    delete_movie, get_movie, list_accounts, list_movies, list_own_tickets, list_tickets,
    register_client, reschedule, reserve, seed, set_account_active, update_capacity, update_movie,
    whoami,
};
use cinema_ledger_persistence::{Persistence, SharedPersistence};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::args::{Args, Command};
use crate::error::CliError;

/// Opens the database named by the arguments and wraps it in a ledger.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub fn open_ledger(args: &Args) -> Result<BookingLedger, CliError> {
    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else {
        info!(path = %args.database, "Using SQLite database");
        Persistence::new_with_file(&args.database)?
    };

    let config: LedgerConfig = LedgerConfig {
        max_conflict_retries: args.max_conflict_retries,
    };
    Ok(Ledger::with_config(SharedPersistence::new(persistence), config))
}

fn password(args: &Args) -> Result<&str, CliError> {
    args.password
        .as_deref()
        .ok_or(CliError::MissingCredential("--password"))
}

fn actor(ledger: &BookingLedger, args: &Args) -> Result<AuthenticatedActor, CliError> {
    let login: &str = args
        .login
        .as_deref()
        .ok_or(CliError::MissingCredential("--login"))?;
    let actor: AuthenticatedActor = authenticate(ledger, login, password(args)?)?;
    debug!(login, role = %actor.role, "Authenticated");
    Ok(actor)
}

fn render<T: Serialize>(response: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(response)?)
}

/// Runs one subcommand and returns its response as JSON.
///
/// # Errors
///
/// Returns an error if credentials are missing or the operation fails.
#[allow(clippy::too_many_lines)]
pub fn execute(ledger: &BookingLedger, args: &Args) -> Result<Value, CliError> {
    match &args.command {
        Command::Seed => render(&seed(ledger, password(args)?)?),
        Command::Register {
            new_login,
            new_password,
            role: None,
        } => render(&register_client(
            ledger,
            &RegisterClientRequest {
                login: new_login.clone(),
                password: new_password.clone(),
                password_confirmation: new_password.clone(),
            },
        )?),
        Command::Register {
            new_login,
            new_password,
            role: Some(role),
        } => {
            let request: CreateAccountRequest = CreateAccountRequest {
                login: new_login.clone(),
                password: new_password.clone(),
                password_confirmation: new_password.clone(),
                role: role.clone(),
            };
            render(&create_account(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Whoami => render(&whoami(&actor(ledger, args)?)),
        Command::Passwd { new_password } => {
            let request: ChangePasswordRequest = ChangePasswordRequest {
                current_password: password(args)?.to_string(),
                new_password: new_password.clone(),
                new_password_confirmation: new_password.clone(),
            };
            render(&change_password(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Accounts { role } => {
            let request: ListAccountsRequest = ListAccountsRequest { role: role.clone() };
            render(&list_accounts(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Activate { account_id } | Command::Deactivate { account_id } => {
            let request: SetAccountActiveRequest = SetAccountActiveRequest {
                account_id: account_id.clone(),
                active: matches!(args.command, Command::Activate { .. }),
            };
            render(&set_account_active(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Movies { movie_id: None } => render(&list_movies(ledger, &actor(ledger, args)?)?),
        Command::Movies {
            movie_id: Some(movie_id),
        } => render(&get_movie(ledger, movie_id, &actor(ledger, args)?)?),
        Command::AddMovie {
            title,
            base_price,
            screening_room,
            capacity,
        } => {
            let request: CreateMovieRequest = CreateMovieRequest {
                title: title.clone(),
                base_price: *base_price,
                screening_room: *screening_room,
                capacity: *capacity,
            };
            render(&create_movie(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::UpdateMovie {
            movie_id,
            title,
            base_price,
            screening_room,
        } => {
            let request: UpdateMovieRequest = UpdateMovieRequest {
                movie_id: movie_id.clone(),
                title: title.clone(),
                base_price: *base_price,
                screening_room: *screening_room,
            };
            render(&update_movie(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::UpdateCapacity { movie_id, capacity } => {
            let request: UpdateCapacityRequest = UpdateCapacityRequest {
                movie_id: movie_id.clone(),
                capacity: *capacity,
            };
            render(&update_capacity(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::DeleteMovie { movie_id } => {
            render(&delete_movie(ledger, movie_id, &actor(ledger, args)?)?)
        }
        Command::Reserve {
            movie_id,
            movie_time,
            ticket_type,
            client_id,
        } => {
            let request: ReserveRequest = ReserveRequest {
                movie_id: movie_id.clone(),
                client_id: client_id.clone(),
                movie_time: movie_time.clone(),
                ticket_type: ticket_type.clone(),
            };
            render(&reserve(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Tickets { mine: true, .. } => {
            render(&list_own_tickets(ledger, &actor(ledger, args)?)?)
        }
        Command::Tickets {
            movie_id,
            client_id,
            mine: false,
        } => {
            let request: ListTicketsRequest = ListTicketsRequest {
                movie_id: movie_id.clone(),
                client_id: client_id.clone(),
            };
            render(&list_tickets(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Reschedule {
            ticket_id,
            movie_time,
        } => {
            let request: RescheduleRequest = RescheduleRequest {
                ticket_id: ticket_id.clone(),
                movie_time: movie_time.clone(),
            };
            render(&reschedule(ledger, &request, &actor(ledger, args)?)?)
        }
        Command::Cancel { ticket_id } => render(&cancel(ledger, ticket_id, &actor(ledger, args)?)?),
    }
}
