// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments.

use cinema_ledger::DEFAULT_MAX_CONFLICT_RETRIES;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Cinema Ledger - seat reservations from the shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file
    #[arg(short, long, global = true, default_value = "cinema-ledger.db")]
    pub database: String,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over --database.
    #[arg(long, global = true, env = "CINEMA_LEDGER_MYSQL_URL", hide_env_values = true)]
    pub mysql_url: Option<String>,

    /// Login of the account performing the command
    #[arg(short, long, global = true, env = "CINEMA_LEDGER_LOGIN")]
    pub login: Option<String>,

    /// Password of the account performing the command
    #[arg(short, long, global = true, env = "CINEMA_LEDGER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Retries after a concurrent write wins the race
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CONFLICT_RETRIES)]
    pub max_conflict_retries: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the demo movies and one account per role, all using --password
    Seed,
    /// Register a client account, or any role when run by an admin
    Register {
        /// Login for the new account
        new_login: String,
        /// Password for the new account
        #[arg(long)]
        new_password: String,
        /// Role for the new account (needs admin credentials)
        #[arg(long)]
        role: Option<String>,
    },
    /// Show the authenticated account and what it may do
    Whoami,
    /// Change the authenticated account's password
    Passwd {
        /// The new password
        #[arg(long)]
        new_password: String,
    },
    /// List accounts
    Accounts {
        /// Only accounts with this role
        #[arg(long)]
        role: Option<String>,
    },
    /// Reactivate an account
    Activate {
        /// The account to reactivate
        account_id: String,
    },
    /// Deactivate an account
    Deactivate {
        /// The account to deactivate
        account_id: String,
    },
    /// List movies, or show one
    Movies {
        /// Show only this movie
        movie_id: Option<String>,
    },
    /// Add a movie
    AddMovie {
        /// The title
        title: String,
        /// The base ticket price
        #[arg(long)]
        base_price: Decimal,
        /// The screening room
        #[arg(long)]
        screening_room: u32,
        /// Total seats
        #[arg(long)]
        capacity: u32,
    },
    /// Edit a movie's title, price and room
    UpdateMovie {
        /// The movie
        movie_id: String,
        /// The new title
        #[arg(long)]
        title: String,
        /// The new base price
        #[arg(long)]
        base_price: Decimal,
        /// The new screening room
        #[arg(long)]
        screening_room: u32,
    },
    /// Change a movie's total seat count
    UpdateCapacity {
        /// The movie
        movie_id: String,
        /// The new total seat count
        capacity: u32,
    },
    /// Delete a movie that has no tickets
    DeleteMovie {
        /// The movie
        movie_id: String,
    },
    /// Reserve a seat
    Reserve {
        /// The movie
        movie_id: String,
        /// Screening time, RFC 3339
        #[arg(long)]
        movie_time: String,
        /// STANDARD or REDUCED
        #[arg(long, default_value = "STANDARD")]
        ticket_type: String,
        /// Book for this client (staff only)
        #[arg(long)]
        client_id: Option<String>,
    },
    /// List tickets
    Tickets {
        /// Only tickets for this movie (staff only)
        #[arg(long, conflicts_with = "client_id")]
        movie_id: Option<String>,
        /// Only tickets held by this client (staff only)
        #[arg(long)]
        client_id: Option<String>,
        /// Only your own tickets (clients)
        #[arg(long, conflicts_with_all = ["movie_id", "client_id"])]
        mine: bool,
    },
    /// Move a ticket to another screening time
    Reschedule {
        /// The ticket
        ticket_id: String,
        /// New screening time, RFC 3339
        #[arg(long)]
        movie_time: String,
    },
    /// Cancel a ticket and release its seat
    Cancel {
        /// The ticket
        ticket_id: String,
    },
}
