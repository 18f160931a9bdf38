// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger::Ledger;
use cinema_ledger_api::BookingLedger;
use cinema_ledger_persistence::{Persistence, SharedPersistence};
use clap::Parser;
use serde_json::Value;

use crate::args::Args;
use crate::commands::execute;
use crate::error::CliError;

const SEED_PASSWORD: &str = "seeded-password";

fn create_test_ledger() -> BookingLedger {
    let persistence: Persistence = Persistence::new_in_memory()
        .expect("in-memory database")
        .with_password_cost(4);
    Ledger::new(SharedPersistence::new(persistence))
}

fn create_test_seeded_ledger() -> BookingLedger {
    let ledger: BookingLedger = create_test_ledger();
    run_as(&ledger, None, &["seed"]).unwrap();
    ledger
}

fn run_as(ledger: &BookingLedger, login: Option<&str>, argv: &[&str]) -> Result<Value, CliError> {
    let mut full: Vec<&str> = vec!["cinema-ledger", "--password", SEED_PASSWORD];
    if let Some(login) = login {
        full.extend(["--login", login]);
    }
    full.extend_from_slice(argv);
    let args: Args = Args::try_parse_from(full).unwrap();
    execute(ledger, &args)
}

fn first_movie_id(ledger: &BookingLedger) -> String {
    let movies: Value = run_as(ledger, Some("DemoStaff1"), &["movies"]).unwrap();
    movies["movies"][0]["movie_id"].as_str().unwrap().to_string()
}

#[test]
fn test_seed_reports_created_records() {
    let ledger: BookingLedger = create_test_ledger();

    let output: Value = run_as(&ledger, None, &["seed"]).unwrap();
    assert_eq!(output["movies_created"], 3);
    assert_eq!(output["accounts_created"], 3);
}

#[test]
fn test_movies_lists_seeded_catalogue() {
    let ledger: BookingLedger = create_test_seeded_ledger();

    let output: Value = run_as(&ledger, Some("DemoClient1"), &["movies"]).unwrap();
    let titles: Vec<&str> = output["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|movie| movie["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Cars", "Joker", "Pulp Fiction"]);
}

#[test]
fn test_reserve_and_cancel_round_trip() {
    let ledger: BookingLedger = create_test_seeded_ledger();
    let movie_id: String = first_movie_id(&ledger);

    let reserved: Value = run_as(
        &ledger,
        Some("DemoClient1"),
        &[
            "reserve",
            &movie_id,
            "--movie-time",
            "2026-05-02T18:15:00Z",
            "--ticket-type",
            "reduced",
        ],
    )
    .unwrap();
    let ticket_id: String = reserved["ticket"]["ticket_id"].as_str().unwrap().to_string();
    assert_eq!(reserved["ticket"]["ticket_type"], "REDUCED");

    let mine: Value = run_as(&ledger, Some("DemoClient1"), &["tickets", "--mine"]).unwrap();
    assert_eq!(mine["tickets"].as_array().unwrap().len(), 1);

    run_as(&ledger, Some("DemoClient1"), &["cancel", &ticket_id]).unwrap();

    let after: Value = run_as(&ledger, Some("DemoStaff1"), &["tickets"]).unwrap();
    assert!(after["tickets"].as_array().unwrap().is_empty());
}

#[test]
fn test_update_capacity_below_sold_seats_fails() {
    let ledger: BookingLedger = create_test_seeded_ledger();
    let movie_id: String = first_movie_id(&ledger);
    for _ in 0..2 {
        run_as(
            &ledger,
            Some("DemoClient1"),
            &["reserve", &movie_id, "--movie-time", "2026-05-02T18:15:00Z"],
        )
        .unwrap();
    }

    let err: CliError = run_as(
        &ledger,
        Some("DemoStaff1"),
        &["update-capacity", &movie_id, "1"],
    )
    .unwrap_err();
    assert!(matches!(err, CliError::Api(ref api) if api.status_code() == 409));
}

#[test]
fn test_register_then_deactivate() {
    let ledger: BookingLedger = create_test_seeded_ledger();

    let created: Value = run_as(
        &ledger,
        None,
        &["register", "WalkInGuest", "--new-password", "guest-password"],
    )
    .unwrap();
    let account_id: String = created["account"]["account_id"]
        .as_str()
        .unwrap()
        .to_string();

    let output: Value = run_as(&ledger, Some("DemoAdmin1"), &["deactivate", &account_id]).unwrap();
    assert_eq!(output["is_active"], false);

    let output: Value = run_as(&ledger, Some("DemoAdmin1"), &["activate", &account_id]).unwrap();
    assert_eq!(output["is_active"], true);
}

#[test]
fn test_command_without_login_is_rejected() {
    let ledger: BookingLedger = create_test_seeded_ledger();

    let err: CliError = run_as(&ledger, None, &["movies"]).unwrap_err();
    assert!(matches!(err, CliError::MissingCredential("--login")));
}

#[test]
fn test_wrong_role_is_reported_with_status() {
    let ledger: BookingLedger = create_test_seeded_ledger();

    let err: CliError = run_as(
        &ledger,
        Some("DemoClient1"),
        &[
            "add-movie",
            "Heat",
            "--base-price",
            "20",
            "--screening-room",
            "4",
            "--capacity",
            "30",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().ends_with("(status 403)"));
}
