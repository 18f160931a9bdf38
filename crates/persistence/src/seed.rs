// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data for a fresh database.
//!
//! Seeding is idempotent: movies are keyed by fixed IDs and accounts by
//! login, and anything already present is left untouched.

use cinema_ledger_domain::{Account, AccountId, Movie, MovieId, Role};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{Persistence, PersistenceError};

struct SeedMovie {
    id: u128,
    title: &'static str,
    base_price: Decimal,
    screening_room: u32,
    capacity: u32,
}

const SEED_MOVIES: [SeedMovie; 3] = [
    SeedMovie {
        id: 0xf3e6_6584_f793_4f5e_9dec_904c_a00e_2dd6,
        title: "Pulp Fiction",
        base_price: Decimal::from_parts(4575, 0, 0, false, 2),
        screening_room: 1,
        capacity: 100,
    },
    SeedMovie {
        id: 0x9b9e_1de2_099b_415d_96b4_f7cf_c889_7318,
        title: "Cars",
        base_price: Decimal::from_parts(3050, 0, 0, false, 2),
        screening_room: 2,
        capacity: 50,
    },
    SeedMovie {
        id: 0xb69b_4714_e307_4ebf_b491_e372_0f96_3f53,
        title: "Joker",
        base_price: Decimal::from_parts(5000, 0, 0, false, 2),
        screening_room: 3,
        capacity: 75,
    },
];

/// Titles of the seeded movies.
pub const SEED_MOVIE_TITLES: [&str; 3] = ["Pulp Fiction", "Cars", "Joker"];

/// Logins of the seeded client, admin and staff accounts.
pub const SEED_ACCOUNT_LOGINS: [(&str, Role); 3] = [
    ("DemoClient1", Role::Client),
    ("DemoAdmin1", Role::Admin),
    ("DemoStaff1", Role::Staff),
];

/// What a seeding run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub movies_created: usize,
    pub accounts_created: usize,
}

/// Seeds the demo movies and one account per role.
///
/// Every seeded account gets `password`.
///
/// # Errors
///
/// Returns an error if any record cannot be read or written.
pub fn seed_demo_data(
    persistence: &mut Persistence,
    password: &str,
) -> Result<SeedSummary, PersistenceError> {
    let mut summary: SeedSummary = SeedSummary::default();

    for seed in &SEED_MOVIES {
        let movie_id: MovieId = MovieId::from_uuid(Uuid::from_u128(seed.id));
        if persistence.get_movie(movie_id)?.is_some() {
            debug!(%movie_id, title = seed.title, "Seed movie already present");
            continue;
        }

        let movie: Movie = Movie::new(
            movie_id,
            seed.title,
            seed.base_price,
            seed.screening_room,
            seed.capacity,
        )
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        persistence.insert_movie(&movie)?;
        summary.movies_created += 1;
    }

    for (login, role) in SEED_ACCOUNT_LOGINS {
        if persistence.get_account_data_by_login(login)?.is_some() {
            debug!(login, "Seed account already present");
            continue;
        }

        let account: Account = Account::new(AccountId::generate(), login, role)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        persistence.create_account(&account, password)?;
        summary.accounts_created += 1;
    }

    info!(
        movies_created = summary.movies_created,
        accounts_created = summary.accounts_created,
        "Seeded demo data"
    );
    Ok(summary)
}
