// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod caller;
mod error;
mod ledger;
mod memory;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use caller::Caller;
pub use error::{ErrorKind, LedgerError};
pub use ledger::{DEFAULT_MAX_CONFLICT_RETRIES, Ledger, LedgerConfig, MovieDetails};
pub use memory::MemoryStore;
pub use store::{BookingStore, IdentityDirectory, StoreError, TicketFilter};
