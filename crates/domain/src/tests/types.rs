// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{DomainError, MovieId, Role, TicketType};

#[test]
fn test_ids_round_trip_through_text() {
    let id: MovieId = MovieId::generate();
    let parsed: MovieId = MovieId::from_str(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_id_parse_rejects_non_uuid() {
    assert!(matches!(
        MovieId::from_str("movie-1"),
        Err(DomainError::InvalidIdentifier(_))
    ));
}

#[test]
fn test_generated_ids_are_distinct() {
    assert_ne!(MovieId::generate(), MovieId::generate());
}

#[test]
fn test_role_parse_is_case_insensitive() {
    assert_eq!(Role::from_str("staff").unwrap(), Role::Staff);
    assert_eq!(Role::from_str("CLIENT").unwrap(), Role::Client);
    assert_eq!(Role::from_str(" Admin ").unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_str("manager"),
        Err(DomainError::InvalidRole(_))
    ));
}

#[test]
fn test_ticket_type_parse_and_display() {
    assert_eq!(TicketType::from_str("reduced").unwrap(), TicketType::Reduced);
    assert_eq!(TicketType::Standard.to_string(), "STANDARD");
    assert!(matches!(
        TicketType::from_str("vip"),
        Err(DomainError::InvalidTicketType(_))
    ));
}
