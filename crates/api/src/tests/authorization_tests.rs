// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_ledger_domain::{AccountId, Movie, MovieId, Role, Ticket, TicketId, TicketType};
use rust_decimal_macros::dec;
use time::macros::datetime;

use crate::{AuthError, AuthenticatedActor, AuthorizationService, Capability, compute_capabilities};

fn create_test_actor(role: Role) -> AuthenticatedActor {
    AuthenticatedActor::new(AccountId::generate(), format!("{role}Login1"), role)
}

fn create_test_ticket(client_id: AccountId) -> Ticket {
    let movie: Movie = Movie::new(MovieId::generate(), "Cars", dec!(30.50), 2, 50).unwrap();
    Ticket::issue(
        TicketId::generate(),
        client_id,
        &movie,
        datetime!(2026-05-02 18:15 UTC),
        TicketType::Standard,
    )
    .unwrap()
}

#[test]
fn test_only_staff_manages_movies() {
    let staff: AuthenticatedActor = create_test_actor(Role::Staff);
    let client: AuthenticatedActor = create_test_actor(Role::Client);
    let admin: AuthenticatedActor = create_test_actor(Role::Admin);

    assert!(AuthorizationService::authorize_manage_movies(&staff, "create_movie").is_ok());

    let result = AuthorizationService::authorize_manage_movies(&client, "create_movie");
    assert_eq!(
        result,
        Err(AuthError::Unauthorized {
            action: String::from("create_movie"),
            required_role: String::from("STAFF"),
        })
    );
    assert!(AuthorizationService::authorize_manage_movies(&admin, "delete_movie").is_err());
}

#[test]
fn test_staff_and_clients_read_movies() {
    assert!(AuthorizationService::authorize_read_movies(&create_test_actor(Role::Staff)).is_ok());
    assert!(AuthorizationService::authorize_read_movies(&create_test_actor(Role::Client)).is_ok());

    let result = AuthorizationService::authorize_read_movies(&create_test_actor(Role::Admin));
    assert_eq!(
        result,
        Err(AuthError::Unauthorized {
            action: String::from("read_movies"),
            required_role: String::from("STAFF or CLIENT"),
        })
    );
}

#[test]
fn test_client_reserves_only_for_itself() {
    let client: AuthenticatedActor = create_test_actor(Role::Client);

    assert!(AuthorizationService::authorize_reserve(&client, client.account_id).is_ok());
    assert!(matches!(
        AuthorizationService::authorize_reserve(&client, AccountId::generate()),
        Err(AuthError::Forbidden { .. })
    ));
}

#[test]
fn test_staff_reserves_for_any_client() {
    let staff: AuthenticatedActor = create_test_actor(Role::Staff);
    assert!(AuthorizationService::authorize_reserve(&staff, AccountId::generate()).is_ok());
}

#[test]
fn test_admin_cannot_reserve() {
    let admin: AuthenticatedActor = create_test_actor(Role::Admin);
    assert!(matches!(
        AuthorizationService::authorize_reserve(&admin, admin.account_id),
        Err(AuthError::Unauthorized { .. })
    ));
}

#[test]
fn test_ticket_reads_follow_ownership() {
    let owner: AuthenticatedActor = create_test_actor(Role::Client);
    let other: AuthenticatedActor = create_test_actor(Role::Client);
    let staff: AuthenticatedActor = create_test_actor(Role::Staff);
    let ticket: Ticket = create_test_ticket(owner.account_id);

    assert!(AuthorizationService::authorize_read_ticket(&owner, &ticket).is_ok());
    assert!(AuthorizationService::authorize_read_ticket(&staff, &ticket).is_ok());
    assert!(matches!(
        AuthorizationService::authorize_read_ticket(&other, &ticket),
        Err(AuthError::Forbidden { .. })
    ));
}

#[test]
fn test_only_owner_modifies_ticket() {
    let owner: AuthenticatedActor = create_test_actor(Role::Client);
    let other: AuthenticatedActor = create_test_actor(Role::Client);
    let staff: AuthenticatedActor = create_test_actor(Role::Staff);
    let ticket: Ticket = create_test_ticket(owner.account_id);

    assert!(AuthorizationService::authorize_modify_ticket(&owner, &ticket, "cancel").is_ok());
    assert!(matches!(
        AuthorizationService::authorize_modify_ticket(&other, &ticket, "cancel"),
        Err(AuthError::Forbidden { .. })
    ));
    assert!(matches!(
        AuthorizationService::authorize_modify_ticket(&staff, &ticket, "reschedule"),
        Err(AuthError::Unauthorized { .. })
    ));
}

#[test]
fn test_account_management_is_admin_only() {
    let admin: AuthenticatedActor = create_test_actor(Role::Admin);
    let staff: AuthenticatedActor = create_test_actor(Role::Staff);

    assert!(AuthorizationService::authorize_manage_accounts(&admin, "create_account").is_ok());
    assert!(AuthorizationService::authorize_manage_accounts(&staff, "create_account").is_err());
    assert!(AuthorizationService::authorize_list_accounts(&staff).is_ok());
    assert!(AuthorizationService::authorize_list_accounts(&admin).is_ok());
    assert!(
        AuthorizationService::authorize_list_accounts(&create_test_actor(Role::Client)).is_err()
    );
}

#[test]
fn test_capabilities_match_roles() {
    let staff = compute_capabilities(&create_test_actor(Role::Staff));
    assert!(staff.can_manage_movies.is_allowed());
    assert!(staff.can_reserve_for_others.is_allowed());
    assert!(staff.can_list_all_tickets.is_allowed());
    assert_eq!(staff.can_manage_accounts, Capability::Denied);

    let client = compute_capabilities(&create_test_actor(Role::Client));
    assert!(client.can_read_movies.is_allowed());
    assert!(client.can_reserve_for_self.is_allowed());
    assert_eq!(client.can_reserve_for_others, Capability::Denied);
    assert_eq!(client.can_list_accounts, Capability::Denied);

    let admin = compute_capabilities(&create_test_actor(Role::Admin));
    assert!(admin.can_manage_accounts.is_allowed());
    assert_eq!(admin.can_read_movies, Capability::Denied);
    assert_eq!(admin.can_reserve_for_self, Capability::Denied);
}

#[test]
fn test_capabilities_serialize_as_booleans() {
    let json = serde_json::to_value(compute_capabilities(&create_test_actor(Role::Client))).unwrap();
    assert_eq!(json["can_read_movies"], serde_json::Value::Bool(true));
    assert_eq!(json["can_manage_movies"], serde_json::Value::Bool(false));
}
