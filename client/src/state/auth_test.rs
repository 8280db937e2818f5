use super::*;
use wire::Session;

fn make_session(name: &str) -> Session {
    Session {
        token: "tok".to_owned(),
        user: User {
            id: "u1".to_owned(),
            name: name.to_owned(),
            email: "alice@example.com".to_owned(),
            ..User::default()
        },
    }
}

#[test]
fn default_is_loading_without_token() {
    let state = AuthState::default();
    assert!(state.loading());
    assert_eq!(state.token(), None);
    assert!(state.user().is_none());
}

#[test]
fn validating_state_shows_user_but_withholds_token() {
    let state = AuthState::from_session(SessionState::restoring(Some(make_session("Alice"))));
    assert!(state.loading());
    assert_eq!(state.display_name(), "Alice");
    assert_eq!(state.token(), None);
}

#[test]
fn authenticated_state_exposes_token() {
    let state = AuthState::from_session(SessionState::authenticated(make_session("Alice")));
    assert!(!state.loading());
    assert_eq!(state.token(), Some("tok"));
}

#[test]
fn display_name_falls_back_to_email() {
    let state = AuthState::from_session(SessionState::authenticated(make_session("  ")));
    assert_eq!(state.display_name(), "alice@example.com");
}
