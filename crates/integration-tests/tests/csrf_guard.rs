//! CSRF tokens across persisted sessions, as the request layer uses
//! them: issue while rendering a form, validate on the POST that comes
//! back after the session round-trips through storage.

use parts_catalog::csrf::{self, CsrfError};
use parts_catalog::session::SessionData;

#[test]
fn test_token_survives_session_persistence_and_validates() {
    let mut session = SessionData::default();
    let token = csrf::issue(&mut session);

    // Session is serialized into the store, then reloaded on the POST.
    let persisted = serde_json::to_string(&session).expect("serialize");
    let reloaded: SessionData = serde_json::from_str(&persisted).expect("deserialize");

    assert_eq!(csrf::validate(&reloaded, Some(&token)), Ok(()));
    assert_eq!(
        csrf::validate(&reloaded, Some("forged")),
        Err(CsrfError::InvalidToken)
    );
}

#[test]
fn test_fresh_session_rejects_any_token() {
    let session = SessionData::default();
    assert_eq!(
        csrf::validate(&session, Some("anything")),
        Err(CsrfError::InvalidToken)
    );
    assert_eq!(csrf::validate(&session, None), Err(CsrfError::InvalidToken));
}

#[test]
fn test_token_is_stable_across_requests_in_one_session() {
    let mut session = SessionData::default();
    let first = csrf::issue(&mut session);

    // Later GET in the same session reuses the token; a successful
    // validation does not rotate it either.
    let second = csrf::issue(&mut session);
    assert_eq!(first, second);

    csrf::validate(&session, Some(&first)).expect("valid");
    assert_eq!(csrf::issue(&mut session), first);
}
