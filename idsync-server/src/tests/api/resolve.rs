use crate::ApiError;
use crate::api::resolve::require_organization;

use idsync_core::ActorContext;

#[test]
fn test_explicit_organization_wins() {
    let actor = ActorContext::new("user_1", Some("org_session".to_string()));

    let resolved = require_organization(&actor, Some("org_explicit")).unwrap();

    assert_eq!(resolved, "org_explicit");
}

#[test]
fn test_falls_back_to_session_organization() {
    let actor = ActorContext::new("user_1", Some("org_session".to_string()));

    let resolved = require_organization(&actor, None).unwrap();

    assert_eq!(resolved, "org_session");
}

#[test]
fn test_no_organization_is_a_validation_error() {
    let actor = ActorContext::new("user_1", None);

    let result = require_organization(&actor, None);

    match result {
        Err(ApiError::Validation { message, .. }) => {
            assert!(message.contains("organization context required"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_explicit_organization_without_session() {
    let actor = ActorContext::new("user_1", None);

    let resolved = require_organization(&actor, Some("org_explicit")).unwrap();

    assert_eq!(resolved, "org_explicit");
}
