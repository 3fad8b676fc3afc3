use crate::models::identity::Identity;
use crate::models::profile::{DEFAULT_ROLE, Profile};

use googletest::prelude::*;

#[test]
fn given_identity_when_profile_built_then_mirrored_fields_copied() {
    let mut identity = Identity::new("user_1");
    identity.email = Some("a@example.com".to_string());
    identity.first_name = Some("Ada".to_string());
    identity.last_name = Some("Lovelace".to_string());
    identity.avatar_url = Some("https://img.example.com/a.png".to_string());

    let profile = Profile::from_identity(&identity);

    assert_that!(profile.external_id, eq(&"user_1".to_string()));
    assert_that!(profile.email, some(eq(&"a@example.com".to_string())));
    assert_that!(profile.first_name, some(eq(&"Ada".to_string())));
    assert_that!(profile.last_name, some(eq(&"Lovelace".to_string())));
}

#[test]
fn given_identity_when_profile_built_then_application_defaults_applied() {
    let profile = Profile::from_identity(&Identity::new("user_2"));

    assert_that!(profile.role, eq(&DEFAULT_ROLE.to_string()));
    assert_that!(profile.is_active, eq(true));
    assert_that!(profile.created_at, eq(profile.updated_at));
}

#[test]
fn given_sparse_identity_when_profile_built_then_optional_fields_absent() {
    let profile = Profile::from_identity(&Identity::new("user_3"));

    assert_that!(profile.email, none());
    assert_that!(profile.avatar_url, none());
}
