//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use idsync_auth::AuthError;
use idsync_core::ActorContext;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

/// The authenticated caller, established from the bearer token.
///
/// Wraps the [`ActorContext`] every component call takes; handlers
/// destructure it and thread the context through explicitly.
pub struct Actor(pub ActorContext);

impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(AuthError::missing_header)?
                .to_str()
                .map_err(|_| AuthError::invalid_scheme())?
                .strip_prefix("Bearer ")
                .ok_or_else(AuthError::invalid_scheme)?;

            let claims = state.jwt.validate(token)?;

            Ok(Actor(claims.actor()))
        }
    }
}
