//! The identity of the signed in user.
//!
//! Signing in is handled by an external identity provider that sits in front
//! of the server and forwards the user's details in request headers. The
//! server trusts these headers as given.

use axum::{extract::FromRequestParts, http::request::Parts, response::Response};

use crate::{Error, record::UserId};

/// The header carrying the signed in user's ID.
pub const USER_ID_HEADER: &str = "x-user-id";
/// The header carrying the signed in user's first name.
pub const FIRST_NAME_HEADER: &str = "x-user-first-name";

/// The signed in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub first_name: Option<String>,
}

impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::new(value.trim()).ok())
            .ok_or_else(|| {
                tracing::warn!("request to {} is missing the {USER_ID_HEADER} header", parts.uri);
                Error::MissingIdentity.into_alert_response()
            })?;

        let first_name = parts
            .headers
            .get(FIRST_NAME_HEADER)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).trim().to_owned())
            .filter(|name| !name.is_empty());

        Ok(Self {
            user_id,
            first_name,
        })
    }
}
