use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::Error as JwtError};
use serde::Deserialize;
use tracing::debug;

use domain::wallet::UserId;
use wallet_application::error::AppError;

use crate::incoming::http_axum::error_mapper::HttpError;

/// `sub` may be issued either as a JSON string (`"42"`) or number (`42`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Subject {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Subject,
}

/// Verifies HS256 bearer tokens and extracts the caller's user id.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<UserId, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e: JwtError| {
                debug!("Rejected bearer token: {}", e);
                AppError::Unauthorized
            },
        )?;

        let raw_id = match data.claims.sub {
            Subject::Number(id) => id,
            Subject::Text(text) => text.trim().parse().map_err(|_| AppError::Unauthorized)?,
        };

        UserId::new(raw_id).map_err(|_| AppError::Unauthorized)
    }
}

/// Caller identity resolved from `Authorization: Bearer <jwt>`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<JwtVerifier>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| HttpError(AppError::Unauthorized))?;

        let verifier = Arc::<JwtVerifier>::from_ref(state);
        let user_id = verifier.verify(bearer.token()).map_err(HttpError)?;

        Ok(Self { user_id })
    }
}
