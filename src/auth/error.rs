// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::client::AuthClientError;

/// Authentication error type.
///
/// Every variant maps to 401 or 500. The rendered response is the bare
/// status code with an empty body.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request
    #[error("authorization header with a bearer token is required")]
    MissingCredential,
    /// The auth service reported the token as invalid
    #[error("bearer token was rejected by the auth service")]
    InvalidCredential,
    /// The auth service accepted the token but returned no email
    #[error("auth service accepted the token without an identity claim")]
    MissingIdentityClaim,
    /// The auth service could not be asked, or answered nonsense
    #[error("token validation failed: {0}")]
    AuthorityUnavailable(#[from] AuthClientError),
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::InvalidCredential => "invalid_credential",
            AuthError::MissingIdentityClaim => "missing_identity_claim",
            AuthError::AuthorityUnavailable(_) => "authority_unavailable",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential | AuthError::InvalidCredential => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::MissingIdentityClaim | AuthError::AuthorityUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}
