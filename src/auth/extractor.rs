// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the authenticated caller.
//!
//! Use the `Authenticated` extractor in handlers behind the gate:
//!
//! ```rust,ignore
//! async fn my_handler(Authenticated(identity): Authenticated) -> impl IntoResponse {
//!     // identity is the Identity bound by auth_middleware
//! }
//! ```
//!
//! The extractor never talks to the auth service itself. It only reads what
//! the gate put into the request extensions, and rejects with 401 when
//! nothing is there.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthError, Identity};

/// Identity bound to the current request by the authentication gate.
pub struct Authenticated(pub Identity);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(Authenticated)
            .ok_or(AuthError::MissingCredential)
    }
}
