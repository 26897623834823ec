// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication gate.
//!
//! Runs in front of every route. For each request:
//!
//! 1. Classify the path with [`RoutePolicy`]. Public paths are forwarded
//!    untouched and the auth service is not called.
//! 2. Extract the token from `Authorization: Bearer <token>`. Anything else
//!    (absent header, other scheme, non-ASCII value, empty token) → 401.
//! 3. Ask the [`TokenValidator`] once. `valid = false` → 401; transport or
//!    protocol failure → 500; `valid = true` without an email → 500.
//! 4. Insert the resolved [`Identity`] into the request extensions and call
//!    the next stage.
//!
//! Rejections short-circuit with an empty body and the handler never runs.
//!
//! ```rust,ignore
//! let gate = AuthGate::new(RoutePolicy::default(), Arc::new(client));
//! let app = Router::new()
//!     .route("/api/customers", get(list_customers))
//!     .layer(axum::middleware::from_fn_with_state(gate, auth_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{
    client::TokenValidator,
    policy::{Access, RoutePolicy},
    AuthError, Identity,
};

/// Scheme prefix accepted on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthGate {
    policy: RoutePolicy,
    validator: Arc<dyn TokenValidator>,
}

impl AuthGate {
    pub fn new(policy: RoutePolicy, validator: Arc<dyn TokenValidator>) -> Self {
        Self { policy, validator }
    }

    /// Resolve the caller behind `headers`, asking the auth service once.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingCredential)?;

        let verdict = self.validator.validate(token).await?;
        if !verdict.valid {
            return Err(AuthError::InvalidCredential);
        }

        verdict
            .email
            .filter(|email| !email.trim().is_empty())
            .map(Identity::new)
            .ok_or(AuthError::MissingIdentityClaim)
    }
}

/// Authentication middleware function.
pub async fn auth_middleware(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    if gate.policy.classify(&path) == Access::Public {
        return next.run(request).await;
    }

    match gate.authenticate(request.headers()).await {
        Ok(identity) => {
            tracing::debug!(%path, email = %identity.email, "request authenticated");
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => {
            log_auth_error(&err, &path);
            err.into_response()
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}

fn log_auth_error(err: &AuthError, path: &str) {
    match err {
        AuthError::MissingCredential | AuthError::InvalidCredential => {
            tracing::debug!(%path, code = err.error_code(), "request rejected: {err}");
        }
        AuthError::MissingIdentityClaim | AuthError::AuthorityUnavailable(_) => {
            tracing::error!(%path, code = err.error_code(), "request failed closed: {err}");
        }
    }
}
