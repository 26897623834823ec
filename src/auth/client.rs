// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Remote token validation client.
//!
//! The auth service is the only authority on token validity. Every protected
//! request costs exactly one `POST {base}/account/validate` carrying the
//! caller's token as `Authorization: Bearer <token>`. The response carries
//! both the verdict and the identity claim:
//!
//! ```json
//! { "valid": true, "email": "user@example.com" }
//! ```
//!
//! ## Failure model
//!
//! - 2xx with a decodable body → [`Validation`]
//! - 401 / 403 → `Validation { valid: false, .. }` (the authority said no)
//! - timeout, connection failure, any other status, undecodable body →
//!   [`AuthClientError`]. These are never reported as `valid = false`.
//!
//! Nothing is cached and nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Path of the validation endpoint, relative to the auth service base URL.
pub const VALIDATE_PATH: &str = "/account/validate";

/// Upper bound on the validation reply; the expected body is a tiny object.
pub const MAX_RESPONSE_BYTES: usize = 16 * 1024;

/// Verdict returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Validation {
    pub fn rejected() -> Self {
        Self {
            valid: false,
            email: None,
        }
    }
}

/// Errors talking to the auth service.
#[derive(Debug, Error)]
pub enum AuthClientError {
    #[error("invalid auth service endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("auth service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("auth service unreachable: {0}")]
    Transport(String),
    #[error("auth service answered with HTTP {0}")]
    UnexpectedStatus(u16),
    #[error("auth service sent a malformed response: {0}")]
    MalformedResponse(String),
}

/// Anything that can turn a bearer token into a [`Validation`].
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate `token` (without the `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<Validation, AuthClientError>;
}

/// HTTP client for the auth service.
#[derive(Clone)]
pub struct AuthServiceClient {
    validate_url: Url,
    timeout: Duration,
    client: reqwest::Client,
}

impl AuthServiceClient {
    /// Create a client for the auth service rooted at `base_url`.
    ///
    /// `timeout` bounds the whole round-trip, body included.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, AuthClientError> {
        let validate_url = validate_endpoint(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthClientError::Transport(e.to_string()))?;

        Ok(Self {
            validate_url,
            timeout,
            client,
        })
    }

    pub fn validate_url(&self) -> &Url {
        &self.validate_url
    }

    fn transport_error(&self, err: reqwest::Error) -> AuthClientError {
        if err.is_timeout() {
            AuthClientError::Timeout(self.timeout)
        } else {
            AuthClientError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl TokenValidator for AuthServiceClient {
    async fn validate(&self, token: &str) -> Result<Validation, AuthClientError> {
        tracing::debug!(url = %self.validate_url, "validating bearer token");

        let mut response = self
            .client
            .post(self.validate_url.clone())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(Validation::rejected());
        }
        if !status.is_success() {
            return Err(AuthClientError::UnexpectedStatus(status.as_u16()));
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_RESPONSE_BYTES as u64)
        {
            return Err(oversized_body());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.transport_error(e))?
        {
            if body.len() + chunk.len() > MAX_RESPONSE_BYTES {
                return Err(oversized_body());
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice::<Validation>(&body)
            .map_err(|e| AuthClientError::MalformedResponse(e.to_string()))
    }
}

fn oversized_body() -> AuthClientError {
    AuthClientError::MalformedResponse(format!(
        "response body exceeds {MAX_RESPONSE_BYTES} bytes"
    ))
}

/// Build `{base}/account/validate`, tolerating a trailing slash on the base.
fn validate_endpoint(base_url: &Url) -> Result<Url, AuthClientError> {
    if base_url.query().is_some() || base_url.fragment().is_some() {
        return Err(AuthClientError::InvalidEndpoint(format!(
            "{base_url} must not carry a query or fragment"
        )));
    }

    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| AuthClientError::InvalidEndpoint(format!("{base_url} cannot be a base")))?
        .pop_if_empty()
        .extend(VALIDATE_PATH.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}
