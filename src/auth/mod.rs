// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication delegated to a remote auth service.
//!
//! ## Auth Flow
//!
//! 1. Client obtains a token from the auth service
//! 2. Client sends `Authorization: Bearer <token>`
//! 3. Data service:
//!    - Classifies the path (`/api` is public, everything else protected)
//!    - Posts the token to `{AUTH_SERVICE_URL}/account/validate`
//!    - Binds the returned email as the request's [`Identity`]
//!
//! ## Security
//!
//! - Deny by default: unknown paths require authentication
//! - Fail closed: an unreachable or confused auth service yields 500, never access
//! - No caching: every protected request is validated again
//! - The validation call is bounded by `AUTH_TIMEOUT_SECS`

pub mod client;
pub mod error;
pub mod extractor;
pub mod identity;
pub mod middleware;
pub mod policy;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AuthClientError, AuthServiceClient, TokenValidator, Validation};
pub use error::AuthError;
pub use extractor::Authenticated;
pub use identity::Identity;
pub use middleware::{auth_middleware, AuthGate};
pub use policy::{Access, RoutePolicy};
