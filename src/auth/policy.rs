// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route authorization policy.
//!
//! Routes are protected unless a public pattern matches the request path
//! exactly. The default policy exposes only the status probe at `/api`.

use std::sync::Arc;

/// Path of the public status probe.
pub const STATUS_PATH: &str = "/api";

/// Whether a route requires an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No credential is needed; the auth service is never called.
    Public,
    /// A validated bearer token is required.
    Protected,
}

/// Immutable table of public path patterns.
///
/// Patterns use `matchit` syntax (`/items/{id}`). The policy is method-agnostic.
#[derive(Clone)]
pub struct RoutePolicy {
    public: Arc<matchit::Router<()>>,
}

impl RoutePolicy {
    /// Build a policy where exactly `public_paths` are public.
    pub fn new<I, S>(public_paths: I) -> Result<Self, matchit::InsertError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut public = matchit::Router::new();
        for path in public_paths {
            public.insert(path.as_ref(), ())?;
        }
        Ok(Self {
            public: Arc::new(public),
        })
    }

    /// Classify a request path. Unknown paths are [`Access::Protected`].
    pub fn classify(&self, path: &str) -> Access {
        if self.public.at(path).is_ok() {
            Access::Public
        } else {
            Access::Protected
        }
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new([STATUS_PATH]).expect("status path is a valid route pattern")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_path_is_public() {
        assert_eq!(RoutePolicy::default().classify("/api"), Access::Public);
    }

    #[test]
    fn customer_routes_are_protected() {
        let policy = RoutePolicy::default();
        assert_eq!(policy.classify("/api/customers"), Access::Protected);
        assert_eq!(policy.classify("/api/customers/1"), Access::Protected);
        assert_eq!(policy.classify("/api/openapi.json"), Access::Protected);
    }

    #[test]
    fn near_misses_fail_safe_to_protected() {
        let policy = RoutePolicy::default();
        for path in ["/", "", "/api/", "/API", "/apix", "/v1/api", "/unknown"] {
            assert_eq!(policy.classify(path), Access::Protected, "path {path:?}");
        }
    }

    #[test]
    fn parameterized_public_patterns_match_concrete_paths() {
        let policy = RoutePolicy::new(["/health", "/public/{id}"]).unwrap();
        assert_eq!(policy.classify("/health"), Access::Public);
        assert_eq!(policy.classify("/public/42"), Access::Public);
        assert_eq!(policy.classify("/public/42/extra"), Access::Protected);
        assert_eq!(policy.classify("/api"), Access::Protected);
    }

    #[test]
    fn empty_policy_protects_everything() {
        let policy = RoutePolicy::new(Vec::<String>::new()).unwrap();
        assert_eq!(policy.classify("/api"), Access::Protected);
    }

    #[test]
    fn duplicate_patterns_are_rejected() {
        assert!(RoutePolicy::new(["/health", "/health"]).is_err());
    }
}
