// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authenticated caller identity.

/// Principal resolved by the auth service for the current request.
///
/// Lives in the request extensions only; it is never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Email claim returned by the auth service.
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}
