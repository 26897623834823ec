// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and the
//! OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Longest accepted customer name, in characters.
pub const MAX_NAME_LEN: usize = 255;

// =============================================================================
// Customer Models
// =============================================================================

/// A stored customer record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Customer {
    /// Identifier assigned by the store.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Body for creating or replacing a customer.
///
/// Any `id` in the body is ignored; the store owns identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
}

impl CustomerRequest {
    /// Field-level validation applied before anything reaches the store.
    pub fn validate(&self) -> Result<(), ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::bad_request("name must not be blank"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ApiError::bad_request(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ApiError::bad_request("email must be a valid email address"));
        }
        Ok(())
    }
}

/// `local@domain`, one `@`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

// =============================================================================
// Status Model
// =============================================================================

/// Body of the public status probe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}
