// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Customer Data Service
//!
//! CRUD API over customer records. Every route except the `/api` status
//! probe requires a bearer token, which is validated on each request by a
//! remote authentication service.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Route policy, authentication gate, auth service client
//! - `config` - Environment configuration
//! - `store` - In-memory customer store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod telemetry;
