// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::models::StatusResponse;

/// Message reported by the status probe.
pub const STATUS_MESSAGE: &str = "Data service is up and running";

/// Public status probe.
///
/// Reachable without credentials; never contacts the auth service.
#[utoipa::path(
    get,
    path = "/api",
    tag = "Status",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_MESSAGE.to_string(),
    })
}
