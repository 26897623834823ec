// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Customer CRUD endpoints.
//!
//! All routes sit behind the authentication gate. Handlers only read the
//! bound identity; they never authenticate on their own.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Authenticated,
    error::ApiError,
    models::{Customer, CustomerRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    security(("bearer" = [])),
    responses(
        (status = 200, body = [Customer]),
        (status = 401, description = "Missing or rejected bearer token"),
        (status = 500, description = "Token could not be validated")
    )
)]
pub async fn list_customers(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
) -> Json<Vec<Customer>> {
    let store = state.store.read().await;
    tracing::debug!(caller = %identity, count = store.len(), "listing customers");
    Json(store.list())
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerRequest,
    tag = "Customers",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Customer),
        (status = 400, description = "Invalid customer fields"),
        (status = 401, description = "Missing or rejected bearer token")
    )
)]
pub async fn create_customer(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    request.validate()?;

    let customer = state.store.write().await.insert(request);
    tracing::info!(caller = %identity, customer_id = customer.id, "customer created");
    Ok(Json(customer))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer identifier")),
    tag = "Customers",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "No such customer")
    )
)]
pub async fn get_customer(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    tracing::debug!(caller = %identity, customer_id = id, "fetching customer");
    let store = state.store.read().await;
    Ok(Json(store.find(id)?))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer identifier")),
    request_body = CustomerRequest,
    tag = "Customers",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Customer),
        (status = 400, description = "Invalid customer fields"),
        (status = 404, description = "No such customer")
    )
)]
pub async fn update_customer(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    request.validate()?;

    let customer = state.store.write().await.update(id, request)?;
    tracing::info!(caller = %identity, customer_id = id, "customer updated");
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer identifier")),
    tag = "Customers",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "No such customer")
    )
)]
pub async fn delete_customer(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.delete(id)?;
    tracing::info!(caller = %identity, customer_id = id, "customer deleted");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Identity;

    fn caller() -> Authenticated {
        Authenticated(Identity::new("a@b.com"))
    }

    fn request(name: &str, email: &str) -> CustomerRequest {
        CustomerRequest {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let state = AppState::default();

        let Json(created) = create_customer(
            caller(),
            State(state.clone()),
            Json(request("Ada", "ada@example.com")),
        )
        .await
        .expect("customer creation succeeds");

        let Json(fetched) = get_customer(caller(), State(state.clone()), Path(created.id))
            .await
            .expect("customer lookup succeeds");

        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.email, "ada@example.com");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() {
        let state = AppState::default();

        let err = create_customer(caller(), State(state.clone()), Json(request("", "nope")))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn list_returns_all_customers() {
        let state = AppState::default();
        {
            let mut store = state.store.write().await;
            store.insert(request("Ada", "ada@example.com"));
            store.insert(request("Grace", "grace@example.com"));
        }

        let Json(customers) = list_customers(caller(), State(state)).await;
        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn update_changes_stored_record() {
        let state = AppState::default();
        let created = state
            .store
            .write()
            .await
            .insert(request("Ada", "ada@example.com"));

        let Json(updated) = update_customer(
            caller(),
            State(state.clone()),
            Path(created.id),
            Json(request("Ada King", "ada@king.dev")),
        )
        .await
        .expect("customer update succeeds");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ada King");
        assert_eq!(state.store.read().await.find(created.id).unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = update_customer(
            caller(),
            State(AppState::default()),
            Path(42),
            Json(request("Ada", "ada@example.com")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_not_found() {
        let state = AppState::default();
        let created = state
            .store
            .write()
            .await
            .insert(request("Ada", "ada@example.com"));

        let status = delete_customer(caller(), State(state.clone()), Path(created.id))
            .await
            .expect("customer deletion succeeds");
        assert_eq!(status, StatusCode::OK);

        for _ in 0..2 {
            let err = delete_customer(caller(), State(state.clone()), Path(created.id))
                .await
                .unwrap_err();
            assert_eq!(err.status, StatusCode::NOT_FOUND);
        }

        let err = get_customer(caller(), State(state), Path(created.id))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
