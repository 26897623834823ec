// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::any::Any;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    auth::{auth_middleware, policy::STATUS_PATH, AuthGate},
    models::{Customer, CustomerRequest, StatusResponse},
    state::AppState,
};

pub mod customers;
pub mod health;

/// Build the application router.
///
/// Layers, outermost first: request id, trace, request id propagation,
/// CORS, panic guard, authentication gate, routes.
pub fn router(state: AppState, gate: AuthGate) -> Router {
    Router::new()
        .route(STATUS_PATH, get(health::status))
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route("/api/openapi.json", get(openapi))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(state)
        .layer(middleware::from_fn_with_state(gate, auth_middleware))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any panic below the panic guard becomes an empty 500.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%detail, "request handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::status,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer
    ),
    components(schemas(Customer, CustomerRequest, StatusResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Status", description = "Public status probe"),
        (name = "Customers", description = "Customer management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
