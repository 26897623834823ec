// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{process::ExitCode, sync::Arc};

use customer_data_service::{
    api::router,
    auth::{AuthGate, AuthServiceClient, RoutePolicy},
    config::Config,
    state::AppState,
    store::CustomerStore,
    telemetry::init_tracing,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(Default::default());
            tracing::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    let client = match AuthServiceClient::new(&config.auth_service_url, config.auth_timeout) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("failed to create auth service client: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        validate_url = %client.validate_url(),
        timeout = ?config.auth_timeout,
        "token validation delegated to auth service"
    );

    let gate = AuthGate::new(RoutePolicy::default(), Arc::new(client));
    let app = router(AppState::new(CustomerStore::new()), gate);

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, "failed to bind: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "customer data service listening");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {err}");
        return ExitCode::FAILURE;
    }

    tracing::info!("shutdown complete");
    ExitCode::SUCCESS
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
