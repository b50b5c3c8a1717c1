// Application server configuration and setup

use std::{net::SocketAddr, time::Duration};
use axum::{
    Router,
    error_handling::HandleErrorLayer,
    middleware::from_fn,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::{error, info};

use crate::api::fallback::fallback_handler;
use crate::api::ping::routes::ping_routes;
use crate::config::environment::EnvironmentVariables;
use crate::utils::{
    error_handler::handle_global_error,
    request_logger::log_request,
};

/// Creates the application router with its middleware layers
pub fn create_app(env: &EnvironmentVariables) -> Router {
    let router: Router = Router::new()
        .merge(ping_routes(env.cors_enabled))
        .fallback(fallback_handler);

    // The timeout is opt-in; without it requests run as long as the connection allows
    let router: Router = match env.request_timeout_seconds {
        Some(seconds) => router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(seconds))),
        ),
        None => router,
    };

    router.layer(from_fn(log_request))
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd
        .take_tcp_listener(0)
        .context("Failed to take inherited TCP listener")?
    {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install terminate signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

/// Binds the listener and serves until a shutdown signal arrives
pub async fn run(env: &EnvironmentVariables) -> Result<()> {
    let app: Router = create_app(env);

    let listener: TcpListener = setup_listener(env).await?;

    // An inherited listener may not be on the configured port
    let local_addr: SocketAddr = listener.local_addr()?;
    info!(
        environment = %env.environment,
        cors_enabled = env.cors_enabled,
        addr = %local_addr,
        "Server is running on port {}...",
        local_addr.port()
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
