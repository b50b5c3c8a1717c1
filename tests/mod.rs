//! tests/mod.rs
//! A shared test helper to spawn the ping service on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::{Router, serve};
use ping_service::{EnvironmentVariables, create_app};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the default (CORS-enabled) app and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(&[])
}

/// Spawns the app configured from `vars` instead of the process environment.
pub fn spawn_app_with(vars: &[(&str, &str)]) -> String {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    let env: EnvironmentVariables =
        EnvironmentVariables::from_vars(&vars).expect("Invalid test configuration");

    // * Build the application with the same layers as main().
    let app: Router = create_app(&env);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
