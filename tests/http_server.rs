//! Integration tests for the HTTP server shell.

use std::net::SocketAddr;
use std::time::Duration;

use teamspace_api::{ApiServer, AppConfig, Environment};

fn test_config(cors_origin: &str) -> AppConfig {
    let env = Environment::from_iter([
        ("MONGODB_URI", "mongodb://localhost:27017/teamspace"),
        ("ACCESS_TOKEN_SECRET", "a-real-access-secret"),
        ("REFRESH_TOKEN_SECRET", "a-real-refresh-secret"),
        ("ACCESS_TOKEN_EXPIRY", "15m"),
        ("REFRESH_TOKEN_EXPIRY", "7d"),
        ("CORS_ORIGIN", cors_origin),
    ]);
    let (config, _) = AppConfig::from_env(&env).expect("test environment is valid");
    config
}

/// Bind an ephemeral port and spawn the server on it.
async fn spawn_server(config: &AppConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = ApiServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    addr
}

#[tokio::test]
async fn test_healthcheck_responds_ok() {
    let config = test_config("http://localhost:5173");
    let addr = spawn_server(&config).await;

    let res = reqwest::get(format!("http://{addr}/api/v1/healthcheck"))
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_allows_the_configured_origin() {
    let origin = "https://app.example.com";
    let config = test_config(origin);
    let addr = spawn_server(&config).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("http://{addr}/api/v1/healthcheck"))
        .header("Origin", origin)
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(origin)
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let config = test_config("http://localhost:5173");
    let addr = spawn_server(&config).await;

    let res = reqwest::get(format!("http://{addr}/api/v1/projects"))
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 404);
}
