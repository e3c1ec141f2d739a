//! End-to-end checks against a mock status endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use check_nginx_upstreams::check::{self, CheckError};
use check_nginx_upstreams::config::CheckConfig;
use check_nginx_upstreams::status::FetchError;
use nagiosplugin::ServiceState;

mod common;

const HEALTHY: &str = r#"{"servers": {"total": 4, "generation": 1, "server": [
    {"index": 0, "upstream": "web", "name": "10.0.0.1:80", "status": "up", "rise": 10, "fall": 0, "type": "http", "port": 0},
    {"index": 1, "upstream": "web", "name": "10.0.0.2:80", "status": "up", "rise": 10, "fall": 0, "type": "http", "port": 0},
    {"index": 2, "upstream": "api", "name": "10.0.1.1:8080", "status": "up", "rise": 3, "fall": 0, "type": "tcp", "port": 0},
    {"index": 3, "upstream": "api", "name": "10.0.1.2:8080", "status": "up", "rise": 3, "fall": 0, "type": "tcp", "port": 0}
]}}"#;

const DEGRADED: &str = r#"{"servers": {"total": 5, "generation": 2, "server": [
    {"index": 0, "upstream": "web", "name": "10.0.0.1:80", "status": "up"},
    {"index": 1, "upstream": "web", "name": "10.0.0.2:80", "status": "down"},
    {"index": 2, "upstream": "web", "name": "10.0.0.3:80", "status": "up"},
    {"index": 3, "upstream": "api", "name": "10.0.1.1:8080", "status": "down"},
    {"index": 4, "upstream": "api", "name": "10.0.1.2:8080", "status": "up"}
]}}"#;

fn config_for(addr: SocketAddr) -> CheckConfig {
    CheckConfig {
        url: Some(format!("http://{}/status?format=json", addr)),
        timeout_secs: 5,
        no_proxy: true,
        ..CheckConfig::default()
    }
}

#[tokio::test]
async fn test_healthy_upstreams_ok() {
    let addr: SocketAddr = "127.0.0.1:28281".parse().unwrap();
    common::start_status_backend(addr, 200, HEALTHY).await;

    let (state, output) = check::run(&config_for(addr)).await.unwrap().nagios_result();
    assert_eq!(state, ServiceState::Ok);
    assert_eq!(
        output,
        "NGINXUPSTREAMS is OK: 0 % servers are down in api upstream| 'api'=0%;25;49;0;100 'web'=0%;25;49;0;100"
    );
}

#[tokio::test]
async fn test_degraded_upstreams() {
    let addr: SocketAddr = "127.0.0.1:28282".parse().unwrap();
    common::start_status_backend(addr, 200, DEGRADED).await;

    let mut config = config_for(addr);
    config.verbose = 2;
    let (state, output) = check::run(&config).await.unwrap().nagios_result();

    // api: 1 of 2 down, web: 1 of 3 down
    assert_eq!(state, ServiceState::Critical);
    assert!(output.starts_with(
        "NGINXUPSTREAMS is CRITICAL: 50 % servers are down in api upstream (outside range 49)\n\n"
    ));
    assert!(output.contains("\n  down: 10.0.1.1:8080\n"));
    assert!(output.contains("WARNING: 33.33 % servers are down in web upstream (outside range 25)"));
    assert!(output.ends_with("| 'api'=50%;25;49;0;100 'web'=33.33%;25;49;0;100"));
}

#[tokio::test]
async fn test_tracked_upstream_absent_from_document() {
    let addr: SocketAddr = "127.0.0.1:28283".parse().unwrap();
    common::start_status_backend(addr, 200, HEALTHY).await;

    let mut config = config_for(addr);
    config.track = vec!["web".to_string(), "legacy".to_string()];
    let (state, output) = check::run(&config).await.unwrap().nagios_result();

    assert_eq!(state, ServiceState::Unknown);
    assert_eq!(state.exit_code(), 3);
    assert!(output.ends_with("| 'web'=0%;25;49;0;100"));
}

#[tokio::test]
async fn test_http_error_is_fetch_error() {
    let addr: SocketAddr = "127.0.0.1:28284".parse().unwrap();
    common::start_status_backend(addr, 502, "Bad Gateway").await;

    let err = check::run(&config_for(addr)).await.unwrap_err();
    assert!(matches!(err, CheckError::Fetch(FetchError::Status { .. })));
    assert!(err.to_string().contains("returned HTTP 502"));
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error() {
    let addr: SocketAddr = "127.0.0.1:28285".parse().unwrap();
    common::start_status_backend(addr, 200, r#"{"servers": {"total": 1}}"#).await;

    let err = check::run(&config_for(addr)).await.unwrap_err();
    assert!(matches!(err, CheckError::Fetch(FetchError::Malformed(_))));
    assert!(err.to_string().starts_with("malformed status document"));
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Nothing listens here.
    let addr: SocketAddr = "127.0.0.1:28286".parse().unwrap();

    let err = check::run(&config_for(addr)).await.unwrap_err();
    assert!(matches!(err, CheckError::Fetch(FetchError::Transport { .. })));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let addr: SocketAddr = "127.0.0.1:28287".parse().unwrap();
    common::start_programmable_backend(addr, || async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        (200, HEALTHY.to_string())
    })
    .await;

    let mut config = config_for(addr);
    config.timeout_secs = 1;
    let err = check::run(&config).await.unwrap_err();

    assert!(matches!(err, CheckError::Timeout(1)));
    assert_eq!(err.to_string(), "Timeout: check execution aborted after 1s");
}
