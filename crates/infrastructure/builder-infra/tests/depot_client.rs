use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use builder_core::Project;
use builder_infra::{default_http_client, DepotClient, DepotError};

async fn start_mock_depot(router: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (addr, handle)
}

fn depot(addr: SocketAddr) -> DepotClient {
    let client = default_http_client(Duration::from_secs(5)).unwrap();
    DepotClient::new(client, &format!("http://{addr}/v1")).unwrap()
}

#[tokio::test]
async fn lists_projects_in_depot_order() {
    let router = Router::new().route(
        "/v1/projects",
        get(|| async {
            r#"[{"derivation":"core","name":"redis"},{"derivation":"acme","name":"api"}]"#
        }),
    );
    let (addr, server) = start_mock_depot(router).await;

    let projects = depot(addr).list_projects().await.expect("list projects");
    assert_eq!(
        projects,
        vec![Project::new("core", "redis"), Project::new("acme", "api")]
    );

    server.abort();
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let router = Router::new().route(
        "/v1/projects",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let (addr, server) = start_mock_depot(router).await;

    let err = depot(addr).list_projects().await.unwrap_err();
    assert!(matches!(err, DepotError::Status { status: 503, .. }));

    server.abort();
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/v1/projects", get(|| async { "not json" }));
    let (addr, server) = start_mock_depot(router).await;

    let err = depot(addr).list_projects().await.unwrap_err();
    assert!(matches!(err, DepotError::Decode { .. }));

    server.abort();
}
