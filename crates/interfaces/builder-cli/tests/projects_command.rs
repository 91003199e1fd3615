use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use builder_app_core::persistence::FilePersistence;
use builder_app_core::viewmodel::{CREATE_PROJECT_LABEL, EMPTY_STATE_MESSAGE};
use builder_app_core::ClientSettings;
use builder_cli::{commands, ProjectsFrom};
use tempfile::tempdir;

#[test]
fn projects_from_file_render_in_file_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[{"derivation":"a","name":"x"},{"derivation":"b","name":"y"}]"#,
    )
    .unwrap();

    let source =
        commands::projects_source(ProjectsFrom::File(path), &ClientSettings::default()).unwrap();
    let vm = commands::cmd_projects(source, Duration::from_secs(3));

    let labels: Vec<&str> = vm.items().iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["a / x", "b / y"]);

    let text = vm.to_text();
    assert!(text.contains("a / x"));
    assert!(text.contains(CREATE_PROJECT_LABEL));
}

#[test]
fn unreadable_file_renders_empty_state() {
    let dir = tempdir().unwrap();
    let source = commands::projects_source(
        ProjectsFrom::File(dir.path().join("missing.json")),
        &ClientSettings::default(),
    )
    .unwrap();

    let vm = commands::cmd_projects(source, Duration::from_secs(3));
    assert!(vm.is_empty());
    assert!(vm.to_text().contains(EMPTY_STATE_MESSAGE));
}

async fn start_mock_depot() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new().route(
        "/v1/projects",
        get(|| async { r#"[{"derivation":"core","name":"redis"}]"# }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn projects_from_depot() {
    let (addr, server) = start_mock_depot().await;
    let url = format!("http://{addr}/v1");

    let vm = tokio::task::spawn_blocking(move || {
        let source =
            commands::projects_source(ProjectsFrom::Depot(url), &ClientSettings::default())
                .unwrap();
        commands::cmd_projects(source, Duration::from_secs(5))
    })
    .await
    .unwrap();

    assert_eq!(vm.items().len(), 1);
    assert_eq!(vm.items()[0].label, "core / redis");

    server.abort();
}

#[test]
fn settings_commands_round_trip() {
    let dir = tempdir().unwrap();
    let persistence = FilePersistence::with_root(dir.path());

    let s = commands::cmd_settings_set_depot_url(&persistence, "https://depot.example/v1/")
        .unwrap();
    assert_eq!(s.depot_url, "https://depot.example/v1/");

    let s = commands::cmd_settings_set_timeout(&persistence, 0).unwrap();
    assert_eq!(
        s.request_timeout_secs,
        builder_config::MIN_REQUEST_TIMEOUT_SECS
    );

    let shown = commands::cmd_settings_show(&persistence).unwrap();
    assert!(shown.contains("https://depot.example/v1"));

    assert!(commands::cmd_settings_set_depot_url(&persistence, "ftp://nope").is_err());
    assert!(
        commands::cmd_settings_set_depot_url(&persistence, "http://host:notaport/v1").is_err()
    );

    let s =
        commands::cmd_settings_set_depot_url(&persistence, "HTTPS://Depot.Example/v2").unwrap();
    assert_eq!(s.depot_url, "https://depot.example/v2/");
}
