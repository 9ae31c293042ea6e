use std::net::SocketAddr;

use login_form::client::{SUCCESS_MESSAGE, SubmitOutcome, view};
use login_form::config::ServerConfig;
use login_form::error::handlers::SUBMIT_FAILED_MESSAGE;
use login_form::{FormController, HttpTransport, Server};
use tempfile::TempDir;

// Starts a server on an ephemeral port and returns its address
async fn start_test_server(static_root: &TempDir) -> SocketAddr {
    let config = ServerConfig {
        bind_address: "127.0.0.1".into(),
        port: 0,
        static_root: static_root.path().to_string_lossy().into_owned(),
        index_file: "main.html".into(),
        max_body_bytes: 64 * 1024,
    };

    let server = Server::bind(&config).await.expect("bind test server");
    let addr = server.local_addr();
    tokio::spawn(server.start());
    addr
}

fn controller_for(addr: SocketAddr) -> FormController<HttpTransport> {
    FormController::new(HttpTransport::new(format!("http://{addr}/form-api")))
}

#[tokio::test]
async fn valid_submission_clears_fields_and_shows_success_once() {
    let root = tempfile::tempdir().unwrap();
    let addr = start_test_server(&root).await;
    let mut controller = controller_for(addr);
    controller.set_email("user@example.com");
    controller.set_password("Secret#123");

    let outcome = controller.submit().await;

    assert!(outcome.is_accepted(), "unexpected outcome {outcome:?}");
    let state = controller.state();
    assert_eq!(state.email(), "");
    assert_eq!(state.password(), "");
    assert!(!state.is_loading());
    assert!(view::submit_enabled(state));

    let rendered = view::render(state);
    assert_eq!(rendered.matches(SUCCESS_MESSAGE).count(), 1);
}

#[tokio::test]
async fn invalid_submission_shows_every_rule_and_sends_nothing() {
    let root = tempfile::tempdir().unwrap();
    let addr = start_test_server(&root).await;
    let mut controller = controller_for(addr);
    controller.set_email("not-an-email");
    controller.set_password("кирилиця");

    let outcome = controller.submit().await;

    assert!(!outcome.was_sent());
    assert_eq!(
        controller.state().errors(),
        [
            "Email field must contain a valid address.".to_string(),
            "Password must contain at least one uppercase letter.".to_string(),
            "Password must not contain Cyrillic characters.".to_string(),
        ]
    );
}

#[tokio::test]
async fn unreachable_endpoint_shows_network_error_and_restores_submit() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut controller = controller_for(addr);
    controller.set_email("user@example.com");
    controller.set_password("Secret#123");

    let outcome = controller.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(controller.state().errors(), [SUBMIT_FAILED_MESSAGE.to_string()]);
    assert!(!controller.state().is_loading());
    assert_eq!(controller.state().email(), "user@example.com");
}

#[tokio::test]
async fn endpoint_treats_whitespace_only_fields_as_missing() {
    let root = tempfile::tempdir().unwrap();
    let addr = start_test_server(&root).await;

    // The controller validates first, so talk to the endpoint directly
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/form-api"))
        .json(&serde_json::json!({ "email": "  ", "password": "x" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "fail" }));
}

#[tokio::test]
async fn serves_the_form_page() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("main.html"), "<form></form>").unwrap();
    let addr = start_test_server(&root).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), "<form></form>");
}
