//! Form transport
//!
//! The single network round-trip of a submission sits behind `FormTransport`
//! so the controller can run against the real endpoint or a test double.

use crate::error::SubmitError;
use crate::protocol::{FormResponse, parse_form_response};
use crate::validation::Credentials;
use async_trait::async_trait;
use log::debug;

#[async_trait]
pub trait FormTransport: Send + Sync {
    /// Send one submission and decode the endpoint's answer.
    ///
    /// A non-2xx status is an error even when the body decodes.
    async fn send(&self, credentials: &Credentials) -> Result<FormResponse, SubmitError>;
}

/// `FormTransport` that POSTs JSON to the form endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn send(&self, credentials: &Credentials) -> Result<FormResponse, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let decoded = parse_form_response(&body)?;
        debug!("Server response from {}: {:?}", self.endpoint, decoded);
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::FormStatus;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> HttpTransport {
        HttpTransport::new(format!("{}/form-api", server.uri()))
    }

    #[tokio::test]
    async fn posts_credentials_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/form-api"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "email": "a@b.com",
                "password": "Secret#123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport(&server)
            .send(&Credentials::new("a@b.com", "Secret#123"))
            .await
            .unwrap();
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn unknown_status_is_decoded_not_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "maybe"})))
            .mount(&server)
            .await;

        let response = transport(&server)
            .send(&Credentials::default())
            .await
            .unwrap();
        assert_eq!(response.status, FormStatus::Unrecognized);
    }

    #[tokio::test]
    async fn null_status_is_a_rejection_not_a_network_error() {
        use crate::client::{FormController, SubmitOutcome};
        use crate::error::handlers::SUBMIT_REJECTED_MESSAGE;

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/form-api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": null})))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = FormController::new(transport(&server));
        controller.set_email("user@example.com");
        controller.set_password("Secret#123");

        let outcome = controller.submit().await;

        assert!(
            matches!(outcome, SubmitOutcome::Rejected(FormStatus::Unrecognized)),
            "unexpected outcome {outcome:?}"
        );
        assert_eq!(controller.state().errors(), [SUBMIT_REJECTED_MESSAGE.to_string()]);
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({"status": "OK"})))
            .mount(&server)
            .await;

        let err = transport(&server)
            .send(&Credentials::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Status(503)));
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = transport(&server)
            .send(&Credentials::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Decode(_)));
    }
}
