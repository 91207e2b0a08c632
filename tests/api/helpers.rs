use contact_form::client::{ApiSettings, FormConfig, SubmissionClient};
use contact_form::configuration;
use contact_form::startup::Application;
use contact_form::telemetry;
use once_cell::sync::Lazy;
use secrecy::Secret;
use std::time::Duration;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info";
    let subscriber_name = "test";
    // Logs are swallowed unless `TEST_LOG` is set
    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_telemetry(subscriber_name, default_filter_level, std::io::stdout)
    } else {
        telemetry::init_telemetry(subscriber_name, default_filter_level, std::io::sink)
    }
    .expect("Failed to init subscriber");
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application on a random port,
    /// with a mock server standing in for the email API.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        // Launch a mock server to stand in for Postmark's API
        let email_server = MockServer::start().await;

        // Randomise configuration to ensure test isolation
        let config = {
            let mut c = configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            c.application.port = 0;
            // Use the mock server as email API
            c.email_client.base_url = email_server.uri();
            c.email_client.timeout_milliseconds = 500;
            c
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");
        let port = application.port();
        let _ = tokio::spawn(application.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            email_server,
            api_client: reqwest::Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_form(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!(
                "{}/demo-theme/v1/submit-contact-form",
                &self.address
            ))
            .header("X-WP-Nonce", "test-nonce")
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_contact_form(
        &self,
        body: &'static str,
        content_type: &str,
    ) -> reqwest::Response {
        self.api_client
            .post(&format!(
                "{}/demo-theme/v1/submit-contact-form",
                &self.address
            ))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// A client pointing at this application, as the rendered page would build it.
    pub fn submission_client(&self, to_email: &str) -> SubmissionClient {
        submission_client_at(format!("{}/", self.address), to_email)
    }
}

pub fn submission_client_at(root: String, to_email: &str) -> SubmissionClient {
    SubmissionClient::new(
        ApiSettings::new(root, Secret::new("test-nonce".into())),
        FormConfig {
            heading: "Contact Us".into(),
            to_email: to_email.into(),
            success_message: "Thank you for your message!".into(),
            error_message: "Your message could not be sent.".into(),
        },
        Duration::from_secs(5),
    )
    .expect("Failed to build submission client.")
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "subject": "Hello there",
        "message": "First line\nSecond line",
        "toEmail": "owner@example.com"
    })
}

pub async fn assert_submission_result(
    response: reqwest::Response,
    status: u16,
    success: bool,
    message: &str,
) {
    assert_eq!(status, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body is not JSON.");
    assert_eq!(body["success"], success);
    assert_eq!(body["message"], message);
}
