use crate::helpers::{submission_client_at, TestApp};
use contact_form::client::{ContactForm, FormFields, MessageStatus};
use std::net::TcpListener;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

fn filled_form(email: &str) -> ContactForm {
    ContactForm::new(FormFields {
        name: "Ursula Le Guin".into(),
        email: email.into(),
        subject: "Hello there".into(),
        message: "First line\nSecond line".into(),
    })
}

#[tokio::test]
async fn a_delivered_submission_resets_the_form_and_shows_the_success_message() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let client = app.submission_client("owner@example.com");
    let mut form = filled_form("ursula_le_guin@gmail.com");

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    client.submit(&mut form).await;

    // Assert
    let message = form.message().unwrap();
    assert_eq!(message.text, "Thank you for your message!");
    assert_eq!(message.status, MessageStatus::Success);
    assert_eq!(form.fields, FormFields::default());
}

#[tokio::test]
async fn an_empty_message_never_reaches_the_service() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let client = app.submission_client("owner@example.com");
    let mut form = filled_form("ursula_le_guin@gmail.com");
    form.fields.message = String::new();

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    client.submit(&mut form).await;

    // Assert
    let message = form.message().unwrap();
    assert_eq!(message.text, "Please fill in all fields.");
    assert_eq!(message.status, MessageStatus::Error);
}

#[tokio::test]
async fn a_rejected_email_is_reported_with_the_service_detail() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let client = app.submission_client("owner@example.com");
    let mut form = filled_form("ursuladomain.com");

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    client.submit(&mut form).await;

    // Assert
    let message = form.message().unwrap();
    assert_eq!(
        message.text,
        "Your message could not be sent. (Invalid email format.)"
    );
    assert_eq!(message.status, MessageStatus::Error);
    // The visitor can fix the address and retry
    assert_eq!(form.fields.subject, "Hello there");
}

#[tokio::test]
async fn a_failed_delivery_is_reported_with_the_service_detail() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let client = app.submission_client("owner@example.com");
    let mut form = filled_form("ursula_le_guin@gmail.com");

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    client.submit(&mut form).await;

    // Assert
    assert_eq!(
        form.message().unwrap().text,
        "Your message could not be sent. (Failed to send email.)"
    );
}

#[tokio::test]
async fn an_unreachable_service_is_reported_as_a_transport_error() {
    // Arrange
    // Grab a free port, then release it so nothing is listening there
    let unused_port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        listener.local_addr().unwrap().port()
    };
    let client = submission_client_at(
        format!("http://127.0.0.1:{}/", unused_port),
        "owner@example.com",
    );
    let mut form = filled_form("ursula_le_guin@gmail.com");

    // Act
    client.submit(&mut form).await;

    // Assert
    let message = form.message().unwrap();
    assert!(message.text.starts_with("Your message could not be sent. ("));
    assert_eq!(message.status, MessageStatus::Error);
    assert_eq!(form.fields.name, "Ursula Le Guin");
}
