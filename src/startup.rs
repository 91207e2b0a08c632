use crate::configuration::Settings;
use crate::email_client::{EmailClient, MailSender};
use crate::error::{BizErrorEnum, SubmitContactFormError};
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let timeout = config.email_client.timeout();
        let email_client = EmailClient::new(
            config.email_client.base_url,
            config.email_client.authorization_token,
            timeout,
        )?;

        // 0.0.0.0 as host accepts connections from any network interface,
        // not just the local one.
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::BindTcpListenerError)?
            .port();

        let server = run(listener, Arc::new(email_client))?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

pub fn run(
    listener: TcpListener,
    mail_sender: Arc<dyn MailSender>,
) -> Result<Server, BizErrorEnum> {
    // Re-use the same mail sender (and its HTTP client) across multiple requests
    let mail_sender = web::Data::from(mail_sender);

    let server = HttpServer::new(move || {
        // Undecodable bodies still get a `SubmissionResult` back
        let json_config = web::JsonConfig::default().error_handler(|e, _req| {
            tracing::warn!("Rejected a malformed contact form payload: {:?}", e);
            SubmitContactFormError::MalformedPayload(e).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config)
            .app_data(mail_sender.clone())
            .configure(routes::register_routes)
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
