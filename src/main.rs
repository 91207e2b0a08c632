use contact_form::configuration;
use contact_form::error::BizErrorEnum;
use contact_form::startup::Application;
use contact_form::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    telemetry::init_telemetry("contact-form", "info", std::io::stdout)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
