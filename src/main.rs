use anyhow::Context;
use aridone::configuration::get_configuration;
use aridone::startup::Application;
use aridone::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("aridone".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Serving the landing page");
    application.run_until_stopped().await?;

    Ok(())
}
