use brokerage_console::config::get_configuration;
use brokerage_console::startup::Application;
use brokerage_console::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("brokerage_console"), String::from("debug"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let application = Application::build(config.clone())
        .await
        .expect("Failed to build application.");

    tracing::info!("Server listening on {}", config.get_address());

    application.run_until_stop().await
}
