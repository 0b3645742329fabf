use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use copuk_responder::controllers::confirmation::ConfirmationController;
use copuk_responder::domain::confirmation::ConfirmationService;
use copuk_responder::infrastructure::config::{Config, LogFormat};
use copuk_responder::infrastructure::http::start_http_server;
use copuk_responder::infrastructure::upstream::AccountHolderClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        context_path = %config.context_path,
        "Starting CoP responder on {}:{}",
        config.host,
        config.port
    );

    // Client for the account holding bank
    let account_holder_client = Arc::new(AccountHolderClient::new(
        config.upstream_base_url.clone(),
        config.upstream_timeout(),
    )?);
    tracing::info!(
        upstream = %config.upstream_base_url,
        timeout_secs = config.upstream_timeout_secs,
        "Account holder client initialized"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let confirmation_service = Arc::new(ConfirmationService::new(account_holder_client));
    let confirmation_controller = Arc::new(ConfirmationController::new(confirmation_service));

    // Start HTTP server with all routes
    start_http_server(config, confirmation_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "copuk_responder=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "copuk_responder=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
