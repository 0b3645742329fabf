pub mod accept;
pub mod error_translation;
pub mod extract;
pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{confirmation::ConfirmationController, health};
use crate::domain::error_translation::ErrorTranslator;
use crate::infrastructure::config::Config;

pub use accept::AcceptsJson;
pub use error_translation::error_translation_middleware;
pub use extract::{FinancialId, ValidatedJson, X_FAPI_FINANCIAL_ID};
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the router with every route mounted under `context_path`
pub fn build_router(
    context_path: &str,
    confirmation_controller: Arc<ConfirmationController>,
) -> Router {
    // CoP routes
    let confirmation_routes = Router::new()
        .route(
            "/confirmation-of-payee",
            axum::routing::post(ConfirmationController::confirm),
        )
        .with_state(confirmation_controller);

    let routes = Router::new()
        .route("/health", get(health::health))
        .merge(confirmation_routes);

    let app = if context_path.is_empty() {
        routes
    } else {
        Router::new().nest(context_path, routes)
    };

    let translator = Arc::new(ErrorTranslator::new(context_path));

    app.layer(middleware::from_fn_with_state(
        translator,
        error_translation_middleware,
    ))
    .layer(middleware::from_fn(request_id_middleware))
    .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    confirmation_controller: Arc<ConfirmationController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config.context_path, confirmation_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
