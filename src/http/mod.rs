//! JSON API over the content and submission stores.
//!
//! | route | methods |
//! |---|---|
//! | `/content` | GET, PUT |
//! | `/contact-submissions` | GET, POST |
//! | `/career-submissions` | GET, POST |
//! | `/health` | GET |
//!
//! The content route carries no authentication yet; `GET /content` says so in
//! its `meta` block.

pub mod error;
pub mod handlers;
pub mod response;

use crate::core::AppState;
use crate::domain::ports::ConfigProvider;
use crate::http::error::INTERNAL_FAILURE;
use crate::http::response::ErrorBody;
use crate::utils::error::{Result, SiteError};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use handlers::{
    create_career_submission, create_contact_submission, get_content, health,
    list_career_submissions, list_contact_submissions, put_content,
};

pub fn build_router<C: ConfigProvider>(state: Arc<AppState>, config: &C) -> Result<Router> {
    let routes = Router::new()
        .route("/content", get(get_content).put(put_content))
        .route(
            "/contact-submissions",
            get(list_contact_submissions).post(create_contact_submission),
        )
        .route(
            "/career-submissions",
            get(list_career_submissions).post(create_career_submission),
        )
        .route("/health", get(health));

    Ok(with_boundary(routes, config)?.with_state(state))
}

/// Body limit, panic catching, CORS and request tracing, in that order from
/// the innermost layer out.
pub fn with_boundary<C: ConfigProvider>(
    routes: Router<Arc<AppState>>,
    config: &C,
) -> Result<Router<Arc<AppState>>> {
    let cors = cors_layer(config)?;

    Ok(routes
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer<C: ConfigProvider>(config: &C) -> Result<CorsLayer> {
    let origins = config.allowed_origins();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim_end_matches('/')).map_err(|e| {
                    SiteError::InvalidConfigValueError {
                        field: "cors.allowed_origins".to_string(),
                        value: origin.clone(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(config.cors_max_age_seconds())))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Request handler panicked");

    let body = ErrorBody {
        message: INTERNAL_FAILURE,
        errors: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

pub async fn serve<C: ConfigProvider>(config: &C, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state, config)?;

    let address = format!("{}:{}", config.host(), config.port());
    info!("Binding to {}", address);

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
