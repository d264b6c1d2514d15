use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    routes,
    store::{PgProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new<S: ProductStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState::new(PgProductStore::new(pool, config.database.query_timeout));

    router(state, config)
}

/// Assembles routes, static file fallback and middleware around an existing state.
pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let static_files = ServeDir::new(&config.server.static_dir);
    let mut app = routes::create_router()
        .fallback(move |req: Request| serve_unrouted(static_files.clone(), req))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .with_state(state);

    if !config.cors.allowed_origins.is_empty() {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_origin(allowed_origins);

        app = app.layer(cors);
    }

    Ok(app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    ))
}

// The products subtree answers its own misses; everything else is a static file.
async fn serve_unrouted(static_files: ServeDir, req: Request) -> Response {
    if let Some(error) = routes::unmatched_product_path(req.method(), req.uri().path()) {
        return error.into_response();
    }

    match static_files.oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
