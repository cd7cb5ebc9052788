pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use routes::AppState;

/// Create the app router with every layer the server runs with
///
/// Useful for integration testing without binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        // no-store for pages, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
