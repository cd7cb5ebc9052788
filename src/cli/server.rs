use std::sync::Arc;

use anyhow::Result;
use folio_contact::HttpTransport;
use folio_content::Portfolio;

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let portfolio = Portfolio::load(config.site.content_path.as_deref())?;
    tracing::info!(
        projects = portfolio.projects.len(),
        certifications = portfolio.certifications.len(),
        "Portfolio content loaded"
    );

    let transport = HttpTransport::new(config.contact.endpoint.to_owned());
    tracing::info!(endpoint = transport.endpoint(), "Contact transport ready");

    if !config.site.resume_path.exists() {
        tracing::warn!(
            path = %config.site.resume_path.display(),
            "Resume not found, /resume.pdf will answer 404"
        );
    }

    let state = AppState {
        portfolio: Arc::new(portfolio),
        contact_command: folio_contact::Command::new(Arc::new(transport)),
        resume_path: config.site.resume_path.to_owned(),
    };

    let app = crate::create_app(state);

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
