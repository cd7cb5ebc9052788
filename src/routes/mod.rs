use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use folio_content::Portfolio;

use crate::template::{NotFoundTemplate, Template};

pub mod contact;
mod health;
pub mod index;
mod resume;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub contact_command: folio_contact::Command,
    pub resume_path: PathBuf,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/resume.pdf", get(resume::download))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
