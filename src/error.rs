use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::template::{NotFoundTemplate, ServerTemplate};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let rendered = match &self {
            AppError::NotFound => {
                return (StatusCode::NOT_FOUND, render_or_plain(NotFoundTemplate)).into_response();
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {e}");
                render_or_plain(ServerTemplate)
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, rendered).into_response()
    }
}

fn render_or_plain<T: askama::Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render error page: {e}");
        crate::template::SERVER_ERROR_MESSAGE.to_owned()
    }))
}
