use std::io::ErrorKind;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::AppError, routes::AppState};

/// GET /resume.pdf - The resume as a download under its suggested filename
pub async fn download(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let bytes = match tokio::fs::read(&app_state.resume_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %app_state.resume_path.display(), "resume not found");
            return Err(AppError::NotFound);
        }
        Err(e) => return Err(e.into()),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        app_state.portfolio.resume.filename
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
