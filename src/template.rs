use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use folio_content::Portfolio;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Renders askama templates into responses and hands out the shared
/// portfolio content.
pub struct Template {
    portfolio: Arc<Portfolio>,
}

impl Template {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self { portfolio }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(self.to_string(ServerTemplate)),
                )
                    .into_response()
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.portfolio.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
