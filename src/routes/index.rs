use axum::response::IntoResponse;
use folio_content::{Particle, Portfolio};

use crate::routes::contact::ContactView;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub portfolio: &'a Portfolio,
    pub particles: Vec<Particle>,
    pub contact: ContactView,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(portfolio: &'a Portfolio, contact: ContactView) -> Self {
        Self {
            portfolio,
            particles: portfolio.particles(),
            contact,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::new(
        template.portfolio(),
        ContactView::fresh(),
    ))
}
