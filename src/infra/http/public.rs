use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics::counter;
use tracing::debug;

use crate::{
    application::chrome::ChromeService,
    domain::routes::{self, Page},
    infra::telemetry::PAGE_RENDER_TOTAL,
    presentation::views::{render_not_found_response, render_page},
};

use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub chrome: Arc<ChromeService>,
}

impl HttpState {
    pub fn new(chrome: ChromeService) -> Self {
        Self {
            chrome: Arc::new(chrome),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    let mut pages = Router::<HttpState>::new();
    for route in &routes::ROUTES {
        let page = route.page;
        pages = pages.route(
            route.path,
            get(move |State(state): State<HttpState>| async move { page_response(&state, page) }),
        );
    }

    pages
        .route("/_health", get(health))
        .route("/static/{*path}", get(crate::infra::assets::serve_static))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

fn page_response(state: &HttpState, page: Page) -> Response {
    let chrome = state.chrome.layout(page);
    match render_page(page, chrome) {
        Ok(html) => {
            counter!(PAGE_RENDER_TOTAL, "page" => page.as_str()).increment(1);
            debug!(target = "folio::http::public", page = %page, "page rendered");
            (StatusCode::OK, html).into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback(State(state): State<HttpState>) -> Response {
    render_not_found_response(state.chrome.not_found())
}
