use crate::application::error::{ErrorReport, HttpError};
use crate::domain::routes::Page;
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Render the template bound to `page`.
pub fn render_page(page: Page, view: LayoutChrome) -> Result<Html<String>, HttpError> {
    match page {
        Page::Home => render_template(HomeTemplate { view }),
        Page::Skill => render_template(SkillTemplate { view }),
        Page::About => render_template(AboutTemplate { view }),
        Page::Connect => render_template(ConnectTemplate { view }),
    }
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let template = ErrorTemplate {
        view: chrome,
        error: ErrorPageView::not_found(),
    };
    report_not_found(render_template_response(template, StatusCode::NOT_FOUND))
}

/// Attach the not-found diagnostic unless rendering already failed with its own report.
fn report_not_found(mut response: Response) -> Response {
    if response.status() == StatusCode::NOT_FOUND {
        ErrorReport::from_message(
            "presentation::views::render_not_found_response",
            StatusCode::NOT_FOUND,
            "Resource not found",
        )
        .attach(&mut response);
    }
    response
}

#[derive(Clone)]
pub struct BrandView {
    pub name: String,
    pub tagline: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub key: &'static str,
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub description: String,
    pub canonical: Option<String>,
}

/// Shared frame around every page.
#[derive(Clone)]
pub struct LayoutChrome {
    pub title: String,
    pub document_title: String,
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
}

#[derive(Template)]
#[template(path = "base.html")]
pub struct HomeTemplate {
    pub view: LayoutChrome,
}

#[derive(Template)]
#[template(path = "skill.html")]
pub struct SkillTemplate {
    pub view: LayoutChrome,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub view: LayoutChrome,
}

#[derive(Template)]
#[template(path = "connect.html")]
pub struct ConnectTemplate {
    pub view: LayoutChrome,
}

pub struct ErrorPageView {
    pub heading: String,
    pub message: String,
    pub action: ErrorAction,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            heading: "Page Not Found".to_string(),
            message: "The page you requested does not exist.".to_string(),
            action: ErrorAction::home(),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn home() -> Self {
        Self {
            href: "/".to_string(),
            label: "Back to home".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutChrome,
    pub error: ErrorPageView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_report_is_attached_to_404() {
        let response = report_not_found(StatusCode::NOT_FOUND.into_response());

        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.status, StatusCode::NOT_FOUND);
        assert_eq!(report.messages, vec!["Resource not found".to_string()]);
    }

    #[test]
    fn render_failure_keeps_its_own_report() {
        let failed = HttpError::new(
            "presentation::views::render_template",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Template rendering failed",
            "missing field `heading`",
        )
        .into_response();

        let response = report_not_found(failed);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.source, "presentation::views::render_template");
        assert_eq!(report.messages, vec!["missing field `heading`".to_string()]);
    }
}
