//! Embedded static asset serving.

use axum::{
    body::Body,
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};
use mime_guess::Mime;

use crate::application::error::HttpError;

static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const SOURCE: &str = "infra::assets::serve_static";

/// Serve a file from the embedded `static/` bundle.
pub async fn serve_static(path: Option<Path<String>>) -> Response {
    let captured = path.map(|Path(value)| value);
    match resolve_asset(&STATIC_ASSETS, captured) {
        Some(asset) => asset.into_response(),
        None => not_found_response(),
    }
}

fn not_found_response() -> Response {
    HttpError::new(
        SOURCE,
        StatusCode::NOT_FOUND,
        "Static asset not found",
        "Static asset not found",
    )
    .into_response()
}

struct Asset {
    contents: &'static [u8],
    mime: Mime,
}

fn resolve_asset(bundle: &'static Dir<'static>, path: Option<String>) -> Option<Asset> {
    let candidate = path.unwrap_or_default();
    let candidate = candidate.trim_start_matches('/');

    // No traversal, no directory listings.
    if candidate.is_empty() || candidate.ends_with('/') || candidate.contains("..") {
        return None;
    }

    let file = bundle.get_file(candidate)?;
    Some(Asset {
        contents: file.contents(),
        mime: mime_guess::from_path(candidate).first_or_octet_stream(),
    })
}

impl IntoResponse for Asset {
    fn into_response(self) -> Response {
        let bytes = Bytes::from_static(self.contents);
        let len = bytes.len();
        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = StatusCode::OK;

        let headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(self.mime.as_ref()) {
            headers.insert(header::CONTENT_TYPE, value);
        }
        if let Ok(value) = HeaderValue::from_str(&len.to_string()) {
            headers.insert(header::CONTENT_LENGTH, value);
        }
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ErrorReport;

    #[test]
    fn resolves_stylesheet_with_css_mime() {
        let asset = resolve_asset(&STATIC_ASSETS, Some("css/site.css".to_string()))
            .expect("stylesheet is bundled");
        assert_eq!(asset.mime.essence_str(), "text/css");
        assert!(!asset.contents.is_empty());
    }

    #[test]
    fn leading_slash_is_ignored() {
        assert!(resolve_asset(&STATIC_ASSETS, Some("/css/site.css".to_string())).is_some());
    }

    #[test]
    fn rejects_traversal_and_directories() {
        for candidate in ["", "css/", "../Cargo.toml", "css/../css/site.css"] {
            assert!(
                resolve_asset(&STATIC_ASSETS, Some(candidate.to_string())).is_none(),
                "{candidate} should be rejected"
            );
        }
        assert!(resolve_asset(&STATIC_ASSETS, None).is_none());
    }

    #[tokio::test]
    async fn missing_asset_response_carries_report() {
        let response = serve_static(Some(Path("css/missing.css".to_string()))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.source, SOURCE);
    }

    #[test]
    fn unknown_file_is_none() {
        assert!(resolve_asset(&STATIC_ASSETS, Some("css/missing.css".to_string())).is_none());
    }
}
