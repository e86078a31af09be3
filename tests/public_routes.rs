use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use folio::{
    application::chrome::ChromeService,
    config::SiteSettings,
    domain::routes::ROUTES,
    infra::http::{HttpState, RequestContext, build_router},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use url::Url;

fn app() -> Router {
    let site = SiteSettings {
        name: "Ada".to_string(),
        tagline: "Engines & notes".to_string(),
        footer: "© Ada Lovelace".to_string(),
        base_url: Some(Url::parse("https://ada.example").expect("valid url")),
    };
    build_router(HttpState::new(ChromeService::new(site)))
}

async fn send(method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app().oneshot(request).await.expect("router should respond")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn every_route_renders_with_its_title() {
    for route in &ROUTES {
        let response = send(Method::GET, route.path).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", route.path);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "{content_type}");

        let body = body_text(response).await;
        let expected = format!("<title>{} · Ada</title>", route.title);
        assert!(body.contains(&expected), "{} missing {expected}", route.path);
    }
}

#[tokio::test]
async fn current_page_is_marked_in_navigation() {
    for route in &ROUTES {
        let body = body_text(send(Method::GET, route.path).await).await;
        let key = route.page.as_str();

        assert!(
            body.contains(&format!("aria-current=\"page\" data-page=\"{key}\"")),
            "{} should mark {key} active",
            route.path
        );
        assert_eq!(body.matches("aria-current=\"page\"").count(), 1);
    }
}

#[tokio::test]
async fn subpages_render_their_heading() {
    for (path, heading) in [
        ("/skill", "<h1>Skills</h1>"),
        ("/about", "<h1>About</h1>"),
        ("/connect", "<h1>Connect</h1>"),
    ] {
        let body = body_text(send(Method::GET, path).await).await;
        assert!(body.contains(heading), "{path} missing {heading}");
    }
}

#[tokio::test]
async fn home_renders_site_chrome() {
    let body = body_text(send(Method::GET, "/").await).await;

    assert!(body.contains("<h1>Ada</h1>"));
    assert!(body.contains("Engines &#38; notes"));
    assert!(body.contains("© Ada Lovelace"));
    assert!(body.contains("rel=\"canonical\""));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    for path in ["/missing", "/about/", "/skill/extra", "/ABOUT"] {
        let response = send(Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");

        let body = body_text(response).await;
        assert!(body.contains("<title>Page Not Found · Ada</title>"));
        assert!(!body.contains("aria-current"));
        assert!(!body.contains("rel=\"canonical\""));
    }
}

#[tokio::test]
async fn head_is_served_for_pages() {
    let response = send(Method::HEAD, "/about").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pages_reject_other_methods() {
    let response = send(Method::POST, "/connect").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_probe_returns_no_content() {
    let response = send(Method::GET, "/_health").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn stylesheet_is_served_from_bundle() {
    let response = send(Method::GET, "/static/css/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/css")
    );
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = send(Method::GET, "/static/css/nope.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_context() {
    let response = send(Method::GET, "/").await;
    let ctx = response
        .extensions()
        .get::<RequestContext>()
        .expect("request context attached");
    assert_eq!(ctx.request_id.len(), 36);
}
