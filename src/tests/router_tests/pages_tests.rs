// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

fn app() -> crate::app::AppState {
    app_with(FakeApi::returning(Ok(page_of(vec![], 1, 1)))).0
}

#[test]
fn home_page_has_search_form() {
    let resp = handle(get("/"), &app()).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"action="/properties""#));
    assert!(body.contains(r#"name="location""#));
}

#[test]
fn static_assets_are_served() {
    let app = app();

    let css = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(header(&css, "Content-Type").as_deref(), Some("text/css; charset=utf-8"));

    let svg = handle(get("/static/images/placeholder-property.svg"), &app).unwrap();
    assert_eq!(header(&svg, "Content-Type").as_deref(), Some("image/svg+xml"));
    assert!(body_string(svg).contains("<svg"));
}

#[test]
fn health_check() {
    let resp = handle(get("/health"), &app()).unwrap();
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_404() {
    let err = handle(get("/dashboard"), &app()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 404);
}
