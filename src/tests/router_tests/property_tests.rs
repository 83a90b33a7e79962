// src/tests/router_tests/property_tests.rs

use crate::api::FetchError;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

fn app_with_detail(detail: Result<crate::domain::ListingViewModel, FetchError>) -> crate::app::AppState {
    let (app, _api) = app_with(FakeApi::returning(Ok(page_of(vec![], 1, 1))).with_detail(detail));
    app
}

#[test]
fn shows_property_detail() {
    let mut home = listing("p1", "Lakeside Cabin", 2100.0);
    home.description = Some("Quiet spot by the water.".into());
    let app = app_with_detail(Ok(home));

    let resp = handle(get("/properties/p1"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Lakeside Cabin"));
    assert!(body.contains("$2,100"));
    assert!(body.contains("Quiet spot by the water."));
}

#[test]
fn missing_property_is_404() {
    let app = app_with_detail(Err(FetchError::NotFound));
    let err = handle(get("/properties/nope"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn suspicious_id_is_404_without_backend_call() {
    let app = app_with_detail(Err(FetchError::Transport("should not be called".into())));
    let err = handle(get("/properties/a.b"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn backend_outage_is_502() {
    let app = app_with_detail(Err(FetchError::Transport("refused".into())));
    let err = handle(get("/properties/p1"), &app).unwrap_err();
    assert_eq!(err.status(), 502);

    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Network error"));
}
