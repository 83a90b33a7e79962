// src/tests/router_tests/search_tests.rs

use crate::api::FetchError;
use crate::config::AppConfig;
use crate::router::handle;
use crate::search::filters::{FilterKey, SortBy};
use crate::tests::utils::*;
use std::sync::Arc;

fn three_pages() -> FakeApi {
    FakeApi::returning(Ok(page_of(
        vec![listing("a1", "Cozy Loft", 1450.0), listing("a2", "Garden Flat", 1200.0)],
        1,
        3,
    )))
}

#[test]
fn first_load_seeds_only_search_and_location() {
    let (app, api) = app_with(three_pages());

    let resp = handle(
        get("/properties?search=loft&location=Denver&minPrice=500&sortBy=price-low&page=3"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let call = api.last_call();
    assert_eq!(call.filters.search_text, "loft");
    assert_eq!(call.filters.location, "Denver");
    assert_eq!(call.filters.price_min, "");
    assert_eq!(call.filters.sort_by, SortBy::Newest);
    assert_eq!(call.pagination.current_page(), 1);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Rentals in Denver"));
    assert!(body.contains("Cozy Loft"));
    assert!(body.contains(r#"name="view_id""#));
}

#[test]
fn filter_change_resets_to_first_page() {
    let (app, api) = app_with(three_pages());

    let req = post_form(
        "/properties/results",
        "view_id=v1&page=3&search=loft&minPrice=900",
        Some("minPrice"),
    );
    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);

    let call = api.last_call();
    assert_eq!(call.pagination.current_page(), 1);
    assert_eq!(call.filters.price_min, "900");
}

#[test]
fn page_button_keeps_requested_page() {
    let (app, api) = app_with(FakeApi::returning(Ok(page_of(
        vec![listing("b1", "Studio", 900.0)],
        3,
        5,
    ))));

    let resp = handle(
        post_form("/properties/results", "view_id=v1&search=loft&page=3", None),
        &app,
    )
    .unwrap();

    assert_eq!(api.last_call().pagination.current_page(), 3);

    let body = body_string(resp);
    assert!(body.contains(r#"name="page" value="3" hx-swap-oob="true""#));
    assert!(body.contains(r#"aria-current="page""#));
}

#[test]
fn display_toggle_is_not_a_filter_change() {
    let (app, api) = app_with(three_pages());

    let resp = handle(
        post_form("/properties/results", "view_id=v1&page=2&view=list", Some("view")),
        &app,
    )
    .unwrap();

    assert_eq!(api.last_call().pagination.current_page(), 2);
    assert!(body_string(resp).contains("listing-results listing-list"));
}

#[test]
fn replace_url_carries_only_search_terms() {
    let (app, _api) = app_with(three_pages());

    let resp = handle(
        post_form(
            "/properties/results",
            "view_id=v1&search=loft&location=Austin&maxPrice=2000&bedrooms=4%2B&sortBy=price-high",
            Some("maxPrice"),
        ),
        &app,
    )
    .unwrap();

    assert_eq!(
        header(&resp, "HX-Replace-Url").as_deref(),
        Some("/properties?search=loft&location=Austin")
    );
}

#[test]
fn empty_filters_never_reach_the_backend() {
    let (app, api) = app_with(three_pages());

    handle(
        post_form(
            "/properties/results",
            "view_id=v1&search=&location=&minPrice=&maxPrice=&propertyType=&bedrooms=&bathrooms=",
            Some("search"),
        ),
        &app,
    )
    .unwrap();

    let filters = api.last_call().filters;
    for key in FilterKey::ALL {
        if key != FilterKey::SortBy {
            assert_eq!(filters.value(key), None, "{key:?}");
        }
    }
}

#[test]
fn fetch_failure_renders_retry_panel() {
    let (app, _api) = app_with(FakeApi::returning(Err(FetchError::Transport(
        "connection refused".into(),
    ))));

    let resp = handle(
        post_form("/properties/results", "view_id=v1&page=2", None),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Network error"));
    assert!(!body.contains("connection refused"));
    assert!(body.contains("Try Again"));
    assert!(body.contains("{&quot;page&quot;: &quot;2&quot;}"));
}

#[test]
fn first_load_failure_is_still_a_page() {
    let (app, _api) = app_with(FakeApi::returning(Err(FetchError::Api {
        status: 500,
        message: "Search is down".into(),
    })));

    let resp = handle(get("/properties"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Search is down"));
}

#[test]
fn empty_result_set_offers_clear_search() {
    let (app, _api) = app_with(FakeApi::returning(Ok(page_of(vec![], 1, 1))));

    let body = body_string(
        handle(
            post_form("/properties/results", "view_id=v1&search=castle", Some("search")),
            &app,
        )
        .unwrap(),
    );

    assert!(body.contains("No properties found"));
    assert!(body.contains("Clear Search"));
    assert!(!body.contains("Try Again"));
}

#[test]
fn auth_cookie_becomes_bearer_token() {
    let (app, api) = app_with(three_pages());

    let mut req = get("/properties");
    req.headers_mut()
        .insert("Cookie", "auth_token=user-tok".parse().unwrap());
    handle(req, &app).unwrap();
    assert_eq!(api.last_call().token.as_deref(), Some("user-tok"));

    handle(get("/properties"), &app).unwrap();
    assert_eq!(api.last_call().token, None);
}

#[test]
fn configured_token_is_used_without_cookie() {
    let config = AppConfig {
        api_token: Some("service-tok".into()),
        ..AppConfig::default()
    };
    let (app, api) = app_with_config(config, three_pages());

    handle(get("/properties"), &app).unwrap();
    assert_eq!(api.last_call().token.as_deref(), Some("service-tok"));

    let mut req = get("/properties");
    req.headers_mut()
        .insert("Cookie", "auth_token=user-tok".parse().unwrap());
    handle(req, &app).unwrap();
    assert_eq!(api.last_call().token.as_deref(), Some("user-tok"));
}

#[test]
fn page_past_the_end_reloads_last_page() {
    // Backend now has only 3 pages; asking for page 9 comes back empty
    let (app, api) = app_with(FakeApi::returning(Ok(page_of(vec![], 9, 3))));

    let resp = handle(
        post_form("/properties/results", "view_id=v1&search=loft&page=9", None),
        &app,
    )
    .unwrap();

    let pages: Vec<_> = api.calls().iter().map(|c| c.pagination.current_page()).collect();
    assert_eq!(pages, vec![9, 3]);
    assert!(body_string(resp).contains(r#"name="page" value="3" hx-swap-oob="true""#));
}

#[test]
fn empty_result_set_is_fetched_once() {
    let (app, api) = app_with(FakeApi::returning(Ok(page_of(vec![], 1, 1))));

    handle(
        post_form("/properties/results", "view_id=v1&search=castle&page=4", None),
        &app,
    )
    .unwrap();
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn plain_form_submit_starts_from_page_one() {
    let (app, api) = app_with(three_pages());

    let resp = handle(
        post_form("/properties", "view_id=v9&page=3&search=loft&bathrooms=3%2B", None),
        &app,
    )
    .unwrap();

    let call = api.last_call();
    assert_eq!(call.pagination.current_page(), 1);
    assert_eq!(call.filters.bathrooms, "3+");

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"value="v9""#));
}

#[test]
fn superseded_response_is_dropped() {
    let (api, started, release) = three_pages().hold_first_call();
    let (app, api) = app_with(api);
    let app = Arc::new(app);

    // The slow, older request for this view
    let slow = {
        let app = app.clone();
        std::thread::spawn(move || {
            let resp = handle(
                post_form("/properties/results", "view_id=tab&search=lo", Some("search")),
                &app,
            )
            .unwrap();
            (resp.status().as_u16(), header(&resp, "HX-Reswap"))
        })
    };
    started.recv().unwrap();

    // A newer request for the same view overtakes it
    let fast = handle(
        post_form("/properties/results", "view_id=tab&search=loft", Some("search")),
        &app,
    )
    .unwrap();
    assert_eq!(fast.status(), 200);

    release.send(()).unwrap();
    let (status, reswap) = slow.join().unwrap();
    assert_eq!(status, 204);
    assert_eq!(reswap.as_deref(), Some("none"));

    assert_eq!(api.calls().len(), 2);
}

#[test]
fn other_views_are_not_affected() {
    let (app, _api) = app_with(three_pages());

    let a = handle(post_form("/properties/results", "view_id=a", None), &app).unwrap();
    let b = handle(post_form("/properties/results", "view_id=b", None), &app).unwrap();
    assert_eq!(a.status(), 200);
    assert_eq!(b.status(), 200);
}

#[test]
fn identical_requests_render_identically() {
    let (app, _api) = app_with(three_pages());
    let form = "view_id=v1&search=loft&page=1";

    let first = body_string(handle(post_form("/properties/results", form, None), &app).unwrap());
    let second = body_string(handle(post_form("/properties/results", form, None), &app).unwrap());
    assert_eq!(first, second);
}
