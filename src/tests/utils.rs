use crate::api::{FetchError, ListingPage, ListingsApi};
use crate::app::AppState;
use crate::auth::CredentialProvider;
use crate::config::AppConfig;
use crate::domain::ListingViewModel;
use crate::search::filters::FilterState;
use crate::search::PaginationState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// What the fake backend was asked for.
#[derive(Debug, Clone)]
pub struct Call {
    pub filters: FilterState,
    pub pagination: PaginationState,
    pub token: Option<String>,
}

/// In-memory `ListingsApi` returning canned answers and recording calls.
pub struct FakeApi {
    pub page: Result<ListingPage, FetchError>,
    pub detail: Result<ListingViewModel, FetchError>,
    pub calls: Mutex<Vec<Call>>,
    /// When set, the first listings call reports that it started, then waits
    /// to be released.
    hold_first: Mutex<Option<(Sender<()>, Receiver<()>)>>,
}

impl FakeApi {
    pub fn returning(page: Result<ListingPage, FetchError>) -> Self {
        Self {
            page,
            detail: Err(FetchError::NotFound),
            calls: Mutex::new(Vec::new()),
            hold_first: Mutex::new(None),
        }
    }

    pub fn with_detail(mut self, detail: Result<ListingViewModel, FetchError>) -> Self {
        self.detail = detail;
        self
    }

    /// Returns (started, release): `started` fires once the first call is in
    /// flight, sending on `release` lets it finish.
    pub fn hold_first_call(self) -> (Self, Receiver<()>, Sender<()>) {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        *self.hold_first.lock().unwrap() = Some((started_tx, release_rx));
        (self, started_rx, release_tx)
    }
}

impl ListingsApi for FakeApi {
    fn fetch_listings(
        &self,
        filters: &FilterState,
        pagination: &PaginationState,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingPage, FetchError> {
        self.calls.lock().unwrap().push(Call {
            filters: filters.clone(),
            pagination: *pagination,
            token: credentials.bearer_token(),
        });

        let hold = self.hold_first.lock().unwrap().take();
        if let Some((started, release)) = hold {
            started.send(()).unwrap();
            release.recv().unwrap();
        }

        self.page.clone()
    }

    fn fetch_listing(
        &self,
        _id: &str,
        _credentials: &dyn CredentialProvider,
    ) -> Result<ListingViewModel, FetchError> {
        self.detail.clone()
    }
}

/// Lets a test keep a handle on the fake after handing it to `AppState`.
struct Shared(Arc<FakeApi>);

impl ListingsApi for Shared {
    fn fetch_listings(
        &self,
        filters: &FilterState,
        pagination: &PaginationState,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingPage, FetchError> {
        self.0.fetch_listings(filters, pagination, credentials)
    }

    fn fetch_listing(
        &self,
        id: &str,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingViewModel, FetchError> {
        self.0.fetch_listing(id, credentials)
    }
}

pub fn app_with(api: FakeApi) -> (AppState, Arc<FakeApi>) {
    app_with_config(AppConfig::default(), api)
}

pub fn app_with_config(config: AppConfig, api: FakeApi) -> (AppState, Arc<FakeApi>) {
    let api = Arc::new(api);
    let app = AppState::new(config, Box::new(Shared(api.clone())));
    (app, api)
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("backend was never called")
    }
}

pub fn listing(id: &str, title: &str, price: f64) -> ListingViewModel {
    ListingViewModel {
        id: id.to_string(),
        title: title.to_string(),
        location: "Austin, TX".to_string(),
        street: None,
        price,
        bedrooms: Some(2.0),
        bathrooms: Some(1.0),
        area: Some(850.0),
        image_url: "/static/images/placeholder-property.svg".to_string(),
        rating: Some(4.5),
        review_count: Some(8),
        property_type: Some("apartment".to_string()),
        description: None,
        listed_on: None,
    }
}

pub fn page_of(items: Vec<ListingViewModel>, current: usize, total_pages: usize) -> ListingPage {
    let total_items = if total_pages <= 1 { items.len() } else { total_pages * 10 };
    ListingPage {
        items,
        pagination: PaginationState::new(current, total_pages, total_items, 10),
    }
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn post_form(path: &str, body: &str, trigger_name: Option<&str>) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req.headers_mut().insert("HX-Request", "true".parse().unwrap());
    if let Some(name) = trigger_name {
        req.headers_mut()
            .insert("HX-Trigger-Name", name.parse().unwrap());
    }
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
