// client.rs
use crate::api::api_error::{FetchError, FAILED_LOAD_MESSAGE};
use crate::api::models::{ListingsEnvelope, PropertyEnvelope};
use crate::auth::CredentialProvider;
use crate::domain::listing::{normalize_all, ListingViewModel};
use crate::search::filters::{FilterKey, FilterState, SortBy};
use crate::search::pagination::{PaginationState, ITEMS_PER_PAGE};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("rental-market-web/", env!("CARGO_PKG_VERSION"));

/// One page of normalized results plus what the backend said about paging.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub items: Vec<ListingViewModel>,
    pub pagination: PaginationState,
}

/// The listings backend as the pages see it.
pub trait ListingsApi: Send + Sync {
    fn fetch_listings(
        &self,
        filters: &FilterState,
        pagination: &PaginationState,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingPage, FetchError>;

    fn fetch_listing(
        &self,
        id: &str,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingViewModel, FetchError>;
}

/// Query parameters for GET /properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pairs: Vec<(&'static str, String)>,
}

impl ListingQuery {
    pub fn from_state(filters: &FilterState, pagination: &PaginationState) -> Self {
        let (sort_field, sort_order) = match filters.sort_by {
            SortBy::PriceLow => ("monthlyRent", "asc"),
            SortBy::PriceHigh => ("monthlyRent", "desc"),
            SortBy::Newest => ("createdAt", "desc"),
        };

        let mut pairs = vec![
            ("page", pagination.current_page().to_string()),
            ("limit", pagination.items_per_page.to_string()),
            ("sortBy", sort_field.to_string()),
            ("sortOrder", sort_order.to_string()),
        ];

        // Only what the user actually set; "any" is expressed by leaving it out.
        let optional = [
            ("search", FilterKey::Search),
            ("city", FilterKey::Location),
            ("minPrice", FilterKey::PriceMin),
            ("maxPrice", FilterKey::PriceMax),
            ("propertyType", FilterKey::PropertyType),
            ("bedrooms", FilterKey::Bedrooms),
            ("bathrooms", FilterKey::Bathrooms),
        ];
        for (param, key) in optional {
            if let Some(v) = filters.value(key) {
                pairs.push((param, v.to_string()));
            }
        }

        Self { pairs }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// Decode a 2xx body from GET /properties.
pub fn parse_listings_body(
    body: &str,
    requested: &PaginationState,
    placeholder_image: &str,
) -> Result<ListingPage, FetchError> {
    let envelope: ListingsEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(status) = envelope.status.as_deref() {
        if status != "success" {
            return Err(FetchError::Api {
                status: 200,
                message: envelope
                    .message
                    .unwrap_or_else(|| FAILED_LOAD_MESSAGE.to_string()),
            });
        }
    }

    let data = envelope
        .data
        .ok_or_else(|| FetchError::Decode("response has no data".into()))?;

    let items = normalize_all(&data.properties, placeholder_image);
    let reported = data.pagination.unwrap_or_default();

    let per_page = reported
        .items_per_page()
        .filter(|n| *n > 0)
        .unwrap_or(ITEMS_PER_PAGE);
    let total_items = reported.total_items().unwrap_or(items.len());
    let total_pages = reported
        .total_pages()
        .unwrap_or_else(|| total_items.div_ceil(per_page));
    let current = reported
        .current_page()
        .unwrap_or(requested.current_page());

    Ok(ListingPage {
        items,
        pagination: PaginationState::new(current, total_pages, total_items, per_page),
    })
}

/// Decode a 2xx body from GET /properties/{id}.
pub fn parse_property_body(body: &str, placeholder_image: &str) -> Result<ListingViewModel, FetchError> {
    let envelope: PropertyEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(status) = envelope.status.as_deref() {
        if status != "success" {
            return Err(FetchError::Api {
                status: 200,
                message: envelope
                    .message
                    .unwrap_or_else(|| FAILED_LOAD_MESSAGE.to_string()),
            });
        }
    }

    let property = envelope
        .data
        .ok_or_else(|| FetchError::Decode("response has no data".into()))?
        .into_property();

    ListingViewModel::from_api(&property, placeholder_image).ok_or(FetchError::NotFound)
}

/// `ListingsApi` over HTTP. One GET per call, no retries.
pub struct HttpListingsClient {
    client: Client,
    base_url: Url,
    placeholder_image: String,
}

impl HttpListingsClient {
    pub fn new(
        base_url: Url,
        timeout: Duration,
        placeholder_image: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            placeholder_image: placeholder_image.into(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET `url`, returning status and body text.
    fn get(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        credentials: &dyn CredentialProvider,
    ) -> Result<(u16, String), FetchError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = credentials.bearer_token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let start = Instant::now();
        let resp = request.send().map_err(|e| {
            tracing::warn!(url = %url, error = %e, "listings API unreachable");
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().map_err(|e| {
            tracing::warn!(url = %url, error = %e, "failed reading listings API response");
            FetchError::Transport(e.to_string())
        })?;

        tracing::info!(
            url = %url,
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "listings API responded"
        );

        Ok((status, text))
    }
}

impl ListingsApi for HttpListingsClient {
    fn fetch_listings(
        &self,
        filters: &FilterState,
        pagination: &PaginationState,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingPage, FetchError> {
        let query = ListingQuery::from_state(filters, pagination);
        tracing::debug!(query = %query.to_query_string(), "fetching listings");

        let (status, body) = self.get(self.endpoint(&["properties"]), query.pairs(), credentials)?;
        if !(200..300).contains(&status) {
            return Err(FetchError::from_error_response(status, &body));
        }

        let page = parse_listings_body(&body, pagination, &self.placeholder_image)?;
        tracing::debug!(
            items = page.items.len(),
            total_items = page.pagination.total_items,
            "listings decoded"
        );
        Ok(page)
    }

    fn fetch_listing(
        &self,
        id: &str,
        credentials: &dyn CredentialProvider,
    ) -> Result<ListingViewModel, FetchError> {
        let (status, body) = self.get(self.endpoint(&["properties", id]), &[], credentials)?;
        match status {
            404 => Err(FetchError::NotFound),
            200..=299 => parse_property_body(&body, &self.placeholder_image),
            _ => Err(FetchError::from_error_response(status, &body)),
        }
    }
}
