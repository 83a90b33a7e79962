// src/search/state.rs
use url::form_urlencoded;

use crate::search::filters::{FilterKey, FilterState};
use crate::search::pagination::PaginationState;
use crate::search::params::Params;

pub const RESULTS_PATH: &str = "/properties";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "list" => DisplayMode::List,
            _ => DisplayMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "grid",
            DisplayMode::List => "list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "Grid",
            DisplayMode::List => "List",
        }
    }
}

/// Everything the results page knows about the current query.
///
/// Lives for one page view: it is rebuilt from the URL on first load and from
/// the page's form on every later interaction. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub filters: FilterState,
    pub pagination: PaginationState,
    pub display: DisplayMode,
}

impl SearchState {
    /// Seed from the shareable URL. Only `search` and `location` live there.
    pub fn from_url_params(params: &Params) -> Self {
        let mut filters = FilterState::default();
        for key in [FilterKey::Search, FilterKey::Location] {
            if let Some(v) = params.get(key.form_name()) {
                filters.set(key, v);
            }
        }
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Rebuild from the filter form, including the page the form was showing.
    pub fn from_form(params: &Params) -> Self {
        let mut filters = FilterState::default();
        for key in FilterKey::ALL {
            if let Some(v) = params.get(key.form_name()) {
                filters.set(key, v);
            }
        }

        let page = params
            .get("page")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1);

        Self {
            filters,
            pagination: PaginationState::requested(page),
            display: params.get("view").map(DisplayMode::parse).unwrap_or_default(),
        }
    }

    /// Change one filter. Any change invalidates the current page position.
    pub fn set_filter(&mut self, key: FilterKey, value: &str) {
        self.filters.set(key, value);
        self.pagination.reset();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Adopt what the backend reported about the result set.
    pub fn apply_pagination(&mut self, reported: PaginationState) {
        self.pagination = PaginationState::new(
            reported.current_page(),
            reported.total_pages(),
            reported.total_items,
            reported.items_per_page,
        );
    }

    /// Bookmarkable URL for this view. Price, type, rooms and sort stay
    /// session-local and never appear here.
    pub fn shareable_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for key in [FilterKey::Search, FilterKey::Location] {
            if let Some(v) = self.filters.value(key) {
                query.append_pair(key.form_name(), v);
                any = true;
            }
        }

        if any {
            format!("{RESULTS_PATH}?{}", query.finish())
        } else {
            RESULTS_PATH.to_string()
        }
    }
}
