// src/search/filters.rs

/// Property types offered by the filter form. The backend owns the real list;
/// values are passed through as-is.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("apartment", "Apartment"),
    ("house", "House"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
    ("studio", "Studio"),
];

// "4+" / "3+" are open-ended sentinels, not numbers.
pub const BEDROOM_OPTIONS: &[&str] = &["1", "2", "3", "4+"];
pub const BATHROOM_OPTIONS: &[&str] = &["1", "2", "3+"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Newest, SortBy::PriceLow, SortBy::PriceHigh];

    /// Anything unrecognised falls back to newest-first.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            _ => SortBy::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Newest => "Newest",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
        }
    }
}

/// Field names of `FilterState`, spelled the way the filter form names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Search,
    Location,
    PriceMin,
    PriceMax,
    PropertyType,
    Bedrooms,
    Bathrooms,
    SortBy,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::Search,
        FilterKey::Location,
        FilterKey::PriceMin,
        FilterKey::PriceMax,
        FilterKey::PropertyType,
        FilterKey::Bedrooms,
        FilterKey::Bathrooms,
        FilterKey::SortBy,
    ];

    pub fn form_name(&self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Location => "location",
            FilterKey::PriceMin => "minPrice",
            FilterKey::PriceMax => "maxPrice",
            FilterKey::PropertyType => "propertyType",
            FilterKey::Bedrooms => "bedrooms",
            FilterKey::Bathrooms => "bathrooms",
            FilterKey::SortBy => "sortBy",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.form_name() == name)
    }
}

/// The user's current search, filter and sort selection.
///
/// Every field defaults to empty, meaning "any". Numeric-looking fields are kept
/// as the raw text the form sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_text: String,
    pub location: String,
    pub price_min: String,
    pub price_max: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sort_by: SortBy,
}

impl FilterState {
    /// Replace a single field. Callers that own pagination should go through
    /// `SearchState::set_filter` instead so the page resets.
    pub fn set(&mut self, key: FilterKey, value: &str) {
        let value = value.to_string();
        match key {
            FilterKey::Search => self.search_text = value,
            FilterKey::Location => self.location = value,
            FilterKey::PriceMin => self.price_min = value,
            FilterKey::PriceMax => self.price_max = value,
            FilterKey::PropertyType => self.property_type = value,
            FilterKey::Bedrooms => self.bedrooms = value,
            FilterKey::Bathrooms => self.bathrooms = value,
            FilterKey::SortBy => self.sort_by = SortBy::parse(&value),
        }
    }

    /// Raw text of a field, as it would be echoed back into the form.
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Search => &self.search_text,
            FilterKey::Location => &self.location,
            FilterKey::PriceMin => &self.price_min,
            FilterKey::PriceMax => &self.price_max,
            FilterKey::PropertyType => &self.property_type,
            FilterKey::Bedrooms => &self.bedrooms,
            FilterKey::Bathrooms => &self.bathrooms,
            FilterKey::SortBy => self.sort_by.as_str(),
        }
    }

    /// Trimmed value of a field, or `None` when it is unset.
    pub fn value(&self, key: FilterKey) -> Option<&str> {
        non_empty(self.get(key))
    }
}

pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
