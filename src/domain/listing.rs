// src/domain/listing.rs

use crate::api::models::ApiProperty;
use chrono::{DateTime, NaiveDate};

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/static/images/placeholder-property.svg";
pub const UNTITLED: &str = "Untitled property";

/// A rental listing, flattened and defaulted, ready to render.
/// This is the anti-corruption layer between the backend's records and the
/// templates: nothing downstream of here deals with missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingViewModel {
    pub id: String,
    pub title: String,
    /// "City, State", skipping whichever part is missing.
    pub location: String,
    pub street: Option<String>,
    /// Monthly rent; 0 when the backend didn't say.
    pub price: f64,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub area: Option<f64>,
    pub image_url: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub property_type: Option<String>,
    pub description: Option<String>,
    pub listed_on: Option<NaiveDate>,
}

impl ListingViewModel {
    /// Normalize one backend record. Returns `None` when the record has no id
    /// that can sit in a `/properties/{id}` link.
    pub fn from_api(prop: &ApiProperty, placeholder_image: &str) -> Option<Self> {
        let id = prop.id().filter(|id| is_linkable_id(id))?.to_string();

        let title = prop
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let location = [prop.city(), prop.state()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        let image_url = prop
            .first_image()
            .unwrap_or(placeholder_image)
            .to_string();

        // Helper to parse the backend's ISO timestamps down to a listing date
        let listed_on = prop
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.date_naive());

        Some(Self {
            id,
            title,
            location,
            street: prop.street().map(str::to_string),
            price: prop.rent().filter(|p| p.is_finite()).unwrap_or(0.0),
            bedrooms: prop.bedrooms,
            bathrooms: prop.bathrooms,
            area: prop.area(),
            image_url,
            rating: prop.rating().map(|r| r.clamp(0.0, 5.0)),
            review_count: prop.review_count(),
            property_type: prop
                .property_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            description: prop
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            listed_on,
        })
    }

    pub fn detail_href(&self) -> String {
        format!("/properties/{}", self.id)
    }
}

/// Ids are used verbatim as a path segment: ASCII letters, digits, `-`, `_`.
pub fn is_linkable_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Normalize a whole page of records, keeping backend order.
pub fn normalize_all(props: &[ApiProperty], placeholder_image: &str) -> Vec<ListingViewModel> {
    props
        .iter()
        .filter_map(|p| {
            let vm = ListingViewModel::from_api(p, placeholder_image);
            if vm.is_none() {
                tracing::warn!(id = ?p.id(), title = ?p.title, "skipping listing without a usable id");
            }
            vm
        })
        .collect()
}

/// "$1,450" style rent, no cents.
pub fn format_price(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

/// 2.0 -> "2", 1.5 -> "1.5"
pub fn format_count(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n:.1}")
    }
}
