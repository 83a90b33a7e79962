use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Shape of GET /properties
//
//  {status, message?, data}
//   └── data
//        ├── properties: [ApiProperty]
//        └── pagination
//             ├── currentPage | page
//             ├── totalPages  | pages
//             ├── totalItems  | total
//             └── itemsPerPage | limit
//
// Nothing in here is trusted: every field is optional and numbers may show up
// as strings. Aliases are separate fields so a record carrying both spellings
// doesn't fail with a duplicate-field error.

#[derive(Debug, Deserialize)]
pub struct ListingsEnvelope {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    pub data: Option<ListingsData>,
}

#[derive(Debug, Deserialize)]
pub struct ListingsData {
    #[serde(default, deserialize_with = "lenient_records")]
    pub properties: Vec<ApiProperty>,
    pub pagination: Option<ApiPagination>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPagination {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_page: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub page: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_pages: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pages: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_items: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub items_per_page: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub limit: Option<f64>,
}

impl ApiPagination {
    pub fn current_page(&self) -> Option<usize> {
        as_count(self.current_page.or(self.page))
    }

    pub fn total_pages(&self) -> Option<usize> {
        as_count(self.total_pages.or(self.pages))
    }

    pub fn total_items(&self) -> Option<usize> {
        as_count(self.total_items.or(self.total))
    }

    pub fn items_per_page(&self) -> Option<usize> {
        as_count(self.items_per_page.or(self.limit))
    }
}

/// Shape of GET /properties/{id}: `data` is either `{property: {...}}` or the
/// record itself.
#[derive(Debug, Deserialize)]
pub struct PropertyEnvelope {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    pub data: Option<PropertyData>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertyData {
    Wrapped { property: ApiProperty },
    Bare(ApiProperty),
}

impl PropertyData {
    pub fn into_property(self) -> ApiProperty {
        match self {
            PropertyData::Wrapped { property } => property,
            PropertyData::Bare(property) => property,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProperty {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "lenient_string")]
    pub mongo_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub property_type: Option<String>,

    pub address: Option<AddressField>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub monthly_rent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub bedrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub square_footage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sqft: Option<f64>,

    pub images: Option<ImagesField>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub review_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_reviews: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddressField {
    Parts(ApiAddress),
    Line(String),
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAddress {
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImagesField {
    List(Vec<ImageRef>),
    Single(ImageRef),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Object {
        #[serde(default, deserialize_with = "lenient_string")]
        url: Option<String>,
    },
    Other(Value),
}

impl ImageRef {
    fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(u) => Some(u.as_str()),
            ImageRef::Object { url } => url.as_deref(),
            ImageRef::Other(_) => None,
        }
    }
}

impl ApiProperty {
    pub fn id(&self) -> Option<&str> {
        non_blank(self.id.as_deref()).or_else(|| non_blank(self.mongo_id.as_deref()))
    }

    pub fn city(&self) -> Option<&str> {
        let nested = match &self.address {
            Some(AddressField::Parts(a)) => a.city.as_deref(),
            _ => None,
        };
        non_blank(nested).or_else(|| non_blank(self.city.as_deref()))
    }

    pub fn state(&self) -> Option<&str> {
        let nested = match &self.address {
            Some(AddressField::Parts(a)) => a.state.as_deref(),
            _ => None,
        };
        non_blank(nested).or_else(|| non_blank(self.state.as_deref()))
    }

    pub fn street(&self) -> Option<&str> {
        match &self.address {
            Some(AddressField::Parts(a)) => non_blank(a.street.as_deref()),
            Some(AddressField::Line(line)) => non_blank(Some(line.as_str())),
            _ => None,
        }
    }

    pub fn rent(&self) -> Option<f64> {
        self.monthly_rent.or(self.price)
    }

    pub fn area(&self) -> Option<f64> {
        self.square_footage.or(self.area).or(self.sqft)
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating.or(self.average_rating)
    }

    pub fn review_count(&self) -> Option<u32> {
        self.review_count
            .or(self.total_reviews)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as u32)
    }

    /// First usable image URL, if any.
    pub fn first_image(&self) -> Option<&str> {
        match &self.images {
            Some(ImagesField::List(list)) => list.iter().find_map(|i| non_blank(i.url())),
            Some(ImagesField::Single(one)) => non_blank(one.url()),
            None => None,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn as_count(n: Option<f64>) -> Option<usize> {
    n.filter(|n| n.is_finite() && *n >= 0.0).map(|n| n as usize)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// A list of records where any entry that isn't a readable record is dropped.
/// `null` or a non-list counts as no records.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<ApiProperty>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            tracing::warn!(kind = json_kind(&other), "properties is not a list, ignoring it");
            return Ok(Vec::new());
        }
        None => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let kind = json_kind(&entry);
            match serde_json::from_value::<ApiProperty>(entry) {
                Ok(prop) => Some(prop),
                Err(e) => {
                    tracing::warn!(index, kind, error = %e, "skipping unreadable listing");
                    None
                }
            }
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}
