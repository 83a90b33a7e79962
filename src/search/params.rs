// src/search/params.rs
use url::form_urlencoded;

/// Decoded `key=value` pairs from a query string or an urlencoded form body.
/// Order is preserved; on duplicate keys the last one wins in `get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn parse(input: &[u8]) -> Self {
        Self(form_urlencoded::parse(input).into_owned().collect())
    }

    pub fn from_query(query: Option<&str>) -> Self {
        query.map(|q| Self::parse(q.as_bytes())).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
