use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// `{ "data": T }` envelope used by single-resource endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataRoot<T> {
    pub data: T,
}

/// `{ "data": [T], "links": ..., "meta": ... }` envelope used by paginated endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListRoot<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

impl<T> Default for ListRoot<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            links: Links::default(),
            meta: Meta::default(),
        }
    }
}

/// Pagination URLs. Absent links are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Links {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata.
///
/// MailerSend returns the numeric fields either as JSON numbers or as numeric strings
/// depending on the endpoint, so they are kept as [`LooseNumber`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Meta {
    pub current_page: Option<LooseNumber>,
    pub from: Option<LooseNumber>,
    pub path: Option<String>,
    pub per_page: Option<LooseNumber>,
    pub to: Option<LooseNumber>,
}

/// Numeric value returned by MailerSend as either a JSON number or a JSON string.
///
/// The textual form is preserved; use [`LooseNumber::as_i64`] or [`LooseNumber::as_f64`]
/// to read it as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LooseNumber(String);

impl LooseNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LooseNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LooseNumberVisitor;

        impl Visitor<'_> for LooseNumberVisitor {
            type Value = LooseNumber;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON number or a numeric string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(LooseNumber(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(LooseNumber(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(LooseNumber(value.to_string()))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(LooseNumber(value.to_owned()))
            }
        }

        deserializer.deserialize_any(LooseNumberVisitor)
    }
}

/// Error body returned with non-success statuses.
///
/// Fields other than `message` (for example the `errors` map of a 422) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_accepts_numbers_and_numeric_strings() {
        let json = r#"{
            "current_page": "2",
            "from": 26,
            "path": "https://api.mailersend.com/v1/domains",
            "per_page": "25",
            "to": 50
        }"#;
        let meta: Meta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.current_page.as_ref().and_then(LooseNumber::as_i64), Some(2));
        assert_eq!(meta.from.as_ref().and_then(LooseNumber::as_i64), Some(26));
        assert_eq!(meta.per_page.as_ref().map(LooseNumber::as_str), Some("25"));
        assert_eq!(meta.to.as_ref().and_then(LooseNumber::as_i64), Some(50));
    }

    #[test]
    fn list_root_tolerates_missing_links_and_meta() {
        let root: ListRoot<serde_json::Value> =
            serde_json::from_str(r#"{"data":[{"id":"a"},{"id":"b"}]}"#).unwrap();
        assert_eq!(root.data.len(), 2);
        assert_eq!(root.links, Links::default());
        assert!(root.meta.current_page.is_none());
    }

    #[test]
    fn links_keep_null_as_none() {
        let links: Links = serde_json::from_str(
            r#"{"first":"https://x/?page=1","last":null,"prev":null,"next":"https://x/?page=2"}"#,
        )
        .unwrap();
        assert_eq!(links.first.as_deref(), Some("https://x/?page=1"));
        assert!(links.prev.is_none());
        assert_eq!(links.next.as_deref(), Some("https://x/?page=2"));
    }

    #[test]
    fn loose_number_rejects_non_numeric_shapes() {
        assert!(serde_json::from_str::<LooseNumber>("true").is_err());
        assert!(serde_json::from_str::<LooseNumber>("{}").is_err());
    }
}
