//! Query-string encoding for GET options.
//!
//! Each options type lists its wire fields explicitly in a [`QueryParams`] impl. A field
//! that is never pushed (for example an id that only goes into the path) never reaches
//! the wire.

use std::collections::BTreeMap;

use url::Url;

/// Options that can be encoded into URL query parameters.
pub trait QueryParams {
    fn encode_query(&self, query: &mut QueryEncoder);
}

/// No options.
impl QueryParams for () {
    fn encode_query(&self, _query: &mut QueryEncoder) {}
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn encode_query(&self, query: &mut QueryEncoder) {
        (**self).encode_query(query);
    }
}

/// A single field value that knows its zero value and its textual wire form.
pub trait QueryValue {
    /// `true` when the value is the type's zero value (`0`, `""`, `false`, `None`, `[]`).
    fn is_zero(&self) -> bool;

    /// Append one wire value per element. Scalars append exactly one value.
    fn push_values(&self, out: &mut Vec<String>);
}

macro_rules! query_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn push_values(&self, out: &mut Vec<String>) {
                    out.push(self.to_string());
                }
            }
        )*
    };
}

query_value_for_int!(i32, i64, u16, u32, u64, usize);

impl QueryValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }

    fn push_values(&self, out: &mut Vec<String>) {
        out.push(self.to_string());
    }
}

impl QueryValue for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        out.push(self.to_owned());
    }
}

impl QueryValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        out.push(self.clone());
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        (**self).push_values(out);
    }
}

/// `None` is the only zero value: `Some(false)` and `Some(0)` are still emitted.
impl<T: QueryValue> QueryValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        if let Some(value) = self {
            value.push_values(out);
        }
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        for item in self {
            item.push_values(out);
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn push_values(&self, out: &mut Vec<String>) {
        self.as_slice().push_values(out);
    }
}

/// Collects `(name, value)` pairs in push order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEncoder {
    pairs: Vec<(String, String)>,
}

impl QueryEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `options` into a fresh list of pairs.
    pub fn encode<Q: QueryParams + ?Sized>(options: &Q) -> Vec<(String, String)> {
        let mut encoder = Self::new();
        options.encode_query(&mut encoder);
        encoder.pairs
    }

    /// Emit `value` unless it is the zero value of its type.
    pub fn omit_empty<V: QueryValue + ?Sized>(&mut self, name: &str, value: &V) -> &mut Self {
        if !value.is_zero() {
            self.always(name, value);
        }
        self
    }

    /// Emit `value` even when it is zero. `None` and empty sequences still emit nothing.
    pub fn always<V: QueryValue + ?Sized>(&mut self, name: &str, value: &V) -> &mut Self {
        let mut values = Vec::new();
        value.push_values(&mut values);
        self.pairs
            .extend(values.into_iter().map(|value| (name.to_owned(), value)));
        self
    }
}

/// Merge `pairs` into the query of `url`.
///
/// Names present in `pairs` replace every existing value of the same name; other existing
/// parameters are kept. The result is ordered by name, and values of one name keep their
/// relative order.
pub fn merge_query(url: &mut Url, pairs: Vec<(String, String)>) {
    if pairs.is_empty() {
        return;
    }

    let mut merged = BTreeMap::<String, Vec<String>>::new();
    for (name, value) in url.query_pairs() {
        merged
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    let mut fresh = BTreeMap::<String, Vec<String>>::new();
    for (name, value) in pairs {
        fresh.entry(name).or_default().push(value);
    }
    merged.extend(fresh);

    url.query_pairs_mut().clear().extend_pairs(
        merged
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |value| (name, value))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        id: String,
        page: i32,
        date_from: i64,
        verified: Option<bool>,
        limit: Option<i32>,
        name: String,
        required: i64,
        event: Vec<String>,
    }

    impl QueryParams for Sample {
        fn encode_query(&self, query: &mut QueryEncoder) {
            query
                .omit_empty("page", &self.page)
                .omit_empty("date_from", &self.date_from)
                .omit_empty("verified", &self.verified)
                .omit_empty("limit", &self.limit)
                .omit_empty("name", &self.name)
                .always("required", &self.required)
                .omit_empty("event[]", &self.event);
        }
    }

    fn base() -> Url {
        Url::parse("https://api.mailersend.com/v1/things").unwrap()
    }

    fn parsed(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn zero_values_are_omitted() {
        let pairs = QueryEncoder::encode(&Sample::default());
        assert_eq!(pairs, vec![("required".to_owned(), "0".to_owned())]);
    }

    #[test]
    fn tri_state_fields_emit_explicit_false_and_zero() {
        let options = Sample {
            verified: Some(false),
            limit: Some(0),
            ..Default::default()
        };
        let pairs = QueryEncoder::encode(&options);
        assert!(pairs.contains(&("verified".to_owned(), "false".to_owned())));
        assert!(pairs.contains(&("limit".to_owned(), "0".to_owned())));

        let unset = QueryEncoder::encode(&Sample::default());
        assert!(!unset.iter().any(|(k, _)| k == "verified" || k == "limit"));
    }

    #[test]
    fn sequences_repeat_the_name_in_input_order() {
        let options = Sample {
            event: vec!["sent".into(), "opened".into(), "clicked".into()],
            ..Default::default()
        };
        let pairs = QueryEncoder::encode(&options);
        let events: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "event[]")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(events, vec!["sent", "opened", "clicked"]);
    }

    #[test]
    fn unpushed_fields_never_reach_the_wire() {
        let options = Sample {
            id: "domain-id".into(),
            ..Default::default()
        };
        let pairs = QueryEncoder::encode(&options);
        assert!(!pairs.iter().any(|(_, v)| v == &options.id));
    }

    #[test]
    fn encoded_url_parses_back_to_non_zero_fields() {
        let options = Sample {
            page: 3,
            date_from: 1000,
            name: "a b&c".into(),
            required: 7,
            event: vec!["x".into(), "y".into()],
            ..Default::default()
        };
        let mut url = base();
        merge_query(&mut url, QueryEncoder::encode(&options));

        let mut pairs = parsed(&url);
        pairs.sort();
        let mut expected = vec![
            ("date_from".to_owned(), "1000".to_owned()),
            ("event[]".to_owned(), "x".to_owned()),
            ("event[]".to_owned(), "y".to_owned()),
            ("name".to_owned(), "a b&c".to_owned()),
            ("page".to_owned(), "3".to_owned()),
            ("required".to_owned(), "7".to_owned()),
        ];
        expected.sort();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn merge_overwrites_same_named_and_keeps_others() {
        let mut url = Url::parse("https://api.mailersend.com/v1/things?page=1&keep=yes").unwrap();
        merge_query(
            &mut url,
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
            ],
        );
        assert_eq!(url.query(), Some("keep=yes&limit=10&page=2"));
    }

    #[test]
    fn merge_with_nothing_leaves_url_untouched() {
        let mut url = base();
        merge_query(&mut url, Vec::new());
        assert_eq!(url.as_str(), "https://api.mailersend.com/v1/things");
    }
}
