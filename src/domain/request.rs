use serde::{Deserialize, Serialize};

/// Comparison filter used by inbound routing and SMS inbound rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Filter {
    pub comparer: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Filter {
    pub fn new(comparer: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            comparer: comparer.into(),
            value: value.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}
