/// A value rejected before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{input:?} is not a valid phone number")]
    InvalidPhoneNumber { input: String },
    #[error("{input:?} is not an absolute http(s) URL")]
    InvalidBaseUrl { input: String },
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn messages_quote_the_rejected_input() {
        assert_eq!(
            ValidationError::Empty { field: "api_key" }.to_string(),
            "api_key must not be empty"
        );
        assert_eq!(
            ValidationError::InvalidBaseUrl { input: "ftp://x".into() }.to_string(),
            r#""ftp://x" is not an absolute http(s) URL"#
        );
    }
}
