//! Domain layer: validated values and the response envelopes shared by every resource.

mod request;
mod response;
mod validation;
mod value;

pub use request::Filter;
pub use response::{DataRoot, ErrorBody, Links, ListRoot, LooseNumber, Meta};
pub use validation::ValidationError;
pub use value::{ApiKey, PhoneNumber, RawPhoneNumber};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::GB), "07911 123456").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+447911123456");
    }

    #[test]
    fn data_root_requires_data() {
        assert!(serde_json::from_str::<DataRoot<Filter>>("{}").is_err());
        let root: DataRoot<Filter> =
            serde_json::from_str(r#"{"data":{"comparer":"equal","value":"x"}}"#).unwrap();
        assert_eq!(root.data.comparer, "equal");
    }
}
