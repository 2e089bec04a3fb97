use std::fmt;

use phonenumber::country;
use serde::{Serialize, Serializer};

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// MailerSend API token sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming. `Debug` never prints the token.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the SMS endpoints.
///
/// Invariant: non-empty after trimming. This type does not normalize; MailerSend expects
/// E.164, so parse into [`PhoneNumber`] and convert when the input is user-supplied.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used by `POST /sms`.
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to MailerSend.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl Serialize for RawPhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(number: PhoneNumber) -> Self {
        Self(number.formatted)
    }
}

/// A phone number checked against the numbering plan.
///
/// Two numbers are equal when they format to the same E.164 string, whatever the input
/// looked like.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    number: phonenumber::PhoneNumber,
    formatted: String,
}

impl PhoneNumber {
    /// Parse user input. Without a `+` prefix the number is read in `region`.
    pub fn parse(region: Option<country::Id>, input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        let number = phonenumber::parse(region, input).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: input.to_owned(),
            }
        })?;
        let formatted = number.format().mode(phonenumber::Mode::E164).to_string();
        Ok(Self { number, formatted })
    }

    pub fn e164(&self) -> &str {
        &self.formatted
    }

    pub fn country(&self) -> Option<country::Id> {
        self.number.country().id()
    }

    pub fn inner(&self) -> &phonenumber::PhoneNumber {
        &self.number
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.formatted == other.formatted
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.formatted.hash(state);
    }
}
