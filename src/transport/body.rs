use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ErrorBody;

/// Encode a request payload. A missing payload is sent as the JSON literal `null`.
pub fn encode_json_body<B: Serialize + ?Sized>(
    payload: Option<&B>,
) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&payload)
}

pub fn decode_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Decode the body of a non-success response.
///
/// Never fails: a body that is not a JSON object keeps its trimmed text as the message.
pub fn decode_error_body(body: &[u8]) -> ErrorBody {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed,
        Err(err) => {
            let text = String::from_utf8_lossy(body).trim().to_owned();
            if !text.is_empty() {
                tracing::warn!(error = %err, "error response body is not a JSON object");
            }
            ErrorBody {
                message: text,
                extra: serde_json::Map::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_encodes_as_null() {
        assert_eq!(encode_json_body::<()>(None).unwrap(), b"null");
        assert_eq!(
            encode_json_body(Some(&serde_json::json!({"a": 1}))).unwrap(),
            br#"{"a":1}"#
        );
    }

    #[test]
    fn error_body_keeps_message_and_extra_fields() {
        let body = br#"{"message":"The given data was invalid.","errors":{"from.email":["required"]}}"#;
        let parsed = decode_error_body(body);
        assert_eq!(parsed.message, "The given data was invalid.");
        assert_eq!(parsed.extra["errors"]["from.email"][0], "required");
    }

    #[test]
    fn null_message_keeps_extra_fields() {
        let parsed = decode_error_body(br#"{"message":null,"errors":{"x":["y"]}}"#);
        assert_eq!(parsed.message, "");
        assert_eq!(parsed.extra["errors"]["x"][0], "y");
    }

    #[test]
    fn error_body_falls_back_to_text() {
        assert_eq!(decode_error_body(b" Bad Gateway \n").message, "Bad Gateway");
        assert_eq!(decode_error_body(b"").message, "");
        assert_eq!(decode_error_body(b"[1,2]").message, "[1,2]");
    }
}
