//! Transport layer: wire-format details (query strings and JSON bodies).

mod body;
mod query;

pub use body::{decode_error_body, decode_json_body, encode_json_body};
pub use query::{QueryEncoder, QueryParams, merge_query};
