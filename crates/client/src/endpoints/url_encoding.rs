//! URL encoding utilities for constructing safe query values.
//!
//! Filter values interpolated into `q=<field>:<value>` must not be able to
//! terminate the parameter (`&`), inject another filter (`;`), or be
//! decoded twice (`%`).
//!
//! # Example
//!
//! ```
//! use cf_client::endpoints::url_encoding::encode_query_value;
//!
//! assert_eq!(encode_query_value("my broker"), "my%20broker");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in query values: the RFC 3986 unreserved set.
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for use as a query filter value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}
