//! Access token inspection.
//!
//! The host CLI stores a UAA-issued JWT as its access token. The display
//! username is carried in the token's `user_name` claim, so it can be
//! recovered without another round trip.
//!
//! The signature is NOT verified; the claim is only used for display.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    user_name: Option<String>,
}

/// Remove a case-insensitive `bearer` scheme prefix, as stored by the host CLI.
///
/// A bare `bearer` with nothing after it strips to an empty token.
pub fn strip_bearer_prefix(token: &str) -> &str {
    let trimmed = token.trim_start();
    let rest = match trimmed.get(..6) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {
            let after = &trimmed[6..];
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                after
            } else {
                trimmed
            }
        }
        _ => trimmed,
    };
    rest.trim()
}

/// Extract the `user_name` claim from a JWT access token.
///
/// Returns `None` if the token is not a three-part JWT, the payload is not
/// valid base64url JSON, or the claim is absent.
pub fn username_from_token(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims.user_name.filter(|name| !name.is_empty())
}
