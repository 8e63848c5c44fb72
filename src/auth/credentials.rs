//! Basic-Authentication credential decoding

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheme expected in the `Authorization` header
pub const BASIC_SCHEME: &str = "Basic";

/// A registered account. Two users are the same user only when both the
/// username and the password match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Authorization` header value presenting this user's credentials
    pub fn authorization_header(&self) -> String {
        encode_basic(&self.username, &self.password)
    }
}

/// Why a presented `Authorization` header could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Expected scheme and value separated by a single space")]
    MalformedHeader,
    #[error("Unsupported authorization scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid base64 payload: {0}")]
    InvalidEncoding(String),
    #[error("Credentials are not valid UTF-8")]
    InvalidUtf8,
    #[error("Expected exactly one ':' between principal and secret")]
    MalformedPair,
}

/// A decoded (principal, secret) pair
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub principal: String,
    pub secret: String,
}

// Keep secrets out of logs and panic messages
impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("principal", &self.principal)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Decode a `Basic <base64(principal:secret)>` header value.
///
/// The header must split into exactly two space-separated segments, the
/// scheme must be `Basic` verbatim, and the decoded text must contain exactly
/// one `:`. Anything else is malformed.
pub fn parse_authorization(header: &str) -> Result<BasicCredentials, CredentialError> {
    let segments: Vec<&str> = header.split(' ').collect();
    let [scheme, payload] = segments.as_slice() else {
        return Err(CredentialError::MalformedHeader);
    };

    if *scheme != BASIC_SCHEME {
        return Err(CredentialError::UnsupportedScheme(scheme.to_string()));
    }

    let decoded = BASE64
        .decode(payload)
        .map_err(|e| CredentialError::InvalidEncoding(e.to_string()))?;
    let text = String::from_utf8(decoded).map_err(|_| CredentialError::InvalidUtf8)?;

    let parts: Vec<&str> = text.split(':').collect();
    let [principal, secret] = parts.as_slice() else {
        return Err(CredentialError::MalformedPair);
    };

    Ok(BasicCredentials {
        principal: principal.to_string(),
        secret: secret.to_string(),
    })
}

/// Build a `Basic` header value for the given pair
pub fn encode_basic(principal: &str, secret: &str) -> String {
    format!(
        "{} {}",
        BASIC_SCHEME,
        BASE64.encode(format!("{}:{}", principal, secret))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        let creds = parse_authorization(&encode_basic("alice", "s3cret")).unwrap();
        assert_eq!(creds.principal, "alice");
        assert_eq!(creds.secret, "s3cret");
    }

    #[test]
    fn test_parse_empty_principal() {
        let creds = parse_authorization(&encode_basic("", "token")).unwrap();
        assert_eq!(creds.principal, "");
        assert_eq!(creds.secret, "token");
    }

    #[test]
    fn test_wrong_scheme() {
        let header = encode_basic("a", "b").replace("Basic", "Bearer");
        assert_eq!(
            parse_authorization(&header),
            Err(CredentialError::UnsupportedScheme("Bearer".to_string()))
        );
        // Scheme match is case-sensitive
        let header = encode_basic("a", "b").replace("Basic", "basic");
        assert!(parse_authorization(&header).is_err());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert_eq!(
            parse_authorization("Basic"),
            Err(CredentialError::MalformedHeader)
        );
        assert_eq!(
            parse_authorization("Basic YTpi extra"),
            Err(CredentialError::MalformedHeader)
        );
        assert_eq!(
            parse_authorization("Basic  YTpi"),
            Err(CredentialError::MalformedHeader)
        );
    }

    #[test]
    fn test_undecodable_payload() {
        assert!(matches!(
            parse_authorization("Basic !!!not-base64!!!"),
            Err(CredentialError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_pair_must_have_single_colon() {
        let no_colon = format!("Basic {}", BASE64.encode("justauser"));
        assert_eq!(
            parse_authorization(&no_colon),
            Err(CredentialError::MalformedPair)
        );

        let two_colons = encode_basic("user", "pass:word");
        assert_eq!(
            parse_authorization(&two_colons),
            Err(CredentialError::MalformedPair)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = parse_authorization(&encode_basic("bob", "hunter2")).unwrap();
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("hunter2"));
    }
}
