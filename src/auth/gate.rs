//! Access decisions for the zone API

use super::credentials::{BasicCredentials, User, parse_authorization};
use tracing::debug;

/// Where the unauthenticated root request is sent by default
pub const DEFAULT_SIGN_IN_URL: &str =
    "https://sso.copper.io/api/v1/sessions/validate?service=https%3A%2F%2Fpointhq.com%2Fzones";

/// Which endpoint under the gate a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTarget {
    /// The root collection endpoint (`/zones`)
    Collection,
    /// Anything below it
    Member,
}

impl GateTarget {
    /// Classify a request path relative to the collection root.
    /// `root` and `root/` are the collection, everything else is a member.
    pub fn classify(path: &str, root: &str) -> Self {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed == root.strip_suffix('/').unwrap_or(root) {
            GateTarget::Collection
        } else {
            GateTarget::Member
        }
    }
}

/// Outcome of evaluating a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Authorized,
    Forbidden,
    /// Unauthenticated request for a member endpoint; looks like a missing
    /// resource on purpose
    NotFound,
    /// Unauthenticated request for the collection; carries the sign-in
    /// location
    RedirectToSignIn(String),
}

impl AccessDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessDecision::Authorized)
    }
}

/// Registered users plus an optional shared API token.
///
/// Evaluation is a pure function of this state and the presented header;
/// nothing is remembered between requests.
#[derive(Debug, Clone)]
pub struct AccessGate {
    users: Vec<User>,
    api_token: Option<String>,
    sign_in_url: String,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_SIGN_IN_URL)
    }
}

impl AccessGate {
    pub fn new(sign_in_url: impl Into<String>) -> Self {
        Self {
            users: Vec::new(),
            api_token: None,
            sign_in_url: sign_in_url.into(),
        }
    }

    /// Register a user. Duplicates are harmless.
    pub fn add_user(&mut self, user: User) {
        debug!("Registering user {}", user.username);
        self.users.push(user);
    }

    /// Install the shared API token, replacing any previous one
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        debug!("API token set");
        self.api_token = Some(token.into());
    }

    pub fn clear_api_token(&mut self) {
        self.api_token = None;
    }

    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    /// Forget all users and the token. The sign-in URL is configuration and
    /// survives.
    pub fn reset(&mut self) {
        self.users.clear();
        self.api_token = None;
    }

    /// Decide whether a request may proceed.
    ///
    /// 1. No header: redirect for the collection, `NotFound` otherwise.
    /// 2. Undecodable header: `Forbidden`.
    /// 3. Secret equal to the API token: `Authorized`, whatever the principal.
    /// 4. Exact (username, password) match: `Authorized`.
    /// 5. Otherwise `Forbidden`.
    pub fn evaluate(&self, authorization: Option<&str>, target: GateTarget) -> AccessDecision {
        let Some(header) = authorization else {
            return match target {
                GateTarget::Collection => {
                    debug!("No credentials for collection, redirecting to sign-in");
                    AccessDecision::RedirectToSignIn(self.sign_in_url.clone())
                }
                GateTarget::Member => {
                    debug!("No credentials for member endpoint");
                    AccessDecision::NotFound
                }
            };
        };

        let credentials = match parse_authorization(header) {
            Ok(credentials) => credentials,
            Err(e) => {
                debug!("Rejecting malformed credentials: {}", e);
                return AccessDecision::Forbidden;
            }
        };

        if self.matches_token(&credentials) {
            debug!("Authorized {:?} by API token", credentials.principal);
            AccessDecision::Authorized
        } else if self.matches_user(&credentials) {
            debug!("Authorized user {:?}", credentials.principal);
            AccessDecision::Authorized
        } else {
            debug!("Access denied for {:?}", credentials.principal);
            AccessDecision::Forbidden
        }
    }

    fn matches_token(&self, credentials: &BasicCredentials) -> bool {
        self.api_token.as_deref() == Some(credentials.secret.as_str())
    }

    fn matches_user(&self, credentials: &BasicCredentials) -> bool {
        self.users
            .iter()
            .any(|u| u.username == credentials.principal && u.password == credentials.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::encode_basic;

    fn gate_with_user() -> (AccessGate, User) {
        let mut gate = AccessGate::default();
        let user = User::new("alice", "wonderland");
        gate.add_user(User::new("bob", "builder"));
        gate.add_user(user.clone());
        (gate, user)
    }

    #[test]
    fn test_classify_target() {
        assert_eq!(GateTarget::classify("/zones", "/zones"), GateTarget::Collection);
        assert_eq!(GateTarget::classify("/zones/", "/zones"), GateTarget::Collection);
        assert_eq!(GateTarget::classify("/zones/1", "/zones"), GateTarget::Member);
        assert_eq!(
            GateTarget::classify("/zones/1/records", "/zones"),
            GateTarget::Member
        );
    }

    #[test]
    fn test_no_credentials() {
        let (gate, _) = gate_with_user();
        assert_eq!(
            gate.evaluate(None, GateTarget::Collection),
            AccessDecision::RedirectToSignIn(DEFAULT_SIGN_IN_URL.to_string())
        );
        assert_eq!(
            gate.evaluate(None, GateTarget::Member),
            AccessDecision::NotFound
        );
    }

    #[test]
    fn test_sign_in_url_is_configurable() {
        let gate = AccessGate::new("https://login.test/sso");
        assert_eq!(
            gate.evaluate(None, GateTarget::Collection),
            AccessDecision::RedirectToSignIn("https://login.test/sso".to_string())
        );
    }

    #[test]
    fn test_user_credentials() {
        let (gate, user) = gate_with_user();
        let ok = user.authorization_header();
        let wrong = encode_basic(&user.username, "wrong");

        assert!(gate.evaluate(Some(ok.as_str()), GateTarget::Member).is_authorized());
        assert_eq!(
            gate.evaluate(Some(wrong.as_str()), GateTarget::Collection),
            AccessDecision::Forbidden
        );
    }

    #[test]
    fn test_token_beats_username() {
        let (mut gate, _) = gate_with_user();
        gate.set_api_token("tok-123");

        for principal in ["", "nobody", "alice"] {
            let header = encode_basic(principal, "tok-123");
            assert!(gate.evaluate(Some(header.as_str()), GateTarget::Collection).is_authorized());
        }
    }

    #[test]
    fn test_malformed_is_forbidden_even_for_members() {
        let (gate, _) = gate_with_user();
        for header in ["Bearer abc", "Basic", "Basic %%%", ""] {
            assert_eq!(
                gate.evaluate(Some(header), GateTarget::Member),
                AccessDecision::Forbidden,
                "header {:?}",
                header
            );
        }
    }

    #[test]
    fn test_reset_forgets_users_and_token() {
        let (mut gate, user) = gate_with_user();
        gate.set_api_token("tok");
        gate.reset();

        assert_eq!(gate.user_count(), 0);
        assert!(!gate.has_api_token());
        assert_eq!(
            gate.evaluate(Some(user.authorization_header().as_str()), GateTarget::Member),
            AccessDecision::Forbidden
        );
        assert_eq!(
            gate.evaluate(Some(encode_basic("x", "tok").as_str()), GateTarget::Member),
            AccessDecision::Forbidden
        );
        assert_eq!(gate.sign_in_url(), DEFAULT_SIGN_IN_URL);
    }
}
