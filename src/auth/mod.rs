pub mod credentials;
pub mod gate;

pub use credentials::{BasicCredentials, CredentialError, User, encode_basic, parse_authorization};
pub use gate::{AccessDecision, AccessGate, DEFAULT_SIGN_IN_URL, GateTarget};
