use crate::auth::DEFAULT_SIGN_IN_URL;
use crate::error::ConfigError;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    /// Address the HTTP API listens on
    pub bind_addr: SocketAddr,

    /// Location unauthenticated `GET /zones` requests are redirected to
    pub sign_in_url: String,

    /// Load the demo zones and the test/test user at startup
    pub seed_demo_data: bool,

    /// API token installed at startup (None = token auth disabled)
    pub api_token: Option<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000"
                .parse()
                .expect("Default bind address is valid"),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
            seed_demo_data: true,
            api_token: None,
        }
    }
}

impl MockConfig {
    /// Create a MockConfig from environment variables
    /// Returns Err if a variable is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(bind_addr) = std::env::var("POINTDNS_MOCK_BIND_ADDR") {
            config.bind_addr = bind_addr
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddress(bind_addr))?;
        }

        if let Ok(sign_in_url) = std::env::var("POINTDNS_MOCK_SIGN_IN_URL") {
            config.sign_in_url = sign_in_url;
        }

        if let Ok(seed) = std::env::var("POINTDNS_MOCK_SEED_DEMO") {
            config.seed_demo_data = parse_bool(&seed, true);
        }

        if let Ok(token) = std::env::var("POINTDNS_MOCK_API_TOKEN") {
            if !token.is_empty() {
                config.api_token = Some(token);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The value ends up verbatim in a Location header
        if self.sign_in_url.is_empty()
            || self.sign_in_url.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::InvalidSignInUrl(self.sign_in_url.clone()));
        }

        if let Some(token) = &self.api_token {
            // A ':' could never be presented through a Basic header
            if token.contains(':') {
                return Err(ConfigError::InvalidApiToken(
                    "Token must not contain ':'".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Parse a boolean from a string, with a default value for invalid input
pub(crate) fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
