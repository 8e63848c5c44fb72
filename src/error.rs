use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid sign-in URL: {0}")]
    InvalidSignInUrl(String),

    #[error("Invalid API token: {0}")]
    InvalidApiToken(String),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Repository error: {0}")]
    Repository(#[from] crate::zone::RepositoryError),
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::RepositoryError;

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidSignInUrl(String::new()).into();
        assert!(matches!(err, ServerError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Invalid sign-in URL: ");
    }

    #[test]
    fn test_repository_error_converts() {
        let err = ServerError::from(RepositoryError::DuplicateZoneId(29873));
        assert!(matches!(
            err,
            ServerError::Repository(RepositoryError::DuplicateZoneId(29873))
        ));
        assert_eq!(
            err.to_string(),
            "Repository error: Zone id already exists: 29873"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ServerError = io.into();
        assert_eq!(err.to_string(), "IO error: port taken");
    }
}
