pub mod auth;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod http_server;
pub mod mock;
pub mod responses;
pub mod zone;

pub use mock::MockServer;
