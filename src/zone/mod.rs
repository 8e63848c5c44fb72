pub mod errors;
pub mod record;
pub mod store;
#[allow(clippy::module_inception)]
pub mod zone;

pub use errors::{RepositoryError, Result};
pub use record::{Aux, Record, RecordType};
pub use store::ZoneRepository;
pub use zone::{Zone, ZoneInfo};

/// Zone constants
pub mod constants {
    /// TTL presented when a zone or record has none (1 hour)
    pub const DEFAULT_TTL: u32 = 3600;
}
