use thiserror::Error;

/// Zone repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A zone with this id is already stored
    #[error("Zone id already exists: {0}")]
    DuplicateZoneId(u64),
    /// A record with this id already exists within the zone
    #[error("Record id already exists: {record_id} (zone {zone_id})")]
    DuplicateRecordId { zone_id: u64, record_id: u64 },
}

impl RepositoryError {
    /// Both variants are identity collisions; callers that only care about
    /// "was this a duplicate id" can use this instead of matching.
    pub fn is_duplicate_id(&self) -> bool {
        matches!(
            self,
            Self::DuplicateZoneId(_) | Self::DuplicateRecordId { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RepositoryError::DuplicateZoneId(42).to_string(),
            "Zone id already exists: 42"
        );
        assert_eq!(
            RepositoryError::DuplicateRecordId {
                zone_id: 5,
                record_id: 9
            }
            .to_string(),
            "Record id already exists: 9 (zone 5)"
        );
    }
}
