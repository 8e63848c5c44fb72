use super::{Record, RepositoryError, Result, Zone, ZoneInfo};
use tracing::{debug, info, warn};

/// In-memory store of zones and their records.
///
/// Zones are kept in insertion order. Every accessor hands out an owned
/// clone, so whatever a caller does with a returned [`Zone`] or [`Record`]
/// never reaches stored state; only the `update_*` methods mutate it.
#[derive(Debug, Default)]
pub struct ZoneRepository {
    zones: Vec<Zone>,
}

impl ZoneRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Add a zone and, optionally, its initial records.
    ///
    /// Fails with [`RepositoryError::DuplicateZoneId`] when the zone id is
    /// taken, and with [`RepositoryError::DuplicateRecordId`] when two of the
    /// supplied records share an id. Record ids are checked one by one in
    /// batch order before anything is stored, so a failed call leaves the
    /// repository exactly as it was.
    pub fn add_zone(&mut self, zone: &ZoneInfo, records: &[Record]) -> Result<()> {
        if self.contains_zone(zone.id) {
            warn!("Rejecting duplicate zone id {}", zone.id);
            return Err(RepositoryError::DuplicateZoneId(zone.id));
        }

        let mut stored = Zone::from_info(zone);
        for record in records {
            if stored.record(record.id).is_some() {
                warn!(
                    "Rejecting duplicate record id {} in zone {}",
                    record.id, zone.id
                );
                return Err(RepositoryError::DuplicateRecordId {
                    zone_id: zone.id,
                    record_id: record.id,
                });
            }
            stored.records.push(record.clone());
        }

        info!(
            "Adding zone {} ({}) with {} records",
            zone.id,
            zone.name,
            stored.records.len()
        );
        self.zones.push(stored);
        Ok(())
    }

    /// Snapshot of a zone and all of its records
    pub fn get_zone(&self, id: u64) -> Option<Zone> {
        self.find(id).cloned()
    }

    /// Snapshots of every zone, in the order they were added
    pub fn get_zones(&self) -> Vec<Zone> {
        self.zones.clone()
    }

    /// Snapshot of a single record. `None` if either the zone or the record
    /// is missing.
    pub fn get_record(&self, zone_id: u64, record_id: u64) -> Option<Record> {
        self.find(zone_id)?.record(record_id).cloned()
    }

    /// Replace a zone's name, group, owner and ttl. No-op for unknown ids.
    pub fn update_zone(&mut self, zone: &ZoneInfo) {
        match self.find_mut(zone.id) {
            Some(stored) => {
                debug!("Updating zone {}", zone.id);
                stored.assign_from(zone);
            }
            None => debug!("Ignoring update for unknown zone {}", zone.id),
        }
    }

    /// Replace a record's mutable attributes. No-op if the zone or the
    /// record is missing.
    pub fn update_record(&mut self, zone_id: u64, record: &Record) {
        match self
            .find_mut(zone_id)
            .and_then(|zone| zone.record_mut(record.id))
        {
            Some(stored) => {
                debug!("Updating record {} in zone {}", record.id, zone_id);
                stored.assign_from(record);
            }
            None => debug!(
                "Ignoring update for unknown record {} in zone {}",
                record.id, zone_id
            ),
        }
    }

    /// Delete a zone together with its records. No-op for unknown ids.
    pub fn remove_zone(&mut self, zone_id: u64) {
        if let Some(pos) = self.position(zone_id) {
            let removed = self.zones.remove(pos);
            info!("Removed zone {} ({})", removed.id, removed.name);
        }
    }

    /// Drop every zone
    pub fn reset(&mut self) {
        if !self.zones.is_empty() {
            debug!("Clearing {} zones", self.zones.len());
        }
        self.zones.clear();
    }

    /// Number of stored zones
    pub fn count(&self) -> usize {
        self.zones.len()
    }

    pub fn contains_zone(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    /// Number of records in a zone, `None` if the zone doesn't exist
    pub fn record_count(&self, zone_id: u64) -> Option<usize> {
        self.find(zone_id).map(|zone| zone.records.len())
    }

    /// One past the highest stored zone id (1 when empty). Handy for callers
    /// that want a fresh id without tracking one themselves.
    pub fn next_zone_id(&self) -> u64 {
        self.zones
            .iter()
            .map(|zone| zone.id)
            .max()
            .map_or(1, |id| id.saturating_add(1))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.zones.iter().position(|zone| zone.id == id)
    }

    fn find(&self, id: u64) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|zone| zone.id == id)
    }
}
