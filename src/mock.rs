//! Process-wide mock state: one zone repository and one access gate behind a
//! single lock.

use crate::auth::{AccessDecision, AccessGate, GateTarget, User};
use crate::zone::{Record, Result, Zone, ZoneInfo, ZoneRepository};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
struct MockState {
    zones: ZoneRepository,
    gate: AccessGate,
}

/// Cloneable handle to the mock's state.
///
/// Each method takes the lock once, so a check-then-insert such as
/// [`add_zone`](Self::add_zone) can't interleave with another writer, and
/// [`reset`](Self::reset) clears zones, users and token together.
#[derive(Debug, Clone)]
pub struct MockServer {
    state: Arc<RwLock<MockState>>,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::with_gate(AccessGate::default())
    }
}

impl MockServer {
    /// Create an empty mock whose gate redirects to `sign_in_url`
    pub fn new(sign_in_url: impl Into<String>) -> Self {
        Self::with_gate(AccessGate::new(sign_in_url))
    }

    pub fn with_gate(gate: AccessGate) -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState {
                zones: ZoneRepository::new(),
                gate,
            })),
        }
    }

    pub fn add_zone(&self, zone: &ZoneInfo, records: &[Record]) -> Result<()> {
        self.state.write().zones.add_zone(zone, records)
    }

    pub fn get_zone(&self, id: u64) -> Option<Zone> {
        self.state.read().zones.get_zone(id)
    }

    pub fn get_zones(&self) -> Vec<Zone> {
        self.state.read().zones.get_zones()
    }

    pub fn get_record(&self, zone_id: u64, record_id: u64) -> Option<Record> {
        self.state.read().zones.get_record(zone_id, record_id)
    }

    pub fn update_zone(&self, zone: &ZoneInfo) {
        self.state.write().zones.update_zone(zone);
    }

    pub fn update_record(&self, zone_id: u64, record: &Record) {
        self.state.write().zones.update_record(zone_id, record);
    }

    pub fn remove_zone(&self, zone_id: u64) {
        self.state.write().zones.remove_zone(zone_id);
    }

    /// Remove a zone, reporting whether it existed
    pub fn take_zone(&self, zone_id: u64) -> Option<Zone> {
        let mut state = self.state.write();
        let zone = state.zones.get_zone(zone_id)?;
        state.zones.remove_zone(zone_id);
        Some(zone)
    }

    pub fn zone_count(&self) -> usize {
        self.state.read().zones.count()
    }

    /// Set a zone's group, returning the updated snapshot
    pub fn update_zone_group(&self, zone_id: u64, group: &str) -> Option<Zone> {
        let mut state = self.state.write();
        let mut info = state.zones.get_zone(zone_id)?.info();
        info.group = group.to_string();
        state.zones.update_zone(&info);
        state.zones.get_zone(zone_id)
    }

    /// Set a record's data, returning the owning zone and the updated record
    pub fn update_record_data(
        &self,
        zone_id: u64,
        record_id: u64,
        data: &str,
    ) -> Option<(Zone, Record)> {
        let mut state = self.state.write();
        let mut record = state.zones.get_record(zone_id, record_id)?;
        record.data = data.to_string();
        state.zones.update_record(zone_id, &record);
        let zone = state.zones.get_zone(zone_id)?;
        let record = zone.record(record_id)?.clone();
        Some((zone, record))
    }

    pub fn add_user(&self, user: User) {
        self.state.write().gate.add_user(user);
    }

    pub fn set_api_token(&self, token: impl Into<String>) {
        self.state.write().gate.set_api_token(token);
    }

    pub fn authorize(&self, authorization: Option<&str>, target: GateTarget) -> AccessDecision {
        self.state.read().gate.evaluate(authorization, target)
    }

    /// Clear zones, users and the API token
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.zones.reset();
        state.gate.reset();
        info!("Mock state reset");
    }

    /// Load the demo fixture: two zones, two records and a `test`/`test` user
    pub fn seed_demo_data(&self) -> Result<()> {
        let somesite = ZoneInfo::new(29873, "somesite.com", "Default Group", 141, 3600);
        let records = [
            Record::new(12938, "some-host", "10.11.12.13", "A", 3600),
            Record::new(1231, "myhost", "14.13.12.11", "A", 3600),
        ];
        let othersite = ZoneInfo::new(12414, "othersite.com", "Default Group", 141, 3600);

        let mut state = self.state.write();
        state.zones.add_zone(&somesite, &records)?;
        state.zones.add_zone(&othersite, &[])?;
        state.gate.add_user(User::new("test", "test"));
        info!(
            "Seeded demo data: try GET /zones/{} as test/test",
            somesite.id
        );
        Ok(())
    }
}
