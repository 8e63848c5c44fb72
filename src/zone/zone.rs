use super::Record;
use serde::{Deserialize, Serialize};

/// The recognised zone attributes.
///
/// This is the only shape accepted by [`ZoneRepository::add_zone`] and
/// [`ZoneRepository::update_zone`]: a client object with extra fields (a
/// `records` array, arbitrary junk) cannot be expressed here, so nothing
/// beyond these five values can reach stored state.
///
/// [`ZoneRepository::add_zone`]: super::ZoneRepository::add_zone
/// [`ZoneRepository::update_zone`]: super::ZoneRepository::update_zone
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub id: u64,
    pub name: String,
    pub group: String,
    #[serde(rename = "user-id")]
    pub user_id: u64,
    pub ttl: u32,
}

impl ZoneInfo {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        group: impl Into<String>,
        user_id: u64,
        ttl: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            group: group.into(),
            user_id,
            ttl,
        }
    }
}

/// A zone together with its records, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub name: String,
    pub group: String,
    #[serde(rename = "user-id")]
    pub user_id: u64,
    pub ttl: u32,
    pub records: Vec<Record>,
}

impl Zone {
    /// Create an empty zone from its attributes
    pub fn from_info(info: &ZoneInfo) -> Self {
        Self {
            id: info.id,
            name: info.name.clone(),
            group: info.group.clone(),
            user_id: info.user_id,
            ttl: info.ttl,
            records: Vec::new(),
        }
    }

    /// The zone's attributes without its records
    pub fn info(&self) -> ZoneInfo {
        ZoneInfo {
            id: self.id,
            name: self.name.clone(),
            group: self.group.clone(),
            user_id: self.user_id,
            ttl: self.ttl,
        }
    }

    /// Look up a record by id
    pub fn record(&self, record_id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == record_id)
    }

    pub(crate) fn record_mut(&mut self, record_id: u64) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id == record_id)
    }

    /// Overwrite the mutable attributes. Id and records are untouched.
    pub(crate) fn assign_from(&mut self, info: &ZoneInfo) {
        self.name.clone_from(&info.name);
        self.group.clone_from(&info.group);
        self.user_id = info.user_id;
        self.ttl = info.ttl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_json_uses_hyphenated_user_id() {
        let zone = Zone::from_info(&ZoneInfo::new(1, "example.com", "g", 7, 3600));
        let json = serde_json::to_value(&zone).unwrap();

        assert_eq!(json["user-id"], 7);
        assert!(json.get("user_id").is_none());
        assert_eq!(json["records"], serde_json::json!([]));
    }

    #[test]
    fn test_zone_info_ignores_unknown_fields() {
        let info: ZoneInfo = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "example.org",
            "group": "g",
            "user-id": 1,
            "ttl": 60,
            "records": [{"name": "www"}],
            "garbage": "x"
        }))
        .unwrap();

        assert_eq!(info, ZoneInfo::new(3, "example.org", "g", 1, 60));
    }

    #[test]
    fn test_assign_from_keeps_identity_and_records() {
        let mut zone = Zone::from_info(&ZoneInfo::new(1, "a.com", "g", 7, 3600));
        zone.records.push(Record::new(2, "www", "1.2.3.4", "A", 300));

        zone.assign_from(&ZoneInfo::new(99, "b.com", "h", 8, 60));

        assert_eq!(zone.id, 1);
        assert_eq!(zone.name, "b.com");
        assert_eq!(zone.group, "h");
        assert_eq!(zone.user_id, 8);
        assert_eq!(zone.ttl, 60);
        assert_eq!(zone.records.len(), 1);
    }
}
