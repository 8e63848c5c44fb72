//! JSON shapes returned by the zone API.
//!
//! Empty or zero attributes are presented with the same fallbacks the hosted
//! service uses, and a record's name is qualified with its zone's name here
//! rather than in storage.

use crate::zone::{Aux, Record, RecordType, Zone, constants::DEFAULT_TTL};
use serde::Serialize;

const FALLBACK_ZONE_NAME: &str = "example.com";
const FALLBACK_GROUP: &str = "Default Group";
const FALLBACK_USER_ID: u64 = 3;
const FALLBACK_RECORD_NAME: &str = "site";
const FALLBACK_RECORD_DATA: &str = "1.2.3.4";
const FALLBACK_ZONE_ID: u64 = 1;

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn nonzero_or<T: Default + PartialEq>(value: T, fallback: T) -> T {
    if value == T::default() { fallback } else { value }
}

/// Empty text and zero are presented as no aux at all
fn present_aux(aux: Option<&Aux>) -> Option<Aux> {
    match aux? {
        Aux::Number(0) => None,
        Aux::Text(text) if text.is_empty() => None,
        aux => Some(aux.clone()),
    }
}

fn present_type(record_type: &RecordType) -> RecordType {
    if record_type.as_str().is_empty() {
        RecordType::A
    } else {
        record_type.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBody {
    pub id: u64,
    pub name: String,
    pub group: String,
    #[serde(rename = "user-id")]
    pub user_id: u64,
    pub ttl: u32,
}

/// `{"zone": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneResponse {
    pub zone: ZoneBody,
}

impl From<&Zone> for ZoneResponse {
    fn from(zone: &Zone) -> Self {
        Self {
            zone: ZoneBody {
                id: zone.id,
                name: or_fallback(&zone.name, FALLBACK_ZONE_NAME),
                group: or_fallback(&zone.group, FALLBACK_GROUP),
                user_id: nonzero_or(zone.user_id, FALLBACK_USER_ID),
                ttl: nonzero_or(zone.ttl, DEFAULT_TTL),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordBody {
    pub id: u64,
    pub name: String,
    pub data: String,
    pub aux: Option<Aux>,
    pub record_type: RecordType,
    pub redirect_to: Option<String>,
    pub ttl: u32,
    pub zone_id: u64,
}

/// `{"zone_record": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordResponse {
    pub zone_record: RecordBody,
}

impl RecordResponse {
    pub fn new(zone: &Zone, record: &Record) -> Self {
        Self {
            zone_record: RecordBody {
                id: record.id,
                name: qualified_name(zone, record),
                data: or_fallback(&record.data, FALLBACK_RECORD_DATA),
                aux: present_aux(record.aux.as_ref()),
                record_type: present_type(&record.record_type),
                redirect_to: record.redirect_to.clone(),
                ttl: nonzero_or(record.ttl, DEFAULT_TTL),
                zone_id: nonzero_or(zone.id, FALLBACK_ZONE_ID),
            },
        }
    }
}

/// `"<record>.<zone>."`
pub fn qualified_name(zone: &Zone, record: &Record) -> String {
    format!(
        "{}.{}.",
        if record.name.is_empty() {
            FALLBACK_RECORD_NAME
        } else {
            record.name.as_str()
        },
        zone.name
    )
}

/// `{"zone": {"status": "OK"}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedResponse {
    pub zone: DeletedStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedStatus {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn ok() -> Self {
        Self {
            zone: DeletedStatus { status: "OK" },
        }
    }
}
