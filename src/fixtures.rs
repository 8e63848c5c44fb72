//! Random zones, records and users for exercising the mock.

use crate::auth::User;
use crate::zone::{Aux, Record, RecordType, ZoneInfo};
use rand::Rng;

const TLDS: [&str; 3] = ["com", "co", "co.uk"];

/// Lower-case ASCII string of the given length
pub fn string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Dotted-quad IPv4 address with a non-zero first octet
pub fn ip_address() -> String {
    let mut rng = rand::rng();
    format!(
        "{}.{}.{}.{}",
        rng.random_range(1..=254u8),
        rng.random_range(0..=254u8),
        rng.random_range(0..=254u8),
        rng.random_range(0..=254u8)
    )
}

pub fn record_type() -> RecordType {
    let idx = rand::rng().random_range(0..RecordType::KNOWN.len());
    RecordType::KNOWN[idx].clone()
}

/// Zone with an id in `1..=max_id` (a `max_id` of 0 is treated as 1)
pub fn zone(max_id: u64) -> ZoneInfo {
    let mut rng = rand::rng();
    let tld = TLDS[rng.random_range(0..TLDS.len())];
    ZoneInfo {
        id: rng.random_range(1..=max_id.max(1)),
        name: format!("{}.{}", string(10), tld),
        group: string(50),
        user_id: rng.random_range(1..=u32::MAX as u64),
        ttl: rng.random_range(1..=86_400),
    }
}

/// Record with an id in `1..=max_id` (a `max_id` of 0 is treated as 1)
pub fn record(max_id: u64) -> Record {
    let mut rng = rand::rng();
    Record {
        id: rng.random_range(1..=max_id.max(1)),
        name: string(10),
        data: ip_address(),
        aux: Some(Aux::Text(string(50))),
        record_type: record_type(),
        redirect_to: Some(string(50)),
        ttl: rng.random_range(1..=86_400),
    }
}

pub fn user() -> User {
    User::new(string(20), string(50))
}
