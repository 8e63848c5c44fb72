use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record type mnemonic.
///
/// The well-known types get their own variants; anything else is carried
/// verbatim in [`RecordType::Other`] so the mock never rejects a type a client
/// library knows about and we don't.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    #[default]
    A,
    CNAME,
    MX,
    TXT,
    NS,
    SRV,
    AAAA,
    SSHFP,
    PTR,
    ALIAS,
    Other(String),
}

impl RecordType {
    /// Every type with a dedicated variant
    pub const KNOWN: [RecordType; 10] = [
        RecordType::A,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::TXT,
        RecordType::NS,
        RecordType::SRV,
        RecordType::AAAA,
        RecordType::SSHFP,
        RecordType::PTR,
        RecordType::ALIAS,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::NS => "NS",
            Self::SRV => "SRV",
            Self::AAAA => "AAAA",
            Self::SSHFP => "SSHFP",
            Self::PTR => "PTR",
            Self::ALIAS => "ALIAS",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "A" => Self::A,
            "CNAME" => Self::CNAME,
            "MX" => Self::MX,
            "TXT" => Self::TXT,
            "NS" => Self::NS,
            "SRV" => Self::SRV,
            "AAAA" => Self::AAAA,
            "SSHFP" => Self::SSHFP,
            "PTR" => Self::PTR,
            "ALIAS" => Self::ALIAS,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(rtype) => rtype,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<RecordType> for String {
    fn from(rtype: RecordType) -> Self {
        match rtype {
            RecordType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Auxiliary value (MX/SRV priority and similar). Clients send either a
/// number or a string, both are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Aux {
    Number(i64),
    Text(String),
}

impl From<i64> for Aux {
    fn from(n: i64) -> Self {
        Aux::Number(n)
    }
}

impl From<&str> for Aux {
    fn from(s: &str) -> Self {
        Aux::Text(s.to_string())
    }
}

/// A single record belonging to exactly one zone.
///
/// `name` is relative to the owning zone; the fully qualified form is only
/// built when the record is presented.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub data: String,
    pub aux: Option<Aux>,
    pub record_type: RecordType,
    pub redirect_to: Option<String>,
    pub ttl: u32,
}

impl Record {
    /// Create a record with no aux value and no redirect target
    pub fn new(
        id: u64,
        name: impl Into<String>,
        data: impl Into<String>,
        record_type: impl Into<RecordType>,
        ttl: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            data: data.into(),
            aux: None,
            record_type: record_type.into(),
            redirect_to: None,
            ttl,
        }
    }

    pub fn with_aux(mut self, aux: impl Into<Aux>) -> Self {
        self.aux = Some(aux.into());
        self
    }

    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    /// Overwrite every mutable attribute with the ones from `other`.
    /// The id is left alone.
    pub(crate) fn assign_from(&mut self, other: &Record) {
        self.name.clone_from(&other.name);
        self.data.clone_from(&other.data);
        self.aux.clone_from(&other.aux);
        self.record_type.clone_from(&other.record_type);
        self.redirect_to.clone_from(&other.redirect_to);
        self.ttl = other.ttl;
    }
}
