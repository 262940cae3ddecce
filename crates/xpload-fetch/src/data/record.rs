use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One element of a `payloadiovs` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(deserialize_with = "non_empty")]
    pub payload_iov: Vec<PayloadIov>,

    /// Domain the payload belongs to, when the catalog reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,

    /// Fields not interpreted by the client, kept for dumping.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadIov {
    pub payload_url: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogRecord {
    pub fn new(payload_url: impl Into<String>) -> Self {
        Self {
            payload_iov: vec![PayloadIov {
                payload_url: payload_url.into(),
                extra: Map::new(),
            }],
            payload_type: None,
            extra: Map::new(),
        }
    }

    pub fn payload_type(mut self, domain: impl Into<String>) -> Self {
        self.payload_type = Some(domain.into());
        self
    }

    /// Relative URL of the payload this record points at.
    pub fn fragment(&self) -> Option<&str> {
        self.payload_iov.first().map(|iov| iov.payload_url.as_str())
    }
}

/// Decoded records together with the metrics of the transfer they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    pub records: Vec<CatalogRecord>,
    pub byte_count: u64,
    pub response_code: u16,
}

fn non_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<PayloadIov>, D::Error> {
    let iovs = Vec::<PayloadIov>::deserialize(d)?;
    if iovs.is_empty() {
        return Err(D::Error::custom("payload_iov must not be empty"));
    }
    Ok(iovs)
}

/// A listed catalog entity such as a tag or a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Listable catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Tags,
    TagTypes,
    TagStatuses,
    Domains,
    DomainLists,
    Payloads,
}

impl Component {
    /// Path segment of the collection under the catalog base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Component::Tags => "gt",
            Component::TagTypes => "gttype",
            Component::TagStatuses => "gtstatus",
            Component::Domains => "pt",
            Component::DomainLists => "pl",
            Component::Payloads => "piov",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Tags => write!(f, "tags"),
            Component::TagTypes => write!(f, "tag_types"),
            Component::TagStatuses => write!(f, "tag_statuses"),
            Component::Domains => write!(f, "domains"),
            Component::DomainLists => write!(f, "domain_lists"),
            Component::Payloads => write!(f, "payloads"),
        }
    }
}
