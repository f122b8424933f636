pub mod digitalocean;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record type and host label this tool keeps in sync.
pub const RECORD_TYPE: &str = "A";
pub const RECORD_NAME: &str = "home";

/// A registrar DNS record. Fields we don't inspect are kept in `extra`
/// so the record can be sent back unchanged apart from `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: Value,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DnsRecord {
    /// The id as a URL path segment (numeric ids without quotes).
    pub fn id_segment(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
