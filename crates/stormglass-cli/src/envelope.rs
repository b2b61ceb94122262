use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use stormglass_core::UtcDateTime;

/// Response envelope for all machine-readable stormglass output.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub meta: EnvelopeMeta,
    pub data: Value,
}

impl Envelope {
    pub fn new(data: Value, warnings: Vec<String>) -> Self {
        Self {
            meta: EnvelopeMeta::new(warnings),
            data,
        }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, Serialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: UtcDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    fn new(warnings: Vec<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            schema_version: String::from("v1.0.0"),
            generated_at: UtcDateTime::now(),
            warnings,
        }
    }
}
