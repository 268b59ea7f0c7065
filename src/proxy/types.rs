//! Documents returned by the proxy's `/health` and `/models` endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `GET /health`, kept verbatim.
///
/// Only `healthy_endpoints` is interpreted; everything else is carried along for
/// the details view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(Value);

impl HealthStatus {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// The `healthy_endpoints` array, if the document has one.
    pub fn healthy_endpoints(&self) -> Option<&Vec<Value>> {
        self.as_json().get("healthy_endpoints").and_then(Value::as_array)
    }

    pub fn has_healthy_endpoints(&self) -> bool {
        self.healthy_endpoints()
            .is_some_and(|endpoints| !endpoints.is_empty())
    }

    /// Pretty-printed document for display.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One entry of the `/models` `data` array.
///
/// Every field falls back to its default so a single sparse entry never fails the
/// whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    /// Unix timestamp, seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owned_by: String,
}

/// Body of `GET /models`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    data: Option<Vec<ModelDescriptor>>,
}

impl ModelList {
    /// Models in the order the proxy returned them; an absent `data` is empty.
    pub fn into_models(self) -> Vec<ModelDescriptor> {
        self.data.unwrap_or_default()
    }
}
