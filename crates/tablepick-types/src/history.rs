//! Request history records.
//!
//! One `HistoryRecord` is written per recommendation request, whether or not
//! a restaurant was found. Records are append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryParameters;
use crate::restaurant::RestaurantRecord;

/// Audit entry for a single recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Identifier supplied by the invoking context; unique per request.
    pub request_id: String,
    /// Instant at which the request was processed.
    pub timestamp: DateTime<Utc>,
    /// Parameters exactly as received.
    pub parameters: QueryParameters,
    /// Selected restaurant. Serialized as `{}` when nothing was found.
    #[serde(with = "empty_object")]
    pub response: Option<RestaurantRecord>,
}

impl HistoryRecord {
    pub fn new(
        request_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        parameters: QueryParameters,
        response: Option<RestaurantRecord>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            timestamp,
            parameters,
            response,
        }
    }

    pub fn found(&self) -> bool {
        self.response.is_some()
    }
}

/// `Option<RestaurantRecord>` <-> `{}` / record.
mod empty_object {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::restaurant::RestaurantRecord;

    pub fn serialize<S: Serializer>(
        value: &Option<RestaurantRecord>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(record) => record.serialize(serializer),
            None => serde_json::Map::new().serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<RestaurantRecord>, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        }
    }
}
