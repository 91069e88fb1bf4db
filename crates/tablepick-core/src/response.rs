//! Response builder.
//!
//! Maps a selection outcome onto a transport-neutral
//! `{status_code, headers, body}` value. The HTTP layer converts it into an
//! axum response; the CLI prints it.

use std::collections::BTreeMap;

use serde::Serialize;
use tablepick_types::restaurant::RestaurantRecord;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// JSON body of a recommendation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBody {
    pub restaurant_recommendation: Option<RestaurantRecord>,
}

/// A fully shaped recommendation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: RecommendationBody,
}

impl RecommendationResponse {
    /// 200 with the record when found, 404 with `null` otherwise.
    pub fn from_selection(selection: Option<RestaurantRecord>) -> Self {
        let status_code = if selection.is_some() {
            STATUS_OK
        } else {
            STATUS_NOT_FOUND
        };

        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            status_code,
            headers,
            body: RecommendationBody {
                restaurant_recommendation: selection,
            },
        }
    }

    pub fn is_found(&self) -> bool {
        self.body.restaurant_recommendation.is_some()
    }

    /// Serialize the body to a JSON string.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
