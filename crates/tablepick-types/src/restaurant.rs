//! Restaurant record type.
//!
//! A `RestaurantRecord` is the unit stored in the restaurant collection and
//! returned as a recommendation. Only the attributes the filters read are
//! typed; everything else (name, address, ...) is carried through untouched.

use serde::{Deserialize, Serialize};

/// A single restaurant in the collection.
///
/// `open_hour` and `close_hour` are `HH:MM` 24-hour UTC times of day. They are
/// compared as strings, which is only sound because the format is fixed width.
/// A window with `open_hour > close_hour` (crossing midnight) never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    /// Cuisine category (e.g., "italian").
    pub style: String,
    /// Whether the restaurant is vegetarian.
    pub vegetarian: bool,
    /// Opening time of day, `HH:MM`.
    pub open_hour: String,
    /// Closing time of day, `HH:MM`.
    pub close_hour: String,
    /// Descriptive attributes passed through unchanged.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl RestaurantRecord {
    /// Create a record with no descriptive attributes.
    pub fn new(
        style: impl Into<String>,
        vegetarian: bool,
        open_hour: impl Into<String>,
        close_hour: impl Into<String>,
    ) -> Self {
        Self {
            style: style.into(),
            vegetarian,
            open_hour: open_hour.into(),
            close_hour: close_hour.into(),
            attributes: serde_json::Map::new(),
        }
    }

    /// Attach a descriptive attribute.
    pub fn with_attribute(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// The `name` attribute, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(|v| v.as_str())
    }

    /// Whether `time_of_day` (`HH:MM`) falls inside `[open_hour, close_hour]`.
    pub fn is_open_at(&self, time_of_day: &str) -> bool {
        self.open_hour.as_str() <= time_of_day && time_of_day <= self.close_hour.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_with_extra_attributes() {
        let json = r#"{
            "name": "Trattoria Roma",
            "style": "italian",
            "vegetarian": false,
            "openHour": "09:00",
            "closeHour": "22:00",
            "address": "1 Via Appia"
        }"#;
        let record: RestaurantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.style, "italian");
        assert!(!record.vegetarian);
        assert_eq!(record.open_hour, "09:00");
        assert_eq!(record.close_hour, "22:00");
        assert_eq!(record.name(), Some("Trattoria Roma"));
        assert_eq!(record.attributes["address"], "1 Via Appia");
    }

    #[test]
    fn test_serialize_keeps_wire_names_and_attributes() {
        let record = RestaurantRecord::new("thai", true, "11:00", "23:00")
            .with_attribute("name", "Green Basil");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["openHour"], "11:00");
        assert_eq!(value["closeHour"], "23:00");
        assert_eq!(value["vegetarian"], true);
        assert_eq!(value["name"], "Green Basil");
        assert!(value.get("attributes").is_none());
    }

    #[test]
    fn test_missing_hours_is_rejected() {
        let json = r#"{"style": "italian", "vegetarian": false}"#;
        assert!(serde_json::from_str::<RestaurantRecord>(json).is_err());
    }

    #[test]
    fn test_is_open_at_inclusive_bounds() {
        let record = RestaurantRecord::new("italian", false, "09:00", "22:00");
        assert!(record.is_open_at("09:00"));
        assert!(record.is_open_at("12:30"));
        assert!(record.is_open_at("22:00"));
        assert!(!record.is_open_at("08:59"));
        assert!(!record.is_open_at("22:01"));
    }

    #[test]
    fn test_cross_midnight_window_never_open() {
        let record = RestaurantRecord::new("bar", false, "22:00", "02:00");
        assert!(!record.is_open_at("23:00"));
        assert!(!record.is_open_at("01:00"));
        assert!(!record.is_open_at("12:00"));
    }
}
