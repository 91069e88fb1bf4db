//! Recommendation query parameters.
//!
//! Raw query-string values arrive as strings. They are captured as-is in
//! [`QueryParameters`] (so the history log records exactly what was sent)
//! and coerced through the accessor methods below.
//!
//! Coercion rules:
//! - `style`: used only when present and non-empty; matched exactly.
//! - `vegetarian`: any present value counts; `"true"` in any case is `true`,
//!   everything else (including `""` and `"yes"`) is `false`.
//! - `isOpenNow`: activates the opening-hours filter only when it equals
//!   `"true"` in any case.
//!
//! Keys the filters do not read are kept in `extra` and never filter
//! anything. A key sent more than once keeps its last value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Query parameters of a single recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<String>,

    #[serde(
        rename = "isOpenNow",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_open_now: Option<String>,

    /// Any other query keys, recorded but otherwise ignored.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl QueryParameters {
    /// Collect raw `(key, value)` pairs in arrival order; the last value of a
    /// repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match key.as_str() {
                "style" => params.style = Some(value),
                "vegetarian" => params.vegetarian = Some(value),
                "isOpenNow" => params.is_open_now = Some(value),
                _ => {
                    params.extra.insert(key, value);
                }
            }
        }
        params
    }

    /// The style to match, if one was given and is non-empty.
    pub fn style_filter(&self) -> Option<&str> {
        self.style.as_deref().filter(|s| !s.is_empty())
    }

    /// The vegetarian flag to match, if the parameter was supplied at all.
    pub fn vegetarian_filter(&self) -> Option<bool> {
        self.vegetarian.as_deref().map(parse_flag)
    }

    /// Whether only currently open restaurants were requested.
    pub fn open_now_requested(&self) -> bool {
        self.is_open_now.as_deref().is_some_and(parse_flag)
    }

    /// True when no parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.style.is_none()
            && self.vegetarian.is_none()
            && self.is_open_now.is_none()
            && self.extra.is_empty()
    }
}

/// `"true"` (ASCII case-insensitive) is `true`; anything else is `false`.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(style: Option<&str>, vegetarian: Option<&str>, open: Option<&str>) -> QueryParameters {
        QueryParameters {
            style: style.map(String::from),
            vegetarian: vegetarian.map(String::from),
            is_open_now: open.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_flag_case_insensitive() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("True"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_empty_style_is_ignored() {
        assert_eq!(params(Some(""), None, None).style_filter(), None);
        assert_eq!(params(Some("thai"), None, None).style_filter(), Some("thai"));
        assert_eq!(params(None, None, None).style_filter(), None);
    }

    #[test]
    fn test_vegetarian_present_but_malformed_is_false() {
        assert_eq!(params(None, Some("TRUE"), None).vegetarian_filter(), Some(true));
        assert_eq!(params(None, Some("nope"), None).vegetarian_filter(), Some(false));
        assert_eq!(params(None, Some(""), None).vegetarian_filter(), Some(false));
        assert_eq!(params(None, None, None).vegetarian_filter(), None);
    }

    #[test]
    fn test_open_now_requested() {
        assert!(params(None, None, Some("True")).open_now_requested());
        assert!(!params(None, None, Some("false")).open_now_requested());
        assert!(!params(None, None, Some("")).open_now_requested());
        assert!(!params(None, None, None).open_now_requested());
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let json = serde_json::to_value(params(None, Some("true"), Some("false"))).unwrap();
        assert_eq!(json, serde_json::json!({"vegetarian": "true", "isOpenNow": "false"}));

        let json = serde_json::to_value(QueryParameters::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let parsed: QueryParameters =
            serde_json::from_str(r#"{"style":"italian","isOpenNow":"true"}"#).unwrap();
        assert_eq!(parsed, params(Some("italian"), None, Some("true")));
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let parsed = QueryParameters::from_pairs([
            ("style", "thai"),
            ("isOpenNow", "false"),
            ("style", "italian"),
            ("isOpenNow", "TRUE"),
        ]);
        assert_eq!(parsed.style_filter(), Some("italian"));
        assert!(parsed.open_now_requested());
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_kept_but_do_not_filter() {
        let parsed = QueryParameters::from_pairs([("foo", "bar"), ("vegetarian", "true")]);
        assert_eq!(parsed.extra.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(parsed.vegetarian_filter(), Some(true));
        assert_eq!(parsed.style_filter(), None);

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json, serde_json::json!({"vegetarian": "true", "foo": "bar"}));

        let back: QueryParameters = serde_json::from_value(json).unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn test_only_unknown_keys_is_not_empty() {
        assert!(QueryParameters::from_pairs(Vec::<(String, String)>::new()).is_empty());
        assert!(!QueryParameters::from_pairs([("foo", "bar")]).is_empty());
    }
}
