//! Predicate descriptions.
//!
//! A [`Predicate`] is a data-only conjunction of attribute equality
//! conditions. Stores translate it into their native query form; it carries
//! no query-language syntax of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::restaurant::RestaurantRecord;

/// Restaurant attributes that can appear in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Style,
    Vegetarian,
}

impl Attribute {
    /// Attribute name as it appears in a stored record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Style => "style",
            Attribute::Vegetarian => "vegetarian",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value side of an equality condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{s:?}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// `attribute == value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: Attribute,
    pub value: AttributeValue,
}

impl Condition {
    pub fn new(attribute: Attribute, value: AttributeValue) -> Self {
        Self { attribute, value }
    }

    /// Evaluate the condition against an in-memory record.
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        match (self.attribute, &self.value) {
            (Attribute::Style, AttributeValue::Text(s)) => record.style == *s,
            (Attribute::Vegetarian, AttributeValue::Bool(b)) => record.vegetarian == *b,
            // Mismatched value types never compare equal.
            _ => false,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.attribute, self.value)
    }
}

/// Logical AND of zero or more conditions. Empty matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate every condition against an in-memory record.
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("<all>");
        }
        let parts: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join(" AND "))
    }
}
