//! Filter builder.
//!
//! Translates [`QueryParameters`] into a [`Predicate`] the store evaluates
//! natively. Malformed values never fail; see `tablepick_types::query` for
//! the coercion rules.

use tablepick_types::predicate::{Attribute, AttributeValue, Condition, Predicate};
use tablepick_types::query::QueryParameters;

/// Build the equality predicate for a request.
///
/// - non-empty `style` -> `style = <value>` (case-sensitive)
/// - any `vegetarian` value -> `vegetarian = <parsed bool>`
/// - otherwise no condition, i.e. match everything
pub fn build_predicate(params: &QueryParameters) -> Predicate {
    let mut predicate = Predicate::new();

    if let Some(style) = params.style_filter() {
        predicate.push(Condition::new(
            Attribute::Style,
            AttributeValue::Text(style.to_string()),
        ));
    }

    if let Some(vegetarian) = params.vegetarian_filter() {
        predicate.push(Condition::new(
            Attribute::Vegetarian,
            AttributeValue::Bool(vegetarian),
        ));
    }

    predicate
}
