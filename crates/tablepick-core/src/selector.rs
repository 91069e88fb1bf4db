//! Candidate selection.

use tablepick_types::restaurant::RestaurantRecord;

/// Pick the first candidate in arrival order, or `None` when there are none.
pub fn select_first(candidates: Vec<RestaurantRecord>) -> Option<RestaurantRecord> {
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yields_none() {
        assert!(select_first(Vec::new()).is_none());
    }

    #[test]
    fn test_first_in_order_wins() {
        let picked = select_first(vec![
            RestaurantRecord::new("b", false, "09:00", "22:00"),
            RestaurantRecord::new("a", false, "09:00", "22:00"),
        ])
        .unwrap();
        assert_eq!(picked.style, "b");
    }
}
