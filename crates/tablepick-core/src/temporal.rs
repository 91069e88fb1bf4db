//! Opening-hours filter.

use tablepick_types::restaurant::RestaurantRecord;

/// Keep only records open at `current_time` (`HH:MM`), preserving order.
///
/// When `open_now` is false the input is returned unchanged. Windows that
/// cross midnight (`openHour > closeHour`) are never open.
pub fn filter_open_now(
    records: Vec<RestaurantRecord>,
    open_now: bool,
    current_time: &str,
) -> Vec<RestaurantRecord> {
    if !open_now {
        return records;
    }

    records
        .into_iter()
        .filter(|r| r.is_open_at(current_time))
        .collect()
}
