//! Weekly schedule reconstruction from the per-day period columns.

use crate::normalize::clean_text;
use crate::record::Slot;
use crate::schema::Day;

/// Split a period cell such as `"P1, P2,,P3"` into its non-empty codes.
pub fn split_periods(text: Option<&str>) -> Vec<String> {
    clean_text(text)
        .split(',')
        .map(str::trim)
        .filter(|period| !period.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flatten the day columns of `row` into `(day, period)` slots.
///
/// Days come out in the order of `days`; columns past the end of the row
/// are skipped.
pub fn reconstruct_schedule(row: &[Option<String>], days: &[(Day, usize)]) -> Vec<Slot> {
    days.iter()
        .filter_map(|(day, index)| row.get(*index).map(|cell| (*day, cell)))
        .flat_map(|(day, cell)| {
            split_periods(cell.as_deref())
                .into_iter()
                .map(move |period| Slot::new(day, period))
        })
        .collect()
}
