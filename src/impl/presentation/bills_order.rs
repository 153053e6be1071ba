use std::cmp::Ordering;

use crate::entities::DisplayBill;

/// Antichronological order used by the bills page: descending comparison of
/// the date strings as displayed.
pub fn antichrono_order(a: &DisplayBill, b: &DisplayBill) -> Ordering {
    b.date.cmp(&a.date)
}
