use chrono::{Datelike as _, NaiveDate};

use crate::entities::BillStatus;

/// Capitalised French month abbreviations, cut to three letters.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Short French rendering of a bill date, e.g. 2004-04-04 → "4 Avr. 04".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

/// Display label of a raw status code. Unknown codes are logged and shown as
/// they are.
pub fn format_status(status: &str) -> String {
    match BillStatus::from_code(status) {
        Some(BillStatus::Pending) => "En attente".to_string(),
        Some(BillStatus::Accepted) => "Accepté".to_string(),
        Some(BillStatus::Refused) => "Refusé".to_string(),
        None => {
            tracing::warn!(status, "unknown bill status");
            status.to_string()
        }
    }
}
