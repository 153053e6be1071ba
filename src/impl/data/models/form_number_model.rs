use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidFormNumber;

/// Whole number typed into a form field. Only the leading integer part counts
/// ("12.5" → 12, "40 €" → 40); text without leading digits is rejected.
#[derive(Debug)]
pub(crate) struct FormNumberModel(pub f64);
impl FromStr for FormNumberModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim_start();
        let (is_negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let digits_len = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let amount = unsigned[..digits_len]
            .parse::<f64>()
            .map_err(|_| InvalidFormNumber::new(s))?;
        Ok(FormNumberModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for FormNumberModel {
    fn into(self) -> f64 {
        self.0
    }
}
