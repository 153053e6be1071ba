use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{entities::BillDate, errors::InvalidIsoDate};

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Also rejects out-of-range months and days (2022-13-01, 2022-02-30).
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}

impl ISODateModel {
    /// Checks `raw` against calendar rules, keeping the untouched input when
    /// it does not hold a valid date.
    pub(crate) fn check(raw: &str) -> BillDate {
        match ISODateModel::from_str(raw) {
            Ok(d) => BillDate::Valid(d.into()),
            Err(_) => BillDate::Invalid(raw.to_string()),
        }
    }
}
