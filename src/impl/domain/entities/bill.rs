use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// A bill exactly as the remote store returns it, before any formatting.
///
/// `date` and `status` are kept as raw strings: the store is not trusted to
/// hold valid calendar dates or known status codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBill {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub bill_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: f64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// A bill ready to be rendered: same fields as [`RawBill`], with `date` and
/// `status` in their human-readable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBill {
    pub id: String,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: Option<f64>,
    pub date: String,
    pub vat: String,
    pub pct: f64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl DisplayBill {
    /// Carries every field of `raw` over, except `date` and `status`.
    pub fn from_raw(raw: RawBill, date: String, status: String) -> Self {
        Self {
            id: raw.id,
            email: raw.email,
            bill_type: raw.bill_type,
            name: raw.name,
            amount: raw.amount,
            date,
            vat: raw.vat,
            pct: raw.pct,
            commentary: raw.commentary,
            file_url: raw.file_url,
            file_name: raw.file_name,
            status,
            comment_admin: raw.comment_admin,
        }
    }
}

/// Outcome of checking a raw bill date against calendar rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillDate {
    Valid(NaiveDate),
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// The bill assembled from the new-bill form, sent to the store to finalize
/// a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillPayload {
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: Option<f64>,
    pub date: String,
    pub vat: String,
    pub pct: f64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}
