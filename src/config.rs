use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::errors::InvalidRon;

/// Rules applied to new-bill submissions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Receipt extensions accepted on upload, compared case-insensitively.
    pub accepted_extensions: Vec<String>,
    /// Percentage used when the form's `pct` field is empty or not a number.
    pub default_pct: f64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
            default_pct: 20.0,
        }
    }
}

impl SubmissionConfig {
    /// Parses a RON document, e.g.
    /// `(accepted_extensions: ["jpg", "png"], default_pct: 10.0)`.
    /// Omitted fields keep their default.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("SubmissionConfig", &e))
    }
}
