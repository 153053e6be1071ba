use serde_derive::Deserialize;

/// User object serialized in local storage at login
/// (`{"type": "Employee", "email": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct SessionUserModel {
    #[serde(default)]
    pub email: Option<String>,
}
