use serde_derive::{Deserialize, Serialize};

use super::bill::NewBillPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// The `file` input of the new-bill form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub value: String,
    pub files: Vec<UploadedFile>,
}

impl FileInput {
    pub const ID: &'static str = "file";

    /// Input state right after the user picked `file`. Browsers expose the
    /// selection under a fake path.
    pub fn selected(file: UploadedFile) -> Self {
        Self {
            value: format!("C:\\fakepath\\{}", file.name),
            files: vec![file],
        }
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.files.first()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.files.clear();
    }
}

/// Identifiers handed back by the store for the last successful upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub bill_id: Option<String>,
}

/// Multipart body of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillFormData {
    pub file: UploadedFile,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Leave `Content-Type` unset so the transport can add the multipart
    /// boundary itself.
    pub no_content_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBillRequest {
    pub data: BillFormData,
    pub headers: RequestHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    pub file_url: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBillRequest {
    pub data: NewBillPayload,
    pub selector: Option<String>,
}
