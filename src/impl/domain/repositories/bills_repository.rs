use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{CreatedBill, NewBillPayload, RawBill, UploadedFile};

#[async_trait]
pub(crate) trait BillsRepository: Send + Sync {
    /// All bills, or none when no store is wired up yet.
    async fn list(&self) -> Result<Vec<RawBill>, ServerError>;

    async fn upload_receipt(
        &self,
        file: UploadedFile,
        email: Option<String>,
    ) -> Result<CreatedBill, ServerError>;

    /// Persists the assembled bill onto the record `bill_id` created by the
    /// upload. Returns `None` when no store is wired up.
    async fn finalize(
        &self,
        bill: NewBillPayload,
        bill_id: Option<String>,
    ) -> Result<Option<RawBill>, ServerError>;
}
