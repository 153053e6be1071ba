use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::bills_repository::BillsRepository,
    entities::{
        BillFormData, BillsCollection as _, CreateBillRequest, CreatedBill, NewBillPayload,
        RawBill, RequestHeaders, Store, UpdateBillRequest, UploadedFile,
    },
    errors::StoreNotConfigured,
};

pub(crate) struct BillsRepositoryImpl<S: Store> {
    store: Option<S>,
}

impl<S: Store> BillsRepositoryImpl<S> {
    pub(crate) fn new(store: Option<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> BillsRepository for BillsRepositoryImpl<S> {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        match &self.store {
            Some(store) => store.bills().list().await,
            None => Ok(Vec::new()),
        }
    }

    async fn upload_receipt(
        &self,
        file: UploadedFile,
        email: Option<String>,
    ) -> Result<CreatedBill, ServerError> {
        let store = self.store.as_ref().ok_or_else(StoreNotConfigured::new)?;
        store
            .bills()
            .create(CreateBillRequest {
                data: BillFormData { file, email },
                headers: RequestHeaders {
                    no_content_type: true,
                },
            })
            .await
    }

    async fn finalize(
        &self,
        bill: NewBillPayload,
        bill_id: Option<String>,
    ) -> Result<Option<RawBill>, ServerError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        store
            .bills()
            .update(UpdateBillRequest {
                data: bill,
                selector: bill_id,
            })
            .await
            .map(Some)
    }
}
