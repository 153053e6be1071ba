use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::SubmissionConfig,
    data::{
        models::{
            file_extension_model::FileExtensionModel, form_number_model::FormNumberModel,
        },
        repositories::bills_repository_impl::BillsRepositoryImpl,
    },
    domain::repositories::bills_repository::BillsRepository,
    entities::{
        BillStatus, NewBillForm, NewBillPayload, PendingUpload, RawBill, Store, UploadedFile,
    },
};

#[async_trait]
pub(crate) trait SubmitBillUsecase: Send + Sync {
    fn accepts_receipt(&self, file_name: &str) -> bool;

    /// Uploads the receipt and returns the identifiers the store assigned.
    async fn upload_receipt(
        &self,
        file: UploadedFile,
        email: Option<String>,
    ) -> Result<PendingUpload, ServerError>;

    fn assemble_bill(
        &self,
        form: &NewBillForm,
        email: Option<String>,
        upload: &PendingUpload,
    ) -> NewBillPayload;

    async fn finalize(
        &self,
        bill: NewBillPayload,
        bill_id: Option<String>,
    ) -> Result<Option<RawBill>, ServerError>;
}

pub(crate) struct SubmitBillUsecaseImpl<R: BillsRepository> {
    bills_repository: R,
    config: SubmissionConfig,
}

#[async_trait]
impl<R: BillsRepository> SubmitBillUsecase for SubmitBillUsecaseImpl<R> {
    fn accepts_receipt(&self, file_name: &str) -> bool {
        FileExtensionModel::of(file_name)
            .is_some_and(|ext| ext.is_one_of(&self.config.accepted_extensions))
    }

    async fn upload_receipt(
        &self,
        file: UploadedFile,
        email: Option<String>,
    ) -> Result<PendingUpload, ServerError> {
        let file_name = file.name.clone();
        let created = self.bills_repository.upload_receipt(file, email).await?;
        Ok(PendingUpload {
            file_url: Some(created.file_url),
            file_name: Some(file_name),
            bill_id: Some(created.key),
        })
    }

    fn assemble_bill(
        &self,
        form: &NewBillForm,
        email: Option<String>,
        upload: &PendingUpload,
    ) -> NewBillPayload {
        NewBillPayload {
            email,
            bill_type: form.expense_type.clone(),
            name: form.expense_name.clone(),
            amount: FormNumberModel::from_str(&form.amount)
                .ok()
                .map(Into::into),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: FormNumberModel::from_str(&form.pct)
                .map(Into::into)
                .unwrap_or(self.config.default_pct),
            commentary: form.commentary.clone(),
            file_url: upload.file_url.clone(),
            file_name: upload.file_name.clone(),
            status: BillStatus::Pending,
        }
    }

    async fn finalize(
        &self,
        bill: NewBillPayload,
        bill_id: Option<String>,
    ) -> Result<Option<RawBill>, ServerError> {
        self.bills_repository.finalize(bill, bill_id).await
    }
}

impl<S: Store> SubmitBillUsecaseImpl<BillsRepositoryImpl<S>> {
    pub(crate) fn new(store: Option<S>, config: SubmissionConfig) -> Self {
        Self {
            bills_repository: BillsRepositoryImpl::new(store),
            config,
        }
    }
}
