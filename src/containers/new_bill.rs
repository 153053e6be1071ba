use fractic_server_error::ServerError;

use crate::{
    config::SubmissionConfig,
    data::repositories::{
        bills_repository_impl::BillsRepositoryImpl, session_repository_impl::SessionRepositoryImpl,
    },
    domain::{
        repositories::session_repository::SessionRepository as _,
        usecases::submit_bill_usecase::{SubmitBillUsecase as _, SubmitBillUsecaseImpl},
    },
    entities::{
        FileInput, FormSubmitEvent, KeyValueStorage, NewBillPayload, OnNavigate, PendingUpload,
        RawBill, Route, Store,
    },
};

/// Progress of one new-bill form. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubmissionState {
    Idle,
    FileValidated,
    Uploaded,
    Submitted,
}

/// Controller of the new-bill form. One instance serves one form load.
pub struct NewBill<S, K, N>
where
    S: Store,
    K: KeyValueStorage,
    N: OnNavigate,
{
    submit_bill_usecase: SubmitBillUsecaseImpl<BillsRepositoryImpl<S>>,
    session_repository: SessionRepositoryImpl<K>,
    on_navigate: N,
    upload: PendingUpload,
    state: SubmissionState,
}

impl<S, K, N> NewBill<S, K, N>
where
    S: Store,
    K: KeyValueStorage,
    N: OnNavigate,
{
    pub fn new(store: Option<S>, storage: K, on_navigate: N) -> Self {
        Self::with_config(store, storage, on_navigate, SubmissionConfig::default())
    }

    pub fn with_config(
        store: Option<S>,
        storage: K,
        on_navigate: N,
        config: SubmissionConfig,
    ) -> Self {
        Self {
            submit_bill_usecase: SubmitBillUsecaseImpl::new(store, config),
            session_repository: SessionRepositoryImpl::new(storage),
            on_navigate,
            upload: PendingUpload::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn pending_upload(&self) -> &PendingUpload {
        &self.upload
    }

    pub fn file_url(&self) -> Option<&str> {
        self.upload.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.upload.file_name.as_deref()
    }

    pub fn bill_id(&self) -> Option<&str> {
        self.upload.bill_id.as_deref()
    }

    /// Reacts to a new selection in the `file` input.
    ///
    /// A file that is not an accepted image is dropped from the input and
    /// never reaches the store. An accepted one is uploaded right away; a
    /// failed upload is logged and leaves the previous upload in place.
    pub async fn handle_change_file(&mut self, input: &mut FileInput) {
        let Some(file) = input.file().cloned() else {
            return;
        };
        if !self.submit_bill_usecase.accepts_receipt(&file.name) {
            input.clear();
            return;
        }
        self.advance(SubmissionState::FileValidated);

        let email = self.session_email();
        match self.submit_bill_usecase.upload_receipt(file, email).await {
            Ok(upload) => {
                self.upload = upload;
                self.advance(SubmissionState::Uploaded);
            }
            Err(e) => tracing::error!(error = ?e, "receipt upload failed"),
        }
    }

    /// Sends the bill typed into the form, then returns to the bills page.
    ///
    /// Works without a prior upload, the file fields are then left empty. If
    /// the store rejects the bill the error is logged and the user stays on
    /// the form.
    pub async fn handle_submit(&mut self, event: &mut FormSubmitEvent) {
        event.prevent_default();

        let email = self.session_email();
        let bill = self
            .submit_bill_usecase
            .assemble_bill(&event.form, email, &self.upload);
        let result = self.update_bill(bill).await;
        self.advance(SubmissionState::Submitted);

        match result {
            Ok(_) => self.on_navigate.navigate(Route::Bills),
            Err(e) => tracing::error!(error = ?e, "bill submission failed"),
        }
    }

    /// Persists `bill` onto the record created by the upload. Resolves to
    /// `None` when no store is wired up.
    pub async fn update_bill(&self, bill: NewBillPayload) -> Result<Option<RawBill>, ServerError> {
        self.submit_bill_usecase
            .finalize(bill, self.upload.bill_id.clone())
            .await
    }

    fn session_email(&self) -> Option<String> {
        self.session_repository
            .current_email()
            .unwrap_or_else(|e| {
                tracing::warn!(error = ?e, "unreadable session user, sending no email");
                None
            })
    }

    fn advance(&mut self, state: SubmissionState) {
        self.state = self.state.max(state);
    }
}
