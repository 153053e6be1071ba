use fractic_server_error::ServerError;

use crate::{
    data::repositories::bills_repository_impl::BillsRepositoryImpl,
    domain::usecases::get_bills_usecase::{GetBillsUsecase as _, GetBillsUsecaseImpl},
    entities::{DisplayBill, OnNavigate, ReceiptPreview, ReceiptViewer, Route, Store},
};

/// Controller of the employee's bills page.
pub struct Bills<S, N, V>
where
    S: Store,
    N: OnNavigate,
    V: ReceiptViewer,
{
    get_bills_usecase: GetBillsUsecaseImpl<BillsRepositoryImpl<S>>,
    on_navigate: N,
    receipt_viewer: V,
}

impl<S, N, V> Bills<S, N, V>
where
    S: Store,
    N: OnNavigate,
    V: ReceiptViewer,
{
    /// `store` may be `None` while the page renders before the store is
    /// wired up; the page then lists no bills.
    pub fn new(store: Option<S>, on_navigate: N, receipt_viewer: V) -> Self {
        Self {
            get_bills_usecase: GetBillsUsecaseImpl::new(store),
            on_navigate,
            receipt_viewer,
        }
    }

    /// Bills of the store, formatted for display, in store order.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, ServerError> {
        self.get_bills_usecase.get_bills().await
    }

    pub fn handle_click_new_bill(&self) {
        self.on_navigate.navigate(Route::NewBill);
    }

    /// Opens the receipt modal on `bill_url`, the image taking half of the
    /// modal's width.
    pub fn handle_click_icon_eye(&self, bill_url: &str, modal_width: u32) {
        self.receipt_viewer.show(ReceiptPreview {
            url: bill_url.to_string(),
            width: modal_width / 2,
        });
    }
}
