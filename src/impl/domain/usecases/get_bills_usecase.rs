use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        models::iso_date_model::ISODateModel,
        repositories::bills_repository_impl::BillsRepositoryImpl,
    },
    domain::repositories::bills_repository::BillsRepository,
    entities::{BillDate, DisplayBill, RawBill, Store},
    presentation::format::{format_date, format_status},
};

#[async_trait]
pub(crate) trait GetBillsUsecase: Send + Sync {
    /// Fetches every bill and formats it for display. A bill whose date is
    /// corrupted keeps its raw date; only a failed fetch is an error.
    async fn get_bills(&self) -> Result<Vec<DisplayBill>, ServerError>;
}

pub(crate) struct GetBillsUsecaseImpl<R: BillsRepository> {
    bills_repository: R,
}

#[async_trait]
impl<R: BillsRepository> GetBillsUsecase for GetBillsUsecaseImpl<R> {
    async fn get_bills(&self) -> Result<Vec<DisplayBill>, ServerError> {
        let bills: Vec<DisplayBill> = self
            .bills_repository
            .list()
            .await?
            .into_iter()
            .map(format_bill)
            .collect();
        tracing::info!(count = bills.len(), "bills formatted");
        Ok(bills)
    }
}

fn format_bill(raw: RawBill) -> DisplayBill {
    let status = format_status(&raw.status);
    let date = match ISODateModel::check(&raw.date) {
        BillDate::Valid(date) => format_date(date),
        BillDate::Invalid(date) => {
            tracing::warn!(
                bill_id = %raw.id,
                date = %date,
                bill = ?raw,
                "corrupted bill date, keeping raw value"
            );
            date
        }
    };
    DisplayBill::from_raw(raw, date, status)
}

impl<S: Store> GetBillsUsecaseImpl<BillsRepositoryImpl<S>> {
    pub(crate) fn new(store: Option<S>) -> Self {
        Self {
            bills_repository: BillsRepositoryImpl::new(store),
        }
    }
}
