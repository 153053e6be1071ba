use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::{
    entities::{
        BillStatus, BillsCollection, CreateBillRequest, CreatedBill, RawBill, Store,
        UpdateBillRequest,
    },
    errors::{BillNotFound, MissingBillSelector},
};

/// In-process [`Store`] keeping bills in memory, in insertion order.
pub struct MemoryStore {
    bills: MemoryBills,
}

impl MemoryStore {
    pub fn new(file_base_url: impl Into<String>) -> Self {
        Self::with_bills(file_base_url, Vec::new())
    }

    /// Store preloaded with `bills`. New keys continue after the largest
    /// numeric id among them.
    pub fn with_bills(file_base_url: impl Into<String>, bills: Vec<RawBill>) -> Self {
        let last_key = bills
            .iter()
            .filter_map(|b| b.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            bills: MemoryBills {
                file_base_url: file_base_url.into().trim_end_matches('/').to_string(),
                state: Mutex::new(MemoryBillsState {
                    next_key: last_key + 1,
                    records: bills,
                }),
            },
        }
    }
}

impl Store for MemoryStore {
    type Bills = MemoryBills;

    fn bills(&self) -> &Self::Bills {
        &self.bills
    }
}

pub struct MemoryBills {
    file_base_url: String,
    state: Mutex<MemoryBillsState>,
}

struct MemoryBillsState {
    records: Vec<RawBill>,
    next_key: u64,
}

#[async_trait]
impl BillsCollection for MemoryBills {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        Ok(self.state.lock().await.records.clone())
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, ServerError> {
        let mut state = self.state.lock().await;
        let key = state.next_key.to_string();
        state.next_key += 1;

        let file_name = request.data.file.name;
        let file_url = format!("{}/{}", self.file_base_url, file_name);
        state.records.push(RawBill {
            id: key.clone(),
            email: request.data.email,
            file_url: Some(file_url.clone()),
            file_name: Some(file_name),
            status: BillStatus::Pending.code().to_string(),
            ..Default::default()
        });

        Ok(CreatedBill { file_url, key })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<RawBill, ServerError> {
        let selector = request.selector.ok_or_else(MissingBillSelector::new)?;
        let mut state = self.state.lock().await;
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == selector)
            .ok_or_else(|| BillNotFound::new(&selector))?;

        let bill = request.data;
        let comment_admin = record.comment_admin.take();
        *record = RawBill {
            id: selector,
            email: bill.email,
            bill_type: bill.bill_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date,
            vat: bill.vat,
            pct: bill.pct,
            commentary: bill.commentary,
            file_url: bill.file_url,
            file_name: bill.file_name,
            status: bill.status.code().to_string(),
            comment_admin,
        };
        Ok(record.clone())
    }
}
