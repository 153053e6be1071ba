use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

use crate::{
    entities::{
        BillsCollection, CreateBillRequest, CreatedBill, RawBill, Store, UpdateBillRequest,
    },
    errors::StoreRequestFailed,
};

/// Levels of the events emitted on the current thread while the guard lives.
#[derive(Clone, Default)]
pub(crate) struct CapturedEvents(Arc<Mutex<Vec<Level>>>);

impl CapturedEvents {
    pub(crate) fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub(crate) fn count_at(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|l| **l == level).count()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

pub(crate) fn capture_events() -> (DefaultGuard, CapturedEvents) {
    let events = CapturedEvents::default();
    let guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));
    (guard, events)
}

pub(crate) fn fixture_bills() -> Vec<RawBill> {
    let bill = |id: &str, name: &str, date: &str, status: &str, amount: f64| RawBill {
        id: id.into(),
        email: Some("a@a".into()),
        bill_type: "Hôtel et logement".into(),
        name: name.into(),
        amount: Some(amount),
        date: date.into(),
        vat: "80".into(),
        pct: 20.0,
        commentary: "séminaire billed".into(),
        file_url: Some(format!("https://test.storage.tld/{id}.jpg")),
        file_name: Some(format!("{id}.jpg")),
        status: status.into(),
        comment_admin: None,
    };
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "encore", "2004-04-04", "pending", 400.0),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "test1", "2001-01-01", "refused", 100.0),
        bill("UIUZtnPQvnbFnB0ozvJh", "test3", "2003-03-03", "accepted", 300.0),
        bill("qcCK3SzECmaZAGRrHjaC", "test2", "2002-02-02", "refused", 200.0),
    ]
}

/// Store double recording every call it receives.
#[derive(Default)]
pub(crate) struct FakeStore {
    bills_calls: AtomicUsize,
    pub collection: FakeBills,
}

#[derive(Default)]
pub(crate) struct FakeBills {
    bills: Vec<RawBill>,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    pub created: Mutex<Vec<CreateBillRequest>>,
    pub updated: Mutex<Vec<UpdateBillRequest>>,
}

impl FakeStore {
    pub(crate) fn with_bills(bills: Vec<RawBill>) -> Self {
        let mut store = FakeStore::default();
        store.collection.bills = bills;
        store
    }

    pub(crate) fn failing_list(mut self) -> Self {
        self.collection.fail_list = true;
        self
    }

    pub(crate) fn failing_create(mut self) -> Self {
        self.collection.fail_create = true;
        self
    }

    pub(crate) fn failing_update(mut self) -> Self {
        self.collection.fail_update = true;
        self
    }

    pub(crate) fn bills_calls(&self) -> usize {
        self.bills_calls.load(Ordering::SeqCst)
    }
}

impl Store for FakeStore {
    type Bills = FakeBills;

    fn bills(&self) -> &Self::Bills {
        self.bills_calls.fetch_add(1, Ordering::SeqCst);
        &self.collection
    }
}

#[async_trait]
impl BillsCollection for FakeBills {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        if self.fail_list {
            return Err(StoreRequestFailed::new("list", "Server error"));
        }
        Ok(self.bills.clone())
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, ServerError> {
        self.created.lock().unwrap().push(request);
        if self.fail_create {
            return Err(StoreRequestFailed::new("create", "Server error"));
        }
        Ok(CreatedBill {
            file_url: "https://localhost:3456/images/test.jpg".into(),
            key: "1234".into(),
        })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<RawBill, ServerError> {
        self.updated.lock().unwrap().push(request.clone());
        if self.fail_update {
            return Err(StoreRequestFailed::new("update", "Server error"));
        }
        Ok(RawBill {
            id: request.selector.unwrap_or_default(),
            date: request.data.date,
            status: request.data.status.code().into(),
            ..Default::default()
        })
    }
}
