#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billed_core::{
    entities::{
        BillsCollection, CreateBillRequest, CreatedBill, KeyValueStorage, RawBill, Route, Store,
        UpdateBillRequest,
    },
    datasources::{MemoryKeyValueStorage, MemoryStore},
    errors::StoreRequestFailed,
};
use fractic_server_error::ServerError;
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

pub const EMAIL: &str = "employee@test.tld";
pub const IMAGES_URL: &str = "https://localhost:3456/images";

#[derive(Clone, Default)]
pub struct CapturedEvents(Arc<Mutex<Vec<Level>>>);

impl CapturedEvents {
    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|l| **l == level).count()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

pub fn capture_events() -> (DefaultGuard, CapturedEvents) {
    let events = CapturedEvents::default();
    let guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));
    (guard, events)
}

pub fn employee_session() -> MemoryKeyValueStorage {
    let storage = MemoryKeyValueStorage::new();
    storage.set_item(
        "user",
        format!(r#"{{"type":"Employee","email":"{EMAIL}","status":"connected"}}"#),
    );
    storage
}

pub type Routes = Arc<Mutex<Vec<Route>>>;

pub fn recording_navigation() -> (Routes, impl Fn(Route) + Send + Sync) {
    let routes: Routes = Default::default();
    let sink = routes.clone();
    (routes, move |route: Route| sink.lock().unwrap().push(route))
}

pub fn raw_bill(id: &str, date: &str, status: &str) -> RawBill {
    RawBill {
        id: id.into(),
        email: Some(EMAIL.into()),
        bill_type: "Transports".into(),
        name: format!("bill {id}"),
        amount: Some(100.0),
        date: date.into(),
        vat: "20".into(),
        pct: 20.0,
        commentary: String::new(),
        file_url: Some(format!("{IMAGES_URL}/{id}.jpg")),
        file_name: Some(format!("{id}.jpg")),
        status: status.into(),
        comment_admin: None,
    }
}

pub fn seeded_store(bills: Vec<RawBill>) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_bills(IMAGES_URL, bills))
}

/// Store whose every request is rejected by the server.
pub struct DownStore(DownBills);

pub struct DownBills;

impl DownStore {
    pub fn new() -> Self {
        DownStore(DownBills)
    }
}

impl Store for DownStore {
    type Bills = DownBills;

    fn bills(&self) -> &Self::Bills {
        &self.0
    }
}

#[async_trait]
impl BillsCollection for DownBills {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        Err(StoreRequestFailed::new("list", "Server error"))
    }

    async fn create(&self, _request: CreateBillRequest) -> Result<CreatedBill, ServerError> {
        Err(StoreRequestFailed::new("create", "Server error"))
    }

    async fn update(&self, _request: UpdateBillRequest) -> Result<RawBill, ServerError> {
        Err(StoreRequestFailed::new("update", "Server error"))
    }
}
