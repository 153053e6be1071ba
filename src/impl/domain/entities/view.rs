use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

/// Navigation callback provided by the router.
pub trait OnNavigate: Send + Sync {
    fn navigate(&self, route: Route);
}

impl<F> OnNavigate for F
where
    F: Fn(Route) + Send + Sync,
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptPreview {
    pub url: String,
    pub width: u32,
}

/// Modal displaying a bill's receipt.
pub trait ReceiptViewer: Send + Sync {
    fn show(&self, preview: ReceiptPreview);
}

impl<V: ReceiptViewer> ReceiptViewer for Arc<V> {
    fn show(&self, preview: ReceiptPreview) {
        V::show(self, preview)
    }
}
