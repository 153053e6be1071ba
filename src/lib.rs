mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

pub mod containers {
    mod bills;
    mod new_bill;

    pub use bills::*;
    pub use new_bill::*;
}

pub mod config;
pub mod errors;

#[cfg(test)]
pub(crate) mod test_utils;
