// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod memory_key_value_storage;
        pub(crate) mod memory_store;
    }
    pub(crate) mod models {
        pub(crate) mod file_extension_model;
        pub(crate) mod form_number_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod session_user_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository_impl;
        pub(crate) mod session_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod form;
        pub(crate) mod receipt;
        pub(crate) mod store;
        pub(crate) mod view;
    }
    pub(crate) mod repositories {
        pub(crate) mod bills_repository;
        pub(crate) mod session_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod get_bills_usecase;
        pub(crate) mod submit_bill_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod bills_order;
    pub(crate) mod format;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::form::*;
        pub use crate::domain::entities::receipt::*;
        pub use crate::domain::entities::store::*;
        pub use crate::domain::entities::view::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::memory_key_value_storage::*;
        pub use crate::data::datasources::memory_store::*;
    }

    pub mod format {
        pub use crate::presentation::bills_order::*;
        pub use crate::presentation::format::*;
    }
}
