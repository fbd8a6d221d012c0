// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod api_transport;
        pub(crate) mod config_ron_datasource;
        pub(crate) mod records_api_datasource;
        pub(crate) mod roster_api_datasource;
        pub(crate) mod summary_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod category_model;
        pub(crate) mod expense_model;
        pub(crate) mod family_model;
        pub(crate) mod income_model;
        pub(crate) mod lenient_model;
        pub(crate) mod salary_model;
        pub(crate) mod summary_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod api_request;
        pub(crate) mod config;
        pub(crate) mod family;
        pub(crate) mod feed;
        pub(crate) mod mutation;
        pub(crate) mod record;
        pub(crate) mod registration;
        pub(crate) mod selection;
        pub(crate) mod source_entries;
        pub(crate) mod summary;
        pub(crate) mod views;
    }
    pub(crate) mod logic {
        pub(crate) mod dashboard_processor;
        pub(crate) mod edit_defaults;
        pub(crate) mod feed_assembler;
        pub(crate) mod mutation_router;
        pub(crate) mod person_lookup;
        pub(crate) mod record_classifier;
        pub(crate) mod record_normalizer;
        pub(crate) mod registration_validator;
        pub(crate) mod save_request_builder;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod feed_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod dashboard_fmt;
    pub(crate) mod feed_csv_printer;
    pub(crate) mod record_fmt;
    pub(crate) mod utils;
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
        pub use crate::domain::entities::api_request::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::family::*;
        pub use crate::domain::entities::feed::*;
        pub use crate::domain::entities::mutation::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::registration::*;
        pub use crate::domain::entities::selection::*;
        pub use crate::domain::entities::source_entries::*;
        pub use crate::domain::entities::summary::*;
        pub use crate::domain::entities::views::*;
    }

    pub mod transport {
        pub use crate::data::datasources::api_transport::ApiTransport;
    }
}
