//! Core logic for the todo list manager.
//! Owns the list invariants, JSON persistence and the even-position report.

pub mod config;
pub mod list;
pub mod logging;
pub mod model;
pub mod report;
pub mod resource;
pub mod service;
pub mod store;

pub use config::{ConfigError, TodoConfig, DEFAULT_STORE_PATH};
pub use list::{ListError, ListResult, TodoList};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{Todo, TodoId};
pub use report::DEFAULT_REPORT_LIMIT;
pub use resource::{
    FsResourceStore, MemoryResourceStore, ResourceError, ResourceResult, ResourceStore,
};
pub use service::{ServiceError, ServiceResult, TodoService};
pub use store::{LoadOutcome, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
