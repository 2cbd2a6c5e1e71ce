//! Todo session service.
//!
//! # Responsibility
//! - Own one `TodoList` bound to one store locator and resource store.
//! - Emit structured `event=... module=todo` log lines around each operation.
//!
//! # Invariants
//! - The service is the single owner of its list; callers get `&TodoList` only.
//! - Mutations never persist implicitly; `save()` is explicit.
//! - Errors are logged and returned unchanged, never swallowed.

use crate::config::{ConfigError, TodoConfig};
use crate::list::{ListError, TodoList};
use crate::model::todo::Todo;
use crate::resource::{FsResourceStore, ResourceStore};
use crate::store::{LoadOutcome, StoreError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Session-level error.
#[derive(Debug)]
pub enum ServiceError {
    Config(ConfigError),
    List(ListError),
    Store(StoreError),
    /// Report output could not be written.
    Report(io::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Report(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::List(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Report(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ListError> for ServiceError {
    fn from(value: ListError) -> Self {
        Self::List(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One todo session over a resource store.
pub struct TodoService<S: ResourceStore = FsResourceStore> {
    list: TodoList,
    resources: S,
    locator: String,
    report_limit: usize,
}

impl TodoService<FsResourceStore> {
    /// Opens a session on the filesystem and loads the configured store file.
    pub fn open(config: &TodoConfig) -> ServiceResult<Self> {
        Self::open_with(FsResourceStore, config)
    }
}

impl<S: ResourceStore> TodoService<S> {
    /// Opens a session over `resources` and loads the configured locator.
    ///
    /// A missing or empty store yields an empty list.
    pub fn open_with(resources: S, config: &TodoConfig) -> ServiceResult<Self> {
        config.validate()?;
        let locator = config.store_locator()?.to_string();

        let mut service = Self {
            list: TodoList::new(),
            resources,
            locator,
            report_limit: config.report_limit,
        };
        service.reload()?;
        Ok(service)
    }

    /// Reloads the list from the store locator.
    ///
    /// Keeps the in-memory list when the store is missing or empty.
    pub fn reload(&mut self) -> ServiceResult<LoadOutcome> {
        let started_at = Instant::now();
        match self.list.load_from(&self.resources, &self.locator) {
            Ok(outcome) => {
                match outcome {
                    LoadOutcome::Missing => info!(
                        "event=todo_load module=todo status=ok source=missing duration_ms={}",
                        started_at.elapsed().as_millis()
                    ),
                    LoadOutcome::Empty => info!(
                        "event=todo_load module=todo status=ok source=empty duration_ms={}",
                        started_at.elapsed().as_millis()
                    ),
                    LoadOutcome::Loaded(count) => info!(
                        "event=todo_load module=todo status=ok source=store items={} duration_ms={}",
                        count,
                        started_at.elapsed().as_millis()
                    ),
                }
                Ok(outcome)
            }
            Err(err) => {
                error!(
                    "event=todo_load module=todo status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    store_error_code(&err),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Writes the whole list to the store locator.
    pub fn save(&self) -> ServiceResult<()> {
        let started_at = Instant::now();
        match self.list.store_to(&self.resources, &self.locator) {
            Ok(()) => {
                info!(
                    "event=todo_store module=todo status=ok items={} duration_ms={}",
                    self.list.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=todo_store module=todo status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    store_error_code(&err),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Appends a pending todo.
    pub fn add(&mut self, title: impl Into<String>) -> &Todo {
        let added = self.list.add(title);
        debug!(
            "event=todo_add module=todo status=ok id={} title_len={}",
            added.id,
            added.title.chars().count()
        );
        added
    }

    /// Marks the todo at `position` (1-based) as completed.
    pub fn complete(&mut self, position: usize) -> ServiceResult<()> {
        match self.list.complete(position) {
            Ok(()) => {
                debug!("event=todo_complete module=todo status=ok position={position}");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=todo_complete module=todo status=error error_code=invalid_index position={} len={}",
                    position,
                    self.list.len()
                );
                Err(err.into())
            }
        }
    }

    /// Removes the todo at `position` (1-based) and returns it.
    pub fn delete(&mut self, position: usize) -> ServiceResult<Todo> {
        match self.list.delete(position) {
            Ok(removed) => {
                debug!("event=todo_delete module=todo status=ok position={position}");
                Ok(removed)
            }
            Err(err) => {
                warn!(
                    "event=todo_delete module=todo status=error error_code=invalid_index position={} len={}",
                    position,
                    self.list.len()
                );
                Err(err.into())
            }
        }
    }

    /// Writes the even-position report using the configured limit.
    pub fn report<W: Write>(&self, out: &mut W) -> ServiceResult<()> {
        self.list
            .write_filtered_even(self.report_limit, out)
            .map_err(|err| {
                error!("event=todo_report module=todo status=error error={err}");
                ServiceError::Report(err)
            })
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn report_limit(&self) -> usize {
        self.report_limit
    }
}

fn store_error_code(err: &StoreError) -> &'static str {
    match err {
        StoreError::Io(_) => "store_io_failed",
        StoreError::Decode { .. } => "store_decode_failed",
        StoreError::Encode(_) => "store_encode_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::{ServiceError, TodoService};
    use crate::config::TodoConfig;
    use crate::list::ListError;
    use crate::resource::MemoryResourceStore;
    use crate::store::{LoadOutcome, StoreError};

    fn config() -> TodoConfig {
        TodoConfig::with_store_path("todos.json")
    }

    #[test]
    fn open_on_missing_store_starts_empty() {
        let resources = MemoryResourceStore::new();
        let service = TodoService::open_with(&resources, &config()).unwrap();
        assert!(service.list().is_empty());
        assert_eq!(service.locator(), "todos.json");
        assert_eq!(service.report_limit(), 40);
    }

    #[test]
    fn mutations_persist_only_on_save() {
        let resources = MemoryResourceStore::new();
        let mut service = TodoService::open_with(&resources, &config()).unwrap();
        service.add("first");
        service.add("second");
        service.complete(2).unwrap();
        assert!(!resources.contains("todos.json"));

        service.save().unwrap();
        let reopened = TodoService::open_with(&resources, &config()).unwrap();
        assert_eq!(reopened.list(), service.list());
    }

    #[test]
    fn invalid_position_is_returned_as_list_error() {
        let resources = MemoryResourceStore::new();
        let mut service = TodoService::open_with(&resources, &config()).unwrap();
        service.add("only");

        let err = service.delete(2).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::List(ListError::InvalidIndex { index: 2, len: 1 })
        ));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn open_surfaces_decode_failures() {
        let resources = MemoryResourceStore::new();
        resources.insert("todos.json", b"[{\"title\": 3}]".to_vec());

        let err = TodoService::open_with(&resources, &config())
            .err()
            .expect("malformed store should fail to open");
        assert!(matches!(err, ServiceError::Store(StoreError::Decode { .. })));
    }

    #[test]
    fn reload_keeps_list_when_store_is_empty() {
        let resources = MemoryResourceStore::new();
        let mut service = TodoService::open_with(&resources, &config()).unwrap();
        service.add("unsaved");
        resources.insert("todos.json", Vec::new());

        assert_eq!(service.reload().unwrap(), LoadOutcome::Empty);
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn report_uses_configured_limit() {
        let resources = MemoryResourceStore::new();
        let config = TodoConfig {
            report_limit: 4,
            ..config()
        };
        let mut service = TodoService::open_with(&resources, &config).unwrap();
        for i in 1..=8 {
            service.add(format!("task{i}"));
        }

        let mut out = Vec::new();
        service.report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 - task2 -> Pending\n4 - task4 -> Pending\n"
        );
    }
}
