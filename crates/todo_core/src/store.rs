//! JSON flat-file persistence for `TodoList`.
//!
//! # Responsibility
//! - Encode the whole list as one JSON array and write it in a single call.
//! - Decode a stored array and replace the in-memory list with it.
//!
//! # Invariants
//! - A missing resource on load is success and leaves the list unchanged.
//! - An empty resource on load is a no-op.
//! - Decode happens fully before the list is touched, so a malformed store
//!   never mutates the list.
//! - `store` then `load` into an empty list yields an equal list.

use crate::list::TodoList;
use crate::model::todo::Todo;
use crate::resource::{FsResourceStore, ResourceError, ResourceStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for load/store.
#[derive(Debug)]
pub enum StoreError {
    /// Resource could not be read or written.
    Io(ResourceError),
    /// Stored bytes are not a valid todo array.
    Decode {
        locator: String,
        source: serde_json::Error,
    },
    /// List could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Decode { locator, source } => {
                write!(f, "malformed todo store `{locator}`: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode todo list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<ResourceError> for StoreError {
    fn from(value: ResourceError) -> Self {
        Self::Io(value)
    }
}

/// Outcome of a successful load, for callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Resource did not exist; list untouched.
    Missing,
    /// Resource existed but held zero bytes; list untouched.
    Empty,
    /// List was replaced with this many decoded items.
    Loaded(usize),
}

impl TodoList {
    /// Loads the list from a filesystem path.
    ///
    /// See [`TodoList::load_from`] for the exact semantics.
    pub fn load(&mut self, path: &str) -> StoreResult<LoadOutcome> {
        self.load_from(&FsResourceStore, path)
    }

    /// Stores the list to a filesystem path, overwriting any previous content.
    pub fn store(&self, path: &str) -> StoreResult<()> {
        self.store_to(&FsResourceStore, path)
    }

    /// Loads the list from `locator` using `resources`.
    ///
    /// # Errors
    /// - `StoreError::Io` for read failures other than not-found.
    /// - `StoreError::Decode` for malformed content; the list is unchanged.
    pub fn load_from<S: ResourceStore + ?Sized>(
        &mut self,
        resources: &S,
        locator: &str,
    ) -> StoreResult<LoadOutcome> {
        let bytes = match resources.read_all(locator) {
            Ok(bytes) => bytes,
            Err(err) if err.is_not_found() => return Ok(LoadOutcome::Missing),
            Err(err) => return Err(err.into()),
        };

        if bytes.is_empty() {
            return Ok(LoadOutcome::Empty);
        }

        let items = decode_items(locator, &bytes)?;
        let count = items.len();
        self.replace_items(items);
        Ok(LoadOutcome::Loaded(count))
    }

    /// Stores the list to `locator` using `resources`.
    ///
    /// # Errors
    /// - `StoreError::Encode` if serialization fails.
    /// - `StoreError::Io` if the write fails; resource state is then unspecified.
    pub fn store_to<S: ResourceStore + ?Sized>(
        &self,
        resources: &S,
        locator: &str,
    ) -> StoreResult<()> {
        let bytes = encode_items(self.as_slice())?;
        resources.write_all(locator, &bytes)?;
        Ok(())
    }
}

fn decode_items(locator: &str, bytes: &[u8]) -> StoreResult<Vec<Todo>> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Decode {
        locator: locator.to_string(),
        source,
    })
}

fn encode_items(items: &[Todo]) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(items).map_err(StoreError::Encode)
}
