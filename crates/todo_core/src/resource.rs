//! Byte-level resource access used by load/store.
//!
//! # Responsibility
//! - Define the read-all/write-all capability the list persistence relies on.
//! - Map OS failures onto a small, stable error taxonomy.
//!
//! # Invariants
//! - `read_all` on a missing resource returns `ResourceError::NotFound`.
//! - `write_all` replaces the whole resource; there are no partial appends.
//! - Filesystem writes create missing files with mode `0644` on unix.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};

pub type ResourceResult<T> = Result<T, ResourceError>;

/// File mode for newly created store files.
pub const STORE_FILE_MODE: u32 = 0o644;

/// Failure to read or write a named resource.
#[derive(Debug)]
pub enum ResourceError {
    NotFound { locator: String },
    PermissionDenied { locator: String, source: io::Error },
    /// Target cannot be created at this location (e.g. missing parent directory).
    PathInvalid { locator: String, source: io::Error },
    Other { locator: String, source: io::Error },
}

impl ResourceError {
    pub fn locator(&self) -> &str {
        match self {
            Self::NotFound { locator }
            | Self::PermissionDenied { locator, .. }
            | Self::PathInvalid { locator, .. }
            | Self::Other { locator, .. } => locator,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    fn from_read(locator: &str, err: io::Error) -> Self {
        let locator = locator.to_string();
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound { locator },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                locator,
                source: err,
            },
            _ => Self::Other {
                locator,
                source: err,
            },
        }
    }

    fn from_write(locator: &str, err: io::Error) -> Self {
        let locator = locator.to_string();
        match err.kind() {
            ErrorKind::NotFound => Self::PathInvalid {
                locator,
                source: err,
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                locator,
                source: err,
            },
            _ => Self::Other {
                locator,
                source: err,
            },
        }
    }
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { locator } => write!(f, "resource not found: `{locator}`"),
            Self::PermissionDenied { locator, source } => {
                write!(f, "permission denied for `{locator}`: {source}")
            }
            Self::PathInvalid { locator, source } => {
                write!(f, "invalid resource path `{locator}`: {source}")
            }
            Self::Other { locator, source } => write!(f, "i/o failure on `{locator}`: {source}"),
        }
    }
}

impl Error for ResourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::PermissionDenied { source, .. }
            | Self::PathInvalid { source, .. }
            | Self::Other { source, .. } => Some(source),
        }
    }
}

/// Read/write capability over named byte resources.
pub trait ResourceStore {
    fn read_all(&self, locator: &str) -> ResourceResult<Vec<u8>>;
    fn write_all(&self, locator: &str, bytes: &[u8]) -> ResourceResult<()>;
}

/// Resource store where locators are filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResourceStore;

impl ResourceStore for FsResourceStore {
    fn read_all(&self, locator: &str) -> ResourceResult<Vec<u8>> {
        std::fs::read(locator).map_err(|err| ResourceError::from_read(locator, err))
    }

    fn write_all(&self, locator: &str, bytes: &[u8]) -> ResourceResult<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(STORE_FILE_MODE);
        }

        let mut file = options
            .open(locator)
            .map_err(|err| ResourceError::from_write(locator, err))?;
        file.write_all(bytes)
            .map_err(|err| ResourceError::from_write(locator, err))
    }
}

/// In-process resource store keyed by locator.
///
/// Single-threaded by construction (`RefCell`); wrap it externally if shared.
#[derive(Debug, Default)]
pub struct MemoryResourceStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds or overwrites one resource.
    pub fn insert(&self, locator: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.borrow_mut().insert(locator.into(), bytes.into());
    }

    /// Returns a copy of the current bytes for `locator`.
    pub fn get(&self, locator: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(locator).cloned()
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.entries.borrow().contains_key(locator)
    }
}

impl ResourceStore for MemoryResourceStore {
    fn read_all(&self, locator: &str) -> ResourceResult<Vec<u8>> {
        self.get(locator).ok_or_else(|| ResourceError::NotFound {
            locator: locator.to_string(),
        })
    }

    fn write_all(&self, locator: &str, bytes: &[u8]) -> ResourceResult<()> {
        self.insert(locator, bytes);
        Ok(())
    }
}

impl<S: ResourceStore + ?Sized> ResourceStore for &S {
    fn read_all(&self, locator: &str) -> ResourceResult<Vec<u8>> {
        (**self).read_all(locator)
    }

    fn write_all(&self, locator: &str, bytes: &[u8]) -> ResourceResult<()> {
        (**self).write_all(locator, bytes)
    }
}
