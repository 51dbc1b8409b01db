//! Roster manages a collection of student records through a small service
//! layer on top of a pluggable whole-collection repository.
//!
//! ```rust
//! use roster::{MemoryStorage, StudentInput, StudentService};
//!
//! let storage = MemoryStorage::new();
//! let service = StudentService::new(&storage);
//!
//! let created = service.create(StudentInput::new("Andi", 21))?;
//! assert_eq!(created.id.0, 1);
//! assert_eq!(service.get_by_id(1)?.name, "Andi");
//! # Ok::<(), roster::RosterError>(())
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod student;

// Re-export core types
pub use config::StorageConfig;
pub use error::{ConfigError, Result, RosterError, StorageError};
pub use service::{StudentService, next_id};
pub use storage::{MemoryStorage, Repository};
#[cfg(feature = "fs")]
pub use storage::FileStorage;
pub use student::{Student, StudentId, StudentInput};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
