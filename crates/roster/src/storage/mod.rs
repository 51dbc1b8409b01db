//! Storage abstraction for the student collection
//!

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileStorage;

mod memory;
pub use memory::MemoryStorage;

use std::sync::Arc;

use crate::error::StorageError;
use crate::student::Student;

/// Whole-collection persistence for student records
///
/// Implementations load and store the complete collection at once. Any
/// consistency guarantees beyond that (file locking, atomic replacement)
/// belong to the implementation.
pub trait Repository {
    /// Load the full collection, in stored order
    fn get_all(&self) -> Result<Vec<Student>, StorageError>;

    /// Replace the stored collection with `students`
    fn save_all(&self, students: &[Student]) -> Result<(), StorageError>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        (**self).get_all()
    }

    fn save_all(&self, students: &[Student]) -> Result<(), StorageError> {
        (**self).save_all(students)
    }
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        (**self).get_all()
    }

    fn save_all(&self, students: &[Student]) -> Result<(), StorageError> {
        (**self).save_all(students)
    }
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        (**self).get_all()
    }

    fn save_all(&self, students: &[Student]) -> Result<(), StorageError> {
        (**self).save_all(students)
    }
}
