//! In-memory repository for testing and development

use std::sync::{Mutex, MutexGuard};

use super::Repository;
use crate::error::StorageError;
use crate::student::Student;

#[derive(Debug, Default)]
struct State {
    students: Vec<Student>,
    load_error: Option<String>,
    save_error: Option<String>,
    loads: usize,
    saves: usize,
}

/// In-memory storage implementation
///
/// Loads and saves can be made to fail on demand, which lets tests drive
/// the service through its error paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with `students`
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            state: Mutex::new(State {
                students,
                ..State::default()
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StorageError> {
        self.state
            .lock()
            .map_err(|_| StorageError::Backend("Lock poisoned".into()))
    }

    /// Make every subsequent `get_all` fail with `message`
    pub fn fail_loads(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.lock() {
            state.load_error = Some(message.into());
        }
    }

    /// Make every subsequent `save_all` fail with `message`
    pub fn fail_saves(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.lock() {
            state.save_error = Some(message.into());
        }
    }

    /// Stop injecting failures
    pub fn clear_failures(&self) {
        if let Ok(mut state) = self.lock() {
            state.load_error = None;
            state.save_error = None;
        }
    }

    /// Snapshot of the stored collection
    pub fn students(&self) -> Vec<Student> {
        self.lock().map(|s| s.students.clone()).unwrap_or_default()
    }

    /// Number of `get_all` calls so far, failed ones included
    pub fn load_count(&self) -> usize {
        self.lock().map(|s| s.loads).unwrap_or_default()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.lock().map(|s| s.saves).unwrap_or_default()
    }

    /// Get number of stored students
    pub fn len(&self) -> usize {
        self.lock().map(|s| s.students.len()).unwrap_or_default()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Repository for MemoryStorage {
    fn get_all(&self) -> Result<Vec<Student>, StorageError> {
        let mut state = self.lock()?;
        state.loads += 1;
        if let Some(message) = &state.load_error {
            return Err(StorageError::Backend(message.clone()));
        }
        Ok(state.students.clone())
    }

    fn save_all(&self, students: &[Student]) -> Result<(), StorageError> {
        let mut state = self.lock()?;
        if let Some(message) = &state.save_error {
            return Err(StorageError::Backend(message.clone()));
        }
        state.students = students.to_vec();
        state.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic_operations() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.get_all().unwrap().is_empty());

        let students = vec![Student::new(1, "Andi", 21), Student::new(2, "Siti", 22)];
        storage.save_all(&students).unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.get_all().unwrap(), students);
    }

    #[test]
    fn test_injected_failures() {
        let storage = MemoryStorage::with_students(vec![Student::new(1, "Andi", 21)]);

        storage.fail_loads("read failed");
        assert!(matches!(
            storage.get_all(),
            Err(StorageError::Backend(msg)) if msg == "read failed"
        ));
        assert_eq!(storage.load_count(), 1);

        storage.fail_saves("write failed");
        let err = storage.save_all(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Storage backend error: write failed");

        // failed save leaves the data in place
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.save_count(), 0);

        storage.clear_failures();
        assert_eq!(storage.get_all().unwrap().len(), 1);
        storage.save_all(&[]).unwrap();
        assert!(storage.is_empty());
    }
}
