//! Student service business logic
//!
//! Every operation loads the full collection from the repository, works on
//! it in memory and, when it changes something, saves the full collection
//! back exactly once. Nothing is cached between calls.

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::storage::Repository;
use crate::student::{Student, StudentId, StudentInput};

/// CRUD operations over a borrowed [`Repository`]
#[derive(Debug)]
pub struct StudentService<'a, R: ?Sized> {
    repository: &'a R,
}

impl<R: ?Sized> Clone for StudentService<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for StudentService<'_, R> {}

impl<'a, R: Repository + ?Sized> StudentService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// The repository this service reads from and writes to
    pub fn repository(&self) -> &'a R {
        self.repository
    }

    /// Get every student in stored order
    pub fn get_all(&self) -> Result<Vec<Student>> {
        Ok(self.repository.get_all()?)
    }

    /// Get a single student by ID
    pub fn get_by_id(&self, id: impl Into<StudentId>) -> Result<Student> {
        let id = id.into();
        self.repository
            .get_all()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(RosterError::NotFound { id })
    }

    /// Create a student, assigning the next free ID
    pub fn create(&self, input: StudentInput) -> Result<Student> {
        let mut students = self.repository.get_all()?;

        let id = next_id(&students).ok_or(RosterError::IdExhausted)?;
        let student = Student::with_input(id, input);
        students.push(student.clone());
        self.repository.save_all(&students)?;

        debug!("Created student {}", student.id);
        Ok(student)
    }

    /// Replace name and age of an existing student
    pub fn update(&self, id: impl Into<StudentId>, input: StudentInput) -> Result<Student> {
        let id = id.into();
        let mut students = self.repository.get_all()?;

        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::NotFound { id })?;
        student.apply(input);
        let updated = student.clone();

        self.repository.save_all(&students)?;

        debug!("Updated student {}", id);
        Ok(updated)
    }

    /// Remove a student, keeping the order of the rest
    pub fn delete(&self, id: impl Into<StudentId>) -> Result<()> {
        let id = id.into();
        let mut students = self.repository.get_all()?;

        let index = students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RosterError::NotFound { id })?;
        students.remove(index);

        self.repository.save_all(&students)?;

        debug!("Deleted student {}", id);
        Ok(())
    }
}

/// ID for the next created student: highest existing ID plus one, or 1
///
/// Returns `None` when the highest ID is already `u64::MAX`.
pub fn next_id(students: &[Student]) -> Option<StudentId> {
    match students.iter().map(|s| s.id.0).max() {
        Some(max) => max.checked_add(1).map(StudentId),
        None => Some(StudentId(1)),
    }
}
