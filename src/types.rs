//! Core data model: the [`Student`] record and the ordered, immutable [`Roster`].
//!
//! Every traversal of a [`Roster`] visits students in construction order. Transformations never
//! mutate the source roster; they return new values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;

/// A single student record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// Given name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Grade label, e.g. `"4"` or the ungraded marker `"U"`.
    pub grade: String,
}

impl Student {
    /// Create a new student record.
    pub fn new(name: impl Into<String>, age: u32, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }

    /// Returns `true` if the grade label equals `grade` exactly.
    pub fn has_grade(&self, grade: &str) -> bool {
        self.grade == grade
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {:<10} Grade: {}", self.age, self.name, self.grade)
    }
}

/// Ordered, immutable collection of [`Student`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create a roster; iteration order is the order of `students`.
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Parse a roster from a JSON array of `{"name", "age", "grade"}` objects.
    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterate students in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    /// Create a new roster containing only students that match `predicate`.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Student) -> bool,
    {
        let students = self
            .students
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        Self { students }
    }

    /// Project every student through `mapper`, preserving order.
    pub fn map_rows<T, F>(&self, mapper: F) -> Vec<T>
    where
        F: FnMut(&Student) -> T,
    {
        self.students.iter().map(mapper).collect()
    }

    /// Reduce (fold) all students into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each student by reference.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Student) -> A,
    {
        self.students.iter().fold(init, |acc, s| reducer(acc, s))
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
