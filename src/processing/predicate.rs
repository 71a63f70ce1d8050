//! Reusable student predicates.
//!
//! Any `Fn(&Student) -> bool` is a [`StudentPredicate`], so closures can be stored in a variable,
//! passed around, and combined before being handed to [`crate::processing::filter()`].

use crate::types::Student;

/// Single-method test over a [`Student`].
pub trait StudentPredicate {
    fn test(&self, student: &Student) -> bool;

    /// Both `self` and `other` must hold.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: StudentPredicate,
    {
        And(self, other)
    }

    /// Negation of `self`.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }

    /// Adapt into a closure accepted by `filter`.
    fn into_fn(self) -> impl Fn(&Student) -> bool
    where
        Self: Sized,
    {
        move |s: &Student| self.test(s)
    }
}

impl<F> StudentPredicate for F
where
    F: Fn(&Student) -> bool,
{
    fn test(&self, student: &Student) -> bool {
        self(student)
    }
}

/// See [`StudentPredicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<A: StudentPredicate, B: StudentPredicate> StudentPredicate for And<A, B> {
    fn test(&self, student: &Student) -> bool {
        self.0.test(student) && self.1.test(student)
    }
}

/// See [`StudentPredicate::not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(A);

impl<A: StudentPredicate> StudentPredicate for Not<A> {
    fn test(&self, student: &Student) -> bool {
        !self.0.test(student)
    }
}

/// Matches students whose grade equals `grade` exactly.
pub fn has_grade(grade: &str) -> impl Fn(&Student) -> bool + Clone + '_ {
    move |s: &Student| s.has_grade(grade)
}
