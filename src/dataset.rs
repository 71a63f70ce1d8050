//! The built-in class roster the report runs over.

use crate::types::{Roster, Student};

/// The fixed eight-student roster, in report order.
pub fn class_roster() -> Roster {
    Roster::new(vec![
        Student::new("Anna", 20, "4"),
        Student::new("Kalle", 29, "3"),
        Student::new("Max", 22, "U"),
        Student::new("Eva", 19, "U"),
        Student::new("Olle", 24, "4"),
        Student::new("Jenny", 33, "5"),
        Student::new("Per", 21, "3"),
        Student::new("Tomas", 18, "4"),
    ])
}
