//! Loop-based counterparts of the grade pipelines.
//!
//! These do the same work as the filter/map/reduce versions with the caller owning iteration and
//! accumulation. They exist for side-by-side comparison and must always agree with the pipelines.

use crate::types::Roster;

/// Names of students with `grade`, walking the roster by index.
#[allow(clippy::needless_range_loop)]
pub fn names_with_grade_indexed(roster: &Roster, grade: &str) -> Vec<String> {
    let students = roster.as_slice();
    let mut out = Vec::new();
    for i in 0..students.len() {
        if students[i].grade == grade {
            out.push(students[i].name.clone());
        }
    }
    out
}

/// Names of students with `grade`, walking the roster with a `for` loop.
pub fn names_with_grade_loop(roster: &Roster, grade: &str) -> Vec<String> {
    let mut out = Vec::new();
    for student in roster {
        if student.grade == grade {
            out.push(student.name.clone());
        }
    }
    out
}

/// Average age of students with `grade`, accumulated by hand.
///
/// Returns `None` when nobody has `grade`; the count is checked before dividing.
pub fn average_age_loop(roster: &Roster, grade: &str) -> Option<f64> {
    let mut years: u64 = 0;
    let mut count: u64 = 0;
    for student in roster {
        if student.grade == grade {
            years += u64::from(student.age);
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(years as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::{average_age_loop, names_with_grade_indexed, names_with_grade_loop};
    use crate::dataset::class_roster;

    #[test]
    fn loops_find_grade_four_in_order() {
        let roster = class_roster();
        let expected = vec!["Anna", "Olle", "Tomas"];
        assert_eq!(names_with_grade_indexed(&roster, "4"), expected);
        assert_eq!(names_with_grade_loop(&roster, "4"), expected);
    }

    #[test]
    fn average_loop_handles_missing_grade() {
        let roster = class_roster();
        assert_eq!(average_age_loop(&roster, "3"), Some(25.0));
        assert_eq!(average_age_loop(&roster, "X"), None);
    }
}
