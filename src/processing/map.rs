//! Projection of [`crate::types::Roster`] students into derived values.

use crate::types::{Roster, Student};

/// Returns the result of applying `mapper` to every student, in roster order.
///
/// This is a convenience wrapper around [`Roster::map_rows`].
pub fn map<T, F>(roster: &Roster, mapper: F) -> Vec<T>
where
    F: FnMut(&Student) -> T,
{
    roster.map_rows(mapper)
}

/// Project students to their names.
pub fn names(roster: &Roster) -> Vec<String> {
    map(roster, |s| s.name.clone())
}

/// Project students to their ages.
pub fn ages(roster: &Roster) -> Vec<u32> {
    map(roster, |s| s.age)
}

#[cfg(test)]
mod tests {
    use super::{ages, map, names};
    use crate::types::{Roster, Student};

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Student::new("a", 20, "4"),
            Student::new("b", 31, "3"),
        ])
    }

    #[test]
    fn map_projects_in_order() {
        let roster = sample_roster();
        let out = map(&roster, |s| format!("{}:{}", s.name, s.grade));
        assert_eq!(out, vec!["a:4".to_string(), "b:3".to_string()]);
    }

    #[test]
    fn names_and_ages() {
        let roster = sample_roster();
        assert_eq!(names(&roster), vec!["a", "b"]);
        assert_eq!(ages(&roster), vec![20, 31]);
    }

    #[test]
    fn map_over_empty_roster_is_empty() {
        let out: Vec<u32> = map(&Roster::default(), |s| s.age);
        assert!(out.is_empty());
    }
}
