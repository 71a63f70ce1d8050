//! Row filtering for [`crate::types::Roster`].

use crate::types::{Roster, Student};

/// Returns a new [`Roster`] containing only students for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`Roster::filter_rows`].
pub fn filter<F>(roster: &Roster, predicate: F) -> Roster
where
    F: FnMut(&Student) -> bool,
{
    roster.filter_rows(predicate)
}
