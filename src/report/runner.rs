use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::error::ReportResult;
use crate::processing::imperative::{
    average_age_loop, names_with_grade_indexed, names_with_grade_loop,
};
use crate::processing::{filter, has_grade, map, reduce, ReduceOp, StudentPredicate, Value};
use crate::types::Roster;

use super::emit::emit_each;
use super::{ReportGenerator, ReportObserver};

/// Which grades the report looks at.
#[derive(Clone)]
pub struct ReportOptions {
    /// Grade whose students are listed by name.
    pub listing_grade: String,
    /// Grade whose average age is computed three ways.
    pub average_grade: String,
    /// Further grades to average, one line each.
    pub extra_average_grades: Vec<String>,
    /// Optional observer for report events.
    pub observer: Option<Arc<dyn ReportObserver>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            listing_grade: "4".to_string(),
            average_grade: "3".to_string(),
            extra_average_grades: vec!["5".to_string(), "X".to_string()],
            observer: None,
        }
    }
}

impl fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportOptions")
            .field("listing_grade", &self.listing_grade)
            .field("average_grade", &self.average_grade)
            .field("extra_average_grades", &self.extra_average_grades)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// The line printed for an average age, or for its absence.
///
/// The average is rounded to whole years, halves rounding up.
pub fn average_line(grade: &str, average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("The average age is {} years.", avg.round()),
        None => format!("No students with grade {grade} found."),
    }
}

/// Write the full report for `roster` to `out`.
///
/// Each section is an independent pipeline over the same roster; the loop-based and
/// pipeline-based versions of a query print the same lines.
pub fn run_report<W>(roster: &Roster, opts: &ReportOptions, out: &mut W) -> ReportResult<()>
where
    W: Write + ?Sized,
{
    let mut report = ReportGenerator::new(roster);
    if let Some(observer) = &opts.observer {
        report = report.with_observer(Arc::clone(observer));
    }
    let listing = opts.listing_grade.as_str();
    let averaging = opts.average_grade.as_str();

    // Loops first, for comparison.
    emit_each(out, names_with_grade_indexed(roster, listing))?;
    emit_each(out, names_with_grade_loop(roster, listing))?;

    // Filter, then map, as separate steps.
    let matching = report.students_with_grade(listing);
    emit_each(out, &matching)?;
    emit_each(out, map(&matching, |s| s.name.clone()))?;

    // One combined pipeline, then the same with a named predicate.
    emit_each(out, report.names_with_grade(listing))?;
    let has_listing_grade = has_grade(listing);
    emit_each(
        out,
        filter(roster, has_listing_grade.into_fn()).iter().map(|s| &s.name),
    )?;

    // Average age: loop, then sum/count, then the pipeline.
    writeln!(out, "{}", average_line(averaging, average_age_loop(roster, averaging)))?;

    let ages = map(&filter(roster, has_grade(averaging)), |s| s.age);
    let total = reduce(ages.iter().copied(), ReduceOp::Sum);
    let count = reduce(ages.iter().copied(), ReduceOp::Count);
    let by_parts = match (total, count) {
        (Some(Value::Int64(total)), Some(Value::Int64(count))) if count > 0 => {
            Some(total as f64 / count as f64)
        }
        _ => None,
    };
    writeln!(out, "{}", average_line(averaging, by_parts))?;

    writeln!(out, "{}", average_line(averaging, report.average_age(averaging)))?;

    for grade in &opts.extra_average_grades {
        writeln!(out, "{}", average_line(grade, report.average_age(grade)))?;
    }

    tracing::debug!(metrics = %report.metrics().snapshot(), "report finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{average_line, run_report, ReportOptions};
    use crate::dataset::class_roster;
    use crate::report::ReportGenerator;
    use crate::types::{Roster, Student};

    #[test]
    fn average_line_formats() {
        assert_eq!(average_line("3", Some(25.0)), "The average age is 25 years.");
        assert_eq!(average_line("4", Some(62.0 / 3.0)), "The average age is 21 years.");
        assert_eq!(average_line("X", None), "No students with grade X found.");
    }

    #[test]
    fn average_line_rounds_half_up() {
        let roster = Roster::new(vec![Student::new("A", 20, "4"), Student::new("B", 21, "4")]);
        let avg = ReportGenerator::new(&roster).average_age("4");
        assert_eq!(avg, Some(20.5));
        assert_eq!(average_line("4", avg), "The average age is 21 years.");
        assert_eq!(average_line("4", Some(24.5)), "The average age is 25 years.");
    }

    #[test]
    fn default_report_output() {
        let mut out = Vec::new();
        run_report(&class_roster(), &ReportOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
Anna
Olle
Tomas
Anna
Olle
Tomas
(20) Anna       Grade: 4
(24) Olle       Grade: 4
(18) Tomas      Grade: 4
Anna
Olle
Tomas
Anna
Olle
Tomas
Anna
Olle
Tomas
The average age is 25 years.
The average age is 25 years.
The average age is 25 years.
The average age is 33 years.
No students with grade X found.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn averaging_a_missing_grade_prints_fallback_everywhere() {
        let opts = ReportOptions {
            average_grade: "X".to_string(),
            extra_average_grades: Vec::new(),
            ..Default::default()
        };
        let mut out = Vec::new();
        run_report(&class_roster(), &opts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let fallbacks = text
            .lines()
            .filter(|l| *l == "No students with grade X found.")
            .count();
        assert_eq!(fallbacks, 3);
    }
}
