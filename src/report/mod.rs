//! The report generator: grade pipelines over a borrowed [`Roster`].
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - the grade queries the report is built from ([`ReportGenerator`])
//! - line emission to any writer or stdout ([`emit_each`], [`print_each`])
//! - the full report, in order ([`run_report`], configured by [`ReportOptions`])
//! - observer hooks and running metrics for monitoring
//!
//! Every query is pure with respect to the roster: calling it twice gives the same answer.

mod emit;
mod observer;
mod runner;

use std::sync::Arc;
use std::time::Instant;

use crate::processing::{filter, has_grade, map, AgeSummary};
use crate::types::Roster;

pub use emit::{emit_each, print_each};
pub use observer::{
    Pipeline, ReportEvent, ReportMetrics, ReportMetricsSnapshot, ReportObserver,
    TracingReportObserver,
};
pub use runner::{average_line, run_report, ReportOptions};

/// Runs grade pipelines over an immutable roster.
pub struct ReportGenerator<'a> {
    roster: &'a Roster,
    observer: Option<Arc<dyn ReportObserver>>,
    metrics: Arc<ReportMetrics>,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            observer: None,
            metrics: Arc::new(ReportMetrics::new()),
        }
    }

    /// Attach an observer for report events.
    pub fn with_observer(mut self, observer: Arc<dyn ReportObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to the running metrics.
    pub fn metrics(&self) -> Arc<ReportMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Students whose grade equals `grade`, in roster order.
    pub fn students_with_grade(&self, grade: &str) -> Roster {
        self.track(Pipeline::StudentsWithGrade, grade, Roster::len, || {
            filter(self.roster, has_grade(grade))
        })
    }

    /// Names of students whose grade equals `grade`, in roster order.
    ///
    /// Empty when nobody has `grade`.
    pub fn names_with_grade(&self, grade: &str) -> Vec<String> {
        self.track(Pipeline::NamesWithGrade, grade, Vec::len, || {
            map(&filter(self.roster, has_grade(grade)), |s| s.name.clone())
        })
    }

    /// Count, total, min and max age of students with `grade`, in one pass.
    pub fn age_summary(&self, grade: &str) -> AgeSummary {
        self.track(
            Pipeline::AgeSummary,
            grade,
            |s: &AgeSummary| s.count,
            || {
                self.roster
                    .reduce_rows(AgeSummary::default(), |acc, s| {
                        if s.has_grade(grade) {
                            acc.push(s.age)
                        } else {
                            acc
                        }
                    })
            },
        )
    }

    /// Sum of ages of students with `grade`; `0` when nobody matches.
    pub fn total_age(&self, grade: &str) -> u64 {
        self.age_summary(grade).total
    }

    /// Number of students with `grade`.
    pub fn count(&self, grade: &str) -> usize {
        self.age_summary(grade).count
    }

    /// Mean age of students with `grade`, or `None` when nobody matches.
    pub fn average_age(&self, grade: &str) -> Option<f64> {
        let mean = self.age_summary(grade).mean();
        if mean.is_none() {
            self.metrics.on_absent_aggregate();
            self.emit(ReportEvent::AggregateAbsent {
                grade: grade.to_string(),
            });
        }
        mean
    }

    fn track<T>(
        &self,
        pipeline: Pipeline,
        grade: &str,
        output_items: impl FnOnce(&T) -> usize,
        run: impl FnOnce() -> T,
    ) -> T {
        let start = Instant::now();
        self.emit(ReportEvent::PipelineStarted {
            pipeline,
            grade: grade.to_string(),
        });

        let out = run();
        let items = output_items(&out);

        self.metrics.on_pipeline(self.roster.len(), items);
        self.emit(ReportEvent::PipelineFinished {
            pipeline,
            grade: grade.to_string(),
            output_items: items,
            elapsed: start.elapsed(),
        });
        out
    }

    fn emit(&self, event: ReportEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{Pipeline, ReportEvent, ReportGenerator, ReportObserver};
    use crate::dataset::class_roster;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<ReportEvent>>,
    }

    impl ReportObserver for RecordingObserver {
        fn on_event(&self, event: &ReportEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn names_with_grade_four() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        assert_eq!(report.names_with_grade("4"), vec!["Anna", "Olle", "Tomas"]);
    }

    #[test]
    fn names_with_unknown_grade_is_empty() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        assert!(report.names_with_grade("X").is_empty());
    }

    #[test]
    fn aggregates_for_grade_three() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        assert_eq!(report.count("3"), 2);
        assert_eq!(report.total_age("3"), 50);
        assert_eq!(report.average_age("3"), Some(25.0));
    }

    #[test]
    fn aggregates_for_missing_grade() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        assert_eq!(report.count("X"), 0);
        assert_eq!(report.total_age("X"), 0);
        assert_eq!(report.average_age("X"), None);
    }

    #[test]
    fn students_with_grade_keeps_records() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        let ungraded = report.students_with_grade("U");
        let names: Vec<&str> = ungraded.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Max", "Eva"]);
    }

    #[test]
    fn observer_sees_pipeline_and_absent_events() {
        let roster = class_roster();
        let obs = Arc::new(RecordingObserver::default());
        let report = ReportGenerator::new(&roster).with_observer(obs.clone());

        assert_eq!(report.average_age("X"), None);

        let events = obs.events.lock().unwrap().clone();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ReportEvent::PipelineStarted {
                pipeline: Pipeline::AgeSummary,
                grade: "X".to_string(),
            }
        );
        assert!(matches!(
            &events[1],
            ReportEvent::PipelineFinished { pipeline: Pipeline::AgeSummary, output_items: 0, .. }
        ));
        assert_eq!(
            events[2],
            ReportEvent::AggregateAbsent {
                grade: "X".to_string()
            }
        );
    }

    #[test]
    fn metrics_count_pipelines_and_scanned_records() {
        let roster = class_roster();
        let report = ReportGenerator::new(&roster);
        let metrics = report.metrics();

        let _ = report.names_with_grade("4");
        let _ = report.average_age("5");
        let _ = report.average_age("X");

        let snap = metrics.snapshot();
        assert_eq!(snap.pipelines_run, 3);
        assert_eq!(snap.records_scanned, 24);
        assert_eq!(snap.items_produced, 4);
        assert_eq!(snap.absent_aggregates, 1);
    }
}
