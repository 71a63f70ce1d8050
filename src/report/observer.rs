use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// The report pipelines that emit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// filter by grade
    StudentsWithGrade,
    /// filter by grade → names
    NamesWithGrade,
    /// filter by grade → ages → count/sum/min/max
    AgeSummary,
}

/// Events emitted by the [`super::ReportGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    PipelineStarted {
        pipeline: Pipeline,
        grade: String,
    },
    PipelineFinished {
        pipeline: Pipeline,
        grade: String,
        output_items: usize,
        elapsed: Duration,
    },
    /// An average was requested for a grade nobody has.
    AggregateAbsent { grade: String },
}

/// Observer hook for report events.
pub trait ReportObserver: Send + Sync {
    fn on_event(&self, event: &ReportEvent);
}

/// Forwards report events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingReportObserver;

impl ReportObserver for TracingReportObserver {
    fn on_event(&self, event: &ReportEvent) {
        match event {
            ReportEvent::PipelineStarted { pipeline, grade } => {
                tracing::debug!(?pipeline, grade = %grade, "pipeline started");
            }
            ReportEvent::PipelineFinished {
                pipeline,
                grade,
                output_items,
                elapsed,
            } => {
                tracing::debug!(
                    ?pipeline,
                    grade = %grade,
                    output_items,
                    ?elapsed,
                    "pipeline finished"
                );
            }
            ReportEvent::AggregateAbsent { grade } => {
                tracing::info!(grade = %grade, "no students matched; average is absent");
            }
        }
    }
}

/// Running counters for a [`super::ReportGenerator`].
///
/// Counters accumulate across every pipeline the generator runs; callers can snapshot them at any
/// time.
#[derive(Debug, Default)]
pub struct ReportMetrics {
    pipelines_run: AtomicU64,
    records_scanned: AtomicU64,
    items_produced: AtomicU64,
    absent_aggregates: AtomicU64,
}

impl ReportMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pipeline(&self, records_scanned: usize, items_produced: usize) {
        let _ = self.pipelines_run.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .records_scanned
            .fetch_add(records_scanned as u64, Ordering::SeqCst);
        let _ = self
            .items_produced
            .fetch_add(items_produced as u64, Ordering::SeqCst);
    }

    pub fn on_absent_aggregate(&self) {
        let _ = self.absent_aggregates.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ReportMetricsSnapshot {
        ReportMetricsSnapshot {
            pipelines_run: self.pipelines_run.load(Ordering::SeqCst),
            records_scanned: self.records_scanned.load(Ordering::SeqCst),
            items_produced: self.items_produced.load(Ordering::SeqCst),
            absent_aggregates: self.absent_aggregates.load(Ordering::SeqCst),
        }
    }
}

/// Immutable snapshot of [`ReportMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportMetricsSnapshot {
    pub pipelines_run: u64,
    pub records_scanned: u64,
    pub items_produced: u64,
    pub absent_aggregates: u64,
}

impl fmt::Display for ReportMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pipelines_run={}, records_scanned={}, items_produced={}, absent_aggregates={}",
            self.pipelines_run, self.records_scanned, self.items_produced, self.absent_aggregates
        )
    }
}
