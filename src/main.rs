use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use class_report::dataset::class_roster;
use class_report::logging::init_logging;
use class_report::report::{run_report, ReportOptions, TracingReportObserver};
use class_report::ReportResult;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "report failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ReportResult<()> {
    let roster = class_roster();
    let opts = ReportOptions {
        observer: Some(Arc::new(TracingReportObserver)),
        ..Default::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_report(&roster, &opts, &mut out)?;
    out.flush()?;
    Ok(())
}
