use criterion::{black_box, criterion_group, criterion_main, Criterion};

use class_report::dataset::class_roster;
use class_report::processing::imperative::{average_age_loop, names_with_grade_loop};
use class_report::report::{run_report, ReportGenerator, ReportOptions};

fn bench_pipelines(c: &mut Criterion) {
    let roster = class_roster();
    let report = ReportGenerator::new(&roster);

    c.bench_function("names_with_grade/pipeline", |b| {
        b.iter(|| report.names_with_grade(black_box("4")))
    });
    c.bench_function("names_with_grade/loop", |b| {
        b.iter(|| names_with_grade_loop(&roster, black_box("4")))
    });
    c.bench_function("average_age/pipeline", |b| {
        b.iter(|| report.average_age(black_box("3")))
    });
    c.bench_function("average_age/loop", |b| {
        b.iter(|| average_age_loop(&roster, black_box("3")))
    });
    c.bench_function("run_report", |b| {
        let opts = ReportOptions::default();
        b.iter(|| {
            let mut out = Vec::with_capacity(512);
            run_report(&roster, &opts, &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
