//! Performance benchmarks for the payroll engine.
//!
//! Covers the per-save calculation, upserting into large tables, workbook
//! encoding and salary slip rendering.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::calculation::calculate_totals;
use payroll_engine::models::{EmployeeRecord, PayComponents, SalaryMonth};
use payroll_engine::slip::{PdfSlipRenderer, SalarySlip, SlipRenderer};
use payroll_engine::store::{RecordTable, encode_table};

/// Creates a fully populated record for employee number `n`.
fn create_record(n: usize) -> EmployeeRecord {
    let pay = PayComponents {
        basic: 20000 + n as i64,
        hra: 5000,
        special_allowance: 2500,
        bonus: 1000,
        pf: 1200,
        professional_tax: 200,
        snacks: 300,
        bus: 400,
        loan: 0,
    };
    EmployeeRecord {
        employee_code: format!("E{:05}", n),
        name: format!("Employee {}", n),
        gender: "Male".to_string(),
        date_of_joining: NaiveDate::from_ymd_opt(2015, 7, 1),
        department: "Physics".to_string(),
        location: "Mathura".to_string(),
        total_days: 30,
        salary_month: SalaryMonth::June,
        salary_year: 2025,
        net_salary: calculate_totals(&pay).net_salary,
        pay,
        ..Default::default()
    }
}

fn create_table(rows: usize) -> RecordTable {
    RecordTable::from_records((0..rows).map(create_record).collect())
}

fn bench_calculate_totals(c: &mut Criterion) {
    let record = create_record(1);

    c.bench_function("calculate_totals", |b| {
        b.iter(|| calculate_totals(black_box(&record.pay)))
    });
}

fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");

    for rows in [100, 1000, 10_000] {
        let table = create_table(rows);
        let existing = create_record(rows - 1);
        let new = create_record(rows);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("update_last", rows), &rows, |b, _| {
            b.iter_batched(
                || table.clone(),
                |mut table| table.upsert(black_box(existing.clone())),
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("insert", rows), &rows, |b, _| {
            b.iter_batched(
                || table.clone(),
                |mut table| table.upsert(black_box(new.clone())),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_encode_workbook(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_workbook");
    group.sample_size(20);

    for rows in [100, 1000] {
        let table = create_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| encode_table(black_box(table)))
        });
    }

    group.finish();
}

fn bench_render_slip(c: &mut Criterion) {
    let record = create_record(1);
    let at = NaiveDate::from_ymd_opt(2025, 7, 1)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap();
    let renderer = PdfSlipRenderer::new();

    c.bench_function("render_slip", |b| {
        b.iter(|| {
            let slip = SalarySlip::from_record(black_box(&record), "GLA University", at);
            renderer.render(&slip)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_totals,
    bench_upsert,
    bench_encode_workbook,
    bench_render_slip
);
criterion_main!(benches);
