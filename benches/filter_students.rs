use std::hint::black_box;

use admitdesk::filters::{QuickFilter, StudentFilter, apply_filter};
use admitdesk::models::{ApplicationStatus, Grade, Student};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a synthetic roster with a spread of countries, grades,
/// statuses, and flags.
fn generate_students(count: usize) -> Vec<Student> {
    let countries = ["BR", "IN", "SG", "US", "NG"];
    (0..count)
        .map(|i| {
            let json = format!(
                r#"{{
                    "id": "s{i}",
                    "name": "Student {i}",
                    "email": "student{i}@example.com",
                    "country": "{country}",
                    "grade": {grade},
                    "application_status": "{status}",
                    "high_intent": {high_intent}
                }}"#,
                i = i,
                country = countries[i % countries.len()],
                grade = if i % 2 == 0 { 11 } else { 12 },
                status = ApplicationStatus::ALL[i % ApplicationStatus::ALL.len()].label(),
                high_intent = i % 7 == 0,
            );
            serde_json::from_str(&json).unwrap()
        })
        .collect()
}

fn bench_filter_students(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_students");

    // Substring search across name and email
    for size in [1_000, 10_000, 50_000].iter() {
        let students = generate_students(*size);
        let filter = StudentFilter { search: "student 42".to_string(), ..Default::default() };

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("search", size), size, |b, _| {
            b.iter(|| apply_filter(black_box(&students), black_box(&filter)));
        });
    }

    // Single exact-match criterion
    for size in [1_000, 10_000, 50_000].iter() {
        let students = generate_students(*size);
        let filter = StudentFilter {
            status: Some(ApplicationStatus::Applying),
            ..Default::default()
        };

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("status", size), size, |b, _| {
            b.iter(|| apply_filter(black_box(&students), black_box(&filter)));
        });
    }

    // All criteria at once
    for size in [1_000, 10_000, 50_000].iter() {
        let students = generate_students(*size);
        let filter = StudentFilter {
            search: "student".to_string(),
            status: Some(ApplicationStatus::Applying),
            country: Some("BR".to_string()),
            grade: Some(Grade::Twelve),
            quick: Some(QuickFilter::HighIntent),
        };

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("combined", size), size, |b, _| {
            b.iter(|| apply_filter(black_box(&students), black_box(&filter)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_students);
criterion_main!(benches);
