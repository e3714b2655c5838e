//! Benchmarks for statistics import and aggregation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use intermobil::stats::{StatsImporter, StatsRow, StatsSnapshot, SummaryOptions};

const TOURS: [&str; 3] = ["Casa Campione A", "Casa Campione B", "Showroom Principale"];

fn create_test_csv(rows: usize) -> String {
    let mut csv = String::from("Data,Nome Tour,UV,Durata sessione media\n");
    for i in 0..rows {
        let day = i % 28 + 1;
        let month = i / 28 % 12 + 1;
        csv.push_str(&format!(
            "2023-{:02}-{:02},{},{},{}s\n",
            month,
            day,
            TOURS[i % TOURS.len()],
            40 + i % 80,
            180 + i % 120
        ));
    }
    csv
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for size in [100, 1000, 10000] {
        let csv = create_test_csv(size);
        let importer = StatsImporter::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("import_{}", size), |b| {
            b.iter(|| importer.import_str(black_box(&csv)).unwrap())
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [100, 1000, 10000] {
        let rows: Vec<StatsRow> = StatsImporter::new()
            .import_str(&create_test_csv(size))
            .unwrap()
            .rows;
        let options = SummaryOptions::default();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("build_{}", size), |b| {
            b.iter(|| StatsSnapshot::build(black_box(&rows), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_import, bench_snapshot);
criterion_main!(benches);
