use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use playbill_billing::{Invoice, Performance, Statement, Tariff};
use playbill_catalog::{Catalog, Play};
use playbill_core::PlayId;

fn fixture(performances: usize) -> (Catalog, Invoice) {
    let catalog: Catalog = [
        (PlayId::from("hamlet"), Play::new("Hamlet", "tragedy")),
        (
            PlayId::from("as-like"),
            Play::new("As You Like It", "comedy"),
        ),
        (PlayId::from("othello"), Play::new("Othello", "tragedy")),
    ]
    .into_iter()
    .collect();

    let ids = ["hamlet", "as-like", "othello"];
    let performances = (0..performances)
        .map(|i| Performance::new(ids[i % ids.len()], (i % 120) as u32))
        .collect();

    (catalog, Invoice::new("BigCo", performances))
}

fn bench_statement_compute(c: &mut Criterion) {
    let tariff = Tariff::default();
    let mut group = c.benchmark_group("statement");

    for size in [16usize, 256, 4096] {
        let (catalog, invoice) = fixture(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("compute/{size}"), |b| {
            b.iter(|| Statement::compute(black_box(&invoice), &catalog, &tariff).unwrap())
        });
    }

    let (catalog, invoice) = fixture(256);
    group.bench_function("render/256", |b| {
        let statement = Statement::compute(&invoice, &catalog, &tariff).unwrap();
        b.iter(|| black_box(&statement).render())
    });

    group.finish();
}

criterion_group!(benches, bench_statement_compute);
criterion_main!(benches);
