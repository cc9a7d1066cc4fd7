use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gatekeeper::{GatekeeperConfig, find_knee, gatekeep};

/// Descending curve with a steep head and a long shallow tail.
fn synthetic_batch(len: usize) -> Vec<f32> {
    let head = (len / 8).max(1);
    (0..len)
        .map(|i| {
            if i < head {
                0.95 - 0.5 * i as f32 / head as f32
            } else {
                0.40 - 0.0005 * (i - head) as f32
            }
        })
        .collect()
}

fn bench_knee_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_knee");
    for len in [16usize, 64, 256, 1024] {
        let batch = synthetic_batch(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &batch, |b, batch| {
            b.iter(|| find_knee(std::hint::black_box(batch)))
        });
    }
    group.finish();
}

fn bench_gatekeep(c: &mut Criterion) {
    let config = GatekeeperConfig::default();
    let batch = synthetic_batch(50);
    c.bench_function("gatekeep_50", |b| {
        b.iter(|| gatekeep(std::hint::black_box(&batch), &config))
    });
}

criterion_group!(benches, bench_knee_scaling, bench_gatekeep);
criterion_main!(benches);
