// benches/access_patterns.rs

use bit_packer::{calculate_packed_size, get, pack, set, unpack};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

const SIZE: usize = 10_000;

fn random_values(bits: u32, size: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(0..1u32 << bits)).collect()
}

fn packed(values: &[u32], bits: u32) -> Vec<u8> {
    let mut buf = vec![0u8; calculate_packed_size(values.len(), bits)];
    pack(values, 0, values.len(), &mut buf, 0, bits);
    buf
}

fn bench_pack(c: &mut Criterion) {
    let widths = vec![3, 12, 17, 31];

    let mut group = c.benchmark_group("pack");
    for bits in widths {
        let values = random_values(bits, SIZE);
        let mut buf = vec![0u8; calculate_packed_size(SIZE, bits)];

        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                buf.fill(0);
                pack(black_box(&values), 0, SIZE, &mut buf, 0, bits);
            });
        });
    }
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let widths = vec![3, 12, 17, 31];

    let mut group = c.benchmark_group("unpack");
    for bits in widths {
        let buf = packed(&random_values(bits, SIZE), bits);
        let mut out = vec![0u32; SIZE];

        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                out.fill(0);
                unpack(&mut out, 0, SIZE, black_box(&buf), 0, bits);
            });
        });
    }
    group.finish();
}

fn bench_individual_get(c: &mut Criterion) {
    let widths = vec![3, 12, 17, 31];

    let mut group = c.benchmark_group("individual_get");
    for bits in widths {
        let buf = packed(&random_values(bits, SIZE), bits);

        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..SIZE {
                    sum += u64::from(get(black_box(&buf), i, bits));
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_individual_set(c: &mut Criterion) {
    let widths = vec![3, 12, 17, 31];

    let mut group = c.benchmark_group("individual_set");
    for bits in widths {
        let values = random_values(bits, SIZE);
        let mut buf = packed(&values, bits);

        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            b.iter(|| {
                for (i, &v) in values.iter().enumerate().rev() {
                    set(&mut buf, i, black_box(v), bits);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pack,
    bench_unpack,
    bench_individual_get,
    bench_individual_set
);
criterion_main!(benches);
