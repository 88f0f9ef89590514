use criterion::{
    BatchSize, BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use nail_digits::Limb;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;

fn bench_arithmetic<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("carrying_add", |b| {
        b.iter_batched(
            || {
                let x = Limb::random(&mut rng);
                let y = Limb::random(&mut rng);
                (x, y)
            },
            |(x, y)| black_box(x.carrying_add(y, Limb::ONE)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("borrowing_sub", |b| {
        b.iter_batched(
            || {
                let x = Limb::random(&mut rng);
                let y = Limb::random(&mut rng);
                (x, y)
            },
            |(x, y)| black_box(x.borrowing_sub(y, Limb::ONE)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("carrying_mul_add", |b| {
        b.iter_batched(
            || {
                let x = Limb::random(&mut rng);
                let y = Limb::random(&mut rng);
                let z = Limb::random(&mut rng);
                (x, y, z)
            },
            |(x, y, z)| black_box(x.carrying_mul_add(y, z, Limb::MAX)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops");
    bench_arithmetic(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ops);

criterion_main!(benches);
