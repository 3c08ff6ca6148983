// benches/push_patterns.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dyn_array::DynArray;

fn create_array(size: usize) -> DynArray<u64> {
    let mut arr = DynArray::with_capacity(size);
    for i in 0..size {
        arr.push_back(i as u64).unwrap();
    }
    arr
}

fn bench_push_back(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("push_back");
    for size in sizes {
        group.bench_with_input(
            BenchmarkId::new("without_capacity", size),
            &size,
            |b, &s| {
                b.iter(|| {
                    let mut arr = DynArray::<u64>::new();
                    for i in 0..s {
                        arr.push_back(black_box(i as u64)).unwrap();
                    }
                    arr
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("with_capacity", size), &size, |b, &s| {
            b.iter(|| {
                let mut arr = DynArray::<u64>::with_capacity(s + 1);
                for i in 0..s {
                    arr.push_back(black_box(i as u64)).unwrap();
                }
                arr
            });
        });

        group.bench_with_input(BenchmarkId::new("from_slice", size), &size, |b, &s| {
            let data: Vec<u64> = (0..s as u64).collect();
            b.iter(|| DynArray::from_slice(black_box(&data)));
        });
    }
    group.finish();
}

fn bench_front_operations(c: &mut Criterion) {
    let sizes = vec![100, 1_000];

    let mut group = c.benchmark_group("front_operations");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("push_front", size), &size, |b, &s| {
            b.iter(|| {
                let mut arr = DynArray::<u64>::new();
                for i in 0..s {
                    arr.push_front(black_box(i as u64)).unwrap();
                }
                arr
            });
        });

        group.bench_with_input(BenchmarkId::new("pop_front", size), &size, |b, &s| {
            b.iter(|| {
                let mut arr = create_array(s);
                while arr.pop_front().is_ok() {}
                arr
            });
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    use rand::prelude::*;

    let size = 1_000;
    let mut group = c.benchmark_group("insert");

    group.bench_function("at_front", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::new();
            for i in 0..size {
                arr.insert(0, black_box(i as u64)).unwrap();
            }
            arr
        });
    });

    group.bench_function("at_back", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::new();
            for i in 0..size {
                arr.insert(arr.len(), black_box(i as u64)).unwrap();
            }
            arr
        });
    });

    group.bench_function("random_position", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let positions: Vec<usize> = (0..size).map(|i| rng.random_range(0..=i)).collect();

        b.iter(|| {
            let mut arr = DynArray::<u64>::new();
            for (i, &pos) in positions.iter().enumerate() {
                arr.insert(pos, black_box(i as u64)).unwrap();
            }
            arr
        });
    });

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("traversal");
    for size in sizes {
        let arr = create_array(size);

        group.bench_with_input(BenchmarkId::new("indexed_get", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..arr.len() {
                    sum += black_box(*arr.get(i).unwrap());
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("forward_cursor", size), &size, |b, _| {
            b.iter(|| arr.cursor().map(|v| black_box(*v)).sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("reverse_cursor", size), &size, |b, _| {
            b.iter(|| arr.rev_cursor().map(|v| black_box(*v)).sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("slice_iter", size), &size, |b, _| {
            b.iter(|| arr.as_slice().iter().map(|v| black_box(*v)).sum::<u64>());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_front_operations,
    bench_insert,
    bench_traversal
);
criterion_main!(benches);
