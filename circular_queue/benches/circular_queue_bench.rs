// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Element access, insertion, and removal at a few queue sizes, in the growable mode.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use r3bl_circular_queue::{CircularQueue, QueueOption};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn growable_queue(len: usize) -> CircularQueue<usize> {
    let mut queue = CircularQueue::try_new(QueueOption::GrowthFactor {
        growth: 2.0,
        shrink: 0.0,
    })
    .unwrap();
    queue.add(0..len);
    queue
}

fn element_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("element");

    for len in SIZES {
        let queue = growable_queue(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &queue, |b, queue| {
            b.iter(|| {
                for index in 0..queue.len() {
                    black_box(queue.element(black_box(index)));
                }
            });
        });
    }

    group.finish();
}

fn add_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for len in SIZES {
        group.bench_with_input(BenchmarkId::new("one_at_a_time", len), &len, |b, len| {
            b.iter(|| {
                let mut queue = growable_queue(0);
                for value in 0..*len {
                    queue.push(black_box(value));
                }
                queue
            });
        });

        group.bench_with_input(BenchmarkId::new("one_batch", len), &len, |b, len| {
            b.iter(|| growable_queue(black_box(*len)));
        });
    }

    group.finish();
}

fn remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for len in SIZES {
        group.bench_with_input(BenchmarkId::new("remove", len), &len, |b, len| {
            b.iter_batched(
                || growable_queue(*len),
                |mut queue| while queue.remove() {},
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("poll_until", len), &len, |b, len| {
            b.iter_batched(
                || growable_queue(*len),
                |mut queue| black_box(queue.poll_until(*len)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, element_benchmark, add_benchmark, remove_benchmark);
criterion_main!(benches);
