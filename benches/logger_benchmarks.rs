//! Criterion benchmarks for elogger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use elogger::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

// ============================================================================
// FixedBuffer Benchmarks
// ============================================================================

fn bench_fixed_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_buffer");
    group.throughput(Throughput::Elements(1));

    group.bench_function("append_64b", |b| {
        let mut buf = FixedBuffer::with_capacity(DEFAULT_BUFFER_CAPACITY);
        let line = [b'x'; 64];
        b.iter(|| {
            if !buf.append(black_box(&line)) {
                buf.reset();
            }
        });
    });

    group.bench_function("reset", |b| {
        let mut buf = FixedBuffer::with_capacity(DEFAULT_BUFFER_CAPACITY);
        b.iter(|| {
            buf.append(black_box(b"some payload"));
            buf.reset();
        });
    });

    group.finish();
}

// ============================================================================
// Queue Append Benchmarks
// ============================================================================

fn bench_queue_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_append");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("temp dir");
    let mut queue = AsyncLogging::with_config(
        dir.path().join("bench.log"),
        Duration::from_millis(100),
        DEFAULT_BUFFER_CAPACITY,
    );
    queue.start().expect("start");
    let queue = Arc::new(queue);

    group.bench_function("single_thread", |b| {
        let queue = Arc::clone(&queue);
        let line = format!("{}\n", "m".repeat(80));
        b.iter(|| {
            queue.append(black_box(line.as_bytes())).expect("append");
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let queue = Arc::clone(&queue);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let queue = Arc::clone(&queue);
                    std::thread::spawn(move || {
                        queue
                            .append(black_box(b"a concurrent log line\n"))
                            .expect("append");
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Facade Benchmarks
// ============================================================================

fn bench_facade_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade_logging");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("temp dir");
    let logger = Logger::builder()
        .path(dir.path().join("facade_bench.log"))
        .flush_interval(Duration::from_millis(100))
        .build()
        .expect("build");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| {
            logger.info(black_box(format!("Processing item {}", 42)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_buffer,
    bench_queue_append,
    bench_facade_logging
);
criterion_main!(benches);
