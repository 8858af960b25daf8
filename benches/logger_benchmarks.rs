//! Criterion benchmarks for channel_logger_system

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use channel_logger_system::core::timestamp::now_string;
use channel_logger_system::prelude::*;
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Record Formatting Benchmarks
// ============================================================================

fn bench_record_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("timestamp", |b| {
        b.iter(|| {
            let ts = now_string();
            black_box(ts)
        });
    });

    group.bench_function("coded_application", |b| {
        b.iter(|| {
            let record = Record::new(
                black_box(Severity::Error),
                black_box(42),
                black_box("disk failure on device sda1"),
            );
            black_box(record)
        });
    });

    group.bench_function("debug_plain", |b| {
        b.iter(|| {
            let record = Record::new(
                black_box(Severity::Debug),
                black_box(0),
                black_box("cache probe value 17"),
            );
            black_box(record)
        });
    });

    group.bench_function("large_message", |b| {
        let payload = "x".repeat(4096);
        b.iter(|| {
            let record = Record::new(
                black_box(Severity::Info),
                black_box(1),
                black_box(payload.as_str()),
            );
            black_box(record)
        });
    });

    group.finish();
}

// ============================================================================
// Queue Benchmarks
// ============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(1));

    let queue = RecordQueue::new();

    group.bench_function("push_try_pop", |b| {
        b.iter(|| {
            queue.push(Record::new(
                black_box(Severity::Info),
                black_box(1),
                black_box("queued message"),
            ));
            black_box(queue.try_pop())
        });
    });

    group.bench_function("try_pop_empty", |b| {
        b.iter(|| black_box(queue.try_pop()));
    });

    group.finish();
}

// ============================================================================
// Call Site Gating Benchmarks
// ============================================================================

fn bench_call_site_gating(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_site_gating");
    group.throughput(Throughput::Elements(1));

    // A disabled channel must cost next to nothing at the call site.
    let disabled = Logger::new();
    group.bench_function("disabled_channel", |b| {
        b.iter(|| {
            disabled.info(black_box("discarded before formatting"));
        });
    });

    // Enabled channel, record below the severity threshold.
    let gated = Logger::new();
    gated.enable_apl_logging(true);
    gated.set_severity_level(Severity::Critical);
    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            gated.info(black_box("filtered by threshold"));
        });
    });

    group.finish();
}

// ============================================================================
// Enqueue Benchmarks
// ============================================================================

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(100));

    // Fresh logger per batch so queued records are released between runs.
    group.bench_function("info_100_records", |b| {
        b.iter_batched(
            || {
                let logger = Logger::new();
                logger.enable_apl_logging(true);
                logger.set_severity_level(Severity::Info);
                logger
            },
            |logger| {
                for i in 0..100 {
                    logger.info(black_box(format!("Message {}", i)));
                }
                logger
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("coded_100_records", |b| {
        b.iter_batched(
            || {
                let logger = Logger::new();
                logger.enable_apl_logging(true);
                logger.set_severity_level(Severity::Info);
                logger
            },
            |logger| {
                for i in 0..100 {
                    logger.error_with_code(black_box(i), black_box(format!("Failure {}", i)));
                }
                logger
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Concurrent Call Site Benchmarks
// ============================================================================

fn bench_concurrent_call_site(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_call_site");

    // Threshold keeps the records out of the queue; this measures the
    // contended read path of the gate itself.
    let logger = Arc::new(Logger::new());
    logger.enable_apl_logging(true);
    logger.set_severity_level(Severity::Critical);

    group.bench_function("single_thread", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            logger.info(black_box("gated message"));
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("gated message"));
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
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_record_formatting,
    bench_queue,
    bench_call_site_gating,
    bench_enqueue,
    bench_concurrent_call_site
);

criterion_main!(benches);
