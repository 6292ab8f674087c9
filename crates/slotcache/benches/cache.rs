use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use slotcache::LruCache;

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_warm_1k", |b| {
        let mut cache = LruCache::new(1000).unwrap();

        // Warm the cache
        for i in 0..1000u64 {
            cache.insert(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_get_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_cold", |b| {
        let mut cache = LruCache::new(10).unwrap();

        for i in 0..10u64 {
            cache.insert(i, i);
        }

        // Probe keys that are never resident
        let mut counter = 1_000u64;
        b.iter(|| {
            black_box(cache.get(&counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_insert_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("insert_evicting_1k", |b| {
        let mut cache = LruCache::new(1000).unwrap();

        // Fresh keys forever: past the warmup, every insert evicts
        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.insert(counter, counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_insert", |b| {
        let mut cache = LruCache::new(1000).unwrap();

        for i in 0..1000u64 {
            cache.insert(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 1000)));
            } else {
                black_box(cache.insert(1000 + counter, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_insert_churn,
    bench_mixed_50_50
);
criterion_main!(benches);
