use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use featurehash::{Feature, FeatureHash, Geometry};

/// Deterministic pseudo-random walk: coordinates that look like a drawn
/// route (small deltas with occasional jumps).
fn gen_track(len: usize, seed: u64) -> Vec<f64> {
    let mut s = seed;
    let mut x = 0i64;
    let mut y = 0i64;
    let mut coords = Vec::with_capacity(len * 2);
    for _ in 0..len {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        x += ((s >> 33) % 21) as i64 - 10;
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        y += ((s >> 33) % 21) as i64 - 10;
        coords.push(x as f64);
        coords.push(y as f64);
    }
    coords
}

fn bench_linestring(c: &mut Criterion) {
    let hash = FeatureHash::new();
    let mut group = c.benchmark_group("linestring");
    for len in [100usize, 1000, 10_000] {
        let feature = Feature::new(Geometry::LineString {
            coords: gen_track(len, 42),
        });
        let text = hash.write_feature(&feature);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", len), &feature, |b, feature| {
            b.iter(|| hash.write_feature(black_box(feature)));
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &text, |b, text| {
            b.iter(|| hash.read_feature(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_collection(c: &mut Criterion) {
    let hash = FeatureHash::new();
    let features: Vec<Feature> = (0..100)
        .map(|i| {
            Feature::new(Geometry::LineString {
                coords: gen_track(50, i),
            })
        })
        .collect();
    let text = hash.write_features(&features);

    let mut group = c.benchmark_group("collection");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode_100_features", |b| {
        b.iter(|| hash.write_features(black_box(&features)));
    });
    group.bench_function("decode_100_features", |b| {
        b.iter(|| hash.read_features(black_box(&text)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_linestring, bench_collection);
criterion_main!(benches);
