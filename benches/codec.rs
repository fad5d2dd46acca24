use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &len in &[11usize, 64 * 1024] {
        let data = sample(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("{}b", len), |b| {
            b.iter(|| base1024_rs::encode_to_string(&data))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &len in &[11usize, 64 * 1024] {
        let text = base1024_rs::encode_to_string(&sample(len));
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("{}b", len), |b| {
            b.iter(|| base1024_rs::decode_to_vec(&text).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
