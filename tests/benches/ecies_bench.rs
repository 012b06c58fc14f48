use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecies_nist_pke::{decrypt, encrypt, CurveId, PrivateKey};
use ecies_nist_tests::{recipient, seeded_rng};

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES-keygen");
    for curve in CurveId::ALL {
        let mut rng = seeded_rng(1);
        group.bench_function(curve.name(), |b| {
            b.iter(|| PrivateKey::generate(&mut rng, curve).unwrap());
        });
    }
    group.finish();
}

fn bench_ecies(c: &mut Criterion) {
    for curve in CurveId::ALL {
        let mut group = c.benchmark_group(format!("ECIES-{}", curve.name()));
        let key = recipient(curve, 2);
        let mut rng = seeded_rng(3);

        // Test different data sizes
        for size in [16usize, 1024, 16384].iter() {
            let data = vec![0u8; *size];
            group.throughput(Throughput::Bytes(*size as u64));

            group.bench_with_input(BenchmarkId::new("encrypt", size), size, |b, _| {
                b.iter(|| encrypt(&mut rng, key.public_key(), &data, None, None).unwrap());
            });

            let envelope = encrypt(&mut rng, key.public_key(), &data, None, None).unwrap();
            group.bench_with_input(BenchmarkId::new("decrypt", size), size, |b, _| {
                b.iter(|| decrypt(&key, &envelope, None, None).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_keygen, bench_ecies);
criterion_main!(benches);
