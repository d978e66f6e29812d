use aesvault::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES key expansion");

    for variant in AesVariant::ALL {
        let key = vec![0x2bu8; variant.key_size()];
        group.bench_function(variant.name(), |b| {
            b.iter(|| Aes::new(black_box(&key)).unwrap());
        });
    }

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES block");
    group.throughput(Throughput::Bytes(16));

    for variant in AesVariant::ALL {
        let cipher = Aes::new(&vec![0u8; variant.key_size()]).unwrap();
        group.bench_function(BenchmarkId::new("encrypt", variant), |b| {
            let mut block = [0u8; 16];
            b.iter(|| cipher.encrypt_block(black_box(&mut block)).unwrap());
        });
        group.bench_function(BenchmarkId::new("decrypt", variant), |b| {
            let mut block = [0u8; 16];
            b.iter(|| cipher.decrypt_block(black_box(&mut block)).unwrap());
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-128 modes");
    let cipher = Aes::new(&[0u8; 16]).unwrap();
    let iv = [0u8; 16];

    for size in [16usize, 1024, 16384] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for mode in Mode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &data, |b, data| {
                b.iter(|| cipher.encrypt_with(mode, black_box(data), &iv).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("Envelope");
    let data = vec![0u8; 1024];

    for workload in [1u32, 1_000] {
        let sealed = encrypt(b"password", &data, workload).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", workload), &workload, |b, &w| {
            b.iter(|| encrypt(b"password", black_box(&data), w).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", workload), &workload, |b, &w| {
            b.iter(|| decrypt(b"password", black_box(&sealed), w).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_block, bench_modes, bench_envelope);
criterion_main!(benches);
