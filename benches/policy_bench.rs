use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use retail_gateway::domain::naming::NamingStrategy;
use retail_gateway::value_objects::UploadPolicy;

fn bench_policy_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("upload_policy");

    group.bench_function("image_accept", |b| {
        b.iter(|| UploadPolicy::IMAGE.check(black_box("summer-sandal.JPEG"), black_box(512 * 1024)))
    });

    group.bench_function("document_reject_type", |b| {
        b.iter(|| UploadPolicy::DOCUMENT.check(black_box("installer.exe"), black_box(4096)))
    });

    group.finish();
}

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    group.bench_function("unique_prefix", |b| {
        b.iter(|| NamingStrategy::UniquePrefix.key_for(black_box("summer-sandal.jpeg")))
    });

    group.bench_function("verbatim", |b| {
        b.iter(|| NamingStrategy::Verbatim.key_for(black_box("lease-2024.pdf")))
    });

    group.finish();
}

criterion_group!(benches, bench_policy_check, bench_naming);
criterion_main!(benches);
