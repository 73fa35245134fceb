//! Benchmarks for list normalization and dialect rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashSet;
use std::hint::black_box;

use hostsink::dialect::{ListKind, OutputDialect, OutputStyle};
use hostsink::normalizer::normalize;

/// Generate a synthetic hosts-file body with comments and duplicates mixed
/// in, roughly matching real list texture.
fn generate_body(lines: usize) -> String {
    let mut body = String::with_capacity(lines * 32);
    for i in 0..lines {
        match i % 10 {
            0 => body.push_str("# section comment\n"),
            1 => body.push('\n'),
            2 => body.push_str(&format!("0.0.0.0 dup{}.example.com # seen twice\n", i % 100)),
            3 => body.push_str(&format!("127.0.0.1\thost{}.example.net\n", i)),
            4 => body.push_str(":: null-route.example\n"),
            _ => body.push_str(&format!("0.0.0.0 host{}.example.com\n", i)),
        }
    }
    body
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000, 10_000, 100_000] {
        let body = generate_body(size);
        group.bench_with_input(BenchmarkId::new("lines", size), &body, |b, body| {
            b.iter(|| {
                let entries: Vec<String> = normalize(black_box(body)).collect();
                black_box(entries)
            })
        });
    }

    group.finish();
}

fn bench_render_and_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_dedup");
    let body = generate_body(50_000);
    let hosts: Vec<String> = normalize(&body).collect();

    for dialect in [
        OutputDialect::new(OutputStyle::Pihole, ListKind::Block, "0.0.0.0".parse().unwrap()),
        OutputDialect::new(OutputStyle::Unbound, ListKind::Block, "0.0.0.0".parse().unwrap()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("dialect", format!("{:?}", dialect)),
            &hosts,
            |b, hosts| {
                b.iter(|| {
                    let mut set = HashSet::new();
                    for host in hosts {
                        set.insert(dialect.render(black_box(host)));
                    }
                    black_box(set)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_render_and_dedup);
criterion_main!(benches);
