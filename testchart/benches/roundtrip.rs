use criterion::{criterion_group, criterion_main, Criterion};

use testchart::decode::decoder::find_coordinates;
use testchart::pattern::grid;
use testchart::pattern::radial::{radial, RadialOptions};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_grid", |b| b.iter(grid::grid));
    c.bench_function("generate_radial", |b| {
        b.iter(|| radial(RadialOptions::default()))
    });
}

fn bench_decode(c: &mut Criterion) {
    let chart = grid::grid();
    c.bench_function("decode_full_chart", |b| b.iter(|| find_coordinates(&chart)));
}

criterion_group!(benches, bench_generate, bench_decode);
criterion_main!(benches);
