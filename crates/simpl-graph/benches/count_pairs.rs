use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simpl_core::rng::RngHandle;
use simpl_graph::{
    count_pairs, count_pairs_matrix, generate_null_model, range_vertices, DegreeSpec,
    NullModelConfig, NullModelSpec,
};

fn count_pairs_bench(c: &mut Criterion) {
    let vertices = range_vertices(2_000);
    let spec = NullModelSpec::Explicit {
        sizes: vec![500, 2_000, 1_500, 500],
        degrees: DegreeSpec::Sequence((0..2_000).map(|v| 1 + v % 7).collect()),
    };
    let mut rng = RngHandle::from_seed(7);
    let edges = generate_null_model(&vertices, spec, &NullModelConfig::default(), &mut rng).unwrap();

    c.bench_function("count_pairs_scalar", |b| {
        b.iter(|| black_box(count_pairs(&vertices, &edges).unwrap()));
    });

    c.bench_function("count_pairs_matrix", |b| {
        b.iter(|| black_box(count_pairs_matrix(&vertices, &edges, false).unwrap()));
    });
}

criterion_group!(benches, count_pairs_bench);
criterion_main!(benches);
