use criterion::Criterion;
use histofill::{
    binning::{Bins2D, IntBins},
    fill::HistogramBuilder,
};
use rand::Rng;

pub fn slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slice");

    let mut rng = rand::thread_rng();
    let axis = IntBins::new(0, 511).expect("valid bins");
    let mut builder = HistogramBuilder::new(Bins2D::new(axis, axis), 0_u32);
    for _ in 0..100_000 {
        builder.fill_one(&(rng.gen_range(0..512), rng.gen_range(0..512)));
    }
    let histogram = builder.freeze();

    group.bench_function("by-index", |bencher| {
        let row = histogram.slice_along_x(17).expect("in range");
        bencher.iter(|| row.slice_by_index(100, 300).expect("in range"));
    });
    group.bench_function("along-x", |bencher| {
        bencher.iter(|| histogram.slice_along_x(rng.gen_range(0..512)).expect("in range"));
    });
    group.bench_function("along-y", |bencher| {
        bencher.iter(|| histogram.slice_along_y(rng.gen_range(0..512)).expect("in range"));
    });
    group.bench_function("reduce-along-x", |bencher| {
        bencher.iter(|| {
            histogram.reduce_along_x(|row| row.fold(0_u64, |sum, x| sum + u64::from(*x)))
        });
    });
    group.finish();
}

criterion::criterion_group!(benches, slice);
