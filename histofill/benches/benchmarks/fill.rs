use criterion::Criterion;
use histofill::{
    binning::{Bins2D, EqualWidthBins, LogWidthBins},
    fill::{counting, run_fill, weighted, HistogramBuilder},
};
use rand::Rng;

pub fn fill(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fill");
    group.throughput(criterion::Throughput::Elements(1));

    let mut rng = rand::thread_rng();
    let values: Vec<f64> = (0..4096).map(|_| rng.gen_range(-10.0..110.0)).collect();
    let pairs: Vec<(f64, f64)> = values
        .iter()
        .map(|value| (*value, rng.gen_range(0.0..110.0)))
        .collect();

    let linear = EqualWidthBins::new(0.0, 100, 100.0).expect("valid bins");
    let logarithmic = LogWidthBins::new(0.01, 100, 100.0).expect("valid bins");
    let grid = Bins2D::new(linear, linear);

    group.bench_function("equal-width-one", |bencher| {
        let mut builder = HistogramBuilder::new(linear, 0_u64);
        let mut i = 0;
        bencher.iter(|| {
            builder.fill_one(&values[i % values.len()]);
            i += 1;
        });
    });

    group.bench_function("log-width-one", |bencher| {
        let mut builder = HistogramBuilder::new(logarithmic, 0_u64);
        let mut i = 0;
        bencher.iter(|| {
            builder.fill_one(&values[i % values.len()]);
            i += 1;
        });
    });

    group.bench_function("bins-2d-one", |bencher| {
        let mut builder = HistogramBuilder::new(grid, 0_u64);
        let mut i = 0;
        bencher.iter(|| {
            builder.fill_one(&pairs[i % pairs.len()]);
            i += 1;
        });
    });
    group.finish();

    let mut group = criterion.benchmark_group("run_fill");
    group.throughput(criterion::Throughput::Elements(values.len() as u64));
    group.bench_function("single", |bencher| {
        bencher.iter(|| run_fill(|| counting(linear, 0_u64), &values));
    });
    group.bench_function("tuple-2", |bencher| {
        bencher.iter(|| {
            run_fill(
                || (counting(linear, 0_u64), counting(logarithmic, 0_u64)),
                &values,
            )
        });
    });
    group.bench_function("weighted", |bencher| {
        bencher.iter(|| run_fill(|| weighted(linear, 0.0_f64), &pairs));
    });
    group.finish();
}

criterion::criterion_group!(benches, fill);
