use criterion::{Criterion, black_box, criterion_group, criterion_main};
use festival_clock::lunisolar::{ephemeris::Ephemeris, to_lunisolar};
use festival_clock::{GregorianDate, find_nearest};

fn ephemeris_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ephemeris");
    group.sample_size(20);
    group.bench_function("compute_annus", |b| {
        b.iter(|| Ephemeris::compute(black_box(2024)).expect("annus 2024 is supported"))
    });
    group.finish();
}

fn lunisolar_bench(c: &mut Criterion) {
    let date = GregorianDate::new(2024, 6, 10).expect("valid date");
    // build the table outside the measurement
    to_lunisolar(date).expect("supported date");

    c.bench_function("to_lunisolar", |b| {
        b.iter(|| to_lunisolar(black_box(date)).expect("supported date"))
    });
}

fn find_nearest_bench(c: &mut Criterion) {
    let date = GregorianDate::new(2024, 10, 2).expect("valid date");
    find_nearest(date, 1).expect("supported date");

    let mut group = c.benchmark_group("find_nearest");
    for horizon in [60, 400] {
        group.bench_function(format!("horizon_{horizon}"), |b| {
            b.iter(|| find_nearest(black_box(date), black_box(horizon)).expect("search should succeed"))
        });
    }
    group.finish();
}

criterion_group!(benches, ephemeris_bench, lunisolar_bench, find_nearest_bench);
criterion_main!(benches);
