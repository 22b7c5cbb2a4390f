use criterion::{Criterion, black_box, criterion_group, criterion_main};
use natal_chart::angles::angles_from_sidereal_time;
use natal_chart::{ChartRequest, compute_chart, houses, placement};
use natal_ephemeris::{AnalyticEphemeris, CATALOG, CelestialBody};

fn pipeline_bench(c: &mut Criterion) {
    let request = ChartRequest::new("1990-06-15", "14:30", "Europe/Paris", 48.8566, 2.3522, 0.0);

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&request)))
    });
    group.finish();
}

fn ephemeris_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let jd_tt = 2_448_058.021_5;

    let mut group = c.benchmark_group("analytic_ephemeris");
    group.bench_function("moon", |b| {
        b.iter(|| eph.longitude_at_jd_tt(CelestialBody::Moon, black_box(jd_tt)))
    });
    group.bench_function("pluto", |b| {
        b.iter(|| eph.longitude_at_jd_tt(CelestialBody::Pluto, black_box(jd_tt)))
    });
    group.bench_function("full_catalog", |b| {
        b.iter(|| {
            CATALOG
                .iter()
                .map(|&body| eph.longitude_at_jd_tt(body, black_box(jd_tt)))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

fn geometry_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    group.bench_function("angles_from_sidereal_time", |b| {
        b.iter(|| {
            angles_from_sidereal_time(
                black_box(1.63),
                black_box(0.409_092_6),
                black_box(48.8566_f64.to_radians()),
            )
        })
    });
    group.bench_function("houses", |b| b.iter(|| houses(black_box(182.47))));
    group.bench_function("placement", |b| b.iter(|| placement(black_box(-10.0))));
    group.finish();
}

criterion_group!(benches, pipeline_bench, ephemeris_bench, geometry_bench);
criterion_main!(benches);
