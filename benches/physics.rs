//! Benchmarks for svg-springs simulation and path re-encoding.

use criterion::{criterion_group, criterion_main, Criterion};
use svg_springs::*;

const WAVE: &str = "M0 0c10 -20 20 -20 30 0s20 20 30 0s20 -20 30 0s20 20 30 0q10 10 20 0t20 0";

fn long_path(segments: usize) -> String {
    let mut data = String::from("M0 0");
    for i in 0..segments {
        data.push_str(if i % 2 == 0 { "l10 5" } else { "l10 -5" });
    }
    data
}

fn bench_chain_ticks(c: &mut Criterion) {
    c.bench_function("chain_50_segments_60_ticks", |b| {
        let data = long_path(50);
        b.iter(|| {
            let mut scene: Scene<f64> = Scene::new(SimulationConfig::new()).unwrap();
            scene.add_path_data(&data, true).unwrap();
            let mut last = Vec::new();
            for _ in 0..60 {
                last = scene.tick(&mut NoOpRenderSink, &mut NoOpStepObserver);
            }
            last
        });
    });
}

fn bench_collisions(c: &mut Criterion) {
    c.bench_function("collisions_200_points_60_steps", |b| {
        let config = SimulationConfig::new().with_point(1.0, 3.0);
        b.iter(|| {
            let mut scene: Scene<f64> = Scene::new(config).unwrap();
            for row in 0..10 {
                let data = format!("M0 {}{}", row * 4, &long_path(19)[4..]);
                scene.add_path_data(&data, false).unwrap();
            }
            for _ in 0..60 {
                scene.step(&mut NoOpStepObserver);
            }
            scene.points().len()
        });
    });
}

fn bench_path_data(c: &mut Criterion) {
    c.bench_function("parse_encode_round_trip", |b| {
        b.iter(|| {
            let commands: Vec<PathCommand<f64>> = path_data::parse(WAVE).unwrap();
            path_data::encode(&commands)
        });
    });
}

criterion_group!(benches, bench_chain_ticks, bench_collisions, bench_path_data);
criterion_main!(benches);
