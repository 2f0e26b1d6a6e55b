use svg_springs::{NoOpRenderSink, NoOpStepObserver, Scene, SimulationConfig};

const PATH: &str = "M10 10c5 0 10 5 10 10s-5 10 -10 10q5 5 10 10a4 4 0 0 1 8 8l5 5z";

fn run() -> Vec<String> {
    let config = SimulationConfig::new().with_point(1.0, 2.0);
    let mut scene: Scene<f64> = Scene::new(config).unwrap();
    scene.add_path_data(PATH, false).unwrap();
    scene.add_path_data("M0 50h20v20h-20", true).unwrap();
    let mut frames = Vec::new();
    for _ in 0..60 {
        let encoded = scene.tick(&mut NoOpRenderSink, &mut NoOpStepObserver);
        frames.extend(encoded.into_iter().map(|e| e.data));
    }
    frames
}

#[test]
fn scene_deterministic() {
    let first = run();
    for _ in 0..5 {
        assert_eq!(run(), first);
    }
}
