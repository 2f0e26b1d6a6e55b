use svg_springs::{
    Bounds, ChainId, NoOpStepObserver, PointMass, RenderSink, Scene, Segment, SimulationConfig,
    SpringConfig, Vec2,
};
use wasm_bindgen::prelude::*;

/// Flattens the per-tick view into arrays a canvas renderer can read.
#[derive(Default)]
struct FrameBuffer {
    points: Vec<f64>,
    segments: Vec<f64>,
}

impl RenderSink<f64> for FrameBuffer {
    fn render(&mut self, points: &[PointMass<f64>], segments: &[Segment<f64>]) {
        self.points.clear();
        self.segments.clear();
        for p in points {
            self.points.extend_from_slice(&[p.position.x, p.position.y, p.radius]);
        }
        for s in segments {
            self.segments.extend_from_slice(&[s.from.x, s.from.y, s.to.x, s.to.y]);
        }
    }
}

// ---- Path Animation ----

#[wasm_bindgen]
pub struct PathAnimation {
    scene: Scene<f64>,
    frame: FrameBuffer,
    paths: Vec<String>,
}

#[wasm_bindgen]
impl PathAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<PathAnimation, JsValue> {
        let config = SimulationConfig::new()
            .with_gravity(Vec2::new(0.0, 9.81))
            .with_springs(SpringConfig::soft())
            .with_point(1.0, 2.0)
            .with_bounds(Bounds { width, height });
        let scene = Scene::new(config).map_err(to_js)?;
        Ok(PathAnimation { scene, frame: FrameBuffer::default(), paths: Vec::new() })
    }

    /// Adds a path from its `d` attribute. Returns the chain index, or -1 if
    /// the path had no commands.
    pub fn add_path(&mut self, data: &str, anchor_last: bool) -> Result<i32, JsValue> {
        let id = self.scene.add_path_data(data, anchor_last).map_err(to_js)?;
        Ok(match id {
            Some(ChainId(index)) => {
                self.paths.push(data.to_string());
                index as i32
            }
            None => -1,
        })
    }

    /// Renders, steps and re-encodes once. Call from `requestAnimationFrame`.
    pub fn tick(&mut self) {
        let encoded = self.scene.tick(&mut self.frame, &mut NoOpStepObserver);
        self.paths = encoded.into_iter().map(|chain| chain.data).collect();
    }

    /// Current `d` text of a chain, or an empty string for an unknown index.
    pub fn path(&self, index: usize) -> String {
        self.paths.get(index).cloned().unwrap_or_default()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Moves a point, e.g. while dragging it with the pointer.
    pub fn drag(&mut self, index: usize, x: f64, y: f64) {
        if index < self.scene.points().len() {
            let point = self.scene.point_mut(index);
            point.position = Vec2::new(x, y);
            point.velocity = Vec2::zero();
        }
    }

    /// Returns [x, y, radius] per point as of the last tick.
    pub fn points(&self) -> Vec<f64> {
        self.frame.points.clone()
    }

    /// Returns [x1, y1, x2, y2] per spring as of the last tick.
    pub fn segments(&self) -> Vec<f64> {
        self.frame.segments.clone()
    }

    pub fn point_count(&self) -> usize {
        self.scene.points().len()
    }
}

fn to_js(err: svg_springs::SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
