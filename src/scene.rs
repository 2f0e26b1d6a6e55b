//! Scene assembly and the per-frame tick.
//!
//! A [`Scene`] turns source paths into point masses linked by springs, runs
//! the simulation one tick at a time, and re-encodes every path from the
//! evolved positions.
//!
//! # Threading
//!
//! A tick (render, force reset, integration, collisions, re-encode) must see
//! the whole state exclusively. `tick` and `step` take `&mut self`, so a host
//! sharing a scene between threads has to hold one lock per tick; never
//! mutate point positions from elsewhere in the middle of a step.

use crate::chain::{ChainId, MovableChain, SourcePath};
use crate::command::PathCommand;
use crate::config::SimulationConfig;
use crate::error::{SceneError, UnsupportedCommand};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::path_data;
use crate::point_mass::PointMass;
use crate::render::RenderSink;
use crate::solver::SpringSolver;
use crate::spring::Spring;
use crate::vertex::PathVertex;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// A chain re-encoded from the current point positions.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedChain<F: Float> {
    pub id: ChainId,
    pub commands: AllocVec<PathCommand<F>>,
    pub data: String,
}

/// All point masses, springs and chains of one animation session.
#[derive(Clone, Debug)]
pub struct Scene<F: Float> {
    config: SimulationConfig<F>,
    solver: SpringSolver<F>,
    chains: AllocVec<MovableChain<F>>,
}

/// Fold state while walking one path's commands. Point indices are global
/// (arena base + local offset) so vertices and springs need no fix-up on
/// commit.
struct Staging<F: Float> {
    base: usize,
    points: AllocVec<PointMass<F>>,
    springs: AllocVec<Spring<F>>,
    vertices: AllocVec<PathVertex<F>>,
    previous: Option<usize>,
}

impl<F: Float> Staging<F> {
    fn new(base: usize) -> Self {
        Staging {
            base,
            points: AllocVec::new(),
            springs: AllocVec::new(),
            vertices: AllocVec::new(),
            previous: None,
        }
    }

    fn point(&self, index: usize) -> &PointMass<F> {
        &self.points[index - self.base]
    }

    fn push_point(&mut self, point: PointMass<F>) -> usize {
        self.points.push(point);
        self.base + self.points.len() - 1
    }
}

impl<F: Float> Scene<F> {
    /// An empty scene. Fails if the configuration is invalid.
    pub fn new(config: SimulationConfig<F>) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Scene { config, solver: SpringSolver::new(), chains: AllocVec::new() })
    }

    /// Build a scene from several paths, stopping at the first rejected one.
    pub fn from_paths<I>(config: SimulationConfig<F>, paths: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = SourcePath<F>>,
    {
        let mut scene = Scene::new(config)?;
        for path in paths {
            scene.add_path(&path)?;
        }
        Ok(scene)
    }

    /// Parse `d` text and add it as a chain.
    pub fn add_path_data(&mut self, data: &str, anchor_last: bool) -> Result<Option<ChainId>, SceneError> {
        let source = SourcePath::from_data(data)?.anchored_last(anchor_last);
        self.add_path(&source)
    }

    /// Add one path as a chain of springs.
    ///
    /// The first point of the chain is always fixed; the last one too when
    /// `anchor_last` is set. A path without commands adds nothing and returns
    /// `Ok(None)`. Commands with NaN or infinite coordinates are rejected. On
    /// error the scene is left unchanged.
    pub fn add_path(&mut self, source: &SourcePath<F>) -> Result<Option<ChainId>, SceneError> {
        if source.commands.is_empty() {
            log::debug!("skipping empty path {:?}", source.label);
            return Ok(None);
        }
        let id = ChainId(self.chains.len());
        let config = self.config;

        let staged = source
            .commands
            .iter()
            .enumerate()
            .try_fold(Staging::new(self.solver.points.len()), |mut staging, (index, command)| {
                if !command.is_finite() {
                    return Err(SceneError::NonFiniteCoordinate { chain: id.0, index });
                }
                let point = command.kind.target_offset().map(|delta| {
                    let position = match (command.relative, staging.previous) {
                        (true, Some(previous)) => staging.point(previous).position + delta,
                        _ => delta,
                    };
                    let mut point = PointMass::new(position, config.point_mass, config.point_radius)
                        .with_color(config.point_color);
                    point.fixed = staging.previous.is_none();
                    staging.push_point(point)
                });

                let vertex = PathVertex::from_command(command, point, staging.previous).map_err(
                    |UnsupportedCommand(letter)| SceneError::UnsupportedCommand { chain: id.0, index, command: letter },
                )?;
                staging.vertices.push(vertex);

                if let Some(current) = point {
                    if let Some(previous) = staging.previous {
                        let rest = staging.point(previous).position.distance(staging.point(current).position);
                        staging.springs.push(Spring::new(
                            previous,
                            current,
                            rest,
                            config.springs.stiffness,
                            config.springs.damping,
                        ));
                    }
                    staging.previous = Some(current);
                }
                Ok::<_, SceneError>(staging)
            })
            .inspect_err(|err| log::warn!("rejecting path {:?}: {}", source.label, err))?;

        let Staging { mut points, springs, vertices, .. } = staged;
        if source.anchor_last {
            if let Some(last) = points.last_mut() {
                last.pin();
            }
        }
        log::debug!(
            "chain {} assembled: {} vertices, {} points, {} springs",
            id,
            vertices.len(),
            points.len(),
            springs.len()
        );

        self.solver.points.extend(points);
        self.solver.springs.extend(springs);
        self.chains.push(MovableChain::new(id, source, vertices));
        Ok(Some(id))
    }

    /// Advance the simulation by the configured time step.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.solver.step(self.config.time_step, &self.config, observer);
    }

    /// One frame: hand the current state to `sink`, step once, re-encode
    /// every chain.
    pub fn tick<R, O>(&mut self, sink: &mut R, observer: &mut O) -> AllocVec<EncodedChain<F>>
    where
        R: RenderSink<F>,
        O: StepObserver,
    {
        let segments = self.solver.segments();
        sink.render(&self.solver.points, &segments);
        self.step(observer);
        self.encode_all()
    }

    /// Re-encode every chain from the current positions.
    pub fn encode_all(&self) -> AllocVec<EncodedChain<F>> {
        self.chains
            .iter()
            .map(|chain| {
                let commands = chain.commands(&self.solver.points);
                let data = path_data::encode(&commands);
                EncodedChain { id: chain.id(), commands, data }
            })
            .collect()
    }

    /// Re-encode one chain as path data.
    pub fn encode_chain(&self, id: ChainId) -> Result<String, SceneError> {
        self.chain(id)
            .map(|chain| chain.encode(&self.solver.points))
            .ok_or(SceneError::UnknownChain(id.0))
    }

    /// Check configuration and that every spring and vertex refers to a point
    /// of this scene.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.config.validate()?;
        self.solver.validate()?;
        let count = self.solver.points.len();
        for chain in self.chains.iter() {
            for vertex in chain.vertices() {
                for index in vertex.point().into_iter().chain(vertex.previous()) {
                    if index >= count {
                        return Err(SceneError::DanglingPoint { index, count });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn config(&self) -> &SimulationConfig<F> {
        &self.config
    }

    pub fn chain(&self, id: ChainId) -> Option<&MovableChain<F>> {
        self.chains.get(id.0)
    }

    pub fn chains(&self) -> &[MovableChain<F>] {
        &self.chains
    }

    pub fn points(&self) -> &[PointMass<F>] {
        &self.solver.points
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.solver.springs
    }

    /// Direct access to a point, e.g. to drag it with the pointer between
    /// ticks.
    pub fn point_mut(&mut self, index: usize) -> &mut PointMass<F> {
        self.solver.point_mut(index)
    }

    pub fn solver(&self) -> &SpringSolver<F> {
        &self.solver
    }
}
