//! Spring-mass solver: point arena, springs, and the per-tick step.

use crate::collision;
use crate::config::SimulationConfig;
use crate::error::SceneError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::point_mass::PointMass;
use crate::render::Segment;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns every point mass and spring. Springs refer to points by index.
#[derive(Clone, Debug, Default)]
pub struct SpringSolver<F: Float> {
    pub points: AllocVec<PointMass<F>>,
    pub springs: AllocVec<Spring<F>>,
}

impl<F: Float> SpringSolver<F> {
    pub fn new() -> Self {
        SpringSolver {
            points: AllocVec::new(),
            springs: AllocVec::new(),
        }
    }

    pub fn add_point(&mut self, point: PointMass<F>) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        idx
    }

    pub fn add_spring(&mut self, spring: Spring<F>) {
        self.springs.push(spring);
    }

    /// Advance the system by `dt`:
    /// field forces, spring forces, integration, collisions, bounds.
    pub fn step<O: StepObserver>(&mut self, dt: F, config: &SimulationConfig<F>, observer: &mut O) {
        let drag = F::from_f32(6.0) * F::pi() * config.viscosity;
        for p in self.points.iter_mut() {
            if p.fixed {
                p.force = Vec2::zero();
                continue;
            }
            p.force = config.gravity.scale(p.mass);
            if drag != F::zero() {
                p.accelerate(p.velocity.scale(-drag * p.radius));
            }
        }
        for spring in self.springs.iter() {
            spring.apply(&mut self.points);
        }
        observer.on_forces();

        for p in self.points.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();

        if config.collisions {
            let resolved = collision::resolve_all(&mut self.points, config.restitution);
            observer.on_collisions(resolved);
        }

        if let Some(bounds) = config.bounds {
            for p in self.points.iter_mut().filter(|p| !p.fixed) {
                if p.exiting_x(bounds.width) {
                    p.bounce_x();
                }
                if p.exiting_y(bounds.height) {
                    p.bounce_y();
                }
            }
        }

        observer.on_step_complete();
    }

    /// Endpoint positions of every spring.
    pub fn segments(&self) -> AllocVec<Segment<F>> {
        self.springs
            .iter()
            .map(|s| Segment { from: self.points[s.a].position, to: self.points[s.b].position })
            .collect()
    }

    /// Kinetic plus elastic energy.
    pub fn total_energy(&self) -> F {
        let kinetic = self.points.iter().fold(F::zero(), |acc, p| acc + p.kinetic_energy());
        self.springs
            .iter()
            .fold(kinetic, |acc, s| acc + s.potential_energy(&self.points))
    }

    /// Check that every spring endpoint exists and every point is well formed.
    pub fn validate(&self) -> Result<(), SceneError> {
        let count = self.points.len();
        for spring in self.springs.iter() {
            for index in [spring.a, spring.b] {
                if index >= count {
                    return Err(SceneError::DanglingPoint { index, count });
                }
            }
        }
        for p in self.points.iter() {
            if !(p.mass.is_finite() && p.mass > F::zero()) {
                return Err(SceneError::InvalidMass);
            }
            if !(p.radius.is_finite() && p.radius >= F::zero()) {
                return Err(SceneError::InvalidRadius);
            }
        }
        Ok(())
    }

    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn point(&self, index: usize) -> &PointMass<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut PointMass<F> { &mut self.points[index] }
}
