//! Configuration types for the simulation and scene assembly.

use crate::color::Color;
use crate::error::SceneError;
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stiffness and damping coefficients applied to every spring in a scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringConfig<F: Float> {
    /// Hookean stiffness `ks`. Default: 50.
    pub stiffness: F,
    /// Velocity-projected damping `kd`. Default: 1.
    pub damping: F,
}

impl<F: Float> SpringConfig<F> {
    pub fn new(stiffness: F, damping: F) -> Self {
        SpringConfig { stiffness, damping }
    }

    /// The earlier, softer tuning (`ks = 0.05`, `kd = 0.1`). It was paired
    /// with a small viscous drag, see [`SimulationConfig::with_viscosity`].
    pub fn soft() -> Self {
        SpringConfig {
            stiffness: F::from_f64(0.05),
            damping: F::from_f64(0.1),
        }
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        SpringConfig {
            stiffness: F::from_f32(50.0),
            damping: F::one(),
        }
    }
}

/// Rectangular domain `[0, width] x [0, height]` that free points bounce off.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }
}

/// Configuration for the simulation step and for points created during
/// scene assembly.
///
/// # Builder Pattern
/// ```
/// use svg_springs::config::{SimulationConfig, SpringConfig};
/// use svg_springs::vec::Vec2;
///
/// let config: SimulationConfig<f64> = SimulationConfig::new()
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_time_step(0.05)
///     .with_springs(SpringConfig::new(50.0, 1.0))
///     .with_collisions(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Constant acceleration field. Default: `(0, 9.81)` (y grows downward,
    /// as in SVG user space).
    pub gravity: Vec2<F>,
    /// Time advanced by one tick. Default: 0.1.
    pub time_step: F,
    /// Spring tuning used when linking consecutive vertices.
    pub springs: SpringConfig<F>,
    /// Restitution coefficient for collision impulses. Default: 0.8.
    pub restitution: F,
    /// Run the pairwise collision pass. Default: true.
    pub collisions: bool,
    /// Fluid viscosity for Stokes drag `-6 pi r eta v`. Default: 0 (off).
    pub viscosity: F,
    /// Optional bounding box. Default: none.
    pub bounds: Option<Bounds<F>>,
    /// Mass given to every point created from a path vertex. Default: 1.
    pub point_mass: F,
    /// Radius given to every point created from a path vertex. Default: 0.
    pub point_radius: F,
    /// Display color of created points. Default: black.
    pub point_color: Color,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: Vec2::new(F::zero(), F::from_f64(9.81)),
            time_step: F::from_f64(0.1),
            springs: SpringConfig::default(),
            restitution: F::from_f64(0.8),
            collisions: true,
            viscosity: F::zero(),
            bounds: None,
            point_mass: F::one(),
            point_radius: F::zero(),
            point_color: Color::BLACK,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the per-tick time step.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the spring tuning.
    pub fn with_springs(mut self, springs: SpringConfig<F>) -> Self {
        self.springs = springs;
        self
    }

    /// Set the collision restitution.
    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    /// Enable or disable the collision pass.
    pub fn with_collisions(mut self, collisions: bool) -> Self {
        self.collisions = collisions;
        self
    }

    /// Set the viscosity used for drag.
    pub fn with_viscosity(mut self, viscosity: F) -> Self {
        self.viscosity = viscosity;
        self
    }

    /// Confine free points to a rectangle.
    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the mass and radius of points created from path vertices.
    pub fn with_point(mut self, mass: F, radius: F) -> Self {
        self.point_mass = mass;
        self.point_radius = radius;
        self
    }

    /// Set the display color of created points.
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = color;
        self
    }

    /// Reject configurations that would make the simulation ill-defined.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.time_step.is_finite() && self.time_step > F::zero()) {
            return Err(SceneError::InvalidTimeStep);
        }
        if !(self.point_mass.is_finite() && self.point_mass > F::zero()) {
            return Err(SceneError::InvalidMass);
        }
        if !(self.point_radius.is_finite() && self.point_radius >= F::zero()) {
            return Err(SceneError::InvalidRadius);
        }
        if !(self.restitution >= F::zero() && self.restitution <= F::one()) {
            return Err(SceneError::InvalidRestitution);
        }
        let SpringConfig { stiffness, damping } = self.springs;
        if !(stiffness.is_finite() && damping.is_finite())
            || stiffness < F::zero()
            || damping < F::zero()
        {
            return Err(SceneError::InvalidSpring);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
