//! Point masses integrated with semi-implicit Euler.

use crate::color::Color;
use crate::float::Float;
use crate::vec::Vec2;

/// A simulated particle. Forces accumulate between steps and are cleared by
/// [`PointMass::integrate`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub force: Vec2<F>,
    pub radius: F,
    pub mass: F,
    pub fixed: bool,
    pub color: Option<Color>,
}

impl<F: Float> PointMass<F> {
    pub fn new(position: Vec2<F>, mass: F, radius: F) -> Self {
        PointMass {
            position,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            radius,
            mass,
            fixed: false,
            color: None,
        }
    }

    /// A point that never moves. Mass is kept at one so it stays valid if
    /// later released.
    pub fn fixed(position: Vec2<F>) -> Self {
        PointMass {
            fixed: true,
            ..PointMass::new(position, F::one(), F::zero())
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Accumulate a force. Velocity and position are untouched until
    /// [`PointMass::integrate`].
    pub fn accelerate(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Advance by `dt`: velocity from force first, then position from the
    /// new velocity. Fixed points are held still. Force is always cleared.
    pub fn integrate(&mut self, dt: F) {
        if self.fixed {
            self.velocity = Vec2::zero();
        } else {
            self.velocity += self.force.divide(self.mass).scale(dt);
            self.position += self.velocity.scale(dt);
        }
        self.force = Vec2::zero();
    }

    /// Inverse mass; zero for fixed points.
    pub fn inv_mass(&self) -> F {
        if self.fixed {
            F::zero()
        } else {
            F::one() / self.mass
        }
    }

    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.velocity.length_sq()
    }

    pub fn pin(&mut self) {
        self.fixed = true;
        self.velocity = Vec2::zero();
    }

    pub fn unpin(&mut self) {
        self.fixed = false;
    }

    /// Clamp x into `[radius, width - radius]`. Returns true if a limit was
    /// crossed.
    pub fn exiting_x(&mut self, width: F) -> bool {
        let (x, hit) = clamp_axis(self.position.x, self.radius, width);
        self.position.x = x;
        hit
    }

    /// Clamp y into `[radius, height - radius]`. Returns true if a limit was
    /// crossed.
    pub fn exiting_y(&mut self, height: F) -> bool {
        let (y, hit) = clamp_axis(self.position.y, self.radius, height);
        self.position.y = y;
        hit
    }

    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }
}

fn clamp_axis<F: Float>(value: F, radius: F, extent: F) -> (F, bool) {
    if value <= radius {
        (radius, true)
    } else if value >= extent - radius {
        (extent - radius, true)
    } else {
        (value, false)
    }
}
