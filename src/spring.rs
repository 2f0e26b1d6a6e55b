//! Damped springs between two point masses of an arena.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec2;

/// A Hookean spring with velocity-projected damping.
///
/// Endpoints are indices into the point arena owned by the solver. The rest
/// length is captured at construction and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    pub fn from_points(a: usize, b: usize, points: &[PointMass<F>], config: SpringConfig<F>) -> Self {
        let rest_length = points[a].position.distance(points[b].position);
        Spring::new(a, b, rest_length, config.stiffness, config.damping)
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Force along `posA - posB`. The solver subtracts it from `a` and adds it
    /// to `b`. Coincident endpoints yield zero.
    pub fn force(&self, points: &[PointMass<F>]) -> Vec2<F> {
        let pa = &points[self.a];
        let pb = &points[self.b];
        let d = pa.position - pb.position;
        let len = d.length();
        if len == F::zero() {
            log::trace!("zero-length spring between {} and {}", self.a, self.b);
            return Vec2::zero();
        }
        let stretch = (len - self.rest_length) * self.stiffness;
        let damping = (pa.velocity - pb.velocity).dot(d) * self.damping / len;
        d.divide(len).scale(stretch + damping)
    }

    /// Apply the force once to both endpoints, equal and opposite.
    pub fn apply(&self, points: &mut [PointMass<F>]) {
        let f = self.force(points);
        points[self.a].accelerate(-f);
        points[self.b].accelerate(f);
    }

    /// Elastic energy stored in the spring.
    pub fn potential_energy(&self, points: &[PointMass<F>]) -> F {
        let stretch = points[self.a].position.distance(points[self.b].position) - self.rest_length;
        F::half() * self.stiffness * stretch * stretch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vec2<f64>, b: Vec2<f64>) -> [PointMass<f64>; 2] {
        [PointMass::new(a, 1.0, 0.0), PointMass::new(b, 1.0, 0.0)]
    }

    #[test]
    fn rest_length_from_initial_distance() {
        let points = pair(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        let spring = Spring::from_points(0, 1, &points, SpringConfig::default());
        assert_eq!(spring.rest_length(), 5.0);
        assert_eq!(spring.force(&points), Vec2::zero());
    }

    #[test]
    fn coincident_endpoints_give_zero_force() {
        for (ks, kd) in [(50.0, 1.0), (0.05, 0.1), (1e6, 1e3)] {
            let mut points = pair(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
            points[0].velocity = Vec2::new(5.0, -3.0);
            let spring = Spring::new(0, 1, 10.0, ks, kd);
            assert_eq!(spring.force(&points), Vec2::zero());
        }
    }

    #[test]
    fn stretched_spring_pulls_together() {
        let mut points = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 12.0));
        let spring = Spring::new(0, 1, 10.0, 50.0, 1.0);
        spring.apply(&mut points);
        // |f| = 2 * 50 = 100 along the line
        assert!((points[0].force.y - 100.0).abs() < 1e-9);
        assert!((points[1].force.y + 100.0).abs() < 1e-9);
    }

    #[test]
    fn damping_resists_separation() {
        let mut points = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        points[1].velocity = Vec2::new(2.0, 0.0);
        let spring = Spring::new(0, 1, 10.0, 50.0, 1.0);
        spring.apply(&mut points);
        assert!(points[1].force.x < 0.0);
        assert!(points[0].force.x > 0.0);
    }

    #[test]
    fn potential_energy_of_stretch() {
        let points = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 12.0));
        let spring = Spring::new(0, 1, 10.0, 50.0, 1.0);
        assert!((spring.potential_energy(&points) - 100.0).abs() < 1e-9);
    }
}
