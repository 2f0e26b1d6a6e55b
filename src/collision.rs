//! Pairwise collision detection and impulse response between point masses.

use crate::float::Float;
use crate::point_mass::PointMass;

/// True if the two bodies' circles overlap.
pub fn overlaps<F: Float>(a: &PointMass<F>, b: &PointMass<F>) -> bool {
    let reach = a.radius + b.radius;
    (a.position - b.position).length_sq() < reach * reach
}

/// Push two overlapping bodies apart along their centre line and exchange an
/// impulse if they are approaching.
///
/// Separation and impulse are weighted by inverse mass, so fixed bodies never
/// move. Pairs that do not overlap are left alone, and coincident centres have
/// no defined normal and are skipped. Returns whether the pair was resolved.
pub fn resolve<F: Float>(points: &mut [PointMass<F>], a: usize, b: usize, restitution: F) -> bool {
    if a == b {
        return false;
    }
    let (pa, pb) = (&points[a], &points[b]);
    let inv_a = pa.inv_mass();
    let inv_b = pb.inv_mass();
    let inv_total = inv_a + inv_b;
    if inv_total == F::zero() {
        return false; // both fixed
    }

    let delta = pa.position - pb.position;
    let d = delta.length();
    if d == F::zero() {
        log::trace!("skipping coincident collision pair {} / {}", a, b);
        return false;
    }

    let reach = pa.radius + pb.radius;
    if d >= reach {
        return false;
    }

    let mtd = delta.scale((reach - d) / d);
    let normal = delta.divide(d);
    let relative_velocity = pa.velocity - pb.velocity;

    points[a].position += mtd.scale(inv_a / inv_total);
    points[b].position -= mtd.scale(inv_b / inv_total);

    let vn = relative_velocity.dot(normal);
    if vn > F::zero() {
        return true; // already separating
    }

    let i = -(F::one() + restitution) * vn / inv_total;
    let impulse = normal.scale(i);
    points[a].velocity += impulse.scale(inv_a);
    points[b].velocity -= impulse.scale(inv_b);
    true
}

/// O(n²) pass over every unordered pair of free bodies. Returns the number of
/// contacts resolved.
pub fn resolve_all<F: Float>(points: &mut [PointMass<F>], restitution: F) -> usize {
    let mut resolved = 0;
    for i in 0..points.len() {
        if points[i].fixed {
            continue;
        }
        for j in (i + 1)..points.len() {
            if points[j].fixed || !overlaps(&points[i], &points[j]) {
                continue;
            }
            if resolve(points, i, j, restitution) {
                resolved += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn separated_bodies_do_not_overlap() {
        let a = PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0);
        let b = PointMass::new(Vec2::new(3.0f64, 0.0), 1.0, 1.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn overlap_is_pushed_apart() {
        let mut points = [
            PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0),
            PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 1.0),
        ];
        assert!(resolve(&mut points, 0, 1, 0.8));
        let gap = points[0].position.distance(points[1].position);
        assert!((gap - 2.0).abs() < 1e-9);
        assert!((points[0].position.x + 0.5).abs() < 1e-9);
        assert!((points[1].position.x - 1.5).abs() < 1e-9);
    }

    #[test]
    fn fixed_body_is_not_moved() {
        let mut points = [
            PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)),
            PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 1.0),
        ];
        points[1].pin();
        assert!(resolve(&mut points, 0, 1, 0.8));
        assert_eq!(points[1].position, Vec2::new(1.0, 0.0));
        assert_eq!(points[1].velocity, Vec2::zero());
        assert!((points[0].position.x + 1.0).abs() < 1e-9);
        assert!((points[0].velocity.x + 0.8).abs() < 1e-9);
    }

    #[test]
    fn coincident_pair_is_skipped() {
        let mut points = [
            PointMass::new(Vec2::new(2.0f64, 2.0), 1.0, 1.0),
            PointMass::new(Vec2::new(2.0f64, 2.0), 1.0, 1.0),
        ];
        assert!(!resolve(&mut points, 0, 1, 0.8));
        assert_eq!(points[0].position, Vec2::new(2.0, 2.0));
        assert!(points[0].position.is_finite() && points[1].velocity.is_finite());
    }

    #[test]
    fn separating_bodies_get_no_impulse() {
        let mut points = [
            PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(-1.0, 0.0)),
            PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)),
        ];
        resolve(&mut points, 0, 1, 0.8);
        assert_eq!(points[0].velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(points[1].velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn separated_pair_is_left_alone() {
        let mut points = [
            PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)),
            PointMass::new(Vec2::new(10.0f64, 0.0), 1.0, 1.0),
        ];
        assert!(!resolve(&mut points, 0, 1, 0.8));
        assert_eq!(points[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(points[1].position, Vec2::new(10.0, 0.0));
        assert_eq!(points[0].velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn touching_pair_is_not_resolved() {
        let mut points = [
            PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0),
            PointMass::new(Vec2::new(2.0f64, 0.0), 1.0, 1.0),
        ];
        assert!(!resolve(&mut points, 0, 1, 0.8));
        assert_eq!(points[1].position, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn resolve_all_skips_fixed_pairs() {
        let mut points = [
            PointMass::fixed(Vec2::new(0.0f64, 0.0)),
            PointMass::fixed(Vec2::new(0.5f64, 0.0)),
        ];
        points[0].radius = 1.0;
        points[1].radius = 1.0;
        assert_eq!(resolve_all(&mut points, 0.8), 0);
    }
}
