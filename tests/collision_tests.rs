use svg_springs::collision::{overlaps, resolve};
use svg_springs::{NoOpStepObserver, PointMass, SimulationConfig, SpringSolver, StepStats, Vec2};

#[test]
fn equal_mass_collision_conserves_momentum() {
    let mut points = [
        PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(2.0, 0.5)),
        PointMass::new(Vec2::new(1.5f64, 0.3), 1.0, 1.0).with_velocity(Vec2::new(-1.0, 0.2)),
    ];
    assert!(overlaps(&points[0], &points[1]));
    let before = points[0].velocity + points[1].velocity;

    assert!(resolve(&mut points, 0, 1, 0.8));

    let after = points[0].velocity + points[1].velocity;
    assert!((before.x - after.x).abs() < 1e-12);
    assert!((before.y - after.y).abs() < 1e-12);
    let gap = points[0].position.distance(points[1].position);
    assert!((gap - 2.0).abs() < 1e-9, "bodies should just touch, gap = {}", gap);
}

#[test]
fn unequal_mass_collision_conserves_momentum() {
    let mut points = [
        PointMass::new(Vec2::new(0.0f64, 0.0), 3.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)),
        PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(-1.0, 0.0)),
    ];
    let momentum = |p: &[PointMass<f64>; 2]| p[0].velocity.scale(p[0].mass) + p[1].velocity.scale(p[1].mass);
    let before = momentum(&points);
    resolve(&mut points, 0, 1, 0.8);
    let after = momentum(&points);
    approx::assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-12);
    // The lighter body is pushed further apart.
    assert!((points[1].position.x - 1.0) > (0.0 - points[0].position.x));
}

#[test]
fn approaching_bodies_rebound() {
    let mut points = [
        PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)),
        PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 1.0).with_velocity(Vec2::new(-1.0, 0.0)),
    ];
    resolve(&mut points, 0, 1, 0.8);
    // vn = 2, impulse = 1.8 * 2 / 2 = 1.8
    assert!((points[0].velocity.x + 0.8).abs() < 1e-12);
    assert!((points[1].velocity.x - 0.8).abs() < 1e-12);
}

#[test]
fn solver_counts_contacts() {
    let mut solver = SpringSolver::new();
    solver.add_point(PointMass::new(Vec2::new(0.0f64, 0.0), 1.0, 2.0));
    solver.add_point(PointMass::new(Vec2::new(1.0f64, 0.0), 1.0, 2.0));
    solver.add_point(PointMass::new(Vec2::new(100.0f64, 0.0), 1.0, 2.0));
    let config = SimulationConfig::new().with_gravity(Vec2::zero());
    let mut stats = StepStats::default();
    solver.step(0.1, &config, &mut stats);
    assert_eq!(stats.contacts, 1);

    let disabled = config.with_collisions(false);
    let mut solver2 = solver.clone();
    solver2.point_mut(1).position = Vec2::new(0.5, 0.0);
    solver2.step(0.1, &disabled, &mut NoOpStepObserver);
    assert_eq!(solver2.point(1).position, Vec2::new(0.5, 0.0));
}
