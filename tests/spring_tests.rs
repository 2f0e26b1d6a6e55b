use svg_springs::{
    NoOpStepObserver, PointMass, SimulationConfig, Spring, SpringConfig, SpringSolver, Vec2,
};

fn two_free_points(a: Vec2<f64>, b: Vec2<f64>, rest_length: f64) -> SpringSolver<f64> {
    let mut solver = SpringSolver::new();
    let ia = solver.add_point(PointMass::new(a, 1.0, 0.0));
    let ib = solver.add_point(PointMass::new(b, 1.0, 0.0));
    solver.add_spring(Spring::new(ia, ib, rest_length, 50.0, 1.0));
    solver
}

#[test]
fn spring_at_rest_then_both_accelerate_downward() {
    let mut solver = two_free_points(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 10.0);
    assert_eq!(solver.springs[0].force(&solver.points), Vec2::zero());

    let config = SimulationConfig::new().with_gravity(Vec2::new(0.0, 9.81));
    solver.step(0.1, &config, &mut NoOpStepObserver);

    let a = solver.point(0);
    let b = solver.point(1);
    assert!(a.velocity.y > 0.0 && b.velocity.y > 0.0, "both should move down");
    assert!((a.velocity.y - b.velocity.y).abs() < 1e-12);
    assert!(a.position.y > 0.0);
    assert!(b.position.y > 10.0);
}

#[test]
fn zero_length_spring_has_no_force() {
    for (ks, kd) in [(0.0, 0.0), (50.0, 1.0), (0.05, 0.1), (1.0e9, 1.0e9)] {
        let mut solver = two_free_points(Vec2::new(4.0, 4.0), Vec2::new(4.0, 4.0), 3.0);
        solver.springs[0] = Spring::new(0, 1, 3.0, ks, kd);
        solver.point_mut(1).velocity = Vec2::new(-2.0, 7.0);
        assert_eq!(solver.springs[0].force(&solver.points), Vec2::zero());
    }
}

#[test]
fn damped_oscillation_loses_energy() {
    let mut solver = two_free_points(Vec2::new(0.0, 0.0), Vec2::new(12.0, 0.0), 10.0);
    let config = SimulationConfig::new()
        .with_gravity(Vec2::zero())
        .with_collisions(false);

    let initial = solver.total_energy();
    assert!((initial - 100.0).abs() < 1e-9);

    for step in 0..5000 {
        solver.step(0.001, &config, &mut NoOpStepObserver);
        let energy = solver.total_energy();
        assert!(
            energy <= initial * 1.01,
            "energy grew to {} at step {} (initial {})",
            energy,
            step,
            initial
        );
    }
    assert!(solver.total_energy() < initial * 0.01);
}

#[test]
fn springs_conserve_momentum() {
    let mut solver = two_free_points(Vec2::new(0.0, 0.0), Vec2::new(7.0, 3.0), 5.0);
    solver.point_mut(0).velocity = Vec2::new(1.0, -1.0);
    let before = solver.point(0).velocity + solver.point(1).velocity;
    let config = SimulationConfig::new().with_gravity(Vec2::zero());
    for _ in 0..100 {
        solver.step(0.01, &config, &mut NoOpStepObserver);
    }
    let after = solver.point(0).velocity + solver.point(1).velocity;
    approx::assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-9);
}

#[test]
fn soft_tuning_is_gentler() {
    let stiff = Spring::new(0, 1, 10.0, 50.0, 1.0);
    let soft_config: SpringConfig<f64> = SpringConfig::soft();
    let soft = Spring::new(0, 1, 10.0, soft_config.stiffness, soft_config.damping);
    let points = [
        PointMass::new(Vec2::new(0.0, 0.0), 1.0, 0.0),
        PointMass::new(Vec2::new(0.0, 15.0), 1.0, 0.0),
    ];
    assert!(soft.force(&points).length() < stiff.force(&points).length());
}
