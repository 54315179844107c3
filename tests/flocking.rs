use flock_sim::{Boid, Boundary, Flock, FlockParams, FrameOrder, Parameter, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f32 = 1e-3;

fn world() -> Boundary {
    Boundary::new(800.0, 640.0)
}

fn distance_between(flock: &Flock, a: usize, b: usize) -> f32 {
    Vector::distance(flock.boids()[a].position(), flock.boids()[b].position())
}

#[test]
fn lone_boid_moves_one_speed_step_per_frame() {
    let mut flock = Flock::with_seed(world(), 1);
    assert_eq!(flock.params().speed.value(), 4.0);
    flock.insert_boid(Boid::new(Vector::new(400.0, 320.0), Vector::new(4.0, 0.0)));

    flock.update(1.0);

    let boid = &flock.boids()[0];
    assert_eq!(boid.position(), Vector::new(404.0, 320.0));
    assert_eq!(boid.velocity(), Vector::new(4.0, 0.0));
}

#[test]
fn isolated_boids_keep_their_direction() {
    let mut flock = Flock::with_seed(world(), 2);
    let velocities = [
        Vector::new(1.0, 0.5),
        Vector::new(-3.0, 2.0),
        Vector::new(0.2, -7.0),
    ];
    let positions = [
        Vector::new(100.0, 100.0),
        Vector::new(500.0, 100.0),
        Vector::new(300.0, 500.0),
    ];
    for (position, velocity) in positions.into_iter().zip(velocities) {
        flock.insert_boid(Boid::new(position, velocity));
    }

    flock.update(1.0);

    for (boid, original) in flock.boids().iter().zip(velocities) {
        let v = boid.velocity();
        assert!((v.magnitude() - 4.0).abs() < TOLERANCE);
        let expected = original.normalized();
        let actual = v.normalized();
        assert!((expected.x - actual.x).abs() < TOLERANCE);
        assert!((expected.y - actual.y).abs() < TOLERANCE);
    }
}

#[test]
fn close_boids_separate() {
    let mut flock = Flock::with_seed(world(), 3);
    flock.params_mut().alignment_factor.set_value(0.0);
    flock.params_mut().cohesion_factor.set_value(0.0);
    flock.insert_boid(Boid::new(Vector::new(400.0, 320.0), Vector::new(0.0, 4.0)));
    flock.insert_boid(Boid::new(Vector::new(410.0, 320.0), Vector::new(0.0, 4.0)));

    let mut previous = distance_between(&flock, 0, 1);
    for frame in 0..40 {
        flock.update(1.0);
        let current = distance_between(&flock, 0, 1);
        assert!(
            current > previous,
            "frame {frame}: distance went from {previous} to {current}"
        );
        previous = current;
    }
}

#[test]
fn full_alignment_converges_on_one_heading() {
    let params = FlockParams::new(
        Parameter::new(4.0, 2.0, 8.0),
        Parameter::new(120.0, 80.0, 160.0),
        Parameter::new(0.0, 0.0, 1.0),
        Parameter::new(1.0, 0.0, 1.0),
        Parameter::new(0.0, 0.0, 1.0),
    );
    let mut flock = Flock::with_seed(world(), 4).with_params(params);
    flock.insert_boid(Boid::new(Vector::new(400.0, 320.0), Vector::new(4.0, 0.0)));
    flock.insert_boid(Boid::new(Vector::new(420.0, 320.0), Vector::new(0.0, 4.0)));
    flock.insert_boid(Boid::new(Vector::new(400.0, 340.0), Vector::new(3.0, 2.0)));

    for _ in 0..30 {
        flock.update(1.0);
    }

    let headings: Vec<f32> = flock.boids().iter().map(|b| b.velocity().heading()).collect();
    for heading in &headings[1..] {
        assert!((heading - headings[0]).abs() < TOLERANCE, "{headings:?}");
    }
}

#[test]
fn wrapped_boids_stay_inside_the_boundary() {
    let mut flock = Flock::with_seed(world(), 5);
    flock.params_mut().speed.set_value(8.0);
    flock.insert_boid(Boid::new(Vector::new(795.0, 635.0), Vector::new(8.0, 6.0)));
    flock.insert_boid(Boid::new(Vector::new(3.0, 300.0), Vector::new(-8.0, 0.0)));

    for _ in 0..500 {
        flock.update(1.0);
        for boid in flock.boids() {
            assert!(
                flock.boundary().contains(boid.position()),
                "{:?} escaped",
                boid.position()
            );
        }
    }
}

#[test]
fn crowded_flock_stays_finite_and_at_speed() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut flock = Flock::with_seed(world(), 6);
    for _ in 0..60 {
        let position = Vector::new(rng.gen_range(300.0..500.0), rng.gen_range(250.0..390.0));
        flock.spawn_boid(position);
    }

    for order in [FrameOrder::InPlace, FrameOrder::Snapshot] {
        flock.set_frame_order(order);
        for _ in 0..100 {
            flock.update(1.0);
        }
        for boid in flock.boids() {
            let p = boid.position();
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(flock.boundary().contains(p));
            assert!((boid.velocity().magnitude() - 4.0).abs() < TOLERANCE);
        }
    }
}

#[test]
fn parameter_edits_apply_to_every_boid_next_frame() {
    let mut flock = Flock::with_seed(world(), 7);
    for i in 0..5 {
        flock.spawn_boid(Vector::new(100.0 + i as f32 * 150.0, 320.0));
    }

    flock.params_mut().speed.set_value(100.0);
    assert_eq!(flock.params().speed.value(), 8.0);
    flock.update(0.5);

    for boid in flock.boids() {
        assert!((boid.velocity().magnitude() - 8.0).abs() < TOLERANCE);
    }

    flock.reset_params();
    flock.update(0.5);
    for boid in flock.boids() {
        assert!((boid.velocity().magnitude() - 4.0).abs() < TOLERANCE);
    }
}

#[test]
fn spawned_boid_is_seen_in_the_same_frame() {
    let params = FlockParams::new(
        Parameter::new(4.0, 2.0, 8.0),
        Parameter::new(120.0, 80.0, 160.0),
        Parameter::new(0.0, 0.0, 1.0),
        Parameter::new(1.0, 0.0, 1.0),
        Parameter::new(0.0, 0.0, 1.0),
    );
    let mut flock = Flock::with_seed(world(), 8).with_params(params);
    flock.insert_boid(Boid::new(Vector::new(400.0, 320.0), Vector::new(4.0, 0.0)));
    flock.insert_boid(Boid::new(Vector::new(430.0, 320.0), Vector::new(0.0, 4.0)));

    flock.update(1.0);

    // The first boid aligned with the second one during this frame
    assert!(flock.boids()[0].velocity().y > 0.0);
}

#[test]
fn clear_then_spawn_starts_fresh() {
    let mut flock = Flock::with_seed(world(), 9);
    flock.spawn_boid(Vector::new(10.0, 10.0));
    flock.spawn_boid(Vector::new(20.0, 20.0));
    flock.clear();
    assert!(flock.is_empty());

    flock.spawn_boid(Vector::new(30.0, 30.0));
    assert_eq!(flock.len(), 1);
    assert_eq!(flock.boids()[0].position(), Vector::new(30.0, 30.0));
}
