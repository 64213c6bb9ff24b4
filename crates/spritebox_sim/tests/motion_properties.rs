//! Property checks for the bounce simulation
//!
//! Runs many seeded simulations across several boundary shapes and checks
//! the containment, reflection and free-motion rules on every tick.

use spritebox_sim::{
    initialize, tick, tick_with_contact, Boundary, MovingObject, SimRng, Simulation, Vec2i,
    WallContact,
};

const BOUNDARIES: [(i32, i32, i32); 5] = [
    (800, 600, 72),
    (1000, 600, 72),
    (100, 100, 100),
    (73, 500, 72),
    (16, 9, 3),
];

fn check_step(before: MovingObject, boundary: &Boundary) {
    let (after, contact) = tick_with_contact(before, boundary);
    let size = before.size();
    let raw = before.position + before.velocity;

    // Containment
    assert!(
        after.is_contained_in(boundary),
        "{:?} escaped {:?}",
        after,
        boundary
    );

    // X axis
    if raw.x < 0 {
        assert_eq!(after.position.x, 0);
        assert_eq!(after.velocity.x, -before.velocity.x);
        assert!(contact.contains(WallContact::LEFT));
    } else if raw.x + size > boundary.width {
        assert_eq!(after.position.x, boundary.width - size);
        assert_eq!(after.velocity.x, -before.velocity.x);
        assert!(contact.contains(WallContact::RIGHT));
    } else {
        assert_eq!(after.position.x, raw.x);
        assert_eq!(after.velocity.x, before.velocity.x);
        assert!(!contact.reflected_x());
    }

    // Y axis
    if raw.y < 0 {
        assert_eq!(after.position.y, 0);
        assert_eq!(after.velocity.y, -before.velocity.y);
        assert!(contact.contains(WallContact::TOP));
    } else if raw.y + size > boundary.height {
        assert_eq!(after.position.y, boundary.height - size);
        assert_eq!(after.velocity.y, -before.velocity.y);
        assert!(contact.contains(WallContact::BOTTOM));
    } else {
        assert_eq!(after.position.y, raw.y);
        assert_eq!(after.velocity.y, before.velocity.y);
        assert!(!contact.reflected_y());
    }

    if contact.is_empty() {
        assert_eq!(after.position, before.position + before.velocity);
        assert_eq!(after.velocity, before.velocity);
    }
}

#[test]
fn test_invariants_hold_over_long_runs() {
    for seed in 0..40u64 {
        for &(w, h, size) in &BOUNDARIES {
            let boundary = Boundary::new(w, h);
            let mut rng = SimRng::seeded(seed);
            let mut object = initialize(boundary, size, &mut rng).unwrap();
            assert!(object.is_contained_in(&boundary));

            for _ in 0..2_000 {
                check_step(object, &boundary);
                object = tick(object, &boundary);
            }
        }
    }
}

#[test]
fn test_every_velocity_from_every_edge() {
    let boundary = Boundary::new(800, 600);
    let size = 72;
    let edges = [0, 1, 3, 5, 364, 723, 726, 727, 728];
    for &x in &edges {
        for &y in &[0, 2, 264, 524, 528] {
            for dx in -5..=5 {
                for dy in -5..=5 {
                    let obj = MovingObject::new(Vec2i::new(x, y), size)
                        .with_velocity(Vec2i::new(dx, dy));
                    check_step(obj, &boundary);
                }
            }
        }
    }
}

#[test]
fn test_tick_is_deterministic() {
    let boundary = Boundary::new(800, 600);
    let obj = MovingObject::new(Vec2i::new(726, 3), 72).with_velocity(Vec2i::new(5, -4));
    let first = tick(obj, &boundary);
    for _ in 0..10 {
        assert_eq!(tick(obj, &boundary), first);
    }
}

#[test]
fn test_documented_scenarios() {
    let boundary = Boundary::new(800, 600);

    let free = MovingObject::new(Vec2i::new(364, 264), 72).with_velocity(Vec2i::new(4, 3));
    let next = tick(free, &boundary);
    assert_eq!(next.position, Vec2i::new(368, 267));
    assert_eq!(next.velocity, Vec2i::new(4, 3));

    let wall = MovingObject::new(Vec2i::new(726, 264), 72).with_velocity(Vec2i::new(5, 3));
    let next = tick(wall, &boundary);
    assert_eq!(next.position, Vec2i::new(728, 267));
    assert_eq!(next.velocity, Vec2i::new(-5, 3));
}

#[test]
fn test_simulation_matches_free_functions() {
    let boundary = Boundary::new(800, 600);
    let mut rng_a = SimRng::seeded(2024);
    let mut rng_b = SimRng::seeded(2024);

    let mut sim = Simulation::new(boundary, 72, &mut rng_a).unwrap();
    let mut object = initialize(boundary, 72, &mut rng_b).unwrap();
    assert_eq!(*sim.object(), object);

    for _ in 0..500 {
        sim.tick();
        object = tick(object, &boundary);
        assert_eq!(*sim.object(), object);
    }
    assert_eq!(sim.ticks(), 500);
}

#[test]
fn test_oversized_object_is_rejected() {
    let mut rng = SimRng::seeded(0);
    assert!(initialize(Boundary::new(800, 600), 601, &mut rng).is_err());
    assert!(initialize(Boundary::new(600, 800), 601, &mut rng).is_err());
    assert!(Simulation::new(Boundary::new(50, 50), 51, &mut rng).is_err());
}
