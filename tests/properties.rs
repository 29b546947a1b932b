//! Randomized checks of algebraic identities.

mod common;

use approx::assert_relative_eq;
use mathlib::{
    add, compare, cross, dot, magnitude, normalized, scalar_divide, scalar_multiply, subtract,
    Vector,
};

use common::init_logger;

const ITERATIONS: usize = 200;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6d61_7468)
}

/// A vector of integral elements in `-bound..=bound`, so that sums and products are exact.
fn integral_vector(rng: &mut fastrand::Rng, dimension: usize, bound: i32) -> Vector {
    Vector::from_fn(dimension, |_| rng.i32(-bound..=bound) as f32)
}

fn float_vector(rng: &mut fastrand::Rng, dimension: usize) -> Vector {
    Vector::from_fn(dimension, |_| rng.f32() * 20.0 - 10.0)
}

#[test]
fn compare_is_reflexive_and_symmetric() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dimension = rng.usize(0..8);
        let a = float_vector(&mut rng, dimension);
        let mut b = a.clone();
        if dimension > 0 && rng.bool() {
            b[rng.usize(..dimension)] += 1.0;
        }

        assert_eq!(compare(&a, &a), Ok(true));
        assert_eq!(compare(&a, &b), compare(&b, &a));
        assert_eq!(compare(&a, &b).unwrap(), a == b);
    }
}

#[test]
fn add_then_subtract_round_trips() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dimension = rng.usize(0..16);
        let a = integral_vector(&mut rng, dimension, 1000);
        let b = integral_vector(&mut rng, dimension, 1000);

        let sum = add(&a, &b).unwrap();
        assert_eq!(subtract(&sum, &b).unwrap(), a);
    }
}

#[test]
fn scalar_divide_then_multiply_round_trips() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dimension = rng.usize(1..16);
        let v = float_vector(&mut rng, dimension);
        let mut s = rng.f32() * 10.0 + 0.1;
        if rng.bool() {
            s = -s;
        }

        let back = scalar_multiply(&scalar_divide(&v, s), s);
        // Element-wise, so this also runs without the `approx` feature.
        assert_eq!(back.dimension(), v.dimension());
        for (b, e) in back.iter().zip(&v) {
            assert_relative_eq!(*b, *e, epsilon = 1e-5, max_relative = 1e-6);
        }
    }
}

#[test]
fn normalized_has_unit_magnitude() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dimension = rng.usize(1..16);
        let v = float_vector(&mut rng, dimension);
        if magnitude(&v) == 0.0 {
            continue;
        }

        assert_relative_eq!(magnitude(&normalized(&v)), 1.0, max_relative = 1e-5);
    }
}

#[test]
fn dot_is_commutative() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let dimension = rng.usize(0..16);
        let a = float_vector(&mut rng, dimension);
        let b = float_vector(&mut rng, dimension);
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }
}

#[test]
fn cross_is_anti_commutative() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = float_vector(&mut rng, 3);
        let b = float_vector(&mut rng, 3);

        let ab = cross(&a, &b).unwrap();
        let ba = cross(&b, &a).unwrap();
        assert_eq!(ab, scalar_multiply(&ba, -1.0));
    }
}

#[test]
fn cross_is_orthogonal_to_inputs() {
    init_logger();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = integral_vector(&mut rng, 3, 100);
        let b = integral_vector(&mut rng, 3, 100);

        // With elements up to 100, every intermediate result stays below 2^24 and is exact.
        let c = cross(&a, &b).unwrap();
        assert!(c.is_orthogonal_to(&a), "{a} x {b} = {c}");
        assert!(c.is_orthogonal_to(&b), "{a} x {b} = {c}");
    }
}
