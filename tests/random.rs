//! Exploratory tests which use randomized test cases

use fastrand::Rng;
use poly_factor::{
    __testing::{check_roots, test_case_factors, RandStreamC64Cartesian, RandStreamR64},
    Linear, Poly,
};

#[test]
fn random_complex_roots_roundtrip() {
    let case = |degree, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), -2.0, 2.0, -2.0, 2.0);
        let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 1.0, 10.0);
        for i in 0..100 {
            let (factors, expected) =
                test_case_factors(&mut roots_stream, &mut scale_stream, degree);
            let poly = Poly::from_factors(&factors);
            let found: Vec<_> = poly
                .factorize(Some(1e-12), Some(4096))
                .unwrap()
                .iter()
                .map(Linear::root)
                .collect();
            assert!(
                check_roots(found.clone(), expected.clone(), 1e-3),
                "@ {i}: {found:?} != {expected:?}"
            );
        }
    };

    case(2, 1);
    case(3, 2);
    case(4, 3);
    case(5, 4);
}

#[test]
fn random_real_roots_roundtrip() {
    let case = |degree, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream =
            RandStreamC64Cartesian::new(seed_stream.u64(..), -2.0, 2.0, 0.0, 0.0);
        let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 1.0, 10.0);
        for i in 0..100 {
            let (factors, expected) =
                test_case_factors(&mut roots_stream, &mut scale_stream, degree);
            let poly = Poly::from_factors(&factors);
            let found: Vec<_> = poly
                .factorize(Some(1e-12), Some(4096))
                .unwrap()
                .iter()
                .map(Linear::root)
                .collect();
            assert!(
                check_roots(found.clone(), expected.clone(), 1e-3),
                "@ {i}: {found:?} != {expected:?}"
            );
        }
    };

    case(2, 5);
    case(3, 6);
}
