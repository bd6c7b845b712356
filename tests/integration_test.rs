use num::Complex;
use poly_factor::{__testing::check_roots, complex, poly, Error, Linear, Poly, Poly64};

#[test]
fn factor_quartic_with_known_roots() {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    // 4x^4 - 16, roots at sqrt(2) times the fourth roots of unity
    let p = poly![-16.0, 0.0, 0.0, 0.0, 4.0];
    let roots = p.roots(None, None).unwrap();
    let r = 2f64.sqrt();
    let expected = vec![
        complex!(r),
        complex!(-r),
        complex!(0.0, r),
        complex!(0.0, -r),
    ];
    assert!(
        check_roots(roots.clone(), expected, 1e-4),
        "{roots:?}"
    );
}

#[test]
fn factors_expand_to_known_coefficients() {
    // (x - 3)(x + 2) == x^2 - x - 6
    let factors = [
        Linear::new(1.0, complex!(-3.0)),
        Linear::new(1.0, complex!(2.0)),
    ];
    assert_eq!(Poly::from_factors(&factors), poly![-6.0, -1.0, 1.0]);
}

#[test]
fn expansion_and_factorization_are_inverses() {
    let factors = [
        Linear::new(2.0, complex!(-3.0)),
        Linear::new(1.0, complex!(1.0, 1.0)),
        Linear::new(1.0, complex!(0.5, -2.0)),
    ];
    let expected: Vec<Complex<f64>> = factors.iter().map(Linear::root).collect();

    let p = Poly::from_factors(&factors);
    let found: Vec<Complex<f64>> = p
        .factorize(None, None)
        .unwrap()
        .iter()
        .map(Linear::root)
        .collect();
    assert!(check_roots(found.clone(), expected, 1e-6), "{found:?}");
}

#[test]
fn residuals_vanish_at_returned_roots() {
    // 5(x - 2)(x + 1)(x - i)(x + i)
    let p = poly![-10.0, -5.0, -5.0, -5.0, 5.0];
    for factor in p.factorize(None, None).unwrap() {
        let residual = p.eval(factor.root()).norm();
        assert!(residual < 1e-6, "residual {residual} at {factor}");
    }
}

#[test]
fn factor_count_matches_degree() {
    let factors: Vec<Linear<f64>> = (0..5)
        .map(|k| Linear::new(1.0, Complex::new(f64::from(k), -1.0)))
        .collect();
    let p = Poly::from_factors(&factors);
    assert_eq!(p.as_slice().len(), 6);
    assert_eq!(p.factorize(None, None).unwrap().len(), 5);
}

#[test]
fn degenerate_degrees_are_rejected() {
    for p in [Poly64::new(&[]), poly![1.0], poly![1.0, 2.0]] {
        let degree = p.degree();
        match p.factorize(None, None) {
            Err(Error::InvalidDegree { degree: d }) => assert_eq!(d, degree),
            other => panic!("expected InvalidDegree, got {other:?}"),
        }
    }
}

#[test]
fn factorization_is_deterministic() {
    let p = poly![(1.0, 2.0), (-3.0, 0.5), (0.0, -1.0), (2.0, 0.0)];
    let first = p.factorize(None, None).unwrap();
    let second = p.factorize(None, None).unwrap();
    assert_eq!(first, second);
}

/// Roots of multiplicity above one converge only linearly and may trip the
/// collision guard, so only loose bounds are asserted here.
#[test]
fn repeated_root_stays_bounded() {
    // (x - 1)^2 (x + 1)
    let p = poly![1.0, -1.0, -1.0, 1.0];
    let roots = p.roots(None, Some(4096)).unwrap();
    assert_eq!(roots.len(), 3);

    let near_minus_one = roots
        .iter()
        .filter(|r| (*r - complex!(-1.0)).norm() < 1e-3)
        .count();
    let near_one = roots
        .iter()
        .filter(|r| (*r - complex!(1.0)).norm() < 0.1)
        .count();
    assert_eq!(near_minus_one, 1, "{roots:?}");
    assert_eq!(near_one, 2, "{roots:?}");
}
