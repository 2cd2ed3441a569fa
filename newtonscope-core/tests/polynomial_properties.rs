//! Structural properties of root-built polynomials across many root lists.

use newtonscope_core::{Complex, Polynomial};

/// A spread of root lists exercising real, imaginary, clustered, and
/// large-magnitude positions.
fn sample_root_lists() -> Vec<Vec<Complex>> {
    vec![
        vec![Complex::new(1.0, 0.0)],
        vec![Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)],
        vec![
            Complex::new(5.0, 0.0),
            Complex::new(-3.0, 2.0),
            Complex::new(-3.0, -2.0),
        ],
        vec![
            Complex::new(0.1, 0.1),
            Complex::new(0.2, -0.1),
            Complex::new(-0.15, 0.05),
            Complex::new(0.0, 0.0),
        ],
        vec![
            Complex::new(100.0, 0.0),
            Complex::new(-100.0, 0.0),
            Complex::new(0.0, 100.0),
        ],
        (0..10)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / 10.0;
                Complex::new(3.0 * angle.cos(), 3.0 * angle.sin())
            })
            .collect(),
    ]
}

#[test]
fn polynomial_vanishes_at_every_root() {
    for roots in sample_root_lists() {
        let p = Polynomial::from_roots(&roots);
        // Tolerance scales with the coefficient magnitudes involved.
        let tolerance = if roots.iter().any(|r| r.distance_to(&Complex::ZERO) > 50.0) {
            1e-6
        } else {
            1e-9
        };
        for root in &roots {
            let value = p.evaluate(root);
            let magnitude = value.distance_to(&Complex::ZERO);
            assert!(
                magnitude < tolerance,
                "P({root}) = {value} (|P| = {magnitude:e}) for degree {}",
                p.degree()
            );
        }
    }
}

#[test]
fn coefficient_counts_match_degree() {
    for roots in sample_root_lists() {
        let p = Polynomial::from_roots(&roots);
        assert_eq!(p.coefficients().len(), roots.len() + 1);
        assert_eq!(p.derivative_coefficients().len(), roots.len());
    }
}

#[test]
fn leading_coefficient_is_always_one() {
    for roots in sample_root_lists() {
        let p = Polynomial::from_roots(&roots);
        let leading = *p.coefficients().last().unwrap();
        assert!(leading.distance_to(&Complex::ONE) < 1e-12);
    }
}

#[test]
fn derivative_matches_finite_difference() {
    let roots = vec![
        Complex::new(1.0, 1.0),
        Complex::new(-2.0, 0.5),
        Complex::new(0.0, -1.5),
    ];
    let p = Polynomial::from_roots(&roots);
    let z = Complex::new(0.7, -0.3);
    let h = 1e-6;

    let analytic = p.evaluate_derivative(&z);
    let forward = p.evaluate(&Complex::new(z.re + h, z.im));
    let backward = p.evaluate(&Complex::new(z.re - h, z.im));
    let numeric = forward.sub(&backward).scale(1.0 / (2.0 * h));

    assert!(
        analytic.distance_to(&numeric) < 1e-5,
        "analytic {analytic} vs numeric {numeric}"
    );
}
