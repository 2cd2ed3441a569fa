//! Per-point Newton-Raphson iteration and stop rules.

use newtonscope_core::{Complex, MathError, Polynomial, RenderConfig, StopRule};

/// One Newton step: `z − P(z)/P′(z)`.
///
/// A derivative evaluating to exactly (0, 0) surfaces as `DivisionByZero`;
/// callers classify the point non-convergent and move on.
#[inline]
pub fn newton_step(polynomial: &Polynomial, z: &Complex) -> Result<Complex, MathError> {
    let correction = polynomial
        .evaluate(z)
        .div(&polynomial.evaluate_derivative(z))?;
    Ok(z.sub(&correction))
}

/// First root within `epsilon` of `z`, by root index order.
pub fn proximity(z: &Complex, roots: &[Complex], epsilon: f64) -> Option<usize> {
    roots.iter().position(|root| z.distance_to(root) < epsilon)
}

/// Apply the configured stop rule to the newest iterate.
///
/// The step rule attributes via proximity once consecutive iterates are
/// within epsilon, and that attribution can still come up empty when no root
/// is near the settled point. That asymmetry with the proximity rule is
/// long-standing behavior the renderer depends on; do not collapse the two.
pub fn check_stop(
    rule: StopRule,
    z_new: &Complex,
    z_prev: &Complex,
    roots: &[Complex],
    epsilon: f64,
) -> Option<usize> {
    match rule {
        StopRule::Proximity => proximity(z_new, roots, epsilon),
        StopRule::Step => {
            if z_new.distance_to(z_prev) < epsilon {
                proximity(z_new, roots, epsilon)
            } else {
                None
            }
        }
    }
}

/// How a single plane point resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The iteration hit the stop rule; `iterations` is the count of Newton
    /// steps taken (1-based).
    Converged { root: usize, iterations: u32 },
    /// Iteration budget exhausted, or the derivative vanished at an iterate.
    Diverged,
}

/// Classify one plane point, independent of any pixel buffer. This is the
/// unoptimized per-pixel path; the trajectory-coloring path lives in the
/// renderer because it needs buffer access mid-walk.
pub fn solve(z0: Complex, roots: &[Complex], polynomial: &Polynomial, config: &RenderConfig) -> Outcome {
    let mut z = z0;
    for k in 0..config.iteration_max() {
        let next = match newton_step(polynomial, &z) {
            Ok(next) => next,
            Err(MathError::DivisionByZero) => return Outcome::Diverged,
        };
        if let Some(root) = check_stop(config.stop_rule, &next, &z, roots, config.epsilon()) {
            return Outcome::Converged {
                root,
                iterations: k + 1,
            };
        }
        z = next;
    }
    Outcome::Diverged
}

#[cfg(test)]
mod tests {
    use super::*;
    use newtonscope_core::RootSet;

    fn quadratic() -> RootSet {
        // X² - 1, roots ±1.
        RootSet::from_points(&[Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)])
    }

    #[test]
    fn newton_step_on_quadratic() {
        // z = 2: z - (z²-1)/(2z) = 2 - 3/4 = 1.25
        let set = quadratic();
        let next = newton_step(set.polynomial(), &Complex::new(2.0, 0.0)).unwrap();
        assert!(next.distance_to(&Complex::new(1.25, 0.0)) < 1e-12);
    }

    #[test]
    fn newton_step_fails_on_vanishing_derivative() {
        // Constant polynomial: derivative is identically zero.
        let set = RootSet::new();
        let result = newton_step(set.polynomial(), &Complex::new(1.0, 1.0));
        assert_eq!(result, Err(MathError::DivisionByZero));
    }

    #[test]
    fn newton_step_fails_at_critical_point() {
        // X² - 1 has P'(0) = 0.
        let set = quadratic();
        let result = newton_step(set.polynomial(), &Complex::ZERO);
        assert_eq!(result, Err(MathError::DivisionByZero));
    }

    #[test]
    fn proximity_returns_first_match() {
        let roots = [Complex::new(0.0, 0.0), Complex::new(0.1, 0.0)];
        // Both roots are within 1.0 of z; index 0 wins.
        assert_eq!(proximity(&Complex::new(0.05, 0.0), &roots, 1.0), Some(0));
    }

    #[test]
    fn proximity_returns_none_when_all_far() {
        let roots = [Complex::new(5.0, 5.0)];
        assert_eq!(proximity(&Complex::ZERO, &roots, 0.5), None);
    }

    #[test]
    fn step_rule_requires_small_step() {
        let roots = [Complex::new(1.0, 0.0)];
        let near_root = Complex::new(1.001, 0.0);
        let far_prev = Complex::new(5.0, 0.0);
        // Large step: no convergence even though z_new sits on a root.
        assert_eq!(
            check_stop(StopRule::Step, &near_root, &far_prev, &roots, 0.01),
            None
        );
        // Small step: attributed via proximity.
        let close_prev = Complex::new(1.005, 0.0);
        assert_eq!(
            check_stop(StopRule::Step, &near_root, &close_prev, &roots, 0.01),
            Some(0)
        );
    }

    #[test]
    fn step_rule_falls_through_to_none_without_nearby_root() {
        // Consecutive iterates agree, but the settled point is nowhere near a
        // root: the attribution comes up empty and the iteration continues.
        let roots = [Complex::new(10.0, 0.0)];
        let z_new = Complex::new(0.0, 0.0);
        let z_prev = Complex::new(0.001, 0.0);
        assert_eq!(check_stop(StopRule::Step, &z_new, &z_prev, &roots, 0.01), None);
    }

    #[test]
    fn solve_converges_to_nearest_basin() {
        let set = quadratic();
        let mut config = RenderConfig::default();
        config.set_epsilon(0.25).unwrap();
        let outcome = solve(Complex::new(2.0, 0.0), set.roots(), set.polynomial(), &config);
        match outcome {
            Outcome::Converged { root, iterations } => {
                assert_eq!(root, 0);
                assert!(iterations <= 5, "took {iterations} iterations");
            }
            Outcome::Diverged => panic!("expected convergence"),
        }
    }

    #[test]
    fn solve_counts_first_iteration_as_one() {
        // Seeded exactly on a root, the first step stays put and proximity
        // fires immediately.
        let set = quadratic();
        let mut config = RenderConfig::default();
        config.set_epsilon(0.25).unwrap();
        let outcome = solve(Complex::new(1.0, 0.0), set.roots(), set.polynomial(), &config);
        assert_eq!(
            outcome,
            Outcome::Converged {
                root: 0,
                iterations: 1
            }
        );
    }

    #[test]
    fn solve_diverges_on_exhausted_budget() {
        // X² + 1 from a real seed: the iteration never leaves the real axis
        // and never approaches ±i.
        let set = RootSet::from_points(&[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]);
        let mut config = RenderConfig::default();
        config.set_iteration_max(10).unwrap();
        config.set_epsilon(0.1).unwrap();
        let outcome = solve(Complex::new(0.7, 0.0), set.roots(), set.polynomial(), &config);
        assert_eq!(outcome, Outcome::Diverged);
    }

    #[test]
    fn solve_diverges_on_zero_derivative_seed() {
        let set = quadratic();
        let config = RenderConfig::default();
        let outcome = solve(Complex::ZERO, set.roots(), set.polynomial(), &config);
        assert_eq!(outcome, Outcome::Diverged);
    }
}
