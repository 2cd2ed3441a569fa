//! Monic polynomials built from their roots.
//!
//! Coefficients are stored in ascending degree order: the coefficient of
//! degree `i` lives at index `i`. A polynomial built from `n` roots is the
//! expansion of `∏(X − root_i)`, so it is always monic of degree `n`.

use crate::complex::Complex;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
    /// Derivative coefficients, ascending degree; empty for degree 0.
    derivative: Vec<Complex>,
}

impl Polynomial {
    /// Expand `∏(X − root_i)` by iterative convolution.
    ///
    /// Starting from the constant polynomial 1, each root `z` turns the
    /// current coefficient sequence `p` into `shift_up(p) + p·(−z)`, where
    /// `shift_up` prepends a zero coefficient. An empty root list yields the
    /// constant polynomial 1.
    pub fn from_roots(roots: &[Complex]) -> Self {
        let mut coefficients = vec![Complex::ONE];
        for root in roots {
            let neg_root = root.neg();
            let scaled: Vec<Complex> = coefficients.iter().map(|c| c.mul(&neg_root)).collect();
            coefficients.insert(0, Complex::ZERO);
            for (i, term) in scaled.iter().enumerate() {
                coefficients[i] = coefficients[i].add(term);
            }
        }

        let derivative = coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.scale(i as f64))
            .collect();

        Self {
            coefficients,
            derivative,
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    pub fn derivative_coefficients(&self) -> &[Complex] {
        &self.derivative
    }

    /// Evaluate at `z` with Horner's method, highest degree first.
    pub fn evaluate(&self, z: &Complex) -> Complex {
        let mut acc = self.coefficients[self.degree()];
        for c in self.coefficients.iter().rev().skip(1) {
            acc = acc.mul(z).add(c);
        }
        acc
    }

    /// Evaluate the derivative at `z`. A degree-0 polynomial has the zero
    /// derivative everywhere.
    pub fn evaluate_derivative(&self, z: &Complex) -> Complex {
        let Some(&highest) = self.derivative.last() else {
            return Complex::ZERO;
        };
        let mut acc = highest;
        for c in self.derivative.iter().rev().skip(1) {
            acc = acc.mul(z).add(c);
        }
        acc
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(X) = ({})", self.coefficients[0])?;
        for (i, c) in self.coefficients.iter().enumerate().skip(1) {
            write!(f, " + ({})X^{}", c, i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_root_list_is_constant_one() {
        let p = Polynomial::from_roots(&[]);
        assert_eq!(p.degree(), 0);
        assert_eq!(p.coefficients(), &[Complex::ONE]);
        assert!(p.derivative_coefficients().is_empty());
    }

    #[test]
    fn single_root_expands_to_linear() {
        // (X - 2) => coefficients [-2, 1]
        let p = Polynomial::from_roots(&[Complex::new(2.0, 0.0)]);
        assert_eq!(p.coefficients(), &[Complex::new(-2.0, 0.0), Complex::ONE]);
    }

    #[test]
    fn conjugate_pair_expands_to_real_quadratic() {
        // (X - i)(X + i) = X² + 1 => coefficients [1, 0, 1]
        let p = Polynomial::from_roots(&[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]);
        assert_eq!(
            p.coefficients(),
            &[Complex::ONE, Complex::ZERO, Complex::ONE]
        );
    }

    #[test]
    fn symmetric_pair_expands_to_x_squared_minus_one() {
        // (X - 1)(X + 1) = X² - 1
        let p = Polynomial::from_roots(&[Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]);
        assert_eq!(
            p.coefficients(),
            &[Complex::new(-1.0, 0.0), Complex::ZERO, Complex::ONE]
        );
    }

    #[test]
    fn n_roots_give_n_plus_one_coefficients() {
        let roots: Vec<Complex> = (0..7).map(|i| Complex::new(i as f64, -(i as f64))).collect();
        let p = Polynomial::from_roots(&roots);
        assert_eq!(p.coefficients().len(), 8);
        assert_eq!(p.derivative_coefficients().len(), 7);
        // Always monic.
        assert_eq!(*p.coefficients().last().unwrap(), Complex::ONE);
    }

    #[test]
    fn evaluates_to_zero_at_every_root() {
        let roots = [
            Complex::new(5.0, 0.0),
            Complex::new(-3.0, 2.0),
            Complex::new(-3.0, -2.0),
        ];
        let p = Polynomial::from_roots(&roots);
        for root in &roots {
            let value = p.evaluate(root);
            assert!(
                value.distance_to(&Complex::ZERO) < 1e-10,
                "P({root}) = {value}, expected ~0"
            );
        }
    }

    #[test]
    fn derivative_coefficients_follow_power_rule() {
        // X² - 1 => derivative 2X => coefficients [0, 2]
        let p = Polynomial::from_roots(&[Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]);
        assert_eq!(
            p.derivative_coefficients(),
            &[Complex::ZERO, Complex::new(2.0, 0.0)]
        );
    }

    #[test]
    fn horner_evaluation_matches_direct_expansion() {
        // P(X) = (X - 1)(X - 2) = X² - 3X + 2, P(4) = 16 - 12 + 2 = 6
        let p = Polynomial::from_roots(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)]);
        let value = p.evaluate(&Complex::new(4.0, 0.0));
        assert!(value.distance_to(&Complex::new(6.0, 0.0)) < 1e-12);
        // P'(X) = 2X - 3, P'(4) = 5
        let d = p.evaluate_derivative(&Complex::new(4.0, 0.0));
        assert!(d.distance_to(&Complex::new(5.0, 0.0)) < 1e-12);
    }

    #[test]
    fn degree_zero_derivative_evaluates_to_zero() {
        let p = Polynomial::from_roots(&[]);
        assert_eq!(p.evaluate_derivative(&Complex::new(3.0, 1.0)), Complex::ZERO);
    }

    #[test]
    fn display_lists_coefficients_by_degree() {
        let p = Polynomial::from_roots(&[Complex::new(2.0, 0.0)]);
        assert_eq!(
            p.to_string(),
            "P(X) = (-2.000 + i0.000) + (1.000 + i0.000)X^1"
        );
    }
}
