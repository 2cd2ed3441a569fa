//! Complex numbers in algebraic form.
//!
//! Immutable-semantics value type: every operation returns a new value, so a
//! Newton trajectory can never alias state owned by another trajectory.

use crate::error::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiply by a real scalar.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    /// Complex division.
    ///
    /// Fails only when `other` is exactly (0, 0); near-zero divisors go
    /// through the usual floating-point formula and may overflow to
    /// infinities, which downstream classification treats as divergence.
    #[inline]
    pub fn div(&self, other: &Self) -> Result<Self, MathError> {
        if other.re == 0.0 && other.im == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        let denom = other.re * other.re + other.im * other.im;
        Ok(Self {
            re: (self.re * other.re + self.im * other.im) / denom,
            im: (self.im * other.re - self.re * other.im) / denom,
        })
    }

    #[inline]
    pub fn neg(&self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }

    /// Euclidean distance between two plane points.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dre = self.re - other.re;
        let dim = self.im - other.im;
        (dre * dre + dim * dim).sqrt()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} + i{:.3}", self.re, self.im)
    }
}
