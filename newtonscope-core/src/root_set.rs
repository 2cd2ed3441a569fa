//! The ordered, capacity-bounded root collection.
//!
//! `RootSet` is the single source of truth for the polynomial under study:
//! every mutation synchronously rebuilds the expanded polynomial, and count
//! changes rebuild the palette, so renders never observe stale derived state.
//!
//! Roots follow a stack discipline: they are appended at the tail and only
//! ever removed from the tail. Indices therefore stay stable for the lifetime
//! of a root, which is what on-screen markers key off.

use crate::complex::Complex;
use crate::palette::{rainbow_palette, Rgb};
use crate::polynomial::Polynomial;

/// Hard cap on the root count.
pub const MAX_ROOTS: usize = 30;

/// The default three-root configuration: one real root and a conjugate pair.
pub const DEFAULT_ROOTS: [Complex; 3] = [
    Complex { re: 5.0, im: 0.0 },
    Complex { re: -3.0, im: 2.0 },
    Complex { re: -3.0, im: -2.0 },
];

/// Degree-7 demo configuration: a regular hexagon of radius 5 around the
/// origin, plus the origin itself.
pub const DEMO_ROOTS: [Complex; 7] = [
    Complex { re: 0.0, im: 0.0 },
    Complex { re: 2.5, im: 4.33 },
    Complex { re: -2.5, im: 4.33 },
    Complex { re: -5.0, im: 0.0 },
    Complex { re: -2.5, im: -4.33 },
    Complex { re: 2.5, im: -4.33 },
    Complex { re: 5.0, im: 0.0 },
];

#[derive(Clone, Debug)]
pub struct RootSet {
    roots: Vec<Complex>,
    palette: Vec<Rgb>,
    polynomial: Polynomial,
}

impl RootSet {
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            palette: Vec::new(),
            polynomial: Polynomial::from_roots(&[]),
        }
    }

    /// Build a root set from an initial point list, clamped to capacity.
    pub fn from_points(points: &[Complex]) -> Self {
        let mut set = Self::new();
        for point in points {
            set.append(*point);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Append a root at `point`. Silently does nothing at capacity.
    pub fn append(&mut self, point: Complex) {
        if self.roots.len() >= MAX_ROOTS {
            return;
        }
        self.roots.push(point);
        self.palette = rainbow_palette(self.roots.len());
        self.polynomial = Polynomial::from_roots(&self.roots);
    }

    /// Drop the tail root. Silently does nothing when empty.
    pub fn remove_last(&mut self) {
        if self.roots.pop().is_none() {
            return;
        }
        self.palette = rainbow_palette(self.roots.len());
        self.polynomial = Polynomial::from_roots(&self.roots);
    }

    /// Move the root at `index` to `point`. Out-of-range indices are ignored.
    ///
    /// The palette is untouched: the count did not change, and the moved
    /// root keeps its color.
    pub fn set_position(&mut self, index: usize, point: Complex) {
        let Some(root) = self.roots.get_mut(index) else {
            return;
        };
        *root = point;
        self.polynomial = Polynomial::from_roots(&self.roots);
    }

    /// Clear back to zero roots.
    pub fn reset(&mut self) {
        self.roots.clear();
        self.palette.clear();
        self.polynomial = Polynomial::from_roots(&[]);
    }
}

impl Default for RootSet {
    fn default() -> Self {
        Self::new()
    }
}
