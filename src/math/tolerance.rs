//! Epsilon-aware scalar comparisons.
//!
//! Every geometric predicate in the crate goes through these operators so that
//! boxes touching within `EPSILON` are treated consistently.

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default tolerance used by the free comparison functions
pub const EPSILON: f64 = 1.0e-3;

/// A set of tolerant comparison operators sharing one epsilon
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Absolute difference under which two scalars compare equal
    pub epsilon: f64,
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon
    #[inline]
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// `a == b` within epsilon
    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// `a < b` by more than epsilon
    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        a < b && !self.eq(a, b)
    }

    /// `a <= b` within epsilon
    #[inline]
    pub fn lte(&self, a: f64, b: f64) -> bool {
        a < b || self.eq(a, b)
    }

    /// `a > b` by more than epsilon
    #[inline]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        a > b && !self.eq(a, b)
    }

    /// `a >= b` within epsilon
    #[inline]
    pub fn gte(&self, a: f64, b: f64) -> bool {
        a > b || self.eq(a, b)
    }

    /// `a == 0` within epsilon
    #[inline]
    pub fn zero(&self, a: f64) -> bool {
        self.eq(a, 0.0)
    }

    /// Sign of `a`, with values within epsilon of zero mapping to `0.0`
    #[inline]
    pub fn sign(&self, a: f64) -> f64 {
        if self.zero(a) {
            0.0
        } else if a > 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

/// Returns true if the two values are equal within `EPSILON`
#[inline]
pub fn eq(a: f64, b: f64) -> bool {
    Tolerance::default().eq(a, b)
}

/// Returns true if `a` is less than `b` by more than `EPSILON`
#[inline]
pub fn lt(a: f64, b: f64) -> bool {
    Tolerance::default().lt(a, b)
}

/// Returns true if `a` is less than or equal to `b` within `EPSILON`
#[inline]
pub fn lte(a: f64, b: f64) -> bool {
    Tolerance::default().lte(a, b)
}

/// Returns true if `a` is greater than `b` by more than `EPSILON`
#[inline]
pub fn gt(a: f64, b: f64) -> bool {
    Tolerance::default().gt(a, b)
}

/// Returns true if `a` is greater than or equal to `b` within `EPSILON`
#[inline]
pub fn gte(a: f64, b: f64) -> bool {
    Tolerance::default().gte(a, b)
}

/// Returns true if the value is zero within `EPSILON`
#[inline]
pub fn zero(a: f64) -> bool {
    Tolerance::default().zero(a)
}

/// Returns the tolerant sign of a value
#[inline]
pub fn sign(a: f64) -> f64 {
    Tolerance::default().sign(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_absorb_jitter() {
        assert!(eq(1.0, 1.0005));
        assert!(!eq(1.0, 1.002));
        assert!(lte(1.0005, 1.0));
        assert!(gte(1.0, 1.0005));
        assert!(!lt(1.0, 1.0005));
        assert!(lt(1.0, 1.5));
        assert!(!gt(1.0005, 1.0));
        assert!(gt(1.5, 1.0));
    }

    #[test]
    fn sign_collapses_near_zero() {
        assert_eq!(sign(0.0004), 0.0);
        assert_eq!(sign(-0.0004), 0.0);
        assert_eq!(sign(0.5), 1.0);
        assert_eq!(sign(-0.5), -1.0);
        assert!(zero(-0.0009));
    }

    #[test]
    fn custom_epsilon_is_respected() {
        let tight = Tolerance::new(1.0e-9);
        assert!(!tight.eq(1.0, 1.0005));
        assert!(tight.eq(1.0, 1.0 + 1.0e-12));
    }
}
