//! Scalar type used for coordinates, masses and stiffness.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// The coordinate scalar of a scene, `f32` or `f64`.
///
/// `Display` writes the shortest representation that reads back to the same
/// value, which is what ends up in re-encoded path data.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + Debug
    + Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5), for energy terms.
    fn half() -> Self;
    /// Pi, for Stokes drag.
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Exact for both widths; used for small integral constants.
    fn from_f32(v: f32) -> Self;
    /// Narrowed for `f32`. Parsed numbers and decimal defaults go through here.
    fn from_f64(v: f64) -> Self;
    /// False for NaN and the infinities.
    fn is_finite(self) -> bool;

    /// True if `|self| < epsilon`.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:path, $abs:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn pi() -> Self { core::$t::consts::PI }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn abs(self) -> Self { $abs(self) }
            fn from_f32(v: f32) -> Self { v as $t }
            fn from_f64(v: f64) -> Self { v as $t }
            fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::fabsf);
impl_float!(f64, libm::sqrt, libm::fabs);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_from_f64() {
        assert_eq!(<f32 as Float>::from_f64(0.1), 0.1f32);
        assert_eq!(<f64 as Float>::from_f32(0.5), 0.5f64);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f64));
        assert!(!Float::is_finite(f64::NAN));
        assert!(!Float::is_finite(f32::INFINITY));
    }
}
