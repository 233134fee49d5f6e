use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::element::Element;
use crate::error::{GeometryError, GeometryErrorKind};
use crate::scalar::{clamp01, scalar_max, scalar_min, scalar_pow};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl_vector!(Vector2 { x, y }, 2);

impl<T: Element> Vector2<T> {
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }

    /// Returns a vector orthogonal to `self`, with its x component fixed to one.
    ///
    /// The y component comes from solving `x1 * 1 + y1 * y2 = 0`, so `self.y` must be
    /// non-zero. The result is not normalized.
    ///
    /// For integer vectors a zero y still panics on the division even when precondition
    /// traps are off, and `-x` overflows for `i32::MIN`. Use `try_perpendicular` there.
    pub fn perpendicular(self) -> Self {
        precondition!(
            self.y != T::zero(),
            "cannot solve for the perpendicular of {}, its y component is zero",
            self
        );
        Self::new(T::one(), -self.x / self.y)
    }

    pub fn try_perpendicular(self) -> Result<Self, GeometryError> {
        if self.y == T::zero() {
            return Err(GeometryError::new(
                GeometryErrorKind::ZeroYComponent,
                "perpendicular",
            ));
        }
        Ok(Self::new(T::one(), -self.x / self.y))
    }
}
