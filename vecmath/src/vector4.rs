use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::element::Element;
use crate::error::GeometryError;
use crate::scalar::{clamp01, scalar_max, scalar_min, scalar_pow};
use crate::vector3::Vector3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector!(Vector4 { x, y, z, w }, 4);

impl<T: Element> Vector4<T> {
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// Unit vector along +w.
    pub fn ana() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero(), T::zero())
    }

    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), -T::one(), T::zero())
    }

    /// Unit vector along -w.
    pub fn kata() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), -T::one())
    }

    /// Cross product of the xyz parts. `w` is ignored on both sides.
    ///
    /// Meant for directions padded out to four components, not a 4D wedge product.
    pub fn cross(self, other: Self) -> Vector3<T> {
        self.truncate_to_vector3().cross(other.truncate_to_vector3())
    }
}
