use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::element::Element;
use crate::error::GeometryError;
use crate::scalar::{clamp01, scalar_max, scalar_min, scalar_pow};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector!(Vector3 { x, y, z }, 3);

impl<T: Element> Vector3<T> {
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }

    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_axes() {
        let test_cases = [
            (Vector3::<i32>::right(), Vector3::new(1, 0, 0)),
            (Vector3::up(), Vector3::new(0, 1, 0)),
            (Vector3::forward(), Vector3::new(0, 0, 1)),
            (Vector3::left(), Vector3::new(-1, 0, 0)),
            (Vector3::down(), Vector3::new(0, -1, 0)),
            (Vector3::back(), Vector3::new(0, 0, -1)),
        ];
        for (axis, expected) in test_cases {
            assert_eq!(axis, expected);
            assert_eq!(axis.sqr_magnitude(), 1);
        }
    }

    #[test]
    fn test_cross() {
        let right = Vector3::<i32>::right();
        let up = Vector3::up();
        assert_eq!(right.cross(up), Vector3::forward());
        assert_eq!(up.cross(right), Vector3::back());
        assert_eq!(Vector3::cross(up, Vector3::forward()), right);

        let a = Vector3::new(2, 3, 4);
        let b = Vector3::new(5, 6, 7);
        assert_eq!(a.cross(b), Vector3::new(-3, 6, -3));
        assert_eq!(a.cross(a), Vector3::zero());
    }

    #[test]
    fn test_arithmetic() {
        let mut v = Vector3::new(1.0f32, 2.0, 3.0);
        v += Vector3::one();
        v *= 2.0;
        assert_eq!(v, Vector3::new(4.0, 6.0, 8.0));
        v -= Vector3::splat(2.0);
        v /= 2.0;
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(-v + v, Vector3::zero());
        assert_eq!(v / 2.0 * 2.0f32, v);
        assert_eq!(0.5f32 * v, v / 2.0);
    }

    #[test]
    fn test_magnitude_and_normalized() {
        let v = Vector3::new(2.0f32, 3.0, 6.0);
        assert_eq!(v.sqr_magnitude(), 49.0);
        assert_eq!(v.magnitude(), 7.0);
        assert_relative_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-6);
        assert_eq!(Vector3::normalize(Vector3::new(0, 0, -9)), Vector3::back());
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "assert"))]
    #[should_panic]
    fn test_clamp_magnitude_zero_traps() {
        Vector3::clamp_magnitude(Vector3::<f32>::zero(), 1.0);
    }

    #[test]
    fn test_angle() {
        let angle = Vector3::angle(Vector3::new(1.0f32, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(angle, core::f32::consts::FRAC_PI_4, epsilon = 1e-6);
        assert!(Vector3::try_angle(Vector3::<f32>::zero(), Vector3::up()).is_err());
    }

    #[test]
    fn test_distance_dot_scale() {
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let b = Vector3::new(3.0f32, 4.0, 4.0);
        assert_eq!(Vector3::distance(a, b), 3.0);
        assert_eq!(Vector3::dot(a, b), 23.0);
        assert_eq!(
            Vector3::scale(Vector3::new(2, 3, 4), Vector3::new(5, 6, 7)),
            Vector3::new(10, 18, 28)
        );
    }

    #[test]
    fn test_lerp_max_min_pow() {
        let a = Vector3::new(0.0f32, 4.0, -4.0);
        let b = Vector3::new(4.0f32, 0.0, 4.0);
        assert_eq!(Vector3::lerp(a, b, 0.25), Vector3::new(1.0, 3.0, -2.0));
        assert_eq!(Vector3::max(a, b), Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(Vector3::min(a, b), Vector3::new(0.0, 0.0, -4.0));
        assert_eq!(Vector3::new(-1, 2, 3).pow(2), Vector3::new(1, 4, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}
