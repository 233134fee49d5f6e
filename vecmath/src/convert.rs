//! Conversions between vector sizes.
//!
//! Widening pads the new components with zero and never loses information, so it is
//! also available through `From`. Narrowing drops the trailing components and is only
//! available through the `truncate_to_*` methods, which keeps the loss visible at the
//! call site.
use num_traits::Zero;

use crate::{Vector2, Vector3, Vector4};

impl<T: Zero> Vector3<T> {
    /// `(x, y)` becomes `(x, y, 0)`.
    pub fn from_vector2(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y, T::zero())
    }
}

impl<T: Zero> Vector4<T> {
    /// `(x, y)` becomes `(x, y, 0, 0)`.
    pub fn from_vector2(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y, T::zero(), T::zero())
    }

    /// `(x, y, z)` becomes `(x, y, z, 0)`.
    pub fn from_vector3(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::zero())
    }
}

impl<T> Vector3<T> {
    /// Drops `z`.
    pub fn truncate_to_vector2(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T> Vector4<T> {
    /// Drops `z` and `w`.
    pub fn truncate_to_vector2(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Drops `w`.
    pub fn truncate_to_vector3(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T: Zero> From<Vector2<T>> for Vector3<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::from_vector2(v)
    }
}

impl<T: Zero> From<Vector2<T>> for Vector4<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::from_vector2(v)
    }
}

impl<T: Zero> From<Vector3<T>> for Vector4<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::from_vector3(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        let v = Vector2::new(1.0f32, 2.0);
        assert_eq!(Vector3::from_vector2(v), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(Vector4::from_vector2(v), Vector4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(
            Vector4::from_vector3(Vector3::new(1, 2, 3)),
            Vector4::new(1, 2, 3, 0)
        );
        assert_eq!(Vector3::from(Vector2::new(5, 6)), Vector3::new(5, 6, 0));
        let v: Vector4<i32> = Vector3::new(7, 8, 9).into();
        assert_eq!(v, Vector4::new(7, 8, 9, 0));
    }

    #[test]
    fn test_narrow() {
        assert_eq!(Vector3::new(1, 2, 3).truncate_to_vector2(), Vector2::new(1, 2));
        let v = Vector4::new(1, 2, 3, 4);
        assert_eq!(v.truncate_to_vector2(), Vector2::new(1, 2));
        assert_eq!(v.truncate_to_vector3(), Vector3::new(1, 2, 3));
    }

    #[test]
    fn test_widen_then_narrow_is_lossless() {
        let v = Vector2::new(3, 4);
        let wide = Vector4::from_vector2(v);
        assert_eq!(wide, Vector4::new(3, 4, 0, 0));
        assert_eq!(wide.truncate_to_vector2(), v);
    }

    #[test]
    fn test_narrow_then_widen_loses_components() {
        let v = Vector4::new(3, 4, 5, 6);
        let round_trip = Vector4::from_vector2(v.truncate_to_vector2());
        assert_eq!(round_trip, Vector4::new(3, 4, 0, 0));
        assert_ne!(round_trip, v);
    }
}
