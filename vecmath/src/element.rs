//! Numeric element types
use core::fmt::{Debug, Display};

use num_traits::{AsPrimitive, NumAssign, Signed};

/// A vector component.
///
/// Magnitudes, distances and angles are always computed in `f32`, so every element
/// converts to and from it. Converting back to an integer element truncates toward zero
/// and saturates at the integer bounds (NaN becomes zero).
pub trait Element:
    Copy + PartialOrd + Debug + Display + Signed + NumAssign + AsPrimitive<f32>
{
    fn to_f32(self) -> f32 {
        self.as_()
    }

    fn from_f32(value: f32) -> Self;
}

macro_rules! impl_element {
    ($($t: ty),*) => {
        $(
            impl Element for $t {
                fn from_f32(value: f32) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_element!(f32, i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f32() {
        assert_eq!(Element::to_f32(3i32), 3.0);
        assert_eq!(Element::to_f32(-2.5f32), -2.5);
    }

    #[test]
    fn test_from_f32_truncates() {
        let test_cases = [
            (0.6, 0),
            (1.9, 1),
            (-1.9, -1),
            (f32::NAN, 0),
            (f32::INFINITY, i32::MAX),
            (f32::NEG_INFINITY, i32::MIN),
        ];
        for (input, expected) in test_cases {
            assert_eq!(<i32 as Element>::from_f32(input), expected);
        }
        assert_eq!(<f32 as Element>::from_f32(0.6), 0.6);
    }
}
