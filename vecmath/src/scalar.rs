//! Scalar helpers shared by the vector operations.
use num_traits::One;

/// Returns the greater of the two values. Equal values return `left`.
pub fn scalar_max<T: PartialOrd>(left: T, right: T) -> T {
    if right > left {
        right
    } else {
        left
    }
}

/// Returns the lesser of the two values. Equal values return `left`.
pub fn scalar_min<T: PartialOrd>(left: T, right: T) -> T {
    if right < left {
        right
    } else {
        left
    }
}

/// Restricts `t` to `[0.0, 1.0]`.
pub fn clamp01(t: f32) -> f32 {
    scalar_max(scalar_min(1.0, t), 0.0)
}

/// Raises `base` to an integer power by repeated squaring.
pub fn scalar_pow<T>(base: T, exp: u32) -> T
where
    T: Copy + One + core::ops::Mul<Output = T>,
{
    match exp {
        0 => T::one(),
        1 => base,
        _ if exp & 1 != 0 => base * scalar_pow(base * base, exp / 2),
        _ => scalar_pow(base * base, exp / 2),
    }
}
