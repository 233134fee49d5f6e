/// Checks a geometric precondition.
///
/// Traps with the given message when debug assertions or the `assert` feature are
/// enabled. Otherwise the violation is logged and the caller carries on, which usually
/// ends in an infinite or NaN result.
macro_rules! precondition {
    ($cond: expr, $($arg: tt)+) => {
        if !$cond {
            if cfg!(any(debug_assertions, feature = "assert")) {
                panic!($($arg)+);
            } else {
                log::warn!($($arg)+);
            }
        }
    };
}

/// Implements the contract shared by every vector size.
///
/// The first field is listed apart from the rest so that sums and the `Display` output
/// can be written without a leading separator.
macro_rules! impl_vector {
    ($name: ident { $first: ident $(, $rest: ident)* }, $len: expr) => {
        impl<T> $name<T> {
            pub const fn new($first: T $(, $rest: T)*) -> Self {
                Self { $first $(, $rest)* }
            }
        }

        impl<T: Copy> $name<T> {
            /// Sets every component to `value`.
            pub fn splat(value: T) -> Self {
                Self { $first: value $(, $rest: value)* }
            }

            pub fn to_array(self) -> [T; $len] {
                [self.$first $(, self.$rest)*]
            }

            /// Applies `f` to each component.
            pub fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
                Self { $first: f(self.$first) $(, $rest: f(self.$rest))* }
            }

            fn zip_map<F: FnMut(T, T) -> T>(self, other: Self, mut f: F) -> Self {
                Self {
                    $first: f(self.$first, other.$first)
                    $(, $rest: f(self.$rest, other.$rest))*
                }
            }
        }

        impl<T: Element> $name<T> {
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            pub fn one() -> Self {
                Self::splat(T::one())
            }

            pub fn dot(self, other: Self) -> T {
                self.$first * other.$first $(+ self.$rest * other.$rest)*
            }

            /// Sum of the squared components, accumulated in `T`.
            ///
            /// For `i32` this overflows once the sum passes `i32::MAX` (a single component
            /// above 46340 is enough). `magnitude` accumulates in `f32` and does not.
            pub fn sqr_magnitude(self) -> T {
                self.dot(self)
            }

            pub fn magnitude(self) -> f32 {
                self.dot_f32(self).sqrt()
            }

            /// Dot product accumulated in `f32`, so integer vectors cannot overflow.
            fn dot_f32(self, other: Self) -> f32 {
                self.$first.to_f32() * other.$first.to_f32()
                    $(+ self.$rest.to_f32() * other.$rest.to_f32())*
            }

            /// Scales every component by `factor`, computing in `f32`.
            fn scaled_by(self, factor: f32) -> Self {
                self.map(|c| T::from_f32(c.to_f32() * factor))
            }

            fn divided_by(self, divisor: f32) -> Self {
                self.map(|c| T::from_f32(c.to_f32() / divisor))
            }

            /// `c / divisor * factor` per component, truncated back to `T` only once.
            fn rescaled(self, divisor: f32, factor: f32) -> Self {
                self.map(|c| T::from_f32(c.to_f32() / divisor * factor))
            }

            /// Returns the vector rescaled to unit magnitude.
            ///
            /// The magnitude must be non-zero.
            pub fn normalized(self) -> Self {
                let magnitude = self.magnitude();
                precondition!(
                    magnitude != 0.0,
                    "cannot normalize the zero-magnitude vector {}",
                    self
                );
                self.divided_by(magnitude)
            }

            pub fn try_normalized(self) -> Result<Self, GeometryError> {
                let magnitude = self.magnitude();
                if magnitude == 0.0 {
                    return Err(GeometryError::zero_magnitude("normalized"));
                }
                Ok(self.divided_by(magnitude))
            }

            pub fn normalize(vec: Self) -> Self {
                vec.normalized()
            }

            /// Angle between the two vectors in radians, in `[0, PI]`.
            ///
            /// Neither vector may have zero magnitude. The cosine is clamped to
            /// `[-1, 1]` before `acos`, so rounding never produces NaN for valid input.
            pub fn angle(from: Self, to: Self) -> f32 {
                let (mag_from, mag_to) = (from.magnitude(), to.magnitude());
                precondition!(
                    mag_from != 0.0 && mag_to != 0.0,
                    "cannot measure the angle between {} and {}",
                    from,
                    to
                );
                Self::angle_with(from, to, mag_from * mag_to)
            }

            pub fn try_angle(from: Self, to: Self) -> Result<f32, GeometryError> {
                let (mag_from, mag_to) = (from.magnitude(), to.magnitude());
                if mag_from == 0.0 || mag_to == 0.0 {
                    return Err(GeometryError::zero_magnitude("angle"));
                }
                Ok(Self::angle_with(from, to, mag_from * mag_to))
            }

            fn angle_with(from: Self, to: Self, magnitudes: f32) -> f32 {
                let cos = from.dot_f32(to) / magnitudes;
                scalar_max(scalar_min(cos, 1.0), -1.0).acos()
            }

            /// Rescales `vec` to exactly `magnitude`, whatever its current length.
            ///
            /// `vec` must have non-zero magnitude.
            pub fn clamp_magnitude(vec: Self, magnitude: f32) -> Self {
                let current = vec.magnitude();
                precondition!(
                    current != 0.0,
                    "cannot rescale the zero-magnitude vector {}",
                    vec
                );
                vec.rescaled(current, magnitude)
            }

            pub fn try_clamp_magnitude(vec: Self, magnitude: f32) -> Result<Self, GeometryError> {
                let current = vec.magnitude();
                if current == 0.0 {
                    return Err(GeometryError::zero_magnitude("clamp_magnitude"));
                }
                Ok(vec.rescaled(current, magnitude))
            }

            pub fn distance(left: Self, right: Self) -> f32 {
                (left - right).magnitude()
            }

            /// Interpolates between `left` and `right` with `t` clamped to `[0, 1]`.
            pub fn lerp(left: Self, right: Self, t: f32) -> Self {
                Self::lerp_unclamped(left, right, clamp01(t))
            }

            pub fn lerp_unclamped(left: Self, right: Self, t: f32) -> Self {
                left + (right - left).scaled_by(t)
            }

            /// Component-wise maximum. Equal components come from `self`.
            pub fn max(self, other: Self) -> Self {
                self.zip_map(other, scalar_max)
            }

            /// Component-wise minimum. Equal components come from `self`.
            pub fn min(self, other: Self) -> Self {
                self.zip_map(other, scalar_min)
            }

            pub fn pow(self, exp: u32) -> Self {
                self.map(|c| scalar_pow(c, exp))
            }

            /// Component-wise product.
            pub fn scale(self, other: Self) -> Self {
                self.zip_map(other, |a, b| a * b)
            }
        }

        impl<T: Copy> From<[T; $len]> for $name<T> {
            fn from(value: [T; $len]) -> Self {
                let [$first $(, $rest)*] = value;
                Self { $first $(, $rest)* }
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(value: $name<T>) -> Self {
                [value.$first $(, value.$rest)*]
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Neg<Output = T>,
        {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self {
                    $first: -self.$first
                    $(, $rest: -self.$rest)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Add<T, Output = T>,
        {
            type Output = Self;
            fn add(self, other: Self) -> Self::Output {
                Self {
                    $first: self.$first + other.$first
                    $(, $rest: self.$rest + other.$rest)*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Sub<T, Output = T>,
        {
            type Output = Self;
            fn sub(self, other: Self) -> Self::Output {
                Self {
                    $first: self.$first - other.$first
                    $(, $rest: self.$rest - other.$rest)*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<T, Output = T>,
        {
            type Output = Self;
            fn mul(self, o: T) -> Self::Output {
                Self {
                    $first: self.$first * o
                    $(, $rest: self.$rest * o)*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<T, Output = T>,
        {
            type Output = Self;
            fn div(self, o: T) -> Self::Output {
                Self {
                    $first: self.$first / o
                    $(, $rest: self.$rest / o)*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: AddAssign<T>,
        {
            fn add_assign(&mut self, other: Self) {
                self.$first += other.$first;
                $(self.$rest += other.$rest;)*
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: SubAssign<T>,
        {
            fn sub_assign(&mut self, other: Self) {
                self.$first -= other.$first;
                $(self.$rest -= other.$rest;)*
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + MulAssign<T>,
        {
            fn mul_assign(&mut self, o: T) {
                self.$first *= o;
                $(self.$rest *= o;)*
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + DivAssign<T>,
        {
            fn div_assign(&mut self, o: T) {
                self.$first /= o;
                $(self.$rest /= o;)*
            }
        }

        impl_scalar_mul!($name: f32, i32);

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}", self.$first)?;
                $(write!(f, ", {}", self.$rest)?;)*
                write!(f, ")")
            }
        }
    };
}

/// Lets a scalar of each listed element type multiply a vector from the left.
macro_rules! impl_scalar_mul {
    ($name: ident: $($t: ty),*) => {
        $(
            impl Mul<$name<$t>> for $t {
                type Output = $name<$t>;
                fn mul(self, o: $name<$t>) -> Self::Output {
                    o * self
                }
            }
        )*
    };
}
