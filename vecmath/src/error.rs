use core::fmt;

/// An operation was given a vector it cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryError {
    kind: GeometryErrorKind,
    operation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryErrorKind {
    /// The vector has zero magnitude, so it has no direction.
    ZeroMagnitude,
    /// The y component is zero, so the perpendicular cannot be solved for.
    ZeroYComponent,
}

impl GeometryError {
    pub(crate) fn new(kind: GeometryErrorKind, operation: &'static str) -> Self {
        Self { kind, operation }
    }

    pub(crate) fn zero_magnitude(operation: &'static str) -> Self {
        Self::new(GeometryErrorKind::ZeroMagnitude, operation)
    }

    pub fn kind(&self) -> GeometryErrorKind {
        self.kind
    }

    /// Name of the operation that rejected its input.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for GeometryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryErrorKind::ZeroMagnitude => write!(f, "vector magnitude is zero"),
            GeometryErrorKind::ZeroYComponent => write!(f, "y component is zero"),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed: {}.", self.operation, self.kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
