//! Fixed-size numeric vectors with two, three and four components.
//!
//! Every vector is a plain `Copy` aggregate over an [`Element`] type. The crate ships
//! `f32` and `i32` instantiations of each size, see [`F32x2`] and friends.
//!
//! Operations that divide by a magnitude have a precondition that the magnitude is
//! non-zero. A violation traps when debug assertions (or the `assert` feature) are
//! enabled and otherwise continues with non-finite results. The `try_*` variants report
//! the violation as a [`GeometryError`] instead.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod macros;

mod convert;
pub mod element;
pub mod error;
pub mod scalar;
mod vector2;
mod vector3;
mod vector4;

pub use element::Element;
pub use error::{GeometryError, GeometryErrorKind};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

pub type F32x2 = Vector2<f32>;
pub type F32x3 = Vector3<f32>;
pub type F32x4 = Vector4<f32>;
pub type I32x2 = Vector2<i32>;
pub type I32x3 = Vector3<i32>;
pub type I32x4 = Vector4<i32>;
