//! # hamilton
//!
//! Quaternion algebra in pure Rust, no-std compatible. A quaternion is a
//! real part `w` plus three imaginary parts `x, y, z`, stored in that order.
//!
//! ## Quick start
//!
//! ```
//! use hamilton::{Quaternion, Vector3};
//!
//! // A quarter turn about Y, from Tait-Bryan angles in degrees.
//! let q = Quaternion::from_euler(0.0_f64, 0.0, 90.0);
//! let r = q.rotate(&Quaternion::new(0.0, 1.0, 0.0, 0.0));
//! assert!(r.w.abs() < 1e-12);
//! assert!((r.z + 1.0).abs() < 1e-12);
//!
//! // The rotation taking one direction onto another.
//! let from = Vector3::new(0.0_f64, 1.0, 0.0);
//! let to = Vector3::new(0.0, 0.0, 1.0);
//! let mut turn = Quaternion::between(&from, &to);
//! let v = turn.normalize().rotate_vector(&from);
//! assert!((v.z() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`] — [`Quaternion<T>`] value type. Addition, subtraction,
//!   Hamilton product, conjugate, inverse, dot product, in-place
//!   normalization and vector rotation. Conversion to and from Tait-Bryan
//!   angles in degrees (reported as roll about X, pitch about Z, yaw about
//!   Y), an XYZ Tait-Bryan constructor, and the vector-to-vector factory
//!   [`Quaternion::between`].
//!
//! - [`vector`] — [`Vector3<T>`], the 3-vector taken by `between` and
//!   vector rotation.
//!
//! - [`traits`] — [`FloatScalar`], the element trait (`f32`, `f64`).
//!
//! ## Degenerate input
//!
//! Inverting or normalizing the zero quaternion follows IEEE arithmetic
//! and yields non-finite components. [`Quaternion::try_inverse`] and
//! [`Quaternion::try_normalize`] return [`QuaternionError::DegenerateOperand`]
//! instead. Euler singularities at pitch = ±90° are resolved analytically,
//! and opposite vectors in `between` get a deterministic perpendicular axis.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` for errors |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `log`   | no       | `log::debug!` records when degenerate input is handled |
//! | `all`   | no       | All features: `std` + `log` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod quaternion;
pub mod traits;
pub mod vector;

pub use quaternion::{
    Quaternion, QuaternionError, ANTIPARALLEL_THRESHOLD, DEFAULT_NORMALIZE_TOLERANCE,
    POLE_THRESHOLD,
};
pub use traits::FloatScalar;
pub use vector::Vector3;
