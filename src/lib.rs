//! vector3d - A generic 3D vector value type
//!
//! [`Vector3`] holds three components of any supported element type and
//! offers element-wise arithmetic, length and normalization with a fixed
//! near-zero/near-unit snapping policy, and the surface operations used in
//! graphics and optics: projection onto a plane, reflection and refraction.
//!
//! Two instantiations are provided: [`Vec3`] over [`Real`] (`f64`, or `f32`
//! with the `single-precision` feature) and [`Vec3i`] over `i32`.
//!
//! ```
//! use vector3d::{cross, dot, reflect_vector, Vec3};
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(2.0, 3.0, 4.0);
//! assert_eq!(dot(a, b), 20.0);
//! assert_eq!(cross(Vec3::unit_x(), Vec3::unit_y()), Vec3::unit_z());
//! assert_eq!(reflect_vector(Vec3::new(3.0, 4.0, 5.0), Vec3::unit_x()), Vec3::new(-3.0, 4.0, 5.0));
//! ```

pub mod element;
pub mod error;
pub mod format;
pub mod geometry;
pub mod vector3;

pub use element::{Element, FloatElement, Real, REAL_EPSILON};
pub use error::VectorError;
pub use format::{ComponentFormat, Formatted, Presentation};
pub use geometry::{cross, dot, project_to_plane, reflect_vector, refract_vector, Refraction};
pub use vector3::Vector3;

/// 3D vector over the configured floating-point precision.
pub type Vec3 = Vector3<Real>;

/// 3D vector over `i32`.
pub type Vec3i = Vector3<i32>;
