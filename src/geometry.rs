//! Projection, reflection and refraction against a surface normal.
//!
//! The surface normal passed to these functions is assumed to be unit length.
//! It is never renormalized here.

use crate::element::{Element, FloatElement};
use crate::vector3::Vector3;

/// Computes the dot product `a.x*b.x + a.y*b.y + a.z*b.z`.
#[inline]
pub fn dot<T: Element>(a: Vector3<T>, b: Vector3<T>) -> T {
    a.dot(b)
}

/// Computes the right-handed cross product `a × b`.
#[inline]
pub fn cross<T: Element>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T> {
    a.cross(b)
}

/// Projects `v` onto the plane with unit normal `n`.
///
/// Returns `v - dot(v, n) * n`, the part of `v` lying in the plane.
#[inline]
pub fn project_to_plane<T: Element>(v: Vector3<T>, n: Vector3<T>) -> Vector3<T> {
    v - n * dot(v, n)
}

/// Mirrors the incoming vector `t` about the unit surface normal `n`.
///
/// Returns `t - 2 * dot(t, n) * n`.
#[inline]
pub fn reflect_vector<T: Element>(t: Vector3<T>, n: Vector3<T>) -> Vector3<T> {
    let two = T::one() + T::one();
    t - n * (two * dot(t, n))
}

/// Outcome of [`refract_vector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction<F> {
    /// The ray crossed the interface and was bent.
    Refracted(Vector3<F>),
    /// No transmitted ray exists; all light is reflected.
    TotalInternalReflection {
        /// The incoming vector, unchanged.
        incident: Vector3<F>,
    },
}

impl<F: FloatElement> Refraction<F> {
    /// Returns `true` if the ray was totally reflected.
    #[inline]
    pub fn is_total_internal_reflection(&self) -> bool {
        matches!(self, Refraction::TotalInternalReflection { .. })
    }

    /// Returns the refracted vector, or `None` on total internal reflection.
    #[inline]
    pub fn refracted(self) -> Option<Vector3<F>> {
        match self {
            Refraction::Refracted(v) => Some(v),
            Refraction::TotalInternalReflection { .. } => None,
        }
    }

    /// Returns the refracted vector, or the unchanged incoming vector on
    /// total internal reflection.
    ///
    /// The second case is not a valid refraction direction. Check
    /// [`is_total_internal_reflection`](Self::is_total_internal_reflection)
    /// first unless the caller handles that case some other way.
    #[inline]
    pub fn vector(self) -> Vector3<F> {
        match self {
            Refraction::Refracted(v) => v,
            Refraction::TotalInternalReflection { incident } => incident,
        }
    }
}

/// Refracts the incoming vector `t` at a surface with unit normal `normal`
/// using the vector form of Snell's law.
///
/// `n1` is the refractive index on the incident side, `n2` the index on the
/// transmitted side. With `eta = n1 / n2` and `cos_i = -dot(t, normal)`, the
/// refracted vector is
///
/// ```text
/// t * eta + normal * (eta * cos_i - sqrt(1 + eta² * (cos_i² - 1)))
/// ```
///
/// When the term under the square root is negative no transmitted ray
/// exists and [`Refraction::TotalInternalReflection`] is returned.
///
/// # Example
///
/// ```
/// use vector3d::{refract_vector, Vector3};
///
/// let incoming: Vector3<f64> = Vector3::new(0.0, 0.0, -1.0);
/// let normal = Vector3::unit_z();
/// let out = refract_vector(incoming, normal, 1.0, 1.333);
/// assert_eq!(out.refracted(), Some(Vector3::new(0.0, 0.0, -1.0)));
/// ```
pub fn refract_vector<F: FloatElement>(
    t: Vector3<F>,
    normal: Vector3<F>,
    n1: F,
    n2: F,
) -> Refraction<F> {
    let eta = n1 / n2;
    let cos_i = -dot(t, normal);
    let k = F::one() + eta * eta * (cos_i * cos_i - F::one());

    if k < F::zero() {
        return Refraction::TotalInternalReflection { incident: t };
    }

    Refraction::Refracted(t * eta + normal * (eta * cos_i - k.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xorshift_vectors(count: usize, seed: u64) -> Vec<Vector3<f64>> {
        let mut state = seed;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state as f64 / u64::MAX as f64) * 20.0 - 10.0
        };
        (0..count)
            .map(|_| Vector3::new(next(), next(), next()))
            .collect()
    }

    #[test]
    fn test_dot() {
        let v1: Vector3<f64> = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(dot(v1, v2), 20.0);
        assert_eq!(dot(Vector3::new(1, 2, 3), Vector3::new(2, 3, 4)), 20);
    }

    #[test]
    fn test_cross() {
        let v1: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(v1, v2), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cross_anticommutative() {
        let vectors = xorshift_vectors(64, 42);
        for pair in vectors.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(cross(a, b), -cross(b, a));
            assert!(cross(a, a).is_empty());
        }
    }

    #[test]
    fn test_cross_orthogonal_to_inputs() {
        let vectors = xorshift_vectors(64, 7);
        for pair in vectors.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            let c = cross(a, b);
            assert_relative_eq!(dot(c, a), 0.0, epsilon = 1e-9);
            assert_relative_eq!(dot(c, b), 0.0, epsilon = 1e-9);
        }

        let a = Vector3::new(3, -7, 2);
        let b = Vector3::new(-1, 4, 9);
        let c = cross(a, b);
        assert_eq!(dot(c, a), 0);
        assert_eq!(dot(c, b), 0);
    }

    #[test]
    fn test_normalization_idempotent() {
        for v in xorshift_vectors(32, 99) {
            let once = v.normalized();
            let twice = once.normalized();
            for i in 0..3 {
                assert_relative_eq!(twice[i], once[i], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_norm_consistent_with_norm_squared() {
        for v in xorshift_vectors(32, 1234) {
            let n = v.norm();
            assert_relative_eq!(n * n, v.norm_squared(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_project_to_plane() {
        let v: Vector3<f64> = Vector3::new(3.0, 4.0, 5.0);
        let n = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(project_to_plane(v, n), Vector3::new(0.0, 4.0, 5.0));

        let vi = Vector3::new(3, 4, 5);
        assert_eq!(project_to_plane(vi, Vector3::unit_z()), Vector3::new(3, 4, 0));
    }

    #[test]
    fn test_reflect_vector() {
        let v: Vector3<f64> = Vector3::new(3.0, 4.0, 5.0);
        let n = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(reflect_vector(v, n), Vector3::new(-3.0, 4.0, 5.0));
        assert_eq!(
            reflect_vector(Vector3::new(1, -1, 0), Vector3::unit_y()),
            Vector3::new(1, 1, 0)
        );
    }

    #[test]
    fn test_refract_air_to_water() {
        let t: Vector3<f64> = Vector3::new(3.0, 4.0, 5.0);
        let n = Vector3::new(1.0, 0.0, 0.0);
        let (n1, n2) = (1.0, 1.333);

        let result = refract_vector(t, n, n1, n2);
        assert!(!result.is_total_internal_reflection());

        let eta = n1 / n2;
        let cos_i = -3.0;
        let k: f64 = 1.0 + eta * eta * (cos_i * cos_i - 1.0);
        let expected = t * eta + n * (eta * cos_i - k.sqrt());

        let refracted = result.refracted().unwrap();
        assert_relative_eq!(refracted.x(), expected.x(), epsilon = 1e-12);
        assert_relative_eq!(refracted.y(), expected.y(), epsilon = 1e-12);
        assert_relative_eq!(refracted.z(), expected.z(), epsilon = 1e-12);
        assert_eq!(result.vector(), refracted);
    }

    #[test]
    fn test_refract_follows_snell() {
        // 30 degrees incidence from glass into air.
        let angle = 30f64.to_radians();
        let t = Vector3::new(angle.sin(), 0.0, -angle.cos());
        let n = Vector3::unit_z();
        let (n1, n2) = (1.2, 1.0);

        let r = refract_vector(t, n, n1, n2).refracted().unwrap();
        assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-12);
        // n1 * sin(theta_i) == n2 * sin(theta_t)
        assert_relative_eq!(n1 * angle.sin(), n2 * r.x(), epsilon = 1e-12);
        assert!(r.z() < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // 60 degrees from water into air is past the critical angle.
        let angle = 60f64.to_radians();
        let t = Vector3::new(angle.sin(), 0.0, -angle.cos());
        let n = Vector3::unit_z();

        let result = refract_vector(t, n, 1.333, 1.0);
        assert!(result.is_total_internal_reflection());
        assert_eq!(result.refracted(), None);
        assert_eq!(result, Refraction::TotalInternalReflection { incident: t });
        assert_eq!(result.vector(), t);
    }

    #[test]
    fn test_refract_single_precision() {
        let t: Vector3<f32> = Vector3::new(0.0, -1.0, 0.0);
        let n = Vector3::unit_y();
        let r = refract_vector(t, n, 1.0, 1.5).refracted().unwrap();
        assert_relative_eq!(r.y(), -1.0, epsilon = 1e-6);
    }
}
