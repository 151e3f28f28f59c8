//! 3D vector type for points, directions and offsets.

mod convert;
mod ops;

use crate::element::{Element, FloatElement};
use std::ops::{Index, IndexMut};

/// A 3D vector with x, y and z components.
///
/// Generic over the element type: floating-point (`f32`, `f64`) or integer
/// (`i16`, `i32`, `i64`). The components live in a single `[T; 3]`, so the
/// named accessors ([`x`](Self::x), [`X`](Self::X), ...) and indexing
/// (`v[0]`, ...) always observe the same storage.
///
/// Length and normalization are only available for floating-point elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    value: [T; 3],
}

impl<T: Element> Vector3<T> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { value: [x, y, z] }
    }

    /// Creates a vector with all three components set to `s`.
    #[inline]
    pub fn splat(s: T) -> Self {
        Self { value: [s, s, s] }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Overwrites all three components with `s`.
    #[inline]
    pub fn fill(&mut self, s: T) -> &mut Self {
        self.value = [s, s, s];
        self
    }

    #[inline]
    pub fn x(&self) -> T {
        self.value[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.value[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.value[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.value[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.value[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.value[2]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.value[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.value[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.value[2] = z;
    }

    /// Returns the components as an array reference.
    #[inline]
    pub fn as_array(&self) -> &[T; 3] {
        &self.value
    }

    /// Returns the components as a mutable array reference.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; 3] {
        &mut self.value
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.value
    }

    /// Iterates over the components in x, y, z order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.value.iter()
    }

    /// Returns the vector unchanged (unary plus).
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(&self) -> T {
        let [x, y, z] = self.value;
        if x < y {
            if x < z {
                x
            } else {
                z
            }
        } else if y < z {
            y
        } else {
            z
        }
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(&self) -> T {
        let [x, y, z] = self.value;
        if x > y {
            if x > z {
                x
            } else {
                z
            }
        } else if y > z {
            y
        } else {
            z
        }
    }

    /// Returns `true` if every component equals zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.iter().all(|c| c.is_zero())
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Computes the right-handed cross product with another vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.value;
        let [bx, by, bz] = other.value;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Returns the squared length, `x² + y² + z²`.
    #[inline]
    pub fn norm_squared(self) -> T {
        self.dot(self)
    }
}

// Uppercase spellings of the component accessors.
#[allow(non_snake_case)]
impl<T: Element> Vector3<T> {
    /// Same as [`x`](Self::x).
    #[inline]
    pub fn X(&self) -> T {
        self.x()
    }

    /// Same as [`y`](Self::y).
    #[inline]
    pub fn Y(&self) -> T {
        self.y()
    }

    /// Same as [`z`](Self::z).
    #[inline]
    pub fn Z(&self) -> T {
        self.z()
    }

    #[inline]
    pub fn X_mut(&mut self) -> &mut T {
        self.x_mut()
    }

    #[inline]
    pub fn Y_mut(&mut self) -> &mut T {
        self.y_mut()
    }

    #[inline]
    pub fn Z_mut(&mut self) -> &mut T {
        self.z_mut()
    }
}

impl<F: FloatElement> Vector3<F> {
    /// Returns the length of the vector.
    ///
    /// Squared lengths at or below `EPSILON²` give exactly zero, and squared
    /// lengths within `EPSILON²` of one give exactly one without taking a
    /// square root.
    #[inline]
    pub fn norm(self) -> F {
        let square = self.norm_squared();
        let eps2 = F::epsilon_squared();
        if square <= eps2 {
            F::zero()
        } else if (square - F::one()).abs() < eps2 {
            F::one()
        } else {
            square.sqrt()
        }
    }

    /// Returns a unit-length copy of the vector.
    ///
    /// A vector already within `EPSILON²` of unit squared length is returned
    /// as is. A vector whose squared length is at or below `EPSILON²` yields
    /// the zero vector.
    #[inline]
    pub fn normalized(self) -> Self {
        let square = self.norm_squared();
        let eps2 = F::epsilon_squared();
        if (square - F::one()).abs() < eps2 {
            self
        } else if square > eps2 {
            self * (F::one() / square.sqrt())
        } else {
            Self::zero()
        }
    }

    /// Normalizes the vector in place.
    ///
    /// Same thresholds as [`normalized`](Self::normalized). Degenerate vectors
    /// become zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }
}

impl<T: Element> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Panics if `index` is not 0, 1 or 2.
impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.value[index]
    }
}

/// Panics if `index` is not 0, 1 or 2.
impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.value[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector3<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}
