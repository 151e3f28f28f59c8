//! Arithmetic operators for [`Vector3`].
//!
//! Vector-vector operators work element-wise. Scalar operands are broadcast to
//! all three components. Division by zero follows the element type: floats
//! produce infinities or NaN, integers panic.

use super::Vector3;
use crate::element::Element;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Element> $trait for Vector3<T> {
            type Output = Self;

            #[inline]
            fn $method(self, other: Self) -> Self {
                Self::new(self.x() $op other.x(), self.y() $op other.y(), self.z() $op other.z())
            }
        }

        impl<T: Element> $assign_trait for Vector3<T> {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                *self = *self $op other;
            }
        }

        impl<T: Element> $assign_trait<T> for Vector3<T> {
            #[inline]
            fn $assign_method(&mut self, s: T) {
                *self = *self $op Self::splat(s);
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise!(Div, div, DivAssign, div_assign, /);

impl<T: Element> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }
}

impl<T: Element> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x() / scalar, self.y() / scalar, self.z() / scalar)
    }
}

impl<T: Element + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

// scalar * vector, delegating to vector * scalar
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;

                #[inline]
                fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i16, i32, i64);
