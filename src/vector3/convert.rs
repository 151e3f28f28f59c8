//! Conversions between vectors, arrays and slices.

use super::Vector3;
use crate::element::Element;
use crate::error::VectorError;
use num_traits::AsPrimitive;

// Each array element is cast to the vector's element type with `as` semantics,
// so floats truncate toward zero when converted to an integer vector.
macro_rules! impl_from_array {
    ($($src:ty),*) => {
        $(
            impl<T: Element> From<[$src; 3]> for Vector3<T>
            where
                $src: AsPrimitive<T>,
            {
                #[inline]
                fn from(v: [$src; 3]) -> Self {
                    Self::new(v[0].as_(), v[1].as_(), v[2].as_())
                }
            }
        )*
    };
}

impl_from_array!(i32, f32, f64);

impl<T: Element> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}

impl<T: Element> TryFrom<&[T]> for Vector3<T> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match slice {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::SliceLength { len: slice.len() }),
        }
    }
}
