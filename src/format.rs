//! Human-readable formatting of vectors.
//!
//! Floating-point vectors print as `(+1.500000, -0.250000, +0.000000)` in
//! fixed notation or `(+1.500000e0, -2.500000e-1, +0.000000e0)` in exponential
//! notation. Integer vectors print as `(+1, -2, +3)`.
//!
//! The notation is chosen with a one-character spec: `f` or `e` for floating
//! vectors, `d` for integer vectors. An empty spec picks the default for the
//! element type. Anything else is rejected with
//! [`VectorError::InvalidFormatSpec`].

use crate::element::{Element, FloatElement};
use crate::error::VectorError;
use crate::vector3::Vector3;
use std::fmt;
use std::str::FromStr;

/// Notation used for each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Fixed-point with six fractional digits (`f`).
    Fixed,
    /// Scientific notation with six fractional digits (`e`).
    Exponential,
    /// Plain decimal integer (`d`).
    Decimal,
}

impl FromStr for Presentation {
    type Err = VectorError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec {
            "f" => Ok(Presentation::Fixed),
            "e" => Ok(Presentation::Exponential),
            "d" => Ok(Presentation::Decimal),
            _ => Err(VectorError::InvalidFormatSpec {
                spec: spec.to_string(),
                kind: "any",
            }),
        }
    }
}

/// Element types that know how to print themselves as a vector component.
pub trait ComponentFormat: Element {
    /// Presentation used by `Display` and by an empty spec.
    const DEFAULT_PRESENTATION: Presentation;

    /// Element kind named in error messages.
    const KIND: &'static str;

    /// Returns `true` if `presentation` applies to this element type.
    fn supports(presentation: Presentation) -> bool;

    /// Writes one signed component.
    fn write_component(
        self,
        f: &mut fmt::Formatter<'_>,
        presentation: Presentation,
    ) -> fmt::Result;
}

macro_rules! impl_float_format {
    ($($t:ty),*) => {
        $(
            impl ComponentFormat for $t {
                const DEFAULT_PRESENTATION: Presentation = Presentation::Fixed;
                const KIND: &'static str = "floating-point";

                #[inline]
                fn supports(presentation: Presentation) -> bool {
                    matches!(presentation, Presentation::Fixed | Presentation::Exponential)
                }

                fn write_component(
                    self,
                    f: &mut fmt::Formatter<'_>,
                    presentation: Presentation,
                ) -> fmt::Result {
                    match presentation {
                        Presentation::Exponential => write!(f, "{:+.6e}", self),
                        _ => write!(f, "{:+.6}", self),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_int_format {
    ($($t:ty),*) => {
        $(
            impl ComponentFormat for $t {
                const DEFAULT_PRESENTATION: Presentation = Presentation::Decimal;
                const KIND: &'static str = "integer";

                #[inline]
                fn supports(presentation: Presentation) -> bool {
                    presentation == Presentation::Decimal
                }

                fn write_component(
                    self,
                    f: &mut fmt::Formatter<'_>,
                    _presentation: Presentation,
                ) -> fmt::Result {
                    write!(f, "{:+}", self)
                }
            }
        )*
    };
}

impl_float_format!(f32, f64);
impl_int_format!(i16, i32, i64);

/// A vector bound to a presentation, ready to be displayed.
///
/// Created by [`Vector3::formatted`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a, T> {
    vector: &'a Vector3<T>,
    presentation: Presentation,
}

impl<T: ComponentFormat> Formatted<'_, T> {
    /// Returns the presentation in use.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }
}

impl<T: ComponentFormat> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.vector.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            c.write_component(f, self.presentation)?;
        }
        f.write_str(")")
    }
}

impl<T: ComponentFormat> Vector3<T> {
    /// Binds the vector to the notation named by `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidFormatSpec`] if `spec` is neither empty
    /// nor a notation this element type supports.
    ///
    /// # Example
    ///
    /// ```
    /// use vector3d::Vector3;
    ///
    /// let v: Vector3<f64> = Vector3::new(1.5, -0.25, 0.0);
    /// assert_eq!(v.formatted("f").unwrap().to_string(), "(+1.500000, -0.250000, +0.000000)");
    /// assert!(v.formatted("d").is_err());
    /// ```
    pub fn formatted(&self, spec: &str) -> Result<Formatted<'_, T>, VectorError> {
        let presentation = if spec.is_empty() {
            T::DEFAULT_PRESENTATION
        } else {
            spec.parse::<Presentation>()
                .ok()
                .filter(|p| T::supports(*p))
                .ok_or_else(|| VectorError::InvalidFormatSpec {
                    spec: spec.to_string(),
                    kind: T::KIND,
                })?
        };

        Ok(Formatted {
            vector: self,
            presentation,
        })
    }
}

impl<T: ComponentFormat> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = Formatted {
            vector: self,
            presentation: T::DEFAULT_PRESENTATION,
        };
        fmt::Display::fmt(&formatted, f)
    }
}

impl<F: FloatElement + ComponentFormat> fmt::LowerExp for Vector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = Formatted {
            vector: self,
            presentation: Presentation::Exponential,
        };
        fmt::Display::fmt(&formatted, f)
    }
}
