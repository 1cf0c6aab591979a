use core::fmt;

// -----------------------------------------------------------------------------
// Number

/// A numeric primitive of the plain data shape.
///
/// Text formats do not keep the representation of a number stable: an `i32`
/// field serialized as `Int(5)` may come back from JSON as `UInt(5)`. Equality
/// therefore compares the numeric value, not the variant. A float equals an
/// integer only if it is exactly that integer.
///
/// # Examples
///
/// ```
/// use sc_class::Number;
///
/// assert_eq!(Number::Int(5), Number::UInt(5));
/// assert_eq!(Number::Int(5), Number::Float(5.0));
/// assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Returns the value as `i64` if it is representable without loss.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::UInt(v) => i64::try_from(v).ok(),
            Self::Float(v) => float_to_int(v).and_then(|v| i64::try_from(v).ok()),
        }
    }

    /// Returns the value as `u64` if it is representable without loss.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(v).ok(),
            Self::UInt(v) => Some(v),
            Self::Float(v) => float_to_int(v).and_then(|v| u64::try_from(v).ok()),
        }
    }

    /// Returns the value as `f64`, rounding large integers.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

// Integral floats only; `i128` covers the full `i64` and `u64` ranges.
fn float_to_int(v: f64) -> Option<i128> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e20 {
        Some(v as i128)
    } else {
        None
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                i128::from(a) == i128::from(b)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Float(f), Self::Int(i)) | (Self::Int(i), Self::Float(f)) => {
                float_to_int(f) == Some(i128::from(i))
            }
            (Self::Float(f), Self::UInt(u)) | (Self::UInt(u), Self::Float(f)) => {
                float_to_int(f) == Some(i128::from(u))
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::UInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $repr:ty: $($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value as $repr)
            }
        }
    )*};
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn cross_variant_equality() {
        assert_eq!(Number::Int(0), Number::UInt(0));
        assert_eq!(Number::UInt(7), Number::Float(7.0));
        assert_ne!(Number::Float(7.5), Number::Int(7));
        assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
    }

    #[test]
    fn float_integer_equality_is_exact() {
        let a = Number::Int((1 << 53) + 1);
        let b = Number::Float(9_007_199_254_740_992.0);
        let c = Number::Int(1 << 53);

        assert_ne!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
        assert_eq!(Number::Float(-0.0), Number::UInt(0));
        assert_ne!(Number::Float(f64::INFINITY), Number::UInt(u64::MAX));
    }

    #[test]
    fn lossless_accessors() {
        assert_eq!(Number::UInt(u64::MAX).as_i64(), None);
        assert_eq!(Number::Int(-3).as_u64(), None);
        assert_eq!(Number::Float(3.0).as_i64(), Some(3));
        assert_eq!(Number::Float(3.5).as_i64(), None);
        assert_eq!(Number::Float(f64::NAN).as_u64(), None);
        assert_eq!(Number::from(12_u8).as_i64(), Some(12));
    }
}
