use alloc::string::String;
use alloc::vec::Vec;

use super::{Number, Record, ValueKind};
use crate::ClassError;

// -----------------------------------------------------------------------------
// Plain data

/// The reserved key naming the class of a [`PlainRecord`].
///
/// It never denotes a data field.
pub const CLASS_TAG: &str = "_class";

/// A record of the plain data shape.
///
/// A record carrying [`CLASS_TAG`] is a *tagged record*: the tag names a
/// registered class and every other key is a data field of that class.
pub type PlainRecord = Record<PlainValue>;

/// The JSON-compatible data shape produced by serialization and consumed by
/// deserialization.
///
/// Encoding it to bytes is left to any `serde` format; see the `Serialize`
/// and `Deserialize` implementations.
#[derive(Clone, Debug, PartialEq)]
pub enum PlainValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<PlainValue>),
    Record(PlainRecord),
}

impl Default for PlainValue {
    #[inline]
    fn default() -> Self {
        Self::Null
    }
}

impl PlainValue {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Record(_) => ValueKind::Record,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[PlainValue]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&PlainRecord> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record_mut(&mut self) -> Option<&mut PlainRecord> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }
}

impl Record<PlainValue> {
    /// Creates a record holding only the class tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc_class::PlainRecord;
    ///
    /// let record = PlainRecord::tagged("Ghost").with("number", 1);
    /// assert_eq!(record.class_tag().unwrap(), Some("Ghost"));
    /// assert_eq!(record.len(), 2);
    /// ```
    #[inline]
    pub fn tagged(class: impl Into<String>) -> Self {
        Self::new().with(CLASS_TAG, PlainValue::String(class.into()))
    }

    /// Reads the class tag.
    ///
    /// - `Ok(None)` if the tag is absent or `null` (an untagged record),
    /// - `Ok(Some(name))` if the tag is a string,
    /// - [`ClassError::InvalidClassTag`] for any other value.
    pub fn class_tag(&self) -> Result<Option<&str>, ClassError> {
        match self.get(CLASS_TAG) {
            None | Some(PlainValue::Null) => Ok(None),
            Some(PlainValue::String(name)) => Ok(Some(name)),
            Some(other) => Err(ClassError::InvalidClassTag(other.kind())),
        }
    }

    /// Iterates the data fields, skipping the class tag.
    #[inline]
    pub fn data_fields(&self) -> impl Iterator<Item = (&str, &PlainValue)> + '_ {
        self.iter().filter(|(key, _)| *key != CLASS_TAG)
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {$(
        impl From<$ty> for PlainValue {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Number(Number::from(value))
            }
        }
    )*};
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for PlainValue {
    #[inline]
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PlainValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PlainValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for PlainValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<PlainValue>> for PlainValue {
    #[inline]
    fn from(value: Vec<PlainValue>) -> Self {
        Self::Sequence(value)
    }
}

impl From<PlainRecord> for PlainValue {
    #[inline]
    fn from(value: PlainRecord) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<PlainValue>> From<Option<T>> for PlainValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CLASS_TAG, PlainRecord, PlainValue};
    use crate::{ClassError, ValueKind};

    #[test]
    fn class_tag_rules() {
        assert_eq!(PlainRecord::new().class_tag().unwrap(), None);

        let null = PlainRecord::new().with(CLASS_TAG, PlainValue::Null);
        assert_eq!(null.class_tag().unwrap(), None);

        let named = PlainRecord::tagged("Known");
        assert_eq!(named.class_tag().unwrap(), Some("Known"));

        let number = PlainRecord::new().with(CLASS_TAG, 5);
        assert!(matches!(
            number.class_tag(),
            Err(ClassError::InvalidClassTag(ValueKind::Number))
        ));
    }

    #[test]
    fn data_fields_skip_tag() {
        let record = PlainRecord::tagged("Known").with("a", 1).with("b", true);
        let keys: Vec<&str> = record.data_fields().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
