use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

use crate::hooks::{HookError, HookStage};
use crate::value::ValueKind;

// -----------------------------------------------------------------------------
// ClassError

/// The error type of registry lookups, serialization and deserialization.
///
/// Every failure aborts the whole call; no partial result is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassError {
    /// A class name was looked up but never registered.
    #[error("{0} has not been registered as a class")]
    UnregisteredClass(String),

    /// The root record handed to the deserializer carries no class tag.
    #[error("_class is undefined")]
    MissingClassTag,

    #[error("_class must be a string, found {0}")]
    InvalidClassTag(ValueKind),

    #[error("{stage} hook of `{class}` failed")]
    Hook {
        class: String,
        stage: HookStage,
        #[source]
        source: HookError,
    },

    #[error("field `{field}` of `{class}` cannot hold the given value")]
    Assign {
        class: String,
        field: String,
        #[source]
        source: MismatchError,
    },

    #[error("`{class}` has no field `{field}`")]
    UnknownField { class: String, field: String },

    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("expected an instance of `{expected}`, found `{found}`")]
    ClassMismatch {
        expected: &'static str,
        found: String,
    },
}

impl ClassError {
    #[inline]
    pub(crate) fn unregistered(name: &str) -> Self {
        Self::UnregisteredClass(String::from(name))
    }
}

// -----------------------------------------------------------------------------
// MismatchError

/// A live value could not be converted into a typed field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct MismatchError {
    pub expected: Cow<'static, str>,
    pub found: Cow<'static, str>,
}

impl MismatchError {
    #[inline]
    pub fn new(expected: impl Into<Cow<'static, str>>, found: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
