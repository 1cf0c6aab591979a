use alloc::boxed::Box;
use core::error::Error;
use core::fmt;

use crate::value::PlainRecord;

/// The error a hook may fail with.
pub type HookError = Box<dyn Error + Send + Sync>;

pub type HookResult = Result<(), HookError>;

/// The lifecycle point a hook runs at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookStage {
    PreSerialize,
    PostSerialize,
    PreDeserialize,
    PostDeserialize,
    Deserialized,
}

impl HookStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreSerialize => "pre_serialize",
            Self::PostSerialize => "post_serialize",
            Self::PreDeserialize => "pre_deserialize",
            Self::PostDeserialize => "post_deserialize",
            Self::Deserialized => "on_deserialize",
        }
    }
}

impl fmt::Display for HookStage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional lifecycle callbacks of a class.
///
/// Every method defaults to doing nothing. `#[derive(Class)]` emits an empty
/// implementation unless the type is marked `#[class(hooks)]`, in which case
/// the type implements this trait by hand and overrides what it needs.
///
/// A hook returning `Err` aborts the surrounding call with
/// [`ClassError::Hook`](crate::ClassError::Hook).
///
/// Which deserialization hooks run depends on the policy:
///
/// | policy | before fields | after fields |
/// |---|---|---|
/// | [`Factory`](crate::Factory) | [`pre_deserialize`](Self::pre_deserialize) | [`post_deserialize`](Self::post_deserialize) |
/// | [`Contextual`](crate::Contextual) | | [`on_deserialize`](Self::on_deserialize) |
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
/// use sc_class::registry::ClassRegistry;
/// use sc_class::{Hooks, HookResult, PlainRecord, Serializer};
///
/// #[derive(Class, Default, Debug)]
/// #[class(hooks)]
/// struct Counter {
///     hits: u32,
/// }
///
/// impl Hooks for Counter {
///     fn pre_serialize(&mut self) -> HookResult {
///         self.hits += 1;
///         Ok(())
///     }
///
///     fn post_serialize(&self, record: &mut PlainRecord) -> HookResult {
///         record.insert("stamped", true);
///         Ok(())
///     }
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register_class::<Counter>();
///
/// let mut counter = Counter::default();
/// let record = Serializer::new(&registry).serialize(&mut counter).unwrap();
/// assert_eq!(counter.hits, 1);
/// assert_eq!(record.get("hits").unwrap().as_number().unwrap().as_u64(), Some(1));
/// assert_eq!(record.get("stamped").unwrap().as_bool(), Some(true));
/// ```
pub trait Hooks {
    /// Runs before the fields are read. May mutate the instance.
    #[inline]
    fn pre_serialize(&mut self) -> HookResult {
        Ok(())
    }

    /// Runs on the finished record, class tag included.
    #[inline]
    fn post_serialize(&self, record: &mut PlainRecord) -> HookResult {
        let _ = record;
        Ok(())
    }

    /// Runs on the blank instance before any field is assigned.
    #[inline]
    fn pre_deserialize(&mut self, record: &PlainRecord) -> HookResult {
        let _ = record;
        Ok(())
    }

    /// Runs after every field is assigned.
    #[inline]
    fn post_deserialize(&mut self, record: &PlainRecord) -> HookResult {
        let _ = record;
        Ok(())
    }

    /// The single post-assignment hook of contextual deserialization.
    #[inline]
    fn on_deserialize(&mut self, record: &PlainRecord) -> HookResult {
        let _ = record;
        Ok(())
    }
}
