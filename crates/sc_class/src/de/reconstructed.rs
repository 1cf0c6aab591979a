use alloc::boxed::Box;
use core::ops::{Deref, DerefMut};

use crate::instance::Instance;

/// The outcome of [`Deserializer::deserialize_into`].
///
/// Dereferences to the reconstructed instance either way.
///
/// [`Deserializer::deserialize_into`]: crate::Deserializer::deserialize_into
#[derive(Debug)]
pub enum Reconstructed<'r> {
    /// The receiver had the record's class and was updated in place.
    Receiver(&'r mut dyn Instance),
    /// The record named another class; the receiver is untouched.
    Fresh(Box<dyn Instance>),
}

impl Reconstructed<'_> {
    #[inline]
    pub const fn is_receiver(&self) -> bool {
        matches!(self, Self::Receiver(_))
    }

    #[inline]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    /// Returns the fresh instance, or `None` if the receiver was reused.
    #[inline]
    pub fn into_fresh(self) -> Option<Box<dyn Instance>> {
        match self {
            Self::Fresh(instance) => Some(instance),
            Self::Receiver(_) => None,
        }
    }
}

impl Deref for Reconstructed<'_> {
    type Target = dyn Instance;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Receiver(instance) => &**instance,
            Self::Fresh(instance) => &**instance,
        }
    }
}

impl DerefMut for Reconstructed<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::Receiver(instance) => &mut **instance,
            Self::Fresh(instance) => &mut **instance,
        }
    }
}
