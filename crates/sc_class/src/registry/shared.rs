use alloc::sync::Arc;
use core::fmt;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::ClassRegistry;

// -----------------------------------------------------------------------------
// ClassRegistryArc

/// A shared [`ClassRegistry`] behind a read-write lock.
///
/// Lock poisoning is ignored: a panic while holding the lock leaves the
/// registry usable.
#[derive(Clone, Default)]
pub struct ClassRegistryArc {
    /// The wrapped [`ClassRegistry`].
    pub internal: Arc<RwLock<ClassRegistry>>,
}

impl ClassRegistryArc {
    #[inline]
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`ClassRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, ClassRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`ClassRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, ClassRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ClassRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

// -----------------------------------------------------------------------------
// Global

static GLOBAL: LazyLock<ClassRegistryArc> = LazyLock::new(ClassRegistryArc::default);

/// The process-wide registry.
///
/// It starts out as [`ClassRegistry::new`] and is what
/// [`sc_class::register`](crate::register), [`sc_class::serialize`](crate::serialize)
/// and the other free functions use. Register classes through
/// [`write`](ClassRegistryArc::write) at startup; each traversal holds a
/// [`read`](ClassRegistryArc::read) guard for its duration.
///
/// # Examples
///
/// ```
/// use sc_class::registry::global;
///
/// global().write().register_dynamic("Ghost");
/// assert!(global().read().contains("Ghost"));
/// ```
#[inline]
pub fn global() -> &'static ClassRegistryArc {
    &GLOBAL
}
