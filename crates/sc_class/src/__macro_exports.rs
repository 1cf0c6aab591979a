//! Items used by the code `#[derive(Class)]` generates. Not public API.

use alloc::boxed::Box;
use alloc::string::String;

use crate::error::{ClassError, MismatchError};
use crate::instance::FieldIterMut;
use crate::walk::Walk;

pub use crate::walk::instance_from_value;

/// Boxes the field list of a derived class.
#[inline]
pub fn boxed_fields<'a, const N: usize>(fields: [(&'a str, &'a mut dyn Walk); N]) -> FieldIterMut<'a> {
    Box::new(fields.into_iter())
}

#[cold]
pub fn assign_error(class: &str, field: &str, source: MismatchError) -> ClassError {
    ClassError::Assign {
        class: String::from(class),
        field: String::from(field),
        source,
    }
}

#[cold]
pub fn unknown_field(class: &str, field: &str) -> ClassError {
    ClassError::UnknownField {
        class: String::from(class),
        field: String::from(field),
    }
}

#[cold]
pub fn ignored_field(class: &str, field: &str) {
    log::debug!("`{class}` has no field `{field}`, ignored");
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::instance::Class;
    use crate::registry::ClassRegistry;

    pub use inventory;

    /// A registration function collected by `inventory`.
    pub struct __AutoRegisterFunc(pub fn(&mut ClassRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterClass {
        fn __register(registry: &mut ClassRegistry);
    }

    impl<T: Class> __RegisterClass for T {
        #[inline]
        fn __register(registry: &mut ClassRegistry) {
            registry.register_class::<T>();
        }
    }

    /// Runs every collected registration, returning how many ran.
    pub fn __register_classes(registry: &mut ClassRegistry) -> usize {
        let mut count = 0;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            count += 1;
        }
        count
    }
}
