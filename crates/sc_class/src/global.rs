//! Free functions over the process-wide registry.

use alloc::boxed::Box;

use crate::ClassError;
use crate::de::{Deserializer, Reconstructed};
use crate::instance::{Class, Instance};
use crate::registry::global;
use crate::ser::Serializer;
use crate::value::PlainRecord;

/// Registers `T` in the process-wide registry.
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
///
/// #[derive(Class, Default, Debug)]
/// struct Known {
///     number: i32,
/// }
///
/// sc_class::register::<Known>();
///
/// let mut known = sc_class::create::<Known>().unwrap();
/// known.number = 4;
///
/// let record = sc_class::serialize(&mut known).unwrap();
/// let back = sc_class::deserialize(&record).unwrap();
/// assert_eq!(back.downcast_ref::<Known>().unwrap().number, 4);
/// ```
#[inline]
pub fn register<T: Class>() {
    global().write().register_class::<T>();
}

/// Constructs a blank `T`, failing if its class is not registered globally.
#[inline]
pub fn create<T: Class>() -> Result<T, ClassError> {
    global().read().create::<T>()
}

/// Serializes with the process-wide registry.
#[inline]
pub fn serialize(instance: &mut dyn Instance) -> Result<PlainRecord, ClassError> {
    Serializer::new(&global().read()).serialize(instance)
}

/// Deserializes with the process-wide registry and the
/// [`Factory`](crate::Factory) policy.
#[inline]
pub fn deserialize(record: &PlainRecord) -> Result<Box<dyn Instance>, ClassError> {
    Deserializer::new(&global().read()).deserialize(record)
}

/// Deserializes into `receiver` with the process-wide registry and the
/// [`Contextual`](crate::Contextual) policy.
#[inline]
pub fn deserialize_into<'r>(
    receiver: &'r mut dyn Instance,
    record: &PlainRecord,
) -> Result<Reconstructed<'r>, ClassError> {
    Deserializer::contextual(&global().read()).deserialize_into(receiver, record)
}

#[cfg(test)]
mod tests {
    use crate::derive::Class;
    use crate::{ClassError, PlainRecord};

    #[derive(Class, Default, Debug)]
    #[class(name = "global.Registered")]
    struct Registered {
        number: i32,
    }

    #[derive(Class, Default, Debug)]
    #[class(name = "global.Unregistered")]
    struct Unregistered;

    #[test]
    fn free_functions() {
        crate::register::<Registered>();
        assert!(matches!(
            crate::create::<Unregistered>(),
            Err(ClassError::UnregisteredClass(_))
        ));

        let mut value = crate::create::<Registered>().unwrap();
        value.number = 2;
        let record = crate::serialize(&mut value).unwrap();
        assert_eq!(record.class_tag().unwrap(), Some("global.Registered"));

        let mut receiver = Registered::default();
        let result = crate::deserialize_into(&mut receiver, &record).unwrap();
        assert!(result.is_receiver());
        assert_eq!(receiver.number, 2);

        let err = crate::deserialize(&PlainRecord::tagged("global.Unregistered")).unwrap_err();
        assert!(matches!(err, ClassError::UnregisteredClass(_)));
    }
}
