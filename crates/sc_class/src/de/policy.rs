use alloc::string::String;

use crate::ClassError;
use crate::hooks::{HookResult, HookStage};
use crate::instance::Instance;
use crate::value::PlainRecord;

/// How the deserializer brackets the assignment of fields with hooks.
///
/// The two provided policies are [`Factory`] and [`Contextual`].
pub trait Reconstruction {
    /// Runs on the target instance before any field is assigned.
    fn before_assign(instance: &mut dyn Instance, record: &PlainRecord) -> Result<(), ClassError>;

    /// Runs on the target instance after every field is assigned.
    fn after_assign(instance: &mut dyn Instance, record: &PlainRecord) -> Result<(), ClassError>;
}

/// Every tagged record yields a fresh instance from its factory.
///
/// Runs [`pre_deserialize`](crate::Hooks::pre_deserialize) before and
/// [`post_deserialize`](crate::Hooks::post_deserialize) after assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

/// Deserialization into an existing receiver, reused when its class
/// matches the record.
///
/// Runs only [`on_deserialize`](crate::Hooks::on_deserialize), after
/// assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contextual;

impl Reconstruction for Factory {
    fn before_assign(instance: &mut dyn Instance, record: &PlainRecord) -> Result<(), ClassError> {
        let result = instance.pre_deserialize(record);
        check(instance, HookStage::PreDeserialize, result)
    }

    fn after_assign(instance: &mut dyn Instance, record: &PlainRecord) -> Result<(), ClassError> {
        let result = instance.post_deserialize(record);
        check(instance, HookStage::PostDeserialize, result)
    }
}

impl Reconstruction for Contextual {
    #[inline]
    fn before_assign(_: &mut dyn Instance, _: &PlainRecord) -> Result<(), ClassError> {
        Ok(())
    }

    fn after_assign(instance: &mut dyn Instance, record: &PlainRecord) -> Result<(), ClassError> {
        let result = instance.on_deserialize(record);
        check(instance, HookStage::Deserialized, result)
    }
}

#[inline]
fn check(instance: &dyn Instance, stage: HookStage, result: HookResult) -> Result<(), ClassError> {
    result.map_err(|source| ClassError::Hook {
        class: String::from(instance.class_name()),
        stage,
        source,
    })
}
