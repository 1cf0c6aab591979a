//! Instance → tagged plain data.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ClassError;
use crate::hooks::{HookError, HookStage};
use crate::instance::Instance;
use crate::registry::ClassRegistry;
use crate::value::{CLASS_TAG, PlainRecord, PlainValue};
use crate::walk::{Segment, Walk, WalkContext, WalkMut, WalkOptions};

// -----------------------------------------------------------------------------
// Serializer

/// Converts instances into tagged records.
///
/// # Serialization Rules
///
/// For every instance reached, at any depth:
///
/// 1. Its class must be registered, otherwise the call fails with
///    [`ClassError::UnregisteredClass`].
/// 2. [`pre_serialize`](crate::Hooks::pre_serialize) runs and may mutate it.
/// 3. Its fields are transformed in declaration order: primitives are copied,
///    sequences transformed element-wise, plain records value-wise (untagged),
///    instances recursively into their own tagged record. Function fields are
///    omitted.
/// 4. `_class` is set to the class name, replacing a data field of that name.
/// 5. [`post_serialize`](crate::Hooks::post_serialize) runs on the record.
///
/// The registry is only consulted to check class membership.
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
/// use sc_class::registry::ClassRegistry;
/// use sc_class::{PlainValue, Serializer};
///
/// #[derive(Class, Default, Debug)]
/// struct Known {
///     number: i32,
///     labels: Vec<String>,
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register_class::<Known>();
///
/// let mut known = Known { number: 1, labels: vec!["a".into()] };
/// let record = Serializer::new(&registry).serialize(&mut known).unwrap();
///
/// assert_eq!(record.class_tag().unwrap(), Some("Known"));
/// assert_eq!(record.get("number"), Some(&PlainValue::from(1)));
/// assert_eq!(record.get("labels"), Some(&PlainValue::from(vec![PlainValue::from("a")])));
/// ```
#[derive(Clone, Copy)]
pub struct Serializer<'a> {
    registry: &'a ClassRegistry,
    options: WalkOptions,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer with default options.
    #[inline]
    pub const fn new(registry: &'a ClassRegistry) -> Self {
        Self::with_options(registry, WalkOptions::new())
    }

    #[inline]
    pub const fn with_options(registry: &'a ClassRegistry, options: WalkOptions) -> Self {
        Self { registry, options }
    }

    #[inline]
    pub const fn registry(&self) -> &'a ClassRegistry {
        self.registry
    }

    #[inline]
    pub const fn options(&self) -> WalkOptions {
        self.options
    }

    /// Serializes an instance into a tagged record.
    pub fn serialize(&self, instance: &mut dyn Instance) -> Result<PlainRecord, ClassError> {
        let mut cx = WalkContext::new(self.options);
        let result = self.serialize_instance(instance, &mut cx);
        cx.finish(result)
    }

    /// Serializes any walkable value, such as a sequence of instances.
    ///
    /// Returns `None` for a function, which has no plain form.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc_class::registry::ClassRegistry;
    /// use sc_class::{DynamicObject, PlainValue, Serializer, Value};
    ///
    /// let registry = ClassRegistry::new();
    /// let serializer = Serializer::new(&registry);
    ///
    /// let mut items = vec![Value::from(DynamicObject::new()), Value::from(1)];
    /// let plain = serializer.serialize_value(&mut items).unwrap().unwrap();
    /// assert_eq!(plain.as_sequence().unwrap().len(), 2);
    ///
    /// assert_eq!(serializer.serialize_value(&mut Value::function(|_| Value::Null)).unwrap(), None);
    /// ```
    pub fn serialize_value(&self, value: &mut dyn Walk) -> Result<Option<PlainValue>, ClassError> {
        let mut cx = WalkContext::new(self.options);
        let result = self.serialize_walk(value, &mut cx);
        cx.finish(result)
    }

    fn serialize_instance(
        &self,
        instance: &mut dyn Instance,
        cx: &mut WalkContext,
    ) -> Result<PlainRecord, ClassError> {
        let class = String::from(instance.class_name());
        if !self.registry.contains(&class) {
            return Err(ClassError::UnregisteredClass(class));
        }

        cx.enter(Segment::Instance(&class), |cx| {
            instance
                .pre_serialize()
                .map_err(|source| hook_error(&class, HookStage::PreSerialize, source))?;

            let mut record = PlainRecord::tagged(class.as_str());
            for (name, field) in instance.fields_mut() {
                let value = cx.enter(Segment::Field(name), |cx| self.serialize_walk(field, cx))?;
                let Some(value) = value else {
                    continue;
                };
                if name == CLASS_TAG {
                    log::warn!("field `{CLASS_TAG}` of `{class}` is shadowed by the class tag");
                    continue;
                }
                record.insert(name, value);
            }

            instance
                .post_serialize(&mut record)
                .map_err(|source| hook_error(&class, HookStage::PostSerialize, source))?;

            log::trace!("serialized an instance of `{class}`");
            Ok(record)
        })
    }

    fn serialize_walk(
        &self,
        value: &mut dyn Walk,
        cx: &mut WalkContext,
    ) -> Result<Option<PlainValue>, ClassError> {
        Ok(Some(match value.walk_mut() {
            WalkMut::Primitive(value) => value,
            WalkMut::Function => return Ok(None),
            WalkMut::Instance(instance) => {
                PlainValue::Record(self.serialize_instance(instance, cx)?)
            }
            WalkMut::Sequence(items) => cx.enter(Segment::Sequence, |cx| {
                let mut output = Vec::with_capacity(items.size_hint().0);
                for (index, item) in items.enumerate() {
                    let value = cx.enter(Segment::Index(index), |cx| self.serialize_walk(item, cx))?;
                    output.push(value.unwrap_or(PlainValue::Null));
                }
                Ok(PlainValue::Sequence(output))
            })?,
            WalkMut::Record(entries) => cx.enter(Segment::Record, |cx| {
                let mut output = PlainRecord::with_capacity(entries.size_hint().0);
                for (key, item) in entries {
                    let value = cx.enter(Segment::Field(key), |cx| self.serialize_walk(item, cx))?;
                    if let Some(value) = value {
                        output.insert(key, value);
                    }
                }
                Ok(PlainValue::Record(output))
            })?,
        }))
    }
}

#[inline]
fn hook_error(class: &str, stage: HookStage, source: HookError) -> ClassError {
    ClassError::Hook {
        class: String::from(class),
        stage,
        source,
    }
}

// -----------------------------------------------------------------------------
// Tests
