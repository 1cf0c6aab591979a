//! Tagged plain data → instance.
//!
//! ## Menu
//!
//! - [`Deserializer`]: the recursive reconstruction, parameterized by policy.
//! - [`Reconstruction`]: the policy trait, with [`Factory`] and
//!   [`Contextual`].
//! - [`Reconstructed`]: the result of [`Deserializer::deserialize_into`].

// -----------------------------------------------------------------------------
// Modules

mod policy;
mod reconstructed;

// -----------------------------------------------------------------------------
// Exports

pub use policy::{Contextual, Factory, Reconstruction};
pub use reconstructed::Reconstructed;

// -----------------------------------------------------------------------------
// Deserializer

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::ClassError;
use crate::instance::{Class, Instance};
use crate::registry::ClassRegistry;
use crate::value::{PlainRecord, PlainValue, Record, Value};
use crate::walk::{PlainShape, Segment, WalkContext, WalkOptions, classify};

/// Reconstructs instances from tagged records.
///
/// # Deserialization Rules
///
/// The root record must carry a class tag
/// ([`ClassError::MissingClassTag`] otherwise) naming a registered class
/// ([`ClassError::UnregisteredClass`] otherwise). Then, for the root and for
/// every tagged record nested at any depth:
///
/// 1. A target instance is chosen: a blank one from the class factory, or for
///    the root of [`deserialize_into`](Deserializer::deserialize_into), the
///    receiver itself if its class matches.
/// 2. The policy's before-hook runs.
/// 3. Every key except `_class` is resolved recursively. Nested tagged
///    records become instances whatever the declared field type, untagged
///    records stay plain records, sequences are resolved element-wise.
/// 4. The resolved values are assigned through [`Instance::assign`]. Nothing
///    is assigned unless every field resolved.
/// 5. The policy's after-hook runs.
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
/// use sc_class::registry::ClassRegistry;
/// use sc_class::{Deserializer, PlainRecord};
///
/// #[derive(Class, Default, Debug)]
/// struct Known {
///     number: i32,
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register_class::<Known>();
///
/// let record = PlainRecord::tagged("Known").with("number", 3);
/// let known = Deserializer::new(&registry).deserialize(&record).unwrap();
///
/// assert_eq!(known.downcast_ref::<Known>().unwrap().number, 3);
/// ```
pub struct Deserializer<'a, P: Reconstruction = Factory> {
    registry: &'a ClassRegistry,
    options: WalkOptions,
    _policy: PhantomData<fn() -> P>,
}

impl<P: Reconstruction> Clone for Deserializer<'_, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Reconstruction> Copy for Deserializer<'_, P> {}

impl<'a> Deserializer<'a, Factory> {
    /// Creates a deserializer with the [`Factory`] policy.
    #[inline]
    pub const fn new(registry: &'a ClassRegistry) -> Self {
        Self::with_options(registry, WalkOptions::new())
    }
}

impl<'a> Deserializer<'a, Contextual> {
    /// Creates a deserializer with the [`Contextual`] policy.
    #[inline]
    pub const fn contextual(registry: &'a ClassRegistry) -> Self {
        Self::with_options(registry, WalkOptions::new())
    }

    /// Deserializes into `receiver` if its class matches the record, or into
    /// a blank instance of the record's class otherwise.
    ///
    /// The receiver is left untouched in the second case, and in the first
    /// case when any nested value fails to resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc_class::registry::ClassRegistry;
    /// use sc_class::{Deserializer, DynamicObject, PlainRecord};
    ///
    /// let mut registry = ClassRegistry::new();
    /// registry.register_dynamic("Ghost");
    ///
    /// let deserializer = Deserializer::contextual(&registry);
    /// let mut receiver = DynamicObject::new();
    ///
    /// let same = PlainRecord::tagged("DynamicObject").with("number", 1);
    /// assert!(deserializer.deserialize_into(&mut receiver, &same).unwrap().is_receiver());
    ///
    /// let other = PlainRecord::tagged("Ghost");
    /// let result = deserializer.deserialize_into(&mut receiver, &other).unwrap();
    /// assert_eq!(result.class_name(), "Ghost");
    /// assert!(result.is_fresh());
    /// ```
    pub fn deserialize_into<'r>(
        &self,
        receiver: &'r mut dyn Instance,
        record: &PlainRecord,
    ) -> Result<Reconstructed<'r>, ClassError> {
        let class = self.root_class(record)?;
        let mut cx = WalkContext::new(self.options);

        let result = if receiver.class_name() == class {
            match self.populate(&mut *receiver, class, record, &mut cx) {
                Ok(()) => Ok(Reconstructed::Receiver(receiver)),
                Err(err) => Err(err),
            }
        } else {
            self.reconstruct(class, record, &mut cx)
                .map(Reconstructed::Fresh)
        };
        cx.finish(result)
    }
}

impl<'a, P: Reconstruction> Deserializer<'a, P> {
    #[inline]
    pub const fn with_options(registry: &'a ClassRegistry, options: WalkOptions) -> Self {
        Self {
            registry,
            options,
            _policy: PhantomData,
        }
    }

    #[inline]
    pub const fn registry(&self) -> &'a ClassRegistry {
        self.registry
    }

    #[inline]
    pub const fn options(&self) -> WalkOptions {
        self.options
    }

    /// Reconstructs a fresh instance of the class named by the record.
    pub fn deserialize(&self, record: &PlainRecord) -> Result<Box<dyn Instance>, ClassError> {
        let class = self.root_class(record)?;
        let mut cx = WalkContext::new(self.options);
        let result = self.reconstruct(class, record, &mut cx);
        cx.finish(result)
    }

    /// Reconstructs the record as a `T`.
    ///
    /// Fails with [`ClassError::ClassMismatch`] if the record names another
    /// class.
    pub fn deserialize_as<T: Class>(&self, record: &PlainRecord) -> Result<T, ClassError> {
        match self.deserialize(record)?.downcast::<T>() {
            Ok(instance) => Ok(*instance),
            Err(other) => Err(ClassError::ClassMismatch {
                expected: T::NAME,
                found: String::from(other.class_name()),
            }),
        }
    }

    /// Resolves any plain value into a live one.
    ///
    /// Tagged records anywhere inside become instances. Unlike
    /// [`deserialize`](Self::deserialize), an untagged root is allowed.
    pub fn resolve(&self, value: &PlainValue) -> Result<Value, ClassError> {
        let mut cx = WalkContext::new(self.options);
        let result = self.resolve_value(value, &mut cx);
        cx.finish(result)
    }

    fn root_class<'r>(&self, record: &'r PlainRecord) -> Result<&'r str, ClassError> {
        let class = record.class_tag()?.ok_or(ClassError::MissingClassTag)?;
        self.registry.lookup(class)?;
        Ok(class)
    }

    fn reconstruct(
        &self,
        class: &str,
        record: &PlainRecord,
        cx: &mut WalkContext,
    ) -> Result<Box<dyn Instance>, ClassError> {
        let mut instance = self.registry.instantiate(class)?;
        self.populate(&mut *instance, class, record, cx)?;
        Ok(instance)
    }

    fn populate(
        &self,
        instance: &mut dyn Instance,
        class: &str,
        record: &PlainRecord,
        cx: &mut WalkContext,
    ) -> Result<(), ClassError> {
        cx.enter(Segment::Instance(class), |cx| {
            P::before_assign(instance, record)?;

            let mut fields = Vec::with_capacity(record.len());
            for (key, value) in record.data_fields() {
                let value = cx.enter(Segment::Field(key), |cx| self.resolve_value(value, cx))?;
                fields.push((key, value));
            }
            for (key, value) in fields {
                instance.assign(key, value)?;
            }

            P::after_assign(instance, record)?;
            log::trace!("reconstructed an instance of `{class}`");
            Ok(())
        })
    }

    fn resolve_value(&self, value: &PlainValue, cx: &mut WalkContext) -> Result<Value, ClassError> {
        match classify(value)? {
            PlainShape::Primitive(primitive) => Ok(match primitive {
                PlainValue::Bool(v) => Value::Bool(*v),
                PlainValue::Number(v) => Value::Number(*v),
                PlainValue::String(v) => Value::String(v.clone()),
                _ => Value::Null,
            }),
            PlainShape::Sequence(items) => cx.enter(Segment::Sequence, |cx| {
                let mut output = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    output.push(cx.enter(Segment::Index(index), |cx| self.resolve_value(item, cx))?);
                }
                Ok(Value::Sequence(output))
            }),
            PlainShape::Record(record) => cx.enter(Segment::Record, |cx| {
                let mut output = Record::with_capacity(record.len());
                for (key, item) in record.data_fields() {
                    let value = cx.enter(Segment::Field(key), |cx| self.resolve_value(item, cx))?;
                    output.insert(key, value);
                }
                Ok(Value::Record(output))
            }),
            PlainShape::Tagged { class, record } => {
                self.reconstruct(class, record, cx).map(Value::Instance)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Deserializer;
    use crate::derive::Class;
    use crate::registry::ClassRegistry;
    use crate::value::{CLASS_TAG, PlainRecord, PlainValue, Record, Value};
    use crate::walk::WalkOptions;
    use crate::{ClassError, DynamicObject, HookResult, HookStage, Hooks, Instance, Serializer};

    #[derive(Class, Default, Debug, PartialEq)]
    struct Inner {
        number: i32,
    }

    #[derive(Class, Default, Debug)]
    struct Outer {
        number: i32,
        inner: Option<Inner>,
        items: Vec<Value>,
        any: Value,
    }

    #[derive(Class, Default, Debug)]
    struct Base {
        number: i32,
    }

    #[derive(Class, Default, Debug)]
    struct Derived {
        number: i32,
        extra: String,
    }

    #[derive(Class, Default, Debug)]
    struct Holder {
        child: Option<Box<dyn Instance>>,
    }

    /// Records the order its hooks ran in.
    #[derive(Class, Default, Debug)]
    #[class(hooks)]
    struct Hooked {
        value: i32,
        #[class(skip)]
        events: Vec<&'static str>,
    }

    impl Hooks for Hooked {
        fn pre_deserialize(&mut self, _: &PlainRecord) -> HookResult {
            self.value = 10;
            self.events.push("pre");
            Ok(())
        }

        fn post_deserialize(&mut self, record: &PlainRecord) -> HookResult {
            assert!(record.contains_key(CLASS_TAG));
            self.value = 20;
            self.events.push("post");
            Ok(())
        }

        fn on_deserialize(&mut self, _: &PlainRecord) -> HookResult {
            self.events.push("on");
            Ok(())
        }
    }

    #[derive(Class, Default, Debug)]
    #[class(hooks)]
    struct Rejecting;

    impl Hooks for Rejecting {
        fn post_deserialize(&mut self, _: &PlainRecord) -> HookResult {
            Err("rejected".into())
        }
    }

    #[derive(Class, Default, Debug)]
    #[class(ignore_unknown)]
    struct Lenient {
        number: i32,
    }

    #[derive(Class, Default, Debug)]
    struct Typed {
        r#type: String,
    }

    #[derive(Class, Default, Debug)]
    struct Shadowed {
        #[class(skip)]
        cache: i32,
        #[class(rename = "cache")]
        real: i32,
    }

    fn registry() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        registry.register_class::<Inner>();
        registry.register_class::<Outer>();
        registry.register_class::<Base>();
        registry.register_class::<Derived>();
        registry.register_class::<Holder>();
        registry.register_class::<Hooked>();
        registry.register_class::<Rejecting>();
        registry.register_class::<Lenient>();
        registry.register_class::<Typed>();
        registry.register_class::<Shadowed>();
        registry.register_dynamic("Known");
        registry
    }

    fn unregistered(err: ClassError) -> String {
        match err {
            ClassError::UnregisteredClass(name) => name,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_round_trip() {
        let registry = registry();
        let mut outer = Outer::default();
        let record = Serializer::new(&registry).serialize(&mut outer).unwrap();
        assert_eq!(record.get("number"), Some(&PlainValue::from(0)));

        let back: Outer = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert_eq!(back.number, 0);
        assert!(back.inner.is_none());
    }

    #[test]
    fn nested_round_trip() {
        let registry = registry();
        let mut outer = Outer {
            inner: Some(Inner { number: 5 }),
            ..Outer::default()
        };
        let record = Serializer::new(&registry).serialize(&mut outer).unwrap();
        assert_eq!(
            record.get("inner"),
            Some(&PlainValue::from(PlainRecord::tagged("Inner").with("number", 5)))
        );

        let back: Outer = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert_eq!(back.inner, Some(Inner { number: 5 }));
    }

    #[test]
    fn values_round_trip() {
        let registry = registry();
        let mut nested = Record::new();
        nested.insert("plain", Value::from("text"));
        nested.insert("tagged", Value::instance(Inner { number: 2 }));

        let mut outer = Outer {
            number: -4,
            items: vec![
                Value::from(1.5),
                Value::from(true),
                Value::Null,
                Value::instance(Inner { number: 1 }),
                Value::Sequence(vec![Value::from("deep")]),
            ],
            any: Value::Record(nested),
            ..Outer::default()
        };
        let record = Serializer::new(&registry).serialize(&mut outer).unwrap();
        let back: Outer = Deserializer::new(&registry).deserialize_as(&record).unwrap();

        assert_eq!(back.number, -4);
        assert_eq!(back.items.len(), 5);
        assert_eq!(back.items[0].as_number().map(|n| n.as_f64()), Some(1.5));
        assert_eq!(back.items[1].as_bool(), Some(true));
        assert!(back.items[2].is_null());
        assert_eq!(back.items[3].downcast_ref::<Inner>(), Some(&Inner { number: 1 }));
        assert_eq!(back.items[4].as_sequence().unwrap()[0].as_str(), Some("deep"));

        let any = back.any.as_record().unwrap();
        assert_eq!(any.get("plain").and_then(Value::as_str), Some("text"));
        assert_eq!(
            any.get("tagged").and_then(Value::downcast_ref::<Inner>),
            Some(&Inner { number: 2 })
        );
    }

    #[test]
    fn tag_only_record_yields_default() {
        let registry = registry();
        let record = PlainRecord::tagged("Derived");
        let derived = Deserializer::new(&registry).deserialize(&record).unwrap();
        let derived = derived.downcast_ref::<Derived>().unwrap();
        assert_eq!(derived.number, 0);
        assert_eq!(derived.extra, "");
    }

    #[test]
    fn polymorphic_fields() {
        let registry = registry();
        let record = PlainRecord::tagged("Holder").with(
            "child",
            PlainRecord::tagged("Derived").with("number", 1).with("extra", "x"),
        );
        let holder: Holder = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        let child = holder.child.unwrap();
        assert_eq!(child.class_name(), "Derived");
        assert_eq!(child.downcast_ref::<Derived>().unwrap().extra, "x");

        let record = PlainRecord::tagged("Holder")
            .with("child", PlainRecord::tagged("Base").with("number", 2));
        let holder: Holder = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert!(holder.child.unwrap().is::<Base>());
    }

    #[test]
    fn unregistered_root() {
        let registry = registry();
        let err = Deserializer::new(&registry)
            .deserialize(&PlainRecord::tagged("Ghost"))
            .unwrap_err();
        assert_eq!(unregistered(err), "Ghost");
    }

    #[test]
    fn unregistered_nested() {
        let registry = registry();
        let record = PlainRecord::tagged("Known").with("child", PlainRecord::tagged("Ghost"));
        let err = Deserializer::new(&registry).deserialize(&record).unwrap_err();
        assert_eq!(unregistered(err), "Ghost");

        let record = PlainRecord::tagged("Known").with(
            "items",
            vec![PlainValue::from(PlainRecord::new().with("deep", PlainRecord::tagged("Ghost")))],
        );
        let err = Deserializer::contextual(&registry).deserialize(&record).unwrap_err();
        assert_eq!(unregistered(err), "Ghost");
    }

    #[test]
    fn missing_and_invalid_tag() {
        let registry = registry();
        let deserializer = Deserializer::new(&registry);

        let err = deserializer.deserialize(&PlainRecord::new().with("number", 1)).unwrap_err();
        assert!(matches!(err, ClassError::MissingClassTag));
        assert_eq!(err.to_string(), "_class is undefined");

        let null = PlainRecord::new().with(CLASS_TAG, PlainValue::Null);
        assert!(matches!(deserializer.deserialize(&null), Err(ClassError::MissingClassTag)));

        let number = PlainRecord::new().with(CLASS_TAG, 1);
        assert!(matches!(
            deserializer.deserialize(&number),
            Err(ClassError::InvalidClassTag(_))
        ));
    }

    #[test]
    fn untagged_nested_records_stay_plain() {
        let registry = registry();
        let record = PlainRecord::tagged("Known").with(
            "meta",
            PlainRecord::new()
                .with(CLASS_TAG, PlainValue::Null)
                .with("a", 1),
        );
        let known = Deserializer::new(&registry).deserialize(&record).unwrap();
        let known = known.downcast_ref::<DynamicObject>().unwrap();
        let meta = known.get("meta").and_then(Value::as_record).unwrap();
        assert_eq!(meta.keys().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn factory_hooks_bracket_assignment() {
        let registry = registry();
        let record = PlainRecord::tagged("Hooked").with("value", 15);
        let hooked: Hooked = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert_eq!(hooked.value, 20);
        assert_eq!(hooked.events, ["pre", "post"]);
    }

    #[test]
    fn contextual_reuses_receiver() {
        let registry = registry();
        let record = PlainRecord::tagged("Hooked").with("value", 15);
        let mut receiver = Hooked::default();
        let result = Deserializer::contextual(&registry)
            .deserialize_into(&mut receiver, &record)
            .unwrap();
        assert!(result.is_receiver());
        assert_eq!(receiver.value, 15);
        assert_eq!(receiver.events, ["on"]);
    }

    #[test]
    fn contextual_nested_records_are_fresh() {
        let registry = registry();
        let record = PlainRecord::tagged("Holder").with("child", PlainRecord::tagged("Hooked"));
        let mut receiver = Holder::default();
        Deserializer::contextual(&registry)
            .deserialize_into(&mut receiver, &record)
            .unwrap();

        let child = receiver.child.unwrap();
        assert_eq!(child.downcast_ref::<Hooked>().unwrap().events, ["on"]);
    }

    #[test]
    fn contextual_mismatch_is_fresh() {
        let registry = registry();
        let mut receiver = Inner { number: 9 };
        let record = PlainRecord::tagged("Base").with("number", 1);

        let result = Deserializer::contextual(&registry)
            .deserialize_into(&mut receiver, &record)
            .unwrap();
        assert!(result.is_fresh());
        let fresh = result.into_fresh().unwrap();
        assert_eq!(fresh.downcast_ref::<Base>().unwrap().number, 1);
        assert_eq!(receiver.number, 9);
    }

    #[test]
    fn contextual_failure_leaves_receiver() {
        let registry = registry();
        let mut receiver = Outer {
            number: 3,
            ..Outer::default()
        };
        let record = PlainRecord::tagged("Outer")
            .with("number", 4)
            .with("any", PlainRecord::tagged("Ghost"));

        let err = Deserializer::contextual(&registry)
            .deserialize_into(&mut receiver, &record)
            .unwrap_err();
        assert_eq!(unregistered(err), "Ghost");
        assert_eq!(receiver.number, 3);
    }

    #[test]
    fn contextual_checks_tag_first() {
        let registry = registry();
        let mut receiver = Inner::default();
        let deserializer = Deserializer::contextual(&registry);

        let err = deserializer
            .deserialize_into(&mut receiver, &PlainRecord::new())
            .unwrap_err();
        assert!(matches!(err, ClassError::MissingClassTag));

        let err = deserializer
            .deserialize_into(&mut receiver, &PlainRecord::tagged("Ghost"))
            .unwrap_err();
        assert_eq!(unregistered(err), "Ghost");
    }

    #[test]
    fn hook_failure() {
        let registry = registry();
        let err = Deserializer::new(&registry)
            .deserialize(&PlainRecord::tagged("Rejecting"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassError::Hook { stage: HookStage::PostDeserialize, .. }
        ));
    }

    #[test]
    fn assignment_errors() {
        let registry = registry();
        let deserializer = Deserializer::new(&registry);

        let record = PlainRecord::tagged("Inner").with("number", "five");
        match deserializer.deserialize(&record).unwrap_err() {
            ClassError::Assign { class, field, source } => {
                assert_eq!(class, "Inner");
                assert_eq!(field, "number");
                assert_eq!(source.expected, "i32");
            }
            other => panic!("unexpected error: {other}"),
        }

        let record = PlainRecord::tagged("Inner").with("unknown", 1);
        assert!(matches!(
            deserializer.deserialize(&record),
            Err(ClassError::UnknownField { field, .. }) if field == "unknown"
        ));

        let record = PlainRecord::tagged("Lenient").with("unknown", 1).with("number", 2);
        let lenient: Lenient = deserializer.deserialize_as(&record).unwrap();
        assert_eq!(lenient.number, 2);
    }

    #[test]
    fn class_mismatch() {
        let registry = registry();
        let err = Deserializer::new(&registry)
            .deserialize_as::<Inner>(&PlainRecord::tagged("Base"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassError::ClassMismatch { expected: "Inner", found } if found == "Base"
        ));
    }

    #[test]
    fn resolve_plain_values() {
        let registry = registry();
        let deserializer = Deserializer::new(&registry);

        let plain = PlainValue::from(vec![
            PlainValue::from(PlainRecord::tagged("Inner").with("number", 1)),
            PlainValue::from(2),
        ]);
        let value = deserializer.resolve(&plain).unwrap();
        let items = value.as_sequence().unwrap();
        assert_eq!(items[0].downcast_ref::<Inner>(), Some(&Inner { number: 1 }));
        assert_eq!(items[1].as_number(), Some(2.into()));
    }

    #[test]
    fn depth_limit() {
        let registry = registry();
        let record = PlainRecord::tagged("Known").with(
            "a",
            PlainRecord::new().with("b", vec![PlainValue::from(PlainRecord::tagged("Inner"))]),
        );

        // Known -> record -> sequence -> Inner
        let ok: Deserializer<'_> =
            Deserializer::with_options(&registry, WalkOptions::new().with_max_depth(4));
        assert!(ok.deserialize(&record).is_ok());

        let tight: Deserializer<'_> =
            Deserializer::with_options(&registry, WalkOptions::new().with_max_depth(3));
        assert!(matches!(
            tight.deserialize(&record),
            Err(ClassError::DepthLimitExceeded { limit: 3 })
        ));
    }

    #[test]
    fn json_round_trip() {
        let registry = registry();
        let mut outer = Outer {
            number: 1,
            inner: Some(Inner { number: 5 }),
            items: vec![Value::instance(Inner { number: 6 })],
            any: Value::from("any"),
        };
        let record = Serializer::new(&registry).serialize(&mut outer).unwrap();
        let text = serde_json::to_string(&record).unwrap();

        let parsed: PlainRecord = serde_json::from_str(&text).unwrap();
        let back: Outer = Deserializer::new(&registry).deserialize_as(&parsed).unwrap();
        assert_eq!(back.number, 1);
        assert_eq!(back.inner, Some(Inner { number: 5 }));
        assert_eq!(back.items[0].downcast_ref::<Inner>(), Some(&Inner { number: 6 }));
        assert_eq!(back.any.as_str(), Some("any"));
    }

    #[test]
    fn raw_identifiers_use_plain_keys() {
        let registry = registry();
        let mut typed = Typed {
            r#type: String::from("a"),
        };
        let record = Serializer::new(&registry).serialize(&mut typed).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["_class", "type"]);

        let record = PlainRecord::tagged("Typed").with("type", "b");
        let back: Typed = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert_eq!(back.r#type, "b");
    }

    #[test]
    fn renamed_field_wins_over_skipped_name() {
        let registry = registry();
        let record = PlainRecord::tagged("Shadowed").with("cache", 7);
        let back: Shadowed = Deserializer::new(&registry).deserialize_as(&record).unwrap();
        assert_eq!(back.real, 7);
        assert_eq!(back.cache, 0);

        let mut shadowed = Shadowed { cache: 1, real: 2 };
        let record = Serializer::new(&registry).serialize(&mut shadowed).unwrap();
        assert_eq!(record.get("cache"), Some(&PlainValue::from(2)));
    }
}
