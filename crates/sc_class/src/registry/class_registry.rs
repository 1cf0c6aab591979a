use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use sc_utils::hash::HashMap;

use crate::ClassError;
use crate::instance::{Class, DynamicObject, Instance};

// -----------------------------------------------------------------------------
// RegisteredClass

/// Produces a blank instance of a class.
pub type ClassFactory = Arc<dyn Fn() -> Box<dyn Instance> + Send + Sync>;

/// A registry entry: a class name and the factory of its blank instances.
#[derive(Clone)]
pub struct RegisteredClass {
    name: Cow<'static, str>,
    factory: ClassFactory,
}

impl RegisteredClass {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn factory(&self) -> &ClassFactory {
        &self.factory
    }

    /// Runs the factory.
    ///
    /// Unlike [`ClassRegistry::instantiate`], this does not check that the
    /// product belongs to a registered class.
    #[inline]
    pub fn create(&self) -> Box<dyn Instance> {
        (self.factory)()
    }
}

impl fmt::Debug for RegisteredClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredClass")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ClassRegistry

/// A table from class name to factory.
///
/// The name is the sole lookup key and registering a name again replaces the
/// previous entry. There is no way to unregister a class.
///
/// Registration is meant to happen at startup, before any serialization or
/// deserialization runs.
///
/// # Examples
///
/// ```
/// use sc_class::derive::Class;
/// use sc_class::registry::ClassRegistry;
/// use sc_class::{ClassError, Instance};
///
/// #[derive(Class, Default, Debug)]
/// struct Known {
///     number: i32,
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register_class::<Known>();
///
/// let blank = registry.instantiate("Known").unwrap();
/// assert_eq!(blank.class_name(), "Known");
///
/// let err = registry.instantiate("Ghost").unwrap_err();
/// assert!(matches!(err, ClassError::UnregisteredClass(name) if name == "Ghost"));
/// ```
pub struct ClassRegistry {
    classes: HashMap<Cow<'static, str>, RegisteredClass>,
}

impl Default for ClassRegistry {
    /// See [`ClassRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Creates a registry with no class at all.
    #[inline]
    pub fn empty() -> Self {
        Self {
            classes: HashMap::default(),
        }
    }

    /// Creates a registry knowing the base class [`DynamicObject`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_class::<DynamicObject>();
        registry
    }

    /// Registers a factory under a class name, replacing any previous entry.
    ///
    /// The factory should produce instances whose
    /// [`class_name`](Instance::class_name) is `name`, or at least a registered
    /// name; [`instantiate`](Self::instantiate) rejects anything else.
    pub fn register<F>(&mut self, name: impl Into<Cow<'static, str>>, factory: F)
    where
        F: Fn() -> Box<dyn Instance> + Send + Sync + 'static,
    {
        let name = name.into();
        debug_assert!(!name.is_empty(), "class name must not be empty");

        let entry = RegisteredClass {
            name: name.clone(),
            factory: Arc::new(factory),
        };
        if let Some(previous) = self.classes.insert(name, entry) {
            log::debug!("class `{}` registered again, replacing its factory", previous.name);
        }
    }

    /// Registers `T` under [`Class::NAME`] with [`Default`] as its factory.
    #[inline]
    pub fn register_class<T: Class>(&mut self) {
        self.register(T::NAME, || Box::new(T::default()) as Box<dyn Instance>);
    }

    /// Registers a class backed by a [`DynamicObject`] of that name.
    pub fn register_dynamic(&mut self, name: impl Into<Cow<'static, str>>) {
        let name = name.into();
        let class = name.clone();
        self.register(name, move || {
            Box::new(DynamicObject::with_class(class.clone())) as Box<dyn Instance>
        });
    }

    /// Registers every class marked `#[class(auto_register)]`.
    ///
    /// Returns the number of registrations performed. Calling it again
    /// registers the same classes again, which is harmless.
    ///
    /// Requires the `auto_register` feature; without it this does nothing and
    /// returns `0`. On platforms the [`inventory`] crate does not support, the
    /// collected list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc_class::derive::Class;
    /// use sc_class::registry::ClassRegistry;
    ///
    /// #[derive(Class, Default, Debug)]
    /// #[class(auto_register)]
    /// struct Known {
    ///     number: i32,
    /// }
    ///
    /// let mut registry = ClassRegistry::empty();
    /// assert!(registry.auto_register() >= 1);
    /// assert!(registry.contains("Known"));
    /// ```
    ///
    /// [`inventory`]: https://docs.rs/inventory
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::__register_classes(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }

    /// Returns the entry of a class, or `None` if it is not registered.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&RegisteredClass> {
        self.classes.get(name)
    }

    /// Returns the entry of a class.
    ///
    /// Fails with [`ClassError::UnregisteredClass`] if it is not registered.
    #[inline]
    pub fn lookup(&self, name: &str) -> Result<&RegisteredClass, ClassError> {
        self.get(name).ok_or_else(|| ClassError::unregistered(name))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Produces a blank instance of a registered class.
    ///
    /// Fails with [`ClassError::UnregisteredClass`] if `name` is unknown, or if
    /// the factory produced an instance whose own class is unknown.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Instance>, ClassError> {
        let instance = self.lookup(name)?.create();
        let class = instance.class_name();
        if class != name && !self.contains(class) {
            return Err(ClassError::unregistered(class));
        }
        Ok(instance)
    }

    /// Constructs a blank `T`, checking that its class is registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc_class::derive::Class;
    /// use sc_class::registry::ClassRegistry;
    ///
    /// #[derive(Class, Default, Debug)]
    /// struct Known {
    ///     number: i32,
    /// }
    ///
    /// let mut registry = ClassRegistry::new();
    /// assert!(registry.create::<Known>().is_err());
    ///
    /// registry.register_class::<Known>();
    /// assert_eq!(registry.create::<Known>().unwrap().number, 0);
    /// ```
    pub fn create<T: Class>(&self) -> Result<T, ClassError> {
        if !self.contains(T::NAME) {
            return Err(ClassError::unregistered(T::NAME));
        }
        Ok(T::default())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates the registered class names in no particular order.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.keys().map(|name| &**name)
    }

    /// Iterates the registered entries in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredClass> + '_ {
        self.classes.values()
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::ClassRegistry;
    use crate::derive::Class;
    use crate::{ClassError, DynamicObject, Instance};

    #[derive(Class, Default, Debug)]
    struct Known {
        number: i32,
    }

    #[test]
    fn base_class_is_preregistered() {
        let registry = ClassRegistry::new();
        assert!(registry.contains(DynamicObject::CLASS_NAME));
        assert_eq!(registry.len(), 1);
        assert!(ClassRegistry::empty().is_empty());
    }

    #[test]
    fn lookup_unregistered() {
        let registry = ClassRegistry::new();
        assert!(registry.get("Ghost").is_none());
        let err = registry.lookup("Ghost").unwrap_err();
        assert_eq!(err.to_string(), "Ghost has not been registered as a class");
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ClassRegistry::empty();
        registry.register_dynamic("Known");
        assert!(registry.instantiate("Known").unwrap().is::<DynamicObject>());

        registry.register_class::<Known>();
        assert!(registry.instantiate("Known").unwrap().is::<Known>());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Known"]);
    }

    #[test]
    fn instantiate_checks_product() {
        let mut registry = ClassRegistry::empty();
        registry.register("Alias", || {
            Box::new(DynamicObject::with_class("Hidden")) as Box<dyn Instance>
        });
        assert!(matches!(
            registry.instantiate("Alias"),
            Err(ClassError::UnregisteredClass(name)) if name == "Hidden"
        ));

        registry.register_dynamic("Hidden");
        let instance = registry.instantiate("Alias").unwrap();
        assert_eq!(instance.class_name(), "Hidden");
    }

    #[test]
    fn create_requires_registration() {
        let mut registry = ClassRegistry::new();
        assert!(matches!(
            registry.create::<Known>(),
            Err(ClassError::UnregisteredClass(name)) if name == "Known"
        ));

        registry.register_class::<Known>();
        assert_eq!(registry.create::<Known>().unwrap().number, 0);
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_classes() {
        #[derive(Class, Default, Debug)]
        #[class(name = "registry.Collected", auto_register)]
        struct Collected;

        let mut registry = ClassRegistry::empty();
        assert!(registry.auto_register() >= 1);
        assert!(registry.contains("registry.Collected"));
        assert!(!registry.contains("Known"));
    }
}
