use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::BuildHasher;
use std::collections::HashMap;

use super::{Walk, WalkMut};
use crate::instance::Instance;
use crate::value::{Function, PlainValue, Record, Value};

// -----------------------------------------------------------------------------
// Primitives

macro_rules! impl_walk_primitive {
    ($($ty:ty),*) => {$(
        impl Walk for $ty {
            #[inline]
            fn walk_mut(&mut self) -> WalkMut<'_> {
                WalkMut::Primitive(PlainValue::from(*self))
            }
        }
    )*};
}

impl_walk_primitive!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Walk for String {
    #[inline]
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Primitive(PlainValue::String(self.clone()))
    }
}

impl Walk for Function {
    #[inline]
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Function
    }
}

impl<T: Walk> Walk for Option<T> {
    #[inline]
    fn walk_mut(&mut self) -> WalkMut<'_> {
        match self {
            Some(value) => value.walk_mut(),
            None => WalkMut::Primitive(PlainValue::Null),
        }
    }
}

// -----------------------------------------------------------------------------
// Containers

impl<T: Walk> Walk for Vec<T> {
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Sequence(Box::new(self.iter_mut().map(|item| item as &mut dyn Walk)))
    }
}

impl<T: Walk> Walk for Record<T> {
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Record(Box::new(
            self.iter_mut().map(|(key, value)| (key, value as &mut dyn Walk)),
        ))
    }
}

impl<T: Walk, S: BuildHasher> Walk for HashMap<String, T, S> {
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Record(Box::new(
            self.iter_mut()
                .map(|(key, value)| (key.as_str(), value as &mut dyn Walk)),
        ))
    }
}

impl<T: Walk> Walk for BTreeMap<String, T> {
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Record(Box::new(
            self.iter_mut()
                .map(|(key, value)| (key.as_str(), value as &mut dyn Walk)),
        ))
    }
}

// -----------------------------------------------------------------------------
// Dynamic values

impl Walk for Box<dyn Instance> {
    #[inline]
    fn walk_mut(&mut self) -> WalkMut<'_> {
        WalkMut::Instance(&mut **self)
    }
}

impl Walk for Value {
    fn walk_mut(&mut self) -> WalkMut<'_> {
        match self {
            Value::Null => WalkMut::Primitive(PlainValue::Null),
            Value::Bool(v) => WalkMut::Primitive(PlainValue::Bool(*v)),
            Value::Number(v) => WalkMut::Primitive(PlainValue::Number(*v)),
            Value::String(v) => WalkMut::Primitive(PlainValue::String(v.clone())),
            Value::Sequence(items) => items.walk_mut(),
            Value::Record(record) => record.walk_mut(),
            Value::Instance(instance) => WalkMut::Instance(&mut **instance),
            Value::Function(_) => WalkMut::Function,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use crate::value::{Function, PlainValue, Value};
    use crate::walk::{Walk, WalkMut};

    fn primitive(value: &mut dyn Walk) -> Option<PlainValue> {
        match value.walk_mut() {
            WalkMut::Primitive(v) => Some(v),
            _ => None,
        }
    }

    #[test]
    fn primitives() {
        assert_eq!(primitive(&mut 5_u8), Some(PlainValue::from(5)));
        assert_eq!(primitive(&mut 0.5_f32), Some(PlainValue::from(0.5)));
        assert_eq!(primitive(&mut String::from("a")), Some(PlainValue::from("a")));
        assert_eq!(primitive(&mut None::<i32>), Some(PlainValue::Null));
        assert_eq!(primitive(&mut Some(true)), Some(PlainValue::Bool(true)));
    }

    #[test]
    fn containers() {
        let mut items = vec![1, 2, 3];
        match items.walk_mut() {
            WalkMut::Sequence(iter) => assert_eq!(iter.count(), 3),
            _ => panic!("expected a sequence"),
        }

        let mut map = BTreeMap::from([(String::from("b"), 2), (String::from("a"), 1)]);
        match map.walk_mut() {
            WalkMut::Record(iter) => {
                let keys: Vec<&str> = iter.map(|(key, _)| key).collect();
                assert_eq!(keys, ["a", "b"]);
            }
            _ => panic!("expected a record"),
        }
    }

    #[test]
    fn functions() {
        assert!(matches!(Function::noop().walk_mut(), WalkMut::Function));
        assert!(matches!(Value::function(|_| Value::Null).walk_mut(), WalkMut::Function));
    }
}
