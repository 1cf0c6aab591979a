//! `serde` support for the plain data shape.
//!
//! The plain shape maps one-to-one onto the serde data model: records are maps,
//! sequences are seqs, and `unit`/`none` are `null`. Deserialization goes
//! through `deserialize_any`, so self-describing formats are required.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Number, PlainRecord, PlainValue};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(v) => serializer.serialize_i64(v),
            Self::UInt(v) => serializer.serialize_u64(v),
            Self::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(v) => v.serialize(serializer),
            Self::String(v) => serializer.serialize_str(v),
            Self::Sequence(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for PlainRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Deserialize

struct PlainValueVisitor;

impl<'de> Visitor<'de> for PlainValueVisitor {
    type Value = PlainValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a plain value (null, bool, number, string, sequence or record)")
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<PlainValue, E> {
        Ok(PlainValue::Bool(v))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PlainValue, E> {
        Ok(PlainValue::Number(Number::Int(v)))
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PlainValue, E> {
        Ok(PlainValue::Number(Number::UInt(v)))
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PlainValue, E> {
        Ok(PlainValue::Number(Number::Float(v)))
    }

    #[inline]
    fn visit_char<E: de::Error>(self, v: char) -> Result<PlainValue, E> {
        let mut buf = [0_u8; 4];
        Ok(PlainValue::String(String::from(v.encode_utf8(&mut buf))))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<PlainValue, E> {
        Ok(PlainValue::String(String::from(v)))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> Result<PlainValue, E> {
        Ok(PlainValue::String(v))
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<PlainValue, E> {
        Ok(PlainValue::Null)
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<PlainValue, E> {
        Ok(PlainValue::Null)
    }

    #[inline]
    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<PlainValue, D::Error> {
        PlainValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PlainValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(item) = seq.next_element::<PlainValue>()? {
            items.push(item);
        }
        Ok(PlainValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<PlainValue, A::Error> {
        PlainRecordVisitor.visit_map(map).map(PlainValue::Record)
    }
}

impl<'de> Deserialize<'de> for PlainValue {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlainValueVisitor)
    }
}

struct PlainRecordVisitor;

impl<'de> Visitor<'de> for PlainRecordVisitor {
    type Value = PlainRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PlainRecord, A::Error> {
        let mut record = PlainRecord::with_capacity(map.size_hint().unwrap_or(0).min(1024));
        while let Some((key, value)) = map.next_entry::<String, PlainValue>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for PlainRecord {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PlainRecordVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Number, PlainRecord, PlainValue};

    fn sample() -> PlainRecord {
        PlainRecord::tagged("Outer")
            .with("number", 0)
            .with("ratio", 0.5)
            .with("name", "outer")
            .with("flag", true)
            .with("missing", PlainValue::Null)
            .with("items", vec![PlainValue::from(1), PlainValue::from("two")])
            .with("inner", PlainRecord::tagged("Inner").with("number", 5))
    }

    #[test]
    fn json_text_round_trip() {
        let record = sample();
        let text = serde_json::to_string(&record).unwrap();
        assert!(text.starts_with(r#"{"_class":"Outer","number":0"#));

        let back: PlainRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.get("number"), Some(&PlainValue::Number(Number::UInt(0))));
    }

    #[test]
    fn ron_text_round_trip() {
        let record = sample();
        let text = ron::to_string(&record).unwrap();
        let back: PlainRecord = ron::from_str(&text).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn json_value_interop() {
        let json = serde_json::json!({ "_class": "Known", "child": { "_class": "Ghost" } });
        let record: PlainRecord = serde_json::from_value(json.clone()).unwrap();

        let child = record.get("child").and_then(PlainValue::as_record).unwrap();
        assert_eq!(child.class_tag().unwrap(), Some("Ghost"));
        assert_eq!(serde_json::to_value(&record).unwrap(), json);
    }
}
