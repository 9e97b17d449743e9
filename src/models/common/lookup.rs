use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 外键字段的归一化表示
///
/// 表格存储返回的外键有两种形态：纯数字 ID，或携带 `Id`/`Name` 的 lookup 对象。
/// 在反序列化边界统一收敛为 ID，后续比较一律使用 `id()`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef(pub i64);

impl RecordRef {
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl From<RecordRef> for i64 {
    fn from(r: RecordRef) -> i64 {
        r.0
    }
}

impl From<i64> for RecordRef {
    fn from(id: i64) -> Self {
        RecordRef(id)
    }
}

impl Serialize for RecordRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for RecordRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordRefVisitor;

        impl<'de> Visitor<'de> for RecordRefVisitor {
            type Value = RecordRef;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer id or a lookup object with an Id field")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RecordRef(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value <= i64::MAX as u64 {
                    Ok(RecordRef(value as i64))
                } else {
                    Err(E::invalid_value(de::Unexpected::Unsigned(value), &self))
                }
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // lookup 对象形如 {"Id": 3, "Name": "..."}，除 Id 外的字段忽略
                let mut id: Option<i64> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "Id" {
                        id = Some(map.next_value()?);
                    } else {
                        let _ = map.next_value::<serde::de::IgnoredAny>()?;
                    }
                }
                id.map(RecordRef)
                    .ok_or_else(|| de::Error::missing_field("Id"))
            }
        }

        deserializer.deserialize_any(RecordRefVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plain_id() {
        let r: RecordRef = serde_json::from_str("7").unwrap();
        assert_eq!(r.id(), 7);
    }

    #[test]
    fn test_deserialize_lookup_object() {
        let r: RecordRef = serde_json::from_str(r#"{"Id": 7, "Name": "Alice Smith"}"#).unwrap();
        assert_eq!(r.id(), 7);
    }

    #[test]
    fn test_both_shapes_normalize_equal() {
        let plain: RecordRef = serde_json::from_str("42").unwrap();
        let lookup: RecordRef = serde_json::from_str(r#"{"Id": 42}"#).unwrap();
        assert_eq!(plain, lookup);
    }

    #[test]
    fn test_lookup_without_id_is_error() {
        let r: Result<RecordRef, _> = serde_json::from_str(r#"{"Name": "orphan"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_serialize_as_plain_id() {
        let json = serde_json::to_string(&RecordRef(5)).unwrap();
        assert_eq!(json, "5");
    }
}
