use serde::{Deserialize, Deserializer};
use ts_rs::TS;

// 列表查询分页参数（limit/offset 直接透传给表格存储）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/paging.ts")]
pub struct PagingQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
}

// 自定义反序列化函数，支持字符串到i64的转换
// （serde flatten 会把查询参数先收进字符串 map，数字字段需要手动转换）
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct OptI64Visitor;

    impl<'de> Visitor<'de> for OptI64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a string containing an integer, or nothing")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(OptI64Visitor)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(Some(value as i64))
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_option(OptI64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(flatten)]
        paging: PagingQuery,
    }

    #[test]
    fn test_paging_from_string_values() {
        let parsed: Wrapper = serde_json::from_str(r#"{"limit": "50", "offset": "10"}"#).unwrap();
        assert_eq!(parsed.paging.limit, Some(50));
        assert_eq!(parsed.paging.offset, Some(10));
    }

    #[test]
    fn test_paging_missing_fields() {
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.paging.limit, None);
        assert_eq!(parsed.paging.offset, None);
    }

    #[test]
    fn test_paging_numeric_values() {
        let parsed: Wrapper = serde_json::from_str(r#"{"limit": 25, "offset": 0}"#).unwrap();
        assert_eq!(parsed.paging.limit, Some(25));
        assert_eq!(parsed.paging.offset, Some(0));
    }
}
