//! 表格存储服务的请求/响应报文结构
//!
//! 查询报文：字段投影 + where 条件 + whereGroups（OR 组合）+ 排序 + 分页。
//! 变更报文：records 数组（创建/更新）或 RecordIds 数组（删除），
//! 响应按记录返回 success 标志。

use serde::{Deserialize, Serialize};
use serde_json::Value;

// 字段投影
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub field: FieldName,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

impl FieldSpec {
    pub fn new(name: &str) -> Self {
        Self {
            field: FieldName {
                name: name.to_string(),
            },
        }
    }
}

// 筛选操作符
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Operator {
    EqualTo,
    Contains,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
}

// where 条件（顶层 AND 语义）
#[derive(Debug, Clone, Serialize)]
pub struct WhereCondition {
    #[serde(rename = "FieldName")]
    pub field_name: String,
    #[serde(rename = "Operator")]
    pub operator: Operator,
    #[serde(rename = "Values")]
    pub values: Vec<Value>,
}

// whereGroups 组合操作符
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupOperator {
    Or,
    And,
}

// whereGroups：子组之间按 operator 组合（子条件字段名为小写键）
#[derive(Debug, Clone, Serialize)]
pub struct WhereGroup {
    pub operator: GroupOperator,
    #[serde(rename = "subGroups")]
    pub sub_groups: Vec<SubGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubGroup {
    pub conditions: Vec<SubCondition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubCondition {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub operator: Operator,
    pub values: Vec<Value>,
}

// 排序方向
#[derive(Debug, Clone, Copy, Serialize)]
pub enum SortType {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderBy {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub sorttype: SortType,
}

// 分页信息
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PagingInfo {
    pub limit: i64,
    pub offset: i64,
}

/// 查询请求报文
#[derive(Debug, Clone, Serialize, Default)]
pub struct QueryParams {
    pub fields: Vec<FieldSpec>,
    #[serde(rename = "where", skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<WhereCondition>,
    #[serde(rename = "whereGroups", skip_serializing_if = "Vec::is_empty")]
    pub where_groups: Vec<WhereGroup>,
    #[serde(rename = "orderBy", skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
    #[serde(rename = "pagingInfo", skip_serializing_if = "Option::is_none")]
    pub paging_info: Option<PagingInfo>,
}

impl QueryParams {
    pub fn with_fields(names: &[&str]) -> Self {
        Self {
            fields: names.iter().map(|n| FieldSpec::new(n)).collect(),
            ..Default::default()
        }
    }

    pub fn and_where(mut self, field: &str, operator: Operator, value: Value) -> Self {
        self.conditions.push(WhereCondition {
            field_name: field.to_string(),
            operator,
            values: vec![value],
        });
        self
    }

    /// 追加一个 OR 组，每个 (field, operator, value) 元组是一个独立子组
    pub fn or_group(mut self, conditions: Vec<(&str, Operator, Value)>) -> Self {
        self.where_groups.push(WhereGroup {
            operator: GroupOperator::Or,
            sub_groups: conditions
                .into_iter()
                .map(|(field, operator, value)| SubGroup {
                    conditions: vec![SubCondition {
                        field_name: field.to_string(),
                        operator,
                        values: vec![value],
                    }],
                })
                .collect(),
        });
        self
    }

    pub fn order_by(mut self, field: &str, sorttype: SortType) -> Self {
        self.order_by.push(OrderBy {
            field_name: field.to_string(),
            sorttype,
        });
        self
    }

    pub fn paged(mut self, limit: i64, offset: i64) -> Self {
        self.paging_info = Some(PagingInfo { limit, offset });
        self
    }
}

/// 创建/更新请求报文
#[derive(Debug, Clone, Serialize)]
pub struct RecordsPayload {
    pub records: Vec<Value>,
}

/// 删除请求报文
#[derive(Debug, Clone, Serialize)]
pub struct DeletePayload {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<i64>,
}

/// 查询响应（data 为记录数组）
#[derive(Debug, Deserialize)]
pub struct FetchEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<Vec<T>>,
}

/// 单记录响应（getById）
#[derive(Debug, Deserialize)]
pub struct SingleEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// 变更响应（按记录返回结果）
#[derive(Debug, Deserialize)]
pub struct MutationEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub results: Option<Vec<RecordResult<T>>>,
}

#[derive(Debug, Deserialize)]
pub struct RecordResult<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params_wire_shape() {
        let params = QueryParams::with_fields(&["Name", "score_c"])
            .and_where("student_id_c", Operator::EqualTo, json!(3))
            .order_by("submitted_date_c", SortType::Desc)
            .paged(200, 0);

        let wire = serde_json::to_value(&params).unwrap();
        assert_eq!(wire["fields"][0]["field"]["Name"], "Name");
        assert_eq!(wire["where"][0]["FieldName"], "student_id_c");
        assert_eq!(wire["where"][0]["Operator"], "EqualTo");
        assert_eq!(wire["where"][0]["Values"][0], 3);
        assert_eq!(wire["orderBy"][0]["sorttype"], "DESC");
        assert_eq!(wire["pagingInfo"]["limit"], 200);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let params = QueryParams::with_fields(&["Name"]);
        let wire = serde_json::to_value(&params).unwrap();
        assert!(wire.get("where").is_none());
        assert!(wire.get("whereGroups").is_none());
        assert!(wire.get("orderBy").is_none());
        assert!(wire.get("pagingInfo").is_none());
    }

    #[test]
    fn test_or_group_wire_shape() {
        let params = QueryParams::with_fields(&["Name"]).or_group(vec![
            ("first_name_c", Operator::Contains, json!("al")),
            ("last_name_c", Operator::Contains, json!("al")),
        ]);

        let wire = serde_json::to_value(&params).unwrap();
        assert_eq!(wire["whereGroups"][0]["operator"], "OR");
        assert_eq!(
            wire["whereGroups"][0]["subGroups"][0]["conditions"][0]["fieldName"],
            "first_name_c"
        );
        assert_eq!(
            wire["whereGroups"][0]["subGroups"][1]["conditions"][0]["operator"],
            "Contains"
        );
    }
}
