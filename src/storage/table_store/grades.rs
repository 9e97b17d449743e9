//! 成绩存储操作

use serde_json::json;

use super::TableStoreStorage;
use super::protocol::{Operator, QueryParams, SortType};
use super::records::GradeRow;
use crate::errors::Result;
use crate::models::grades::{
    entities::Grade,
    requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
};

const TABLE: &str = "grade_c";
const FIELDS: &[&str] = &[
    "Name",
    "score_c",
    "submitted_date_c",
    "comments_c",
    "student_id_c",
    "assignment_id_c",
];
const DEFAULT_LIMIT: i64 = 200;

impl TableStoreStorage {
    /// 列出成绩（按提交日期降序），支持学生/作业/日期区间筛选
    pub async fn list_grades_impl(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        let limit = self.clamp_limit(query.limit, DEFAULT_LIMIT);
        let mut params = QueryParams::with_fields(FIELDS)
            .order_by("submitted_date_c", SortType::Desc)
            .paged(limit, query.offset.unwrap_or(0).max(0));

        if let Some(student_id) = query.student_id {
            params = params.and_where("student_id_c", Operator::EqualTo, json!(student_id));
        }
        if let Some(assignment_id) = query.assignment_id {
            params = params.and_where("assignment_id_c", Operator::EqualTo, json!(assignment_id));
        }
        if let Some(start_date) = query.start_date {
            params = params.and_where(
                "submitted_date_c",
                Operator::GreaterThanOrEqualTo,
                json!(start_date),
            );
        }
        if let Some(end_date) = query.end_date {
            params = params.and_where(
                "submitted_date_c",
                Operator::LessThanOrEqualTo,
                json!(end_date),
            );
        }

        let rows: Vec<GradeRow> = self.fetch_records(TABLE, params).await?;
        Ok(rows.into_iter().map(GradeRow::into_grade).collect())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let row: Option<GradeRow> = self.get_record(TABLE, id).await?;
        Ok(row.map(GradeRow::into_grade))
    }

    /// 创建成绩，提交日期缺省取当天
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let submitted_date = req
            .submitted_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let record = json!({
            "Name": format!("Grade-{}-{}", req.student_id, req.assignment_id),
            "student_id_c": req.student_id,
            "assignment_id_c": req.assignment_id,
            "score_c": req.score,
            "submitted_date_c": submitted_date,
            "comments_c": req.comments.unwrap_or_default(),
        });

        let row: GradeRow = self.create_records(TABLE, vec![record]).await?;
        Ok(row.into_grade())
    }

    /// 更新成绩（只下发提供的字段）
    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let mut record = serde_json::Map::new();
        record.insert("Id".into(), json!(id));

        if let Some(score) = update.score {
            record.insert("score_c".into(), json!(score));
        }
        if let Some(submitted_date) = update.submitted_date {
            record.insert("submitted_date_c".into(), json!(submitted_date));
        }
        if let Some(comments) = update.comments {
            record.insert("comments_c".into(), json!(comments));
        }

        let row: Option<GradeRow> = self.update_records(TABLE, vec![record.into()]).await?;
        Ok(row.map(GradeRow::into_grade))
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        self.delete_records(TABLE, vec![id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_storage;
    use crate::models::grades::requests::GradeListQuery;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_grades_normalizes_lookup_refs() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({
                "success": true,
                "data": [
                    {
                        "Id": 11,
                        "score_c": 88.0,
                        "submitted_date_c": "2026-03-02",
                        "student_id_c": {"Id": 3, "Name": "Alice Smith"},
                        "assignment_id_c": {"Id": 7, "Name": "Essay 1"}
                    },
                    {
                        "Id": 12,
                        "score_c": 74.0,
                        "submitted_date_c": "2026-03-01",
                        "student_id_c": 4,
                        "assignment_id_c": 7
                    }
                ]
            }),
        )]);

        let grades = storage
            .list_grades_impl(GradeListQuery::default())
            .await
            .unwrap();

        // lookup 对象与纯 ID 归一化到同一形态
        assert_eq!(grades[0].student_id, 3);
        assert_eq!(grades[1].student_id, 4);
        assert_eq!(grades[0].assignment_id, grades[1].assignment_id);
    }

    #[tokio::test]
    async fn test_date_range_filter_builds_conditions() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_grades_impl(GradeListQuery {
                student_id: Some(3),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2026, 3, 31),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let conditions = requests[0].2.as_ref().unwrap()["where"]
            .as_array()
            .unwrap()
            .clone();
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0]["FieldName"], "student_id_c");
        assert_eq!(conditions[1]["Operator"], "GreaterThanOrEqualTo");
        assert_eq!(conditions[2]["Operator"], "LessThanOrEqualTo");
    }
}
