//! 学生名册存储操作

use serde_json::json;

use super::TableStoreStorage;
use super::protocol::{Operator, QueryParams, SortType};
use super::records::StudentRow;
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};

const TABLE: &str = "student_c";
const FIELDS: &[&str] = &[
    "Name",
    "first_name_c",
    "last_name_c",
    "email_c",
    "grade_level_c",
    "enrollment_date_c",
    "status_c",
];
const DEFAULT_LIMIT: i64 = 200;

impl TableStoreStorage {
    /// 列出学生，search 为空时返回整个名册
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let limit = self.clamp_limit(query.limit, DEFAULT_LIMIT);
        let mut params = QueryParams::with_fields(FIELDS)
            .order_by("Name", SortType::Asc)
            .paged(limit, query.offset.unwrap_or(0).max(0));

        // 模糊搜索：姓名或邮箱任一字段包含关键词
        if let Some(search) = query.search.filter(|s| !s.trim().is_empty()) {
            let keyword = search.trim();
            params = params.or_group(vec![
                ("first_name_c", Operator::Contains, json!(keyword)),
                ("last_name_c", Operator::Contains, json!(keyword)),
                ("email_c", Operator::Contains, json!(keyword)),
            ]);
        }

        let rows: Vec<StudentRow> = self.fetch_records(TABLE, params).await?;
        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let row: Option<StudentRow> = self.get_record(TABLE, id).await?;
        Ok(row.map(StudentRow::into_student))
    }

    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let record = json!({
            "Name": format!("{} {}", req.first_name, req.last_name),
            "first_name_c": req.first_name,
            "last_name_c": req.last_name,
            "email_c": req.email,
            "grade_level_c": req.grade_level,
            "enrollment_date_c": req.enrollment_date,
            "status_c": req.status,
        });

        let row: StudentRow = self.create_records(TABLE, vec![record]).await?;
        Ok(row.into_student())
    }

    /// 更新学生（只下发提供的字段）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let mut record = serde_json::Map::new();
        record.insert("Id".into(), json!(id));

        if let Some(first_name) = &update.first_name {
            record.insert("first_name_c".into(), json!(first_name));
        }
        if let Some(last_name) = &update.last_name {
            record.insert("last_name_c".into(), json!(last_name));
        }
        // 姓名齐全时同步展示列
        if let (Some(first_name), Some(last_name)) = (&update.first_name, &update.last_name) {
            record.insert("Name".into(), json!(format!("{first_name} {last_name}")));
        }
        if let Some(email) = update.email {
            record.insert("email_c".into(), json!(email));
        }
        if let Some(grade_level) = update.grade_level {
            record.insert("grade_level_c".into(), json!(grade_level));
        }
        if let Some(enrollment_date) = update.enrollment_date {
            record.insert("enrollment_date_c".into(), json!(enrollment_date));
        }
        if let Some(status) = update.status {
            record.insert("status_c".into(), json!(status));
        }

        let row: Option<StudentRow> = self.update_records(TABLE, vec![record.into()]).await?;
        Ok(row.map(StudentRow::into_student))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        self.delete_records(TABLE, vec![id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_storage;
    use crate::models::students::requests::StudentListQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_students_normalizes_rows() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({
                "success": true,
                "data": [
                    {
                        "Id": 1,
                        "first_name_c": "Alice",
                        "last_name_c": "Smith",
                        "email_c": "alice@example.edu",
                        "grade_level_c": 9,
                        "enrollment_date_c": "2025-09-01",
                        "status_c": "active"
                    },
                    {"Id": 2, "first_name_c": "Bob", "last_name_c": "Jones"}
                ]
            }),
        )]);

        let students = storage
            .list_students_impl(StudentListQuery::default())
            .await
            .unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].full_name(), "Alice Smith");
        assert!(students[0].is_active());
        // 缺失状态降级为 inactive
        assert!(!students[1].is_active());
    }

    #[tokio::test]
    async fn test_search_builds_or_group() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_students_impl(StudentListQuery {
                search: Some("ali".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let body = requests[0].2.as_ref().unwrap();
        let groups = &body["whereGroups"][0];
        assert_eq!(groups["operator"], "OR");
        assert_eq!(groups["subGroups"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_limit_is_clamped() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_students_impl(StudentListQuery {
                limit: Some(100_000),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let body = requests[0].2.as_ref().unwrap();
        assert_eq!(body["pagingInfo"]["limit"], 200);
    }
}
