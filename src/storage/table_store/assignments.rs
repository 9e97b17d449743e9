//! 作业存储操作

use serde_json::json;

use super::TableStoreStorage;
use super::protocol::{QueryParams, SortType};
use super::records::AssignmentRow;
use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
};

const TABLE: &str = "assignment_c";
const FIELDS: &[&str] = &[
    "Name",
    "title_c",
    "category_c",
    "total_points_c",
    "due_date_c",
    "description_c",
];
const DEFAULT_LIMIT: i64 = 100;

impl TableStoreStorage {
    /// 列出作业（按截止日期升序）
    pub async fn list_assignments_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<Vec<Assignment>> {
        let limit = self.clamp_limit(query.limit, DEFAULT_LIMIT);
        let params = QueryParams::with_fields(FIELDS)
            .order_by("due_date_c", SortType::Asc)
            .paged(limit, query.offset.unwrap_or(0).max(0));

        let rows: Vec<AssignmentRow> = self.fetch_records(TABLE, params).await?;
        Ok(rows.into_iter().map(AssignmentRow::into_assignment).collect())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let row: Option<AssignmentRow> = self.get_record(TABLE, id).await?;
        Ok(row.map(AssignmentRow::into_assignment))
    }

    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let record = json!({
            "Name": req.title,
            "title_c": req.title,
            "category_c": req.category,
            "total_points_c": req.total_points,
            "due_date_c": req.due_date,
            "description_c": req.description,
        });

        let row: AssignmentRow = self.create_records(TABLE, vec![record]).await?;
        Ok(row.into_assignment())
    }

    /// 更新作业（只下发提供的字段）
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let mut record = serde_json::Map::new();
        record.insert("Id".into(), json!(id));

        if let Some(title) = &update.title {
            record.insert("Name".into(), json!(title));
            record.insert("title_c".into(), json!(title));
        }
        if let Some(category) = update.category {
            record.insert("category_c".into(), json!(category));
        }
        if let Some(total_points) = update.total_points {
            record.insert("total_points_c".into(), json!(total_points));
        }
        if let Some(due_date) = update.due_date {
            record.insert("due_date_c".into(), json!(due_date));
        }
        if let Some(description) = update.description {
            record.insert("description_c".into(), json!(description));
        }

        let row: Option<AssignmentRow> = self.update_records(TABLE, vec![record.into()]).await?;
        Ok(row.map(AssignmentRow::into_assignment))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        self.delete_records(TABLE, vec![id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_storage;
    use crate::models::assignments::requests::AssignmentListQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_assignments_orders_by_due_date() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_assignments_impl(AssignmentListQuery::default())
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let body = requests[0].2.as_ref().unwrap();
        assert_eq!(body["orderBy"][0]["fieldName"], "due_date_c");
        assert_eq!(body["orderBy"][0]["sorttype"], "ASC");
        // 作业表默认单页 100 条
        assert_eq!(body["pagingInfo"]["limit"], 100);
    }
}
