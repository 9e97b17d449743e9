//! 考勤存储操作

use serde_json::json;

use super::TableStoreStorage;
use super::protocol::{Operator, QueryParams, SortType};
use super::records::AttendanceRow;
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
};

const TABLE: &str = "attendance_c";
const FIELDS: &[&str] = &["Name", "student_id_c", "date_c", "status_c", "notes_c"];
const DEFAULT_LIMIT: i64 = 200;

impl TableStoreStorage {
    /// 列出考勤记录（按日期降序），支持学生/单日/日期区间筛选
    pub async fn list_attendance_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        let limit = self.clamp_limit(query.limit, DEFAULT_LIMIT);
        let mut params = QueryParams::with_fields(FIELDS)
            .order_by("date_c", SortType::Desc)
            .paged(limit, query.offset.unwrap_or(0).max(0));

        if let Some(student_id) = query.student_id {
            params = params.and_where("student_id_c", Operator::EqualTo, json!(student_id));
        }
        // 单日筛选优先于区间
        if let Some(date) = query.date {
            params = params.and_where("date_c", Operator::EqualTo, json!(date));
        } else {
            if let Some(start_date) = query.start_date {
                params =
                    params.and_where("date_c", Operator::GreaterThanOrEqualTo, json!(start_date));
            }
            if let Some(end_date) = query.end_date {
                params = params.and_where("date_c", Operator::LessThanOrEqualTo, json!(end_date));
            }
        }

        let rows: Vec<AttendanceRow> = self.fetch_records(TABLE, params).await?;
        Ok(rows.into_iter().map(AttendanceRow::into_attendance).collect())
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let row: Option<AttendanceRow> = self.get_record(TABLE, id).await?;
        Ok(row.map(AttendanceRow::into_attendance))
    }

    /// 创建考勤记录
    pub async fn create_attendance_impl(
        &self,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let record = json!({
            "Name": format!("Attendance-{}-{}", req.student_id, req.date),
            "student_id_c": req.student_id,
            "date_c": req.date,
            "status_c": req.status,
            "notes_c": req.notes.unwrap_or_default(),
        });

        let row: AttendanceRow = self.create_records(TABLE, vec![record]).await?;
        Ok(row.into_attendance())
    }

    /// 更新考勤记录（只下发提供的字段）
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        let mut record = serde_json::Map::new();
        record.insert("Id".into(), json!(id));

        if let Some(date) = update.date {
            record.insert("date_c".into(), json!(date));
        }
        if let Some(status) = update.status {
            record.insert("status_c".into(), json!(status));
        }
        if let Some(notes) = update.notes {
            record.insert("notes_c".into(), json!(notes));
        }

        let row: Option<AttendanceRow> = self.update_records(TABLE, vec![record.into()]).await?;
        Ok(row.map(AttendanceRow::into_attendance))
    }

    /// 删除考勤记录
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        self.delete_records(TABLE, vec![id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_storage;
    use crate::models::attendance::requests::AttendanceListQuery;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_single_date_filter_wins_over_range() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_attendance_impl(AttendanceListQuery {
                date: NaiveDate::from_ymd_opt(2026, 3, 2),
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
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0]["FieldName"], "date_c");
        assert_eq!(conditions[0]["Operator"], "EqualTo");
        assert_eq!(conditions[0]["Values"][0], "2026-03-02");
    }

    #[tokio::test]
    async fn test_list_attendance_orders_by_date_desc() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .list_attendance_impl(AttendanceListQuery::default())
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let body = requests[0].2.as_ref().unwrap();
        assert_eq!(body["orderBy"][0]["fieldName"], "date_c");
        assert_eq!(body["orderBy"][0]["sorttype"], "DESC");
    }
}
