//! 远程表格存储实现
//!
//! 所有实体数据托管在外部表格存储服务，每个操作对应一次 HTTP 调用：
//! 查询走 `POST .../records/query`，单条读取走 `GET .../records/{id}`，
//! 创建/更新/删除走 records 批量报文。本层不做缓存，不做重试。

mod assignments;
mod attendance;
pub mod client;
mod grades;
pub mod protocol;
mod records;
mod students;

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::config::structs::TableStoreConfig;
use crate::errors::{ClassTrackError, Result};
use self::client::{BasicClient, HttpClient};
use self::protocol::{
    DeletePayload, FetchEnvelope, MutationEnvelope, QueryParams, RecordsPayload, SingleEnvelope,
};

/// 远程表格存储
pub struct TableStoreStorage {
    client: Arc<dyn HttpClient>,
    cfg: TableStoreConfig,
}

impl TableStoreStorage {
    /// 从全局配置创建存储实例（进程内共享一个客户端）
    pub fn from_config() -> Result<Self> {
        let cfg = AppConfig::get().table_store.clone();
        if cfg.base_url.is_empty() {
            return Err(ClassTrackError::table_store_config(
                "table_store.base_url is not configured",
            ));
        }

        info!("Table store client initialized, endpoint: {}", cfg.base_url);

        Ok(Self::new(Arc::new(BasicClient::new()), cfg))
    }

    pub fn new(client: Arc<dyn HttpClient>, cfg: TableStoreConfig) -> Self {
        Self { client, cfg }
    }

    /// 单次查询条数上限（调用方给定值也会被全局上限钳制）
    pub(crate) fn clamp_limit(&self, requested: Option<i64>, default: i64) -> i64 {
        requested
            .unwrap_or(default)
            .clamp(1, self.cfg.page_limit.max(default))
    }

    fn records_url(&self, table: &str) -> String {
        format!(
            "{}/projects/{}/tables/{}/records",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.project_id,
            table
        )
    }

    fn build_request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| ClassTrackError::table_store_config(format!("无效的存储地址: {e}")))?;
        let mut req = reqwest::Request::new(method, url);
        req.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.cfg.api_key))
            .map_err(|e| ClassTrackError::table_store_config(format!("无效的 API key: {e}")))?;
        req.headers_mut().insert(AUTHORIZATION, auth);
        if let Some(body) = body {
            *req.body_mut() = Some(serde_json::to_vec(body)?.into());
        }
        Ok(req)
    }

    /// 查询多条记录
    pub(crate) async fn fetch_records<T: DeserializeOwned>(
        &self,
        table: &str,
        params: QueryParams,
    ) -> Result<Vec<T>> {
        let url = format!("{}/query", self.records_url(table));
        let req = self.build_request(Method::POST, &url, Some(&params))?;
        let resp = self.client.execute(req).await?;

        let status = resp.status();
        if !status.is_success() {
            error!("Table store query on {} failed: HTTP {}", table, status);
            return Err(ClassTrackError::table_store_operation(format!(
                "查询 {table} 失败: HTTP {status}"
            )));
        }

        let envelope: FetchEnvelope<T> = resp.json().await?;
        if !envelope.success {
            let message = envelope.message.unwrap_or_else(|| "unknown error".into());
            error!("Table store query on {} rejected: {}", table, message);
            return Err(ClassTrackError::table_store_operation(message));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    /// 按 ID 读取单条记录，success=false 即未找到
    pub(crate) async fn get_record<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<Option<T>> {
        let url = format!("{}/{}", self.records_url(table), id);
        let req = self.build_request::<()>(Method::GET, &url, None)?;
        let resp = self.client.execute(req).await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            error!("Table store get on {} failed: HTTP {}", table, status);
            return Err(ClassTrackError::table_store_operation(format!(
                "读取 {table} 记录失败: HTTP {status}"
            )));
        }

        let envelope: SingleEnvelope<T> = resp.json().await?;
        if !envelope.success {
            return Ok(None);
        }
        Ok(envelope.data)
    }

    /// 创建记录，返回首条成功结果；部分失败会被过滤并记录日志
    pub(crate) async fn create_records<T: DeserializeOwned>(
        &self,
        table: &str,
        records: Vec<serde_json::Value>,
    ) -> Result<T> {
        let envelope = self
            .mutate(Method::POST, table, &RecordsPayload { records })
            .await?;
        match self.first_success(table, "create", envelope) {
            Some(data) => Ok(data),
            None => Err(ClassTrackError::table_store_operation(format!(
                "创建 {table} 记录失败: 没有成功写入的记录"
            ))),
        }
    }

    /// 更新记录，没有成功结果时返回 None（记录不存在或被存储拒绝）
    pub(crate) async fn update_records<T: DeserializeOwned>(
        &self,
        table: &str,
        records: Vec<serde_json::Value>,
    ) -> Result<Option<T>> {
        let envelope = self
            .mutate(Method::PATCH, table, &RecordsPayload { records })
            .await?;
        Ok(self.first_success(table, "update", envelope))
    }

    /// 删除记录，任一条成功即视为成功
    pub(crate) async fn delete_records(&self, table: &str, record_ids: Vec<i64>) -> Result<bool> {
        let envelope: MutationEnvelope<serde_json::Value> = self
            .mutate(Method::DELETE, table, &DeletePayload { record_ids })
            .await?;
        let results = envelope.results.unwrap_or_default();
        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            error!(
                "Failed to delete {} record(s) from {}: {} failure(s)",
                results.len(),
                table,
                failed
            );
        }
        Ok(results.iter().any(|r| r.success))
    }

    async fn mutate<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        table: &str,
        payload: &B,
    ) -> Result<MutationEnvelope<T>> {
        let url = self.records_url(table);
        let req = self.build_request(method, &url, Some(payload))?;
        let resp = self.client.execute(req).await?;

        let status = resp.status();
        if !status.is_success() {
            error!("Table store mutation on {} failed: HTTP {}", table, status);
            return Err(ClassTrackError::table_store_operation(format!(
                "写入 {table} 失败: HTTP {status}"
            )));
        }

        let envelope: MutationEnvelope<T> = resp.json().await?;
        if !envelope.success {
            let message = envelope.message.unwrap_or_else(|| "unknown error".into());
            error!("Table store mutation on {} rejected: {}", table, message);
            return Err(ClassTrackError::table_store_operation(message));
        }
        Ok(envelope)
    }

    /// 过滤按记录结果：失败的打日志，只返回首条成功数据
    fn first_success<T>(
        &self,
        table: &str,
        op: &str,
        envelope: MutationEnvelope<T>,
    ) -> Option<T> {
        let results = envelope.results?;
        let (succeeded, failed): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.success);
        if !failed.is_empty() {
            let messages: Vec<&str> = failed
                .iter()
                .map(|r| r.message.as_deref().unwrap_or("unknown error"))
                .collect();
            error!(
                "Failed to {} {} record(s) on {}: {:?}",
                op,
                failed.len(),
                table,
                messages
            );
        }
        succeeded.into_iter().next().and_then(|r| r.data)
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for TableStoreStorage {
    // 学生模块
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_impl(query).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 作业模块
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(query).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 成绩模块
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        self.list_grades_impl(query).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 考勤模块
    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(query).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn create_attendance(&self, record: CreateAttendanceRequest) -> Result<AttendanceRecord> {
        self.create_attendance_impl(record).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use serde_json::{Value, json};

    /// 预置响应队列的 HttpClient 桩实现，同时记录发出的请求
    pub(crate) struct StubClient {
        responses: Mutex<VecDeque<(u16, String)>>,
        pub requests: Mutex<Vec<(String, String, Option<Value>)>>,
        pub auth_headers: Mutex<Vec<Option<String>>>,
    }

    impl StubClient {
        pub fn new(responses: Vec<(u16, Value)>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|(status, body)| (status, body.to_string()))
                        .collect(),
                ),
                requests: Mutex::new(Vec::new()),
                auth_headers: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for StubClient {
        async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            let body = req
                .body()
                .and_then(|b| b.as_bytes())
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());
            self.requests.lock().unwrap().push((
                req.method().to_string(),
                req.url().to_string(),
                body,
            ));
            self.auth_headers.lock().unwrap().push(
                req.headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.to_string()),
            );

            let (status, payload) = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("StubClient ran out of queued responses");

            let http_resp = http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(payload)
                .unwrap();
            Ok(reqwest::Response::from(http_resp))
        }
    }

    pub(crate) fn test_storage(responses: Vec<(u16, Value)>) -> (TableStoreStorage, Arc<StubClient>)
    {
        let client = Arc::new(StubClient::new(responses));
        let cfg = TableStoreConfig {
            base_url: "https://tables.example.com/api/v1".to_string(),
            project_id: "classtrack-test".to_string(),
            api_key: "test-key".to_string(),
            page_limit: 200,
        };
        (TableStoreStorage::new(client.clone(), cfg), client)
    }

    #[tokio::test]
    async fn test_fetch_rejected_envelope_is_error() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({"success": false, "message": "table quota exceeded"}),
        )]);

        let result = storage
            .fetch_records::<Value>("student_c", QueryParams::with_fields(&["Name"]))
            .await;

        let err = result.unwrap_err();
        assert!(err.message().contains("table quota exceeded"));
    }

    #[tokio::test]
    async fn test_fetch_http_error_is_error() {
        let (storage, _client) = test_storage(vec![(502, json!({}))]);

        let result = storage
            .fetch_records::<Value>("student_c", QueryParams::with_fields(&["Name"]))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_record_not_found_signals() {
        // HTTP 404 和 success=false 两种未找到信号都归一化为 None
        let (storage, _client) = test_storage(vec![
            (404, json!({})),
            (200, json!({"success": false, "message": "record does not exist"})),
        ]);

        assert!(
            storage
                .get_record::<Value>("student_c", 99)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            storage
                .get_record::<Value>("student_c", 99)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_create_partial_failure_returns_first_success() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({
                "success": true,
                "results": [
                    {"success": false, "message": "validation failed"},
                    {"success": true, "data": {"Id": 42, "first_name_c": "Bob"}}
                ]
            }),
        )]);

        let row: records::StudentRow = storage
            .create_records("student_c", vec![json!({"first_name_c": "Bob"})])
            .await
            .unwrap();

        assert_eq!(row.id, 42);
    }

    #[tokio::test]
    async fn test_create_all_failed_is_error() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({
                "success": true,
                "results": [{"success": false, "message": "duplicate"}]
            }),
        )]);

        let result = storage
            .create_records::<Value>("grade_c", vec![json!({})])
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_any_success_is_true() {
        let (storage, _client) = test_storage(vec![(
            200,
            json!({
                "success": true,
                "results": [{"success": true}]
            }),
        )]);

        assert!(storage.delete_records("student_c", vec![3]).await.unwrap());
    }

    #[tokio::test]
    async fn test_request_carries_auth_and_project_path() {
        let (storage, client) = test_storage(vec![(200, json!({"success": true, "data": []}))]);

        storage
            .fetch_records::<Value>("attendance_c", QueryParams::with_fields(&["Name"]))
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let (method, url, body) = &requests[0];
        assert_eq!(method, "POST");
        assert_eq!(
            url,
            "https://tables.example.com/api/v1/projects/classtrack-test/tables/attendance_c/records/query"
        );
        assert!(body.as_ref().unwrap().get("fields").is_some());

        let auth_headers = client.auth_headers.lock().unwrap();
        assert_eq!(auth_headers[0].as_deref(), Some("Bearer test-key"));
    }
}
