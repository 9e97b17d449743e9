pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mark;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceListParams, CreateAttendanceRequest, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取考勤记录列表
    pub async fn list_attendance(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, query, request).await
    }

    // 创建考勤记录
    pub async fn create_attendance(
        &self,
        record_data: CreateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, record_data, request).await
    }

    // 根据ID获取考勤记录
    pub async fn get_attendance(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_attendance(self, record_id, request).await
    }

    // 更新考勤记录
    pub async fn update_attendance(
        &self,
        record_id: i64,
        update_data: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, record_id, update_data, request).await
    }

    // 删除考勤记录
    pub async fn delete_attendance(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, record_id, request).await
    }

    // 点名：按 (student, date) 自然键写入
    pub async fn mark_attendance(
        &self,
        mark_data: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_data, request).await
    }
}
