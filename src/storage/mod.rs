use std::sync::Arc;

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

use crate::errors::Result;

pub mod table_store;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生名册方法
    // 列出学生（支持姓名/邮箱搜索）
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 作业管理方法
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 列出成绩（支持按学生、作业、提交日期区间筛选）
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 列出考勤记录（支持按学生、单日、日期区间筛选）
    async fn list_attendance(&self, query: AttendanceListQuery) -> Result<Vec<AttendanceRecord>>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>>;
    async fn create_attendance(
        &self,
        record: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord>;
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;
}

pub fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = table_store::TableStoreStorage::from_config()?;
    Ok(Arc::new(storage))
}
