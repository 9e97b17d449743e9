//! 表格存储的行记录结构
//!
//! 字段名带存储侧的 `_c` 后缀；外键字段用 [`RecordRef`] 在反序列化时归一化。
//! 投影过的字段仍可能缺失或为 null，按中性缺省值降级，不让单条脏数据拖垮整次查询。

use serde::Deserialize;

use crate::models::RecordRef;
use crate::models::assignments::entities::Assignment;
use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
use crate::models::grades::entities::Grade;
use crate::models::students::entities::{Student, StudentStatus};

// 学生表行（student_c）
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRow {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "first_name_c", default)]
    pub first_name: Option<String>,
    #[serde(rename = "last_name_c", default)]
    pub last_name: Option<String>,
    #[serde(rename = "email_c", default)]
    pub email: Option<String>,
    #[serde(rename = "grade_level_c", default)]
    pub grade_level: Option<i32>,
    #[serde(rename = "enrollment_date_c", default)]
    pub enrollment_date: Option<chrono::NaiveDate>,
    #[serde(rename = "status_c", default)]
    pub status: Option<StudentStatus>,
}

impl StudentRow {
    pub fn into_student(self) -> Student {
        Student {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            grade_level: self.grade_level.unwrap_or_default(),
            enrollment_date: self.enrollment_date.unwrap_or_default(),
            // 状态缺失按离校处理，避免虚增在读人数
            status: self.status.unwrap_or(StudentStatus::Inactive),
        }
    }
}

// 作业表行（assignment_c）
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentRow {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "title_c", default)]
    pub title: Option<String>,
    #[serde(rename = "category_c", default)]
    pub category: Option<String>,
    #[serde(rename = "total_points_c", default)]
    pub total_points: Option<i32>,
    #[serde(rename = "due_date_c", default)]
    pub due_date: Option<chrono::NaiveDate>,
    #[serde(rename = "description_c", default)]
    pub description: Option<String>,
}

impl AssignmentRow {
    pub fn into_assignment(self) -> Assignment {
        Assignment {
            id: self.id,
            title: self.title.unwrap_or_default(),
            category: self.category,
            total_points: self.total_points.unwrap_or_default(),
            due_date: self.due_date.unwrap_or_default(),
            description: self.description,
        }
    }
}

// 成绩表行（grade_c）
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRow {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "score_c", default)]
    pub score: Option<f64>,
    #[serde(rename = "submitted_date_c", default)]
    pub submitted_date: Option<chrono::NaiveDate>,
    #[serde(rename = "comments_c", default)]
    pub comments: Option<String>,
    #[serde(rename = "student_id_c", default)]
    pub student_id: Option<RecordRef>,
    #[serde(rename = "assignment_id_c", default)]
    pub assignment_id: Option<RecordRef>,
}

impl GradeRow {
    pub fn into_grade(self) -> Grade {
        Grade {
            id: self.id,
            // 缺失分数按 0 计
            score: self.score.unwrap_or(0.0),
            submitted_date: self.submitted_date.unwrap_or_default(),
            comments: self.comments,
            // 外键缺失归一化为 0，引用解析时落到 "Unknown"
            student_id: self.student_id.map(|r| r.id()).unwrap_or_default(),
            assignment_id: self.assignment_id.map(|r| r.id()).unwrap_or_default(),
        }
    }
}

// 考勤表行（attendance_c）
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRow {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "student_id_c", default)]
    pub student_id: Option<RecordRef>,
    #[serde(rename = "date_c", default)]
    pub date: Option<chrono::NaiveDate>,
    #[serde(rename = "status_c", default)]
    pub status: Option<AttendanceStatus>,
    #[serde(rename = "notes_c", default)]
    pub notes: Option<String>,
}

impl AttendanceRow {
    pub fn into_attendance(self) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id,
            student_id: self.student_id.map(|r| r.id()).unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            // 状态缺失按缺勤处理，保持出勤率口径保守
            status: self.status.unwrap_or(AttendanceStatus::Absent),
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_row_with_lookup_refs() {
        let row: GradeRow = serde_json::from_str(
            r#"{
                "Id": 11,
                "score_c": 92.5,
                "submitted_date_c": "2026-03-02",
                "student_id_c": {"Id": 3, "Name": "Alice Smith"},
                "assignment_id_c": 7
            }"#,
        )
        .unwrap();

        let grade = row.into_grade();
        assert_eq!(grade.student_id, 3);
        assert_eq!(grade.assignment_id, 7);
        assert_eq!(grade.score, 92.5);
    }

    #[test]
    fn test_grade_row_missing_fields_degrade() {
        let row: GradeRow = serde_json::from_str(r#"{"Id": 12}"#).unwrap();
        let grade = row.into_grade();
        assert_eq!(grade.score, 0.0);
        assert_eq!(grade.student_id, 0);
        assert!(grade.comments.is_none());
    }

    #[test]
    fn test_student_row_roundtrip() {
        let row: StudentRow = serde_json::from_str(
            r#"{
                "Id": 3,
                "first_name_c": "Alice",
                "last_name_c": "Smith",
                "email_c": "alice@example.edu",
                "grade_level_c": 9,
                "enrollment_date_c": "2025-09-01",
                "status_c": "active"
            }"#,
        )
        .unwrap();

        let student = row.into_student();
        assert_eq!(student.full_name(), "Alice Smith");
        assert!(student.is_active());
        assert_eq!(student.grade_level, 9);
    }

    #[test]
    fn test_attendance_row_null_status_counts_absent() {
        let row: AttendanceRow =
            serde_json::from_str(r#"{"Id": 5, "student_id_c": 3, "status_c": null}"#).unwrap();
        let record = row.into_attendance();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert!(!record.is_present());
    }
}
