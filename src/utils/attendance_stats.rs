//! 考勤统计
//!
//! 纯函数，无副作用。百分比统一 0-100、保留一位小数。

use chrono::NaiveDate;

use super::grade_stats::round_to_tenth;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::dashboard::responses::TodayAttendanceStats;
use crate::models::students::entities::Student;

/// 出勤率：出勤记录数 / 总记录数
///
/// 空序列返回 0。
pub fn attendance_percentage(records: &[AttendanceRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let present = records.iter().filter(|r| r.is_present()).count();
    round_to_tenth(present as f64 / records.len() as f64 * 100.0)
}

/// 今日考勤统计
///
/// 分母是名册人数而非记录条数：当天没有任何记录的学生按缺勤计入，
/// 不会被悄悄排除在统计之外。
pub fn today_attendance_stats(
    students: &[Student],
    records: &[AttendanceRecord],
    today: NaiveDate,
) -> TodayAttendanceStats {
    let total = students.len() as i64;
    let present = records
        .iter()
        .filter(|r| r.date == today && r.is_present())
        .count() as i64;

    let percentage = if total > 0 {
        round_to_tenth(present as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    TodayAttendanceStats {
        present,
        total,
        percentage,
    }
}

/// 考勤异常列表
///
/// 过滤掉出勤记录，按日期降序取前 count 条；日期相同的保持原有相对顺序。
pub fn attendance_alerts(records: &[AttendanceRecord], count: usize) -> Vec<AttendanceRecord> {
    let mut alerts: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| !r.is_present())
        .cloned()
        .collect();
    alerts.sort_by(|a, b| b.date.cmp(&a.date));
    alerts.truncate(count);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::models::students::entities::StudentStatus;

    fn student(id: i64) -> Student {
        Student {
            id,
            first_name: format!("Student{id}"),
            last_name: "Test".to_string(),
            email: format!("student{id}@example.edu"),
            grade_level: 9,
            enrollment_date: "2025-09-01".parse().unwrap(),
            status: StudentStatus::Active,
        }
    }

    fn record(id: i64, student_id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            student_id,
            date: date.parse().unwrap(),
            status,
            notes: None,
        }
    }

    #[test]
    fn test_percentage_of_empty_records_is_zero() {
        assert_eq!(attendance_percentage(&[]), 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let records = vec![
            record(1, 1, "2026-03-02", AttendanceStatus::Present),
            record(2, 2, "2026-03-02", AttendanceStatus::Present),
            record(3, 3, "2026-03-02", AttendanceStatus::Absent),
        ];
        // 2/3 = 66.666... -> 66.7
        assert_eq!(attendance_percentage(&records), 66.7);
    }

    #[test]
    fn test_late_and_excused_do_not_count_as_present() {
        let records = vec![
            record(1, 1, "2026-03-02", AttendanceStatus::Present),
            record(2, 2, "2026-03-02", AttendanceStatus::Late),
            record(3, 3, "2026-03-02", AttendanceStatus::Excused),
            record(4, 4, "2026-03-02", AttendanceStatus::Absent),
        ];
        assert_eq!(attendance_percentage(&records), 25.0);
    }

    #[test]
    fn test_today_stats_without_records_counts_full_roster() {
        let students = vec![student(1), student(2), student(3)];
        let today = "2026-03-02".parse().unwrap();

        let stats = today_attendance_stats(&students, &[], today);

        assert_eq!(
            stats,
            TodayAttendanceStats {
                present: 0,
                total: 3,
                percentage: 0.0,
            }
        );
    }

    #[test]
    fn test_today_stats_ignores_other_days() {
        let students = vec![student(1), student(2)];
        let records = vec![
            record(1, 1, "2026-03-02", AttendanceStatus::Present),
            // 前一天的出勤不计入今日
            record(2, 2, "2026-03-01", AttendanceStatus::Present),
        ];
        let today = "2026-03-02".parse().unwrap();

        let stats = today_attendance_stats(&students, &records, today);

        assert_eq!(stats.present, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.percentage, 50.0);
    }

    #[test]
    fn test_today_stats_unrecorded_student_counts_against_denominator() {
        // 三人名册，今日只有两条记录：无记录的学生按缺勤计
        let students = vec![student(1), student(2), student(3)];
        let records = vec![
            record(1, 1, "2026-03-02", AttendanceStatus::Present),
            record(2, 2, "2026-03-02", AttendanceStatus::Present),
        ];
        let today = "2026-03-02".parse().unwrap();

        let stats = today_attendance_stats(&students, &records, today);

        assert_eq!(stats.present, 2);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.percentage, 66.7);
    }

    #[test]
    fn test_empty_roster_percentage_is_zero() {
        let today = "2026-03-02".parse().unwrap();
        let stats = today_attendance_stats(&[], &[], today);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0.0);
    }

    #[test]
    fn test_alerts_exclude_present_and_sort_desc() {
        let records = vec![
            record(1, 1, "2026-03-01", AttendanceStatus::Absent),
            record(2, 2, "2026-03-02", AttendanceStatus::Present),
            record(3, 3, "2026-03-03", AttendanceStatus::Late),
            record(4, 4, "2026-03-04", AttendanceStatus::Excused),
        ];

        let alerts = attendance_alerts(&records, 5);
        let ids: Vec<i64> = alerts.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 1]);
    }

    #[test]
    fn test_alerts_capped_and_ties_preserve_order() {
        let records: Vec<AttendanceRecord> = (1..=7)
            .map(|id| record(id, id, "2026-03-02", AttendanceStatus::Absent))
            .collect();

        let alerts = attendance_alerts(&records, 5);
        let ids: Vec<i64> = alerts.iter().map(|r| r.id).collect();
        // 同日期保持原有相对顺序
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
