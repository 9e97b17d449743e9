//! 成绩统计
//!
//! 纯函数，无副作用。统一舍入规则：保留一位小数，四舍五入。

use crate::models::grades::entities::Grade;

/// 保留一位小数（四舍五入，远离零）
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 全班平均分
///
/// 空序列返回 0。非有限分数（NaN/inf）不参与计算，不按 0 计。
pub fn class_grade_average(grades: &[Grade]) -> f64 {
    let scores: Vec<f64> = grades
        .iter()
        .map(|g| g.score)
        .filter(|s| s.is_finite())
        .collect();

    if scores.is_empty() {
        return 0.0;
    }

    round_to_tenth(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// 最近提交的成绩
///
/// 按提交日期降序取前 count 条；日期相同的保持原有相对顺序（稳定排序）。
pub fn recent_grades(grades: &[Grade], count: usize) -> Vec<Grade> {
    let mut sorted = grades.to_vec();
    sorted.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn grade(id: i64, score: f64, date: &str) -> Grade {
        Grade {
            id,
            score,
            submitted_date: date.parse().unwrap(),
            comments: None,
            student_id: 1,
            assignment_id: 1,
        }
    }

    #[test]
    fn test_empty_grades_average_is_zero() {
        assert_eq!(class_grade_average(&[]), 0.0);
    }

    #[test]
    fn test_average_of_three_scores() {
        let grades = vec![
            grade(1, 80.0, "2026-03-01"),
            grade(2, 90.0, "2026-03-02"),
            grade(3, 100.0, "2026-03-03"),
        ];
        assert_eq!(class_grade_average(&grades), 90.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let grades = vec![
            grade(1, 85.0, "2026-03-01"),
            grade(2, 90.0, "2026-03-02"),
            grade(3, 92.0, "2026-03-03"),
        ];
        // (85 + 90 + 92) / 3 = 89.0
        assert_eq!(class_grade_average(&grades), 89.0);

        let grades = vec![grade(1, 85.0, "2026-03-01"), grade(2, 90.5, "2026-03-02")];
        // 87.75 -> 87.8
        assert_eq!(class_grade_average(&grades), 87.8);
    }

    #[test]
    fn test_average_stays_in_score_bounds() {
        let scores = [0.0, 13.7, 55.5, 99.9, 100.0];
        let grades: Vec<Grade> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| grade(i as i64, s, "2026-03-01"))
            .collect();

        let average = class_grade_average(&grades);
        assert!((0.0..=100.0).contains(&average));
    }

    #[test]
    fn test_non_finite_scores_are_excluded() {
        let grades = vec![
            grade(1, 80.0, "2026-03-01"),
            grade(2, f64::NAN, "2026-03-02"),
            grade(3, 100.0, "2026-03-03"),
        ];
        assert_eq!(class_grade_average(&grades), 90.0);
    }

    #[test]
    fn test_recent_grades_sorted_desc_and_capped() {
        let grades = vec![
            grade(1, 80.0, "2026-03-01"),
            grade(2, 81.0, "2026-03-05"),
            grade(3, 82.0, "2026-03-03"),
            grade(4, 83.0, "2026-03-04"),
            grade(5, 84.0, "2026-03-02"),
            grade(6, 85.0, "2026-03-06"),
        ];

        let recent = recent_grades(&grades, 5);
        assert_eq!(recent.len(), 5);
        let ids: Vec<i64> = recent.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![6, 2, 4, 3, 5]);
        assert!(
            recent
                .windows(2)
                .all(|w| w[0].submitted_date >= w[1].submitted_date)
        );
    }

    #[test]
    fn test_recent_grades_ties_preserve_original_order() {
        let grades = vec![
            grade(1, 80.0, "2026-03-01"),
            grade(2, 81.0, "2026-03-01"),
            grade(3, 82.0, "2026-03-01"),
        ];

        let recent = recent_grades(&grades, 5);
        let ids: Vec<i64> = recent.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
