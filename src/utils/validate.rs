use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_score(score: f64) -> Result<(), &'static str> {
    // 分数范围校验：0 <= x <= 100
    if !score.is_finite() {
        return Err("Score must be a finite number");
    }
    if !(0.0..=100.0).contains(&score) {
        return Err("Score must be between 0 and 100");
    }
    Ok(())
}

pub fn validate_grade_level(grade_level: i32) -> Result<(), &'static str> {
    // 年级范围校验：1 <= x <= 12
    if !(1..=12).contains(&grade_level) {
        return Err("Grade level must be between 1 and 12");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice@example.edu").is_ok());
        assert!(validate_email("bob.jones+math@school.k12.us").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_valid_score() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(87.5).is_ok());
        assert!(validate_score(100.0).is_ok());
    }

    #[test]
    fn test_invalid_score() {
        assert!(validate_score(-1.0).is_err());
        assert!(validate_score(100.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }

    #[test]
    fn test_grade_level_bounds() {
        assert!(validate_grade_level(1).is_ok());
        assert!(validate_grade_level(12).is_ok());
        assert!(validate_grade_level(0).is_err());
        assert!(validate_grade_level(13).is_err());
    }
}
