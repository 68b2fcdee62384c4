// Helper functions for safe logging and aggregate numeric coercion

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

// Aggregate queries over nullable columns (AVG/MIN/MAX over salary, tenure)
// come back as NULL when no rows qualify. Every aggregate passes through one
// of these so responses carry 0 instead of null/NaN.

/// Rounds an optional aggregate to the nearest whole unit, defaulting to 0.
pub fn round_whole(value: Option<f64>) -> i64 {
    value.unwrap_or(0.0).round() as i64
}

/// Unwraps an optional aggregate, defaulting to 0.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Rounds an optional aggregate to one decimal place, defaulting to 0.
pub fn round_tenths(value: Option<f64>) -> f64 {
    (value.unwrap_or(0.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log_masks_local_part() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
        assert_eq!(safe_email_log("a@b"), "***@***.***");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
    }

    #[test]
    fn test_round_whole_defaults_to_zero() {
        assert_eq!(round_whole(None), 0);
        assert_eq!(round_whole(Some(84999.5)), 85000);
        assert_eq!(round_whole(Some(84999.4)), 84999);
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(or_zero(None), 0.0);
        assert_eq!(or_zero(Some(90000.0)), 90000.0);
    }

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(None), 0.0);
        assert_eq!(round_tenths(Some(2.3499)), 2.3);
        assert_eq!(round_tenths(Some(2.35)), 2.4);
    }
}
