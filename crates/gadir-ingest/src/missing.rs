//! Missing-value detection for raw CSV cells.

/// Cell contents read as missing, in addition to blank cells.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "<NA>",
];

/// True when a trimmed cell carries no value.
pub fn is_missing_value(value: &str) -> bool {
    value.is_empty() || MISSING_VALUE_TOKENS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_null_tokens_are_missing() {
        assert!(is_missing_value(""));
        assert!(is_missing_value("NA"));
        assert!(is_missing_value("NaN"));
        assert!(is_missing_value("<NA>"));
    }

    #[test]
    fn real_values_are_present() {
        assert!(!is_missing_value("Homo sapiens"));
        assert!(!is_missing_value("na-123"));
        assert!(!is_missing_value("0"));
    }
}
