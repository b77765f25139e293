//! Input validation for the worksheet request.
//!
//! Runs before anything else touches the inputs: the generator and both
//! layout engines assume valid input and are total over their documented
//! domains, so nothing invalid may reach them.

use crate::errors::AppError;

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 99;
pub const MIN_TABLE: u8 = 1;
pub const MAX_TABLE: u8 = 20;

/// Checks the requested question count against the supported range.
pub fn validate_count(count: u8) -> Result<(), AppError> {
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
        return Err(AppError::Validation(format!(
            "Question count must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}, got {count}"
        )));
    }
    Ok(())
}

/// Checks the selected table multipliers: non-empty, all within 1..=20.
pub fn validate_tables(tables: &[u8]) -> Result<(), AppError> {
    if tables.is_empty() {
        return Err(AppError::Validation(
            "Select at least one table multiplier".to_string(),
        ));
    }
    if let Some(bad) = tables
        .iter()
        .find(|t| !(MIN_TABLE..=MAX_TABLE).contains(*t))
    {
        return Err(AppError::Validation(format!(
            "Table multipliers must be between {MIN_TABLE} and {MAX_TABLE}, got {bad}"
        )));
    }
    Ok(())
}

/// Validates a full worksheet request in one call.
pub fn validate_request(tables: &[u8], count: u8) -> Result<(), AppError> {
    validate_tables(tables)?;
    validate_count(count)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_in_range_passes() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(50).is_ok());
        assert!(validate_count(99).is_ok());
    }

    #[test]
    fn test_count_out_of_range_fails() {
        assert!(validate_count(0).is_err());
        assert!(validate_count(100).is_err());
    }

    #[test]
    fn test_empty_tables_rejected() {
        let err = validate_tables(&[]).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(_)),
            "empty selection should be a validation error, got {err:?}"
        );
    }

    #[test]
    fn test_tables_out_of_range_rejected() {
        assert!(validate_tables(&[2, 0]).is_err());
        assert!(validate_tables(&[2, 21]).is_err());
        assert!(validate_tables(&[1, 20]).is_ok());
    }

    #[test]
    fn test_validate_request_combines_both() {
        assert!(validate_request(&[2, 5, 10], 10).is_ok());
        assert!(validate_request(&[], 10).is_err());
        assert!(validate_request(&[2], 0).is_err());
    }
}
