//! Result type alias for the DLP engine
//!
//! This module provides a convenient Result type alias that uses DlpError
//! as the error type.

use super::errors::DlpError;

/// Result type alias for DLP engine operations
///
/// # Examples
///
/// ```
/// use dlp_engine::domain::result::Result;
/// use dlp_engine::domain::errors::DlpError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DlpError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DlpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DlpError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(DlpError::Configuration("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
