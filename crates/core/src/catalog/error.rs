use thiserror::Error;

/// Errors raised while validating a request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("{field} too long (max {max} characters)")]
    FieldTooLong { field: &'static str, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyField { field: "email" }.to_string(),
            "email cannot be empty"
        );
        assert_eq!(
            ValidationError::FieldTooLong {
                field: "name",
                max: 120
            }
            .to_string(),
            "name too long (max 120 characters)"
        );
    }
}
