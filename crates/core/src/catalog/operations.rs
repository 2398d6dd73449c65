use super::error::ValidationError;

/// Width of every text column in the schema.
pub const MAX_FIELD_LEN: usize = 120;

/// Validates a required text field: non-blank and within the column width.
///
/// Length is measured in characters, not bytes, so `"Mos Eisley"` and
/// `"Mós Éisley"` share the same limit.
pub fn validate_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}
