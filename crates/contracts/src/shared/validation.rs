//! Validation rules for form fields

use thiserror::Error;

/// Ошибка локальной проверки формы, привязанная к конкретному полю
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn with_min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    /// Validate a string value against the rules
    ///
    /// Length is counted in characters, not bytes.
    pub fn validate_string(
        &self,
        value: &str,
        field: &'static str,
        field_label: &str,
    ) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::new(
                field,
                format!("{} не может быть пустым", field_label),
            ));
        }

        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::new(
                    field,
                    format!("{} должен содержать минимум {} символов", field_label, min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::new(
                    field,
                    format!("{} не должен превышать {} символов", field_label, max),
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(
        &self,
        value: f64,
        field: &'static str,
        field_label: &str,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new(
                field,
                format!("{} должен быть числом", field_label),
            ));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::new(
                    field,
                    format!("{} должен быть не менее {}", field_label, min),
                ));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::new(
                    field,
                    format!("{} должен быть не более {}", field_label, max),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        let err = ValidationRules::required()
            .validate_string("   ", "name", "Название")
            .unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Название не может быть пустым");
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = ValidationRules::none().with_max_length(5);
        assert!(rules.validate_string("Балкон", "name", "Название").is_err());
        assert!(rules.validate_string("Лифт", "name", "Название").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::none().with_min(1.0).with_max(100.0);
        assert!(rules.validate_number(0.0, "floors", "Этажность").is_err());
        assert!(rules.validate_number(101.0, "floors", "Этажность").is_err());
        assert!(rules.validate_number(f64::NAN, "floors", "Этажность").is_err());
        assert!(rules.validate_number(12.0, "floors", "Этажность").is_ok());
    }
}
