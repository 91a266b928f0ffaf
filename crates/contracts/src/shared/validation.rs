use thiserror::Error;

/// Ошибка валидации полей формы
///
/// Возвращается вызывающему коду для отображения рядом с полем;
/// `field` совпадает с именем поля в записи (например, "email").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Имя поля, не прошедшего проверку
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

/// Проверка обязательного текстового поля (пустая строка или одни пробелы считаются ошибкой)
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}
