use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Ошибки операций создания/изменения/удаления записей
///
/// Ни одна из них не фатальна: ошибка относится к одной операции пользователя
/// и показывается ему как сообщение.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{collection} '{id}' not found")]
    NotFound { collection: &'static str, id: String },
}

impl MutationError {
    pub fn not_found(collection: &'static str, id: &str) -> Self {
        MutationError::NotFound {
            collection,
            id: id.to_string(),
        }
    }
}
