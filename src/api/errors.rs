use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerIndex;
use crate::engine::LedgerError;

/// Ошибки внешнего API (то, что показываем пользователю).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, не распарсилась команда).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Игрока с таким индексом нет.
    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerIndex),

    /// Нечего отменять.
    #[error("Нечего отменять")]
    NothingToUndo,

    /// Леджер отказал в операции (кратность, фолд, минус и т.п.).
    #[error("{0}")]
    Rejected(String),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::IndexOutOfRange { index, .. } => ApiError::PlayerNotFound(index),
            LedgerError::EmptyUndoHistory => ApiError::NothingToUndo,
            other => ApiError::Rejected(other.to_string()),
        }
    }
}
