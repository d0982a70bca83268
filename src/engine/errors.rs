use crate::domain::{Chips, PlayerIndex};

use thiserror::Error;

/// Ошибки леджера сессии.
///
/// Все восстановимые: операция отказывает, состояние игроков не меняется.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Сумма {amount} не кратна минимальному шагу {unit} (или равна нулю)")]
    InvalidAmount { amount: i64, unit: Chips },

    #[error("Игрок {0} сфолдил и не может менять вклад")]
    PlayerFolded(PlayerIndex),

    #[error("История отмены пуста")]
    EmptyUndoHistory,

    #[error("Игрока с индексом {index} нет (всего игроков: {len})")]
    IndexOutOfRange { index: PlayerIndex, len: usize },

    #[error("Вклад игрока {index} ушёл бы в минус ({contribution} + {amount})")]
    ContributionUnderflow {
        index: PlayerIndex,
        contribution: Chips,
        amount: i64,
    },

    #[error("Изменение на {amount} выводит вклад игрока {index} или банк за допустимый предел")]
    AmountOverflow { index: PlayerIndex, amount: i64 },

    #[error("Статистика игрока {0} переполнилась бы при расчёте раздачи")]
    StatsOverflow(PlayerIndex),

    #[error("Имя игрока не может быть пустым")]
    EmptyName,

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(&'static str),
}
