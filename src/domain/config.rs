use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::LedgerError;

/// Бут по умолчанию и минимальный шаг ставки.
pub const DEFAULT_BOOT: Chips = Chips(5);
pub const DEFAULT_MIN_UNIT: Chips = Chips(5);
pub const DEFAULT_PLAYER_COUNT: usize = 5;

/// Конфиг сессии: сколько игроков, какой бут, какой минимальный шаг ставки.
///
/// Можно прочитать из JSON (dev-CLI), недостающие поля берутся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    pub player_count: usize,
    pub boot_amount: Chips,
    pub min_unit: Chips,
    /// Имена игроков. Пусто → "Player 1".."Player N".
    pub player_names: Vec<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            boot_amount: DEFAULT_BOOT,
            min_unit: DEFAULT_MIN_UNIT,
            player_names: Vec::new(),
        }
    }
}

impl LedgerConfig {
    pub fn with_players(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    pub fn with_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let player_names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            player_count: player_names.len(),
            player_names,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.min_unit.is_zero() {
            return Err(LedgerError::InvalidConfig("min_unit не может быть нулём"));
        }
        if self.boot_amount.0 % self.min_unit.0 != 0 {
            return Err(LedgerError::InvalidConfig(
                "boot_amount должен быть кратен min_unit",
            ));
        }
        if self.player_count == 0 {
            return Err(LedgerError::InvalidConfig("нужен хотя бы один игрок"));
        }
        if !self.player_names.is_empty() {
            if self.player_names.len() != self.player_count {
                return Err(LedgerError::InvalidConfig(
                    "число имён не совпадает с player_count",
                ));
            }
            if self.player_names.iter().any(|n| n.trim().is_empty()) {
                return Err(LedgerError::InvalidConfig("имя игрока не может быть пустым"));
            }
        }
        Ok(())
    }

    /// Имена для рассадки (заданные или сгенерированные).
    pub fn seat_names(&self) -> Vec<String> {
        if self.player_names.is_empty() {
            (1..=self.player_count).map(|i| format!("Player {i}")).collect()
        } else {
            self.player_names.clone()
        }
    }
}
