use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Статус игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Ещё ничего не ставил в этой раздаче (только бут).
    Waiting,
    /// Делал ставки в этой раздаче.
    Active,
    /// Сфолдил: не может ставить и не может быть победителем до нового раунда.
    Folded,
}

impl PlayerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Waiting => "Waiting",
            PlayerStatus::Active => "Active",
            PlayerStatus::Folded => "Folded",
        }
    }
}

/// Запись в журнале действий игрока за раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionEntry {
    /// Обязательный бут в начале раунда.
    Boot(Chips),
    /// Изменение вклада (знаковое).
    Adjust(i64),
    Fold,
    /// Чистый выигрыш при объявлении победителем.
    Won(i64),
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEntry::Boot(amount) => write!(f, "Boot {}", amount),
            ActionEntry::Adjust(delta) if *delta >= 0 => write!(f, "+{}", delta),
            ActionEntry::Adjust(delta) => write!(f, "{}", delta),
            ActionEntry::Fold => write!(f, "Fold"),
            ActionEntry::Won(amount) => write!(f, "Won {}", amount),
        }
    }
}

/// Запись игрока в сессии.
///
/// `contribution` и `action_log` живут в пределах раунда,
/// `total_*` — накопительная статистика до сброса лидерборда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub status: PlayerStatus,
    pub action_log: Vec<ActionEntry>,
    pub total_wins: u32,
    /// Чистые выигрыши (только чужие деньги из выигранных банков).
    pub total_earned: i64,
    /// Вклады, потерянные в чужих выигранных раздачах.
    pub total_lost: Chips,
    /// Вклад в текущий банк.
    pub contribution: Chips,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: PlayerStatus::Waiting,
            action_log: Vec::new(),
            total_wins: 0,
            total_earned: 0,
            total_lost: Chips::ZERO,
            contribution: Chips::ZERO,
        }
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    /// Итог игрока для лидерборда.
    pub fn overall(&self) -> i64 {
        self.total_earned - self.total_lost.as_signed()
    }

    /// Журнал действий в текстовом виде ("Boot 5", "+10", "Fold", ...).
    pub fn action_strings(&self) -> Vec<String> {
        self.action_log.iter().map(ToString::to_string).collect()
    }

    /// Очистить всё, что относится к раунду. Статистику не трогаем.
    pub(crate) fn clear_round(&mut self) {
        self.status = PlayerStatus::Waiting;
        self.action_log.clear();
        self.contribution = Chips::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_entry_text() {
        assert_eq!(ActionEntry::Boot(Chips(5)).to_string(), "Boot 5");
        assert_eq!(ActionEntry::Adjust(10).to_string(), "+10");
        assert_eq!(ActionEntry::Adjust(-15).to_string(), "-15");
        assert_eq!(ActionEntry::Fold.to_string(), "Fold");
        assert_eq!(ActionEntry::Won(30).to_string(), "Won 30");
    }

    #[test]
    fn overall_is_earned_minus_lost() {
        let mut p = PlayerRecord::new("A");
        p.total_earned = 40;
        p.total_lost = Chips(55);
        assert_eq!(p.overall(), -15);
    }
}
