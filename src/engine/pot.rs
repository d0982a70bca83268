use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerRecord;

/// Банк раунда. Производная величина: всегда сумма вкладов игроков,
/// выставляется только через `recompute`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn total(&self) -> Chips {
        self.total
    }

    /// Пересчитать банк заново по всем игрокам.
    pub fn recompute(&mut self, players: &[PlayerRecord]) -> Chips {
        self.total = players.iter().map(|p| p.contribution).sum();
        self.total
    }
}
