use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerStatus;
use crate::domain::PlayerIndex;
use crate::engine::{HandResult, LeaderboardRow};

/// Карточка игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerCardDto {
    pub index: PlayerIndex,
    pub name: String,
    pub status: PlayerStatus,
    pub contribution: Chips,
    /// Журнал действий за раунд ("Boot 5", "+10", "Fold", ...).
    pub actions: Vec<String>,
    pub total_wins: u32,
    pub total_earned: i64,
    pub total_lost: Chips,
}

/// Всё, что фронт перерисовывает после каждой операции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerViewDto {
    pub pot: Chips,
    pub players: Vec<PlayerCardDto>,
    /// Кандидаты в победители (не сфолдили).
    pub eligible_winners: Vec<PlayerIndex>,
    pub undo_depth: usize,
    pub boot_applied: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Операция применена, вот новое состояние.
    Updated(LedgerViewDto),

    /// Раздача рассчитана (явно или авто-расчётом, когда остался один игрок).
    HandSettled {
        result: HandResult,
        auto_settled: bool,
        ledger: LedgerViewDto,
    },
}

/// Лидерборд + история раздач одним пакетом (для экрана статистики).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsDto {
    pub leaderboard: Vec<LeaderboardRow>,
    pub hand_history: Vec<HandResult>,
}
