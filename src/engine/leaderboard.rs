use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerRecord;

/// Строка лидерборда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub name: String,
    pub wins: u32,
    pub earned: i64,
    pub lost: Chips,
    /// earned - lost
    pub overall: i64,
}

/// Лидерборд по убыванию `overall`. Сортировка стабильная:
/// при равенстве сохраняется порядок рассадки.
pub fn build_leaderboard(players: &[PlayerRecord]) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = players
        .iter()
        .map(|p| LeaderboardRow {
            name: p.name.clone(),
            wins: p.total_wins,
            earned: p.total_earned,
            lost: p.total_lost,
            overall: p.overall(),
        })
        .collect();

    rows.sort_by(|a, b| b.overall.cmp(&a.overall));
    rows
}
