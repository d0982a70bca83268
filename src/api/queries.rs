use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::engine::{HandResult, LeaderboardRow, SessionLedger};

use super::dto::{LedgerViewDto, PlayerCardDto, StatsDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Банк + карточки игроков.
    GetLedger,

    GetLeaderboard,

    GetHandHistory,

    /// Лидерборд и история вместе.
    GetStats,

    /// Кого можно выбрать победителем.
    GetEligibleWinners,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Ledger(LedgerViewDto),
    Leaderboard(Vec<LeaderboardRow>),
    HandHistory(Vec<HandResult>),
    Stats(StatsDto),
    EligibleWinners(Vec<PlayerIndex>),
}

pub fn run_query(ledger: &SessionLedger, query: &Query) -> QueryResponse {
    match query {
        Query::GetLedger => QueryResponse::Ledger(build_ledger_view(ledger)),
        Query::GetLeaderboard => QueryResponse::Leaderboard(ledger.leaderboard()),
        Query::GetHandHistory => {
            QueryResponse::HandHistory(ledger.hand_history().results().to_vec())
        }
        Query::GetStats => QueryResponse::Stats(StatsDto {
            leaderboard: ledger.leaderboard(),
            hand_history: ledger.hand_history().results().to_vec(),
        }),
        Query::GetEligibleWinners => QueryResponse::EligibleWinners(ledger.eligible_winners()),
    }
}

/// Сформировать DTO леджера на основе текущего состояния.
pub fn build_ledger_view(ledger: &SessionLedger) -> LedgerViewDto {
    let players = ledger
        .players()
        .iter()
        .enumerate()
        .map(|(index, p)| PlayerCardDto {
            index,
            name: p.name.clone(),
            status: p.status,
            contribution: p.contribution,
            actions: p.action_strings(),
            total_wins: p.total_wins,
            total_earned: p.total_earned,
            total_lost: p.total_lost,
        })
        .collect();

    LedgerViewDto {
        pot: ledger.pot(),
        players,
        eligible_winners: ledger.eligible_winners(),
        undo_depth: ledger.undo_depth(),
        boot_applied: ledger.boot_applied(),
    }
}
