use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::engine::SessionLedger;

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_ledger_view;

/// Команда от фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Изменить вклад игрока (отрицательная сумма — вычесть).
    Adjust { player: PlayerIndex, amount: i64 },

    Fold { player: PlayerIndex },

    RemovePlayer { player: PlayerIndex },

    /// Объявить победителя (решение людей за столом).
    DeclareWinner { player: PlayerIndex },

    Rename { player: PlayerIndex, name: String },

    Undo,

    /// Новый раунд с бутом, лидерборд сохраняется.
    NewRound,

    /// Обнулить лидерборд.
    ResetLeaderboard,
}

/// Что делать, когда не сфолдил только один игрок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AutoSettlePolicy {
    /// Ничего, победителя объявляют вручную.
    #[default]
    Manual,
    /// Сразу объявить оставшегося победителем.
    SoleRemaining,
}

/// Настройки слоя API (поведение фронта, не ядра).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub auto_settle: AutoSettlePolicy,
}

/// Выполнить команду над леджером и вернуть новое состояние.
pub fn execute_command(
    ledger: &mut SessionLedger,
    command: Command,
    config: &ApiConfig,
) -> Result<CommandResponse, ApiError> {
    let may_leave_one = matches!(command, Command::Fold { .. } | Command::RemovePlayer { .. });

    match command {
        Command::Adjust { player, amount } => {
            ledger.adjust_contribution(player, amount)?;
        }
        Command::Fold { player } => ledger.fold(player)?,
        Command::RemovePlayer { player } => {
            ledger.remove_player(player)?;
        }
        Command::DeclareWinner { player } => {
            let result = ledger.declare_winner(player)?;
            return Ok(CommandResponse::HandSettled {
                result,
                auto_settled: false,
                ledger: build_ledger_view(ledger),
            });
        }
        Command::Rename { player, name } => ledger.rename_player(player, name)?,
        Command::Undo => ledger.undo()?,
        Command::NewRound => ledger.reset_round(),
        Command::ResetLeaderboard => ledger.reset_leaderboard(),
    }

    if may_leave_one
        && config.auto_settle == AutoSettlePolicy::SoleRemaining
        && !ledger.pot().is_zero()
    {
        if let Some(winner) = ledger.sole_remaining_player() {
            let result = ledger.declare_winner(winner)?;
            info!("Авто-расчёт: остался один игрок, {}", result);
            return Ok(CommandResponse::HandSettled {
                result,
                auto_settled: true,
                ledger: build_ledger_view(ledger),
            });
        }
    }

    Ok(CommandResponse::Updated(build_ledger_view(ledger)))
}
