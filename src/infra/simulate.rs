use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;
use crate::engine::SessionLedger;
use crate::infra::rng::RandomSource;

/// Итоги случайного прогона.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationStats {
    pub steps: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub hands_settled: u32,
    pub rounds_started: u32,
    pub undos: u32,
    pub players_removed: u32,
    pub max_pot: Chips,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Шаг {step}: банк {pot} не равен сумме вкладов {sum}")]
    PotMismatch { step: u32, pot: Chips, sum: Chips },
}

/// Сколько игроков оставляем минимум (ниже не удаляем).
const MIN_PLAYERS: usize = 2;
/// Максимальный размер ставки в минимальных шагах.
const MAX_UNITS: usize = 6;

/// Прогнать `steps` случайных операций по леджеру.
///
/// После каждой операции проверяется, что банк = сумма вкладов.
/// Отказы леджера (фолд, кратность, пустой undo) считаются нормой.
pub fn simulate_session<R: RandomSource>(
    ledger: &mut SessionLedger,
    rng: &mut R,
    steps: u32,
) -> Result<SimulationStats, SimulationError> {
    let mut stats = SimulationStats::default();
    let unit = ledger.config().min_unit.as_signed();

    for step in 0..steps {
        let count = ledger.player_count();
        if count == 0 {
            break;
        }
        stats.steps += 1;

        let seat = rng.pick(count);
        let outcome = match rng.pick(20) {
            0..=9 => {
                let units = rng.pick(MAX_UNITS) as i64 + 1;
                // иногда ломаем кратность, иногда вычитаем
                let amount = match rng.pick(10) {
                    0 => units * unit + 1,
                    1 => -(units * unit),
                    _ => units * unit,
                };
                ledger.adjust_contribution(seat, amount).map(|_| ())
            }
            10..=12 => ledger.fold(seat),
            13..=14 => {
                let eligible = ledger.eligible_winners();
                if eligible.is_empty() {
                    ledger.reset_round();
                    stats.rounds_started += 1;
                    Ok(())
                } else {
                    let winner = eligible[rng.pick(eligible.len())];
                    ledger.declare_winner(winner).map(|_| {
                        stats.hands_settled += 1;
                    })
                }
            }
            15..=16 => {
                ledger.reset_round();
                stats.rounds_started += 1;
                Ok(())
            }
            17..=18 => ledger.undo().map(|_| {
                stats.undos += 1;
            }),
            _ => {
                if count > MIN_PLAYERS {
                    ledger.remove_player(seat).map(|_| {
                        stats.players_removed += 1;
                    })
                } else {
                    ledger.reset_leaderboard();
                    Ok(())
                }
            }
        };

        match outcome {
            Ok(()) => stats.accepted += 1,
            Err(err) => {
                debug!("simulate: шаг {step} отклонён: {err}");
                stats.rejected += 1;
            }
        }

        let sum: Chips = ledger.players().iter().map(|p| p.contribution).sum();
        if ledger.pot() != sum {
            return Err(SimulationError::PotMismatch {
                step,
                pot: ledger.pot(),
                sum,
            });
        }
        if ledger.pot() > stats.max_pot {
            stats.max_pot = ledger.pot();
        }
    }

    Ok(stats)
}
