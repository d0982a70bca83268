//! Движок сессии: вклады, банк, фолды, победитель, отмена, лидерборд.
//!
//! Высокоуровневый объект: `SessionLedger`
//! Основные операции:
//!   - `apply_boot` / `reset_round` – бут и новый раунд
//!   - `adjust_contribution` / `fold` / `remove_player` – действия за столом
//!   - `declare_winner` – расчёт раздачи
//!   - `undo` – откат последней операции

pub mod errors;
pub mod hand_history;
pub mod leaderboard;
pub mod ledger;
pub mod pot;
pub mod undo;
pub mod validation;

pub use errors::LedgerError;
pub use hand_history::{HandHistoryLog, HandResult};
pub use leaderboard::{build_leaderboard, LeaderboardRow};
pub use ledger::SessionLedger;
pub use pot::Pot;
pub use undo::{PlayersSnapshot, UndoStack};
