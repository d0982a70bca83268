//! Доменная модель сессии: деньги, игроки, конфиг.

pub mod chips;
pub mod config;
pub mod player;

/// Позиция игрока за столом (индекс в упорядоченном списке).
pub type PlayerIndex = usize;

pub use chips::*;
pub use config::*;
pub use player::*;
