//! Учёт денег в живой карточной сессии: вклады по раундам, банк,
//! фолды и расчёт победителя, отмена через снимки, лидерборд.
//!
//! Ядро — `engine::SessionLedger`. Слой `api` даёт команды/запросы для
//! любого фронта (CLI, UI), `infra` — RNG и симуляция для стресс-прогонов.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Chips, LedgerConfig, PlayerRecord, PlayerStatus};
pub use engine::{LedgerError, SessionLedger};
