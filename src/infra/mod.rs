//! Инфраструктура вокруг леджера:
//! - RNG-реализации;
//! - случайная симуляция сессии (стресс-прогоны, тесты инвариантов).

pub mod rng;
pub mod simulate;

pub use rng::*;
pub use simulate::{simulate_session, SimulationError, SimulationStats};
