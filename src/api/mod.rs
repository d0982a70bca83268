//! Внешний API леджера для фронта (CLI, UI).
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (вклад, фолд, победитель, undo);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для отображения;
//! - ошибки (errors.rs) — то, что видит пользователь.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
