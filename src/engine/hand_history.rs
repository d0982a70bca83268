use std::fmt;

use serde::{Deserialize, Serialize};

/// Итог одной раздачи: кто выиграл и сколько (чистыми).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    /// Порядковый номер раздачи в сессии (с 1).
    pub hand_number: usize,
    pub winner_name: String,
    pub amount: i64,
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} wins {}", self.hand_number, self.winner_name, self.amount)
    }
}

/// Журнал итогов раздач. Только добавление, undo его не откатывает.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistoryLog {
    results: Vec<HandResult>,
}

impl HandHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner_name: impl Into<String>, amount: i64) -> &HandResult {
        let hand_number = self.results.len() + 1;
        self.results.push(HandResult {
            hand_number,
            winner_name: winner_name.into(),
            amount,
        });
        &self.results[self.results.len() - 1]
    }

    pub fn results(&self) -> &[HandResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Строки для отображения, в хронологическом порядке.
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(ToString::to_string).collect()
    }
}
