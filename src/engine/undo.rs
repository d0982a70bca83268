use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerRecord;

/// Полный снимок игроков на момент перед мутацией.
///
/// Глубокая копия: журнал действий клонируется вместе с записью,
/// так что дальнейшие мутации живого состояния снимок не задевают.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayersSnapshot {
    pub players: Vec<PlayerRecord>,
}

impl PlayersSnapshot {
    pub fn capture(players: &[PlayerRecord]) -> Self {
        Self {
            players: players.to_vec(),
        }
    }

    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.players
    }
}

/// Стек отмены. Растёт без ограничений в пределах сессии, последний снимок — сверху.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UndoStack {
    snapshots: Vec<PlayersSnapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, players: &[PlayerRecord]) {
        self.snapshots.push(PlayersSnapshot::capture(players));
    }

    pub fn pop(&mut self) -> Option<PlayersSnapshot> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
