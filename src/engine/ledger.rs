// src/engine/ledger.rs

use log::{debug, info, warn};

use crate::domain::{
    ActionEntry, Chips, LedgerConfig, PlayerIndex, PlayerRecord, PlayerStatus, MAX_AMOUNT,
};
use crate::engine::errors::LedgerError;
use crate::engine::hand_history::{HandHistoryLog, HandResult};
use crate::engine::leaderboard::{build_leaderboard, LeaderboardRow};
use crate::engine::pot::Pot;
use crate::engine::undo::UndoStack;
use crate::engine::validation::{validate_amount, validate_index};

/// Леджер одной сессии:
/// - упорядоченный список игроков (порядок = рассадка);
/// - банк (всегда сумма вкладов);
/// - стек отмены из полных снимков игроков;
/// - журнал итогов раздач (undo его не трогает).
///
/// Каждая денежная операция: снимок → мутация → пересчёт банка.
#[derive(Clone, Debug)]
pub struct SessionLedger {
    config: LedgerConfig,
    players: Vec<PlayerRecord>,
    pot: Pot,
    undo_stack: UndoStack,
    hand_history: HandHistoryLog,
    boot_applied: bool,
}

impl SessionLedger {
    /// Создать леджер по конфигу. Бут ещё не применён.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;

        let players = config
            .seat_names()
            .into_iter()
            .map(PlayerRecord::new)
            .collect();

        Ok(Self {
            config,
            players,
            pot: Pot::new(),
            undo_stack: UndoStack::new(),
            hand_history: HandHistoryLog::new(),
            boot_applied: false,
        })
    }

    /// `new` + стартовый бут.
    pub fn start(config: LedgerConfig) -> Result<Self, LedgerError> {
        let mut ledger = Self::new(config)?;
        ledger.apply_boot();
        Ok(ledger)
    }

    // ---------------------------------------------------------------------
    // Чтение
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn player(&self, index: PlayerIndex) -> Option<&PlayerRecord> {
        self.players.get(index)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn pot(&self) -> Chips {
        self.pot.total()
    }

    pub fn boot_applied(&self) -> bool {
        self.boot_applied
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn hand_history(&self) -> &HandHistoryLog {
        &self.hand_history
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        build_leaderboard(&self.players)
    }

    /// Кого можно объявить победителем: все, кто не сфолдил.
    pub fn eligible_winners(&self) -> Vec<PlayerIndex> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Если не сфолдил ровно один игрок — его индекс.
    pub fn sole_remaining_player(&self) -> Option<PlayerIndex> {
        match self.eligible_winners().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Мутации
    // ---------------------------------------------------------------------

    /// Стартовый бут. Срабатывает ровно один раз за сессию, повторный вызов — no-op.
    ///
    /// Возвращает `true`, если бут был применён этим вызовом.
    pub fn apply_boot(&mut self) -> bool {
        if self.boot_applied {
            debug!("apply_boot: бут уже применён, пропускаем");
            return false;
        }

        self.post_boot();
        info!(
            "Сессия началась: бут {} с каждого из {} игроков, банк {}",
            self.config.boot_amount,
            self.players.len(),
            self.pot()
        );
        true
    }

    /// Изменить вклад игрока на `amount` (может быть отрицательным).
    pub fn adjust_contribution(
        &mut self,
        index: PlayerIndex,
        amount: i64,
    ) -> Result<Chips, LedgerError> {
        validate_index(index, self.players.len())?;
        self.snapshot();

        if let Err(err) = validate_amount(amount, self.config.min_unit) {
            warn!("adjust_contribution({index}, {amount}) отклонено: {err}");
            return Err(err);
        }

        let player = &self.players[index];
        if player.is_folded() {
            warn!("adjust_contribution({index}, {amount}): игрок сфолдил");
            return Err(LedgerError::PlayerFolded(index));
        }

        let contribution = player.contribution;
        let Some(updated) = contribution.checked_add_signed(amount) else {
            warn!("adjust_contribution({index}, {amount}): вклад ушёл бы в минус");
            return Err(LedgerError::ContributionUnderflow {
                index,
                contribution,
                amount,
            });
        };

        // вклад и банк должны оставаться в пределах i64 (выигрыши знаковые)
        let new_pot = self
            .pot()
            .0
            .checked_sub(contribution.0)
            .and_then(|rest| rest.checked_add(updated.0))
            .map(Chips);
        match new_pot {
            Some(new_pot) if updated <= MAX_AMOUNT && new_pot <= MAX_AMOUNT => {}
            _ => {
                warn!("adjust_contribution({index}, {amount}): переполнение вклада или банка");
                return Err(LedgerError::AmountOverflow { index, amount });
            }
        }

        let player = &mut self.players[index];
        player.contribution = updated;
        player.status = PlayerStatus::Active;
        player.action_log.push(ActionEntry::Adjust(amount));

        let pot = self.recompute_pot();
        debug!("{} {:+} → вклад {}, банк {}", self.players[index].name, amount, updated, pot);
        Ok(updated)
    }

    /// Фолд игрока.
    pub fn fold(&mut self, index: PlayerIndex) -> Result<(), LedgerError> {
        validate_index(index, self.players.len())?;
        self.snapshot();

        let player = &mut self.players[index];
        player.status = PlayerStatus::Folded;
        player.action_log.push(ActionEntry::Fold);
        debug!("{} сфолдил", player.name);
        Ok(())
    }

    /// Убрать игрока из сессии. Последующие позиции сдвигаются вниз.
    pub fn remove_player(&mut self, index: PlayerIndex) -> Result<PlayerRecord, LedgerError> {
        validate_index(index, self.players.len())?;
        self.snapshot();

        let removed = self.players.remove(index);
        let pot = self.recompute_pot();
        debug!("Игрок {} удалён, банк {}", removed.name, pot);
        Ok(removed)
    }

    /// Откатить последнюю операцию: вернуть игроков из последнего снимка.
    pub fn undo(&mut self) -> Result<(), LedgerError> {
        let snapshot = self.undo_stack.pop().ok_or(LedgerError::EmptyUndoHistory)?;
        self.players = snapshot.into_players();
        let pot = self.recompute_pot();
        debug!("undo: осталось снимков {}, банк {}", self.undo_stack.len(), pot);
        Ok(())
    }

    /// Новый раунд: всё раундовое обнуляется и сразу снова берётся бут.
    /// Статистика лидерборда сохраняется.
    pub fn reset_round(&mut self) {
        self.snapshot();

        for player in &mut self.players {
            player.clear_round();
        }
        self.recompute_pot();

        self.post_boot();
        info!("Новый раунд: бут {}, банк {}", self.config.boot_amount, self.pot());
    }

    /// Объявить победителя раздачи.
    ///
    /// Победитель получает чистыми `pot - свой вклад`, остальные записывают свой
    /// вклад в проигрыш. Вклады и статусы обнуляются, бут не берётся
    /// (он будет при следующем `reset_round`).
    ///
    /// Фолд не блокируется: фильтрация кандидатов — на стороне вызывающего
    /// (`eligible_winners`).
    pub fn declare_winner(&mut self, index: PlayerIndex) -> Result<HandResult, LedgerError> {
        validate_index(index, self.players.len())?;
        self.snapshot();

        let pot = self.pot();
        let overflow = LedgerError::StatsOverflow(index);
        let winnings = pot
            .0
            .checked_sub(self.players[index].contribution.0)
            .and_then(|w| i64::try_from(w).ok())
            .ok_or_else(|| overflow.clone())?;

        // Сначала считаем новую статистику, мутируем только если всё сошлось.
        let mut settled = Vec::with_capacity(self.players.len());
        for (idx, player) in self.players.iter().enumerate() {
            if idx == index {
                let earned = player
                    .total_earned
                    .checked_add(winnings)
                    .ok_or_else(|| overflow.clone())?;
                settled.push((earned, player.total_lost));
            } else {
                let lost = player
                    .total_lost
                    .0
                    .checked_add(player.contribution.0)
                    .map(Chips)
                    .filter(|lost| *lost <= MAX_AMOUNT)
                    .ok_or(LedgerError::StatsOverflow(idx))?;
                settled.push((player.total_earned, lost));
            }
        }

        for (idx, (player, (earned, lost))) in self.players.iter_mut().zip(settled).enumerate() {
            if idx == index {
                player.total_wins = player.total_wins.saturating_add(1);
                player.action_log.push(ActionEntry::Won(winnings));
            }
            player.total_earned = earned;
            player.total_lost = lost;
            player.contribution = Chips::ZERO;
            player.status = PlayerStatus::Waiting;
        }
        self.recompute_pot();

        let winner_name = self.players[index].name.clone();
        info!("{} выигрывает {} (банк {})", winner_name, winnings, pot);
        Ok(self.hand_history.record(winner_name, winnings).clone())
    }

    /// Сбросить лидерборд: победы, выигрыши, проигрыши. Раунд не трогаем.
    pub fn reset_leaderboard(&mut self) {
        self.snapshot();

        for player in &mut self.players {
            player.total_wins = 0;
            player.total_earned = 0;
            player.total_lost = Chips::ZERO;
        }
        info!("Лидерборд сброшен");
    }

    /// Переименовать игрока. Это правка подписи, снимок не делается.
    pub fn rename_player(
        &mut self,
        index: PlayerIndex,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        validate_index(index, self.players.len())?;

        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyName);
        }
        debug!("Игрок {} → {}", self.players[index].name, name);
        self.players[index].name = name;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn snapshot(&mut self) {
        self.undo_stack.push(&self.players);
    }

    fn recompute_pot(&mut self) -> Chips {
        self.pot.recompute(&self.players)
    }

    /// Бут с каждого игрока + пересчёт банка. После любого бута стартовый уже не нужен.
    fn post_boot(&mut self) {
        let boot = self.config.boot_amount;
        for player in &mut self.players {
            player.contribution += boot;
            player.action_log.push(ActionEntry::Boot(boot));
        }
        self.recompute_pot();
        self.boot_applied = true;
    }
}
