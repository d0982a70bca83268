// tests/ledger_core_tests.rs
//
// Базовые сценарии леджера:
//  1) Стартовый бут: 4 игрока по 5 → банк 20, журнал "Boot 5"
//  2) Повторный apply_boot ничего не меняет
//  3) Вклад +10 игроку 0 → вклад 15, банк 25, статус Active
//  4) Вычитание вклада
//  5) Расчёт победителя: выигрыш = банк - свой вклад, проигрыши остальных
//  6) Новый раунд: вклады → 0 → бут, статистика сохраняется
//  7) Удаление игрока сдвигает позиции и пересчитывает банк
//  8) Победитель из сфолдивших ядром не блокируется

use pot_ledger::domain::{Chips, LedgerConfig, PlayerStatus};
use pot_ledger::engine::SessionLedger;

fn started(players: usize) -> SessionLedger {
    SessionLedger::start(LedgerConfig::with_players(players)).expect("valid config")
}

fn contributions_sum(ledger: &SessionLedger) -> Chips {
    ledger.players().iter().map(|p| p.contribution).sum()
}

#[test]
fn boot_is_posted_once_for_every_player() {
    let mut ledger = SessionLedger::new(LedgerConfig::with_players(4)).unwrap();
    assert!(!ledger.boot_applied());
    assert_eq!(ledger.pot(), Chips::ZERO);

    assert!(ledger.apply_boot());
    assert!(ledger.boot_applied());
    assert_eq!(ledger.pot(), Chips(20));
    for p in ledger.players() {
        assert_eq!(p.contribution, Chips(5));
        assert_eq!(p.action_strings(), vec!["Boot 5".to_string()]);
        assert_eq!(p.status, PlayerStatus::Waiting);
    }

    // второй вызов — no-op
    assert!(!ledger.apply_boot());
    assert_eq!(ledger.pot(), Chips(20));
    assert!(ledger.players().iter().all(|p| p.contribution == Chips(5)));
    assert!(ledger.players().iter().all(|p| p.action_log.len() == 1));
    assert_eq!(ledger.undo_depth(), 0);
}

#[test]
fn reset_round_counts_as_boot() {
    let mut ledger = SessionLedger::new(LedgerConfig::with_players(3)).unwrap();
    ledger.reset_round();
    assert!(ledger.boot_applied());

    assert!(!ledger.apply_boot());
    assert!(ledger.players().iter().all(|p| p.contribution == Chips(5)));
    assert_eq!(ledger.pot(), Chips(15));
}

#[test]
fn scenario_a_adjust_contribution_updates_pot() {
    let mut ledger = started(4);
    assert_eq!(ledger.pot(), Chips(20));

    let updated = ledger.adjust_contribution(0, 10).unwrap();
    assert_eq!(updated, Chips(15));

    let p0 = ledger.player(0).unwrap();
    assert_eq!(p0.contribution, Chips(15));
    assert_eq!(p0.status, PlayerStatus::Active);
    assert_eq!(p0.action_strings(), vec!["Boot 5", "+10"]);
    assert_eq!(ledger.pot(), Chips(25));
    assert_eq!(ledger.undo_depth(), 1);
}

#[test]
fn negative_adjustment_subtracts_and_logs_sign() {
    let mut ledger = started(3);
    ledger.adjust_contribution(1, 20).unwrap();
    ledger.adjust_contribution(1, -10).unwrap();

    let p1 = ledger.player(1).unwrap();
    assert_eq!(p1.contribution, Chips(15));
    assert_eq!(p1.action_strings(), vec!["Boot 5", "+20", "-10"]);
    assert_eq!(ledger.pot(), Chips(25));
}

#[test]
fn scenario_c_declare_winner_settles_hand() {
    let mut ledger = started(4);
    // вклады: 5, 15, 10, 10 → банк 40
    ledger.adjust_contribution(1, 10).unwrap();
    ledger.adjust_contribution(2, 5).unwrap();
    ledger.adjust_contribution(3, 5).unwrap();
    assert_eq!(ledger.pot(), Chips(40));
    assert_eq!(ledger.player(2).unwrap().contribution, Chips(10));

    let before: Vec<Chips> = ledger.players().iter().map(|p| p.contribution).collect();
    let result = ledger.declare_winner(2).unwrap();

    assert_eq!(result.amount, 30);
    assert_eq!(result.winner_name, "Player 3");
    assert_eq!(result.hand_number, 1);

    let winner = ledger.player(2).unwrap();
    assert_eq!(winner.total_wins, 1);
    assert_eq!(winner.total_earned, 30);
    assert_eq!(winner.total_lost, Chips::ZERO);
    assert_eq!(winner.action_strings().last().map(String::as_str), Some("Won 30"));

    for (idx, p) in ledger.players().iter().enumerate() {
        if idx != 2 {
            assert_eq!(p.total_lost, before[idx]);
            assert_eq!(p.total_wins, 0);
        }
        assert_eq!(p.contribution, Chips::ZERO);
        assert_eq!(p.status, PlayerStatus::Waiting);
    }
    assert_eq!(ledger.pot(), Chips::ZERO);
    assert_eq!(ledger.hand_history().len(), 1);
}

#[test]
fn declare_winner_does_not_post_next_boot() {
    let mut ledger = started(3);
    ledger.declare_winner(0).unwrap();
    assert_eq!(ledger.pot(), Chips::ZERO);

    ledger.reset_round();
    assert_eq!(ledger.pot(), Chips(15));
}

#[test]
fn scenario_e_reset_round_keeps_stats() {
    let mut ledger = started(3);
    ledger.adjust_contribution(0, 25).unwrap();
    ledger.fold(2).unwrap();
    ledger.declare_winner(0).unwrap();
    ledger.adjust_contribution(1, 10).unwrap();

    let stats_before: Vec<(u32, i64, Chips)> = ledger
        .players()
        .iter()
        .map(|p| (p.total_wins, p.total_earned, p.total_lost))
        .collect();

    ledger.reset_round();

    for p in ledger.players() {
        assert_eq!(p.contribution, Chips(5));
        assert_eq!(p.status, PlayerStatus::Waiting);
        assert_eq!(p.action_strings(), vec!["Boot 5".to_string()]);
    }
    assert_eq!(ledger.pot(), Chips(15));

    let stats_after: Vec<(u32, i64, Chips)> = ledger
        .players()
        .iter()
        .map(|p| (p.total_wins, p.total_earned, p.total_lost))
        .collect();
    assert_eq!(stats_before, stats_after);
}

#[test]
fn reset_round_unfolds_players() {
    let mut ledger = started(2);
    ledger.fold(1).unwrap();
    ledger.reset_round();
    assert_eq!(ledger.player(1).unwrap().status, PlayerStatus::Waiting);
    assert!(ledger.adjust_contribution(1, 5).is_ok());
}

#[test]
fn remove_player_shifts_positions_and_recomputes_pot() {
    let mut ledger = SessionLedger::start(LedgerConfig::with_names(["Ann", "Bob", "Cid"])).unwrap();
    ledger.adjust_contribution(1, 10).unwrap();
    assert_eq!(ledger.pot(), Chips(25));

    let removed = ledger.remove_player(1).unwrap();
    assert_eq!(removed.name, "Bob");
    assert_eq!(ledger.player_count(), 2);
    assert_eq!(ledger.player(1).unwrap().name, "Cid");
    assert_eq!(ledger.pot(), Chips(10));
    assert_eq!(ledger.pot(), contributions_sum(&ledger));
}

#[test]
fn core_allows_folded_winner() {
    let mut ledger = started(3);
    ledger.fold(1).unwrap();
    assert_eq!(ledger.eligible_winners(), vec![0, 2]);

    let result = ledger.declare_winner(1).unwrap();
    assert_eq!(result.amount, 10);
    assert_eq!(ledger.player(1).unwrap().total_wins, 1);
}

#[test]
fn sole_remaining_player_detection() {
    let mut ledger = started(3);
    assert_eq!(ledger.sole_remaining_player(), None);
    ledger.fold(0).unwrap();
    assert_eq!(ledger.sole_remaining_player(), None);
    ledger.fold(2).unwrap();
    assert_eq!(ledger.sole_remaining_player(), Some(1));
}

#[test]
fn rename_changes_label_without_snapshot() {
    let mut ledger = started(2);
    ledger.rename_player(0, "Dealer").unwrap();
    assert_eq!(ledger.player(0).unwrap().name, "Dealer");
    assert_eq!(ledger.undo_depth(), 0);

    let result = ledger.declare_winner(0).unwrap();
    assert_eq!(result.winner_name, "Dealer");
    assert_eq!(result.to_string(), "#1 Dealer wins 5");
}

#[test]
fn pot_matches_contributions_after_mixed_sequence() {
    let mut ledger = started(5);
    ledger.adjust_contribution(0, 10).unwrap();
    ledger.fold(3).unwrap();
    ledger.adjust_contribution(4, 50).unwrap();
    let _ = ledger.adjust_contribution(3, 5);
    let _ = ledger.adjust_contribution(1, 7);
    ledger.remove_player(2).unwrap();
    assert_eq!(ledger.pot(), contributions_sum(&ledger));

    ledger.undo().unwrap();
    assert_eq!(ledger.pot(), contributions_sum(&ledger));

    ledger.declare_winner(0).unwrap();
    assert_eq!(ledger.pot(), contributions_sum(&ledger));

    ledger.reset_round();
    assert_eq!(ledger.pot(), contributions_sum(&ledger));
}
