// src/bin/ledger_stress_test.rs

use pot_ledger::domain::LedgerConfig;
use pot_ledger::engine::SessionLedger;
use pot_ledger::infra::{simulate_session, SimulationStats, SystemRng};

fn main() {
    env_logger::init();
    println!("ledger_stress_test: стартуем стресс-тест леджера…");

    // Параметры нагрузки — можно смело крутить.
    const NUM_SESSIONS: usize = 64;
    const PLAYERS_PER_SESSION: usize = 6;
    const STEPS_PER_SESSION: u32 = 2_000;

    let mut rng = SystemRng;
    let mut totals = SimulationStats::default();
    let mut failed = 0usize;

    for session in 0..NUM_SESSIONS {
        let mut ledger = match SessionLedger::start(LedgerConfig::with_players(PLAYERS_PER_SESSION)) {
            Ok(ledger) => ledger,
            Err(e) => {
                eprintln!("[STRESS] ОШИБКА конфига: {e}");
                return;
            }
        };

        match simulate_session(&mut ledger, &mut rng, STEPS_PER_SESSION) {
            Ok(stats) => {
                totals.steps += stats.steps;
                totals.accepted += stats.accepted;
                totals.rejected += stats.rejected;
                totals.hands_settled += stats.hands_settled;
                totals.rounds_started += stats.rounds_started;
                totals.undos += stats.undos;
                totals.players_removed += stats.players_removed;
                totals.max_pot = totals.max_pot.max(stats.max_pot);
            }
            Err(e) => {
                failed += 1;
                eprintln!("[STRESS][session={session}] ИНВАРИАНТ НАРУШЕН: {e}");
            }
        }
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Сессий: {NUM_SESSIONS}, провалено: {failed}");
    println!("Шагов: {} (принято {}, отклонено {})", totals.steps, totals.accepted, totals.rejected);
    println!("Раздач рассчитано: {}", totals.hands_settled);
    println!("Раундов начато: {}", totals.rounds_started);
    println!("Отмен: {}", totals.undos);
    println!("Игроков удалено: {}", totals.players_removed);
    println!("Максимальный банк: {}", totals.max_pot);
    println!("===========================================");
    println!("ledger_stress_test: завершено.");
}
