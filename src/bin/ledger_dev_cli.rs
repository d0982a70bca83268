// src/bin/ledger_dev_cli.rs
//
// Простая консоль ведущего: читает команды построчно из stdin.
// Первый аргумент (опционально) — путь к JSON-конфигу LedgerConfig.

use std::io::{self, BufRead, Write};

use pot_ledger::api::{
    build_ledger_view, execute_command, run_query, ApiConfig, ApiError, AutoSettlePolicy,
    Command, CommandResponse, LedgerViewDto, Query, QueryResponse,
};
use pot_ledger::domain::LedgerConfig;
use pot_ledger::engine::SessionLedger;

const HELP: &str = "\
Команды:
  add <i> <amount>     – добавить к вкладу игрока i
  sub <i> <amount>     – вычесть из вклада игрока i
  fold <i>             – фолд
  win <i>              – объявить победителя
  remove <i>           – убрать игрока
  rename <i> <name>    – переименовать
  undo                 – отменить последнюю операцию
  round                – новый раунд (бут с каждого)
  fresh                – сбросить лидерборд
  board | history      – лидерборд / история раздач
  auto on|off          – авто-расчёт, когда остался один игрок
  json                 – состояние в JSON
  quit";

/// Что ввёл пользователь.
enum Input {
    Command(Command),
    Query(Query),
    Auto(AutoSettlePolicy),
    Json,
    Help,
    Quit,
}

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Не удалось прочитать конфиг {path}: {err}");
                std::process::exit(1);
            }
        },
        None => LedgerConfig::default(),
    };

    let mut ledger = match SessionLedger::start(config) {
        Ok(ledger) => ledger,
        Err(err) => {
            eprintln!("Некорректный конфиг: {err}");
            std::process::exit(1);
        }
    };
    let mut api_config = ApiConfig::default();

    println!("ledger_dev_cli: сессия началась, бут взят с каждого игрока.");
    println!("{HELP}\n");
    print_ledger(&build_ledger_view(&ledger));

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Ошибка чтения: {err}");
                break;
            }
        }

        let input = match parse_input(line.trim()) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(err) => {
                println!("  ! {err}");
                continue;
            }
        };

        match input {
            Input::Command(cmd) => match execute_command(&mut ledger, cmd, &api_config) {
                Ok(CommandResponse::Updated(view)) => print_ledger(&view),
                Ok(CommandResponse::HandSettled {
                    result,
                    auto_settled,
                    ledger: view,
                }) => {
                    let how = if auto_settled { " (авто)" } else { "" };
                    println!("  🏆 {}{}", result, how);
                    print_ledger(&view);
                }
                Err(err) => println!("  ! {err}"),
            },
            Input::Query(query) => print_query(run_query(&ledger, &query)),
            Input::Auto(policy) => {
                api_config.auto_settle = policy;
                println!("  авто-расчёт: {:?}", policy);
            }
            Input::Json => match serde_json::to_string_pretty(&build_ledger_view(&ledger)) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("  ! JSON: {err}"),
            },
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }
    }

    println!("ledger_dev_cli: завершено.");
}

fn load_config(path: &str) -> Result<LedgerConfig, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

fn parse_input(line: &str) -> Result<Option<Input>, ApiError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();

    let input = match word {
        "add" | "sub" => {
            let player = parse_index(rest.first())?;
            let amount: i64 = rest
                .get(1)
                .ok_or_else(|| ApiError::BadRequest("нужна сумма".into()))?
                .parse()
                .map_err(|_| ApiError::BadRequest("сумма должна быть числом".into()))?;
            let amount = if word == "sub" {
                amount
                    .checked_neg()
                    .ok_or_else(|| ApiError::BadRequest("сумма вне диапазона".into()))?
            } else {
                amount
            };
            Input::Command(Command::Adjust { player, amount })
        }
        "fold" => Input::Command(Command::Fold {
            player: parse_index(rest.first())?,
        }),
        "win" => Input::Command(Command::DeclareWinner {
            player: parse_index(rest.first())?,
        }),
        "remove" => Input::Command(Command::RemovePlayer {
            player: parse_index(rest.first())?,
        }),
        "rename" => {
            let player = parse_index(rest.first())?;
            let name = rest.get(1..).map(|w| w.join(" ")).unwrap_or_default();
            Input::Command(Command::Rename { player, name })
        }
        "undo" => Input::Command(Command::Undo),
        "round" => Input::Command(Command::NewRound),
        "fresh" => Input::Command(Command::ResetLeaderboard),
        "board" => Input::Query(Query::GetLeaderboard),
        "history" => Input::Query(Query::GetHandHistory),
        "auto" => match rest.first().copied() {
            Some("on") => Input::Auto(AutoSettlePolicy::SoleRemaining),
            Some("off") => Input::Auto(AutoSettlePolicy::Manual),
            _ => return Err(ApiError::BadRequest("auto on|off".into())),
        },
        "json" => Input::Json,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(ApiError::BadRequest(format!("неизвестная команда '{other}'"))),
    };

    Ok(Some(input))
}

fn parse_index(raw: Option<&&str>) -> Result<usize, ApiError> {
    raw.ok_or_else(|| ApiError::BadRequest("нужен индекс игрока".into()))?
        .parse()
        .map_err(|_| ApiError::BadRequest("индекс игрока должен быть числом".into()))
}

fn print_ledger(view: &LedgerViewDto) {
    println!("  Банк: {}   (undo: {})", view.pot, view.undo_depth);
    for p in &view.players {
        let actions = if p.actions.is_empty() {
            "нет действий".to_string()
        } else {
            p.actions.join(", ")
        };
        println!(
            "  [{}] {:<12} {:<8} вклад={:<5} | {}",
            p.index,
            p.name,
            p.status.label(),
            p.contribution.0,
            actions
        );
    }
}

fn print_query(response: QueryResponse) {
    match response {
        QueryResponse::Leaderboard(rows) => {
            println!("  {:<12} {:>5} {:>8} {:>8} {:>8}", "Игрок", "Wins", "Earned", "Lost", "Overall");
            for r in rows {
                println!(
                    "  {:<12} {:>5} {:>8} {:>8} {:>8}",
                    r.name, r.wins, r.earned, r.lost.0, r.overall
                );
            }
        }
        QueryResponse::HandHistory(results) => {
            if results.is_empty() {
                println!("  Раздач ещё не было");
            }
            for r in results {
                println!("  {r}");
            }
        }
        QueryResponse::Ledger(view) => print_ledger(&view),
        QueryResponse::Stats(stats) => {
            print_query(QueryResponse::Leaderboard(stats.leaderboard));
            print_query(QueryResponse::HandHistory(stats.hand_history));
        }
        QueryResponse::EligibleWinners(indices) => println!("  Кандидаты: {:?}", indices),
    }
}
