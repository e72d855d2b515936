//! Text formatting for hands, odds, and the ledger views.
//!
//! These are pure functions returning `String`s; the command handlers decide
//! where the text goes.
//!
//! ## Example
//!
//! ```rust
//! use lucky9_cli::formatters::format_percentage;
//!
//! assert_eq!(format_percentage(12.5), "12.50%");
//! ```

use crate::ui;
use lucky9_engine::balances::BalanceEntry;
use lucky9_engine::hand::Hand;
use lucky9_engine::leaderboard::LeaderboardEntry;
use lucky9_engine::logger::ActionLog;

pub fn format_percentage(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// `"<label>: [cards] | Total: n"`
pub fn format_hand(label: &str, hand: &Hand) -> String {
    format!("{}: {} | Total: {}", label, hand, hand.total())
}

/// Leaderboard table in standings order.
pub fn format_leaderboard(standings: &[(&str, LeaderboardEntry)]) -> String {
    let mut lines = vec![
        ui::RULE.to_string(),
        format!("{:^width$}", "LEADERBOARD", width = ui::RULE.len()),
        ui::RULE.to_string(),
    ];
    if standings.is_empty() {
        lines.push("No scores yet".to_string());
    } else {
        lines.push(row("Name", "Wins", "Losses", "Ties", "Total Games"));
        lines.push("-".repeat(63));
        for (name, entry) in standings {
            lines.push(row(
                name,
                &entry.wins.to_string(),
                &entry.losses.to_string(),
                &entry.ties.to_string(),
                &entry.total_games.to_string(),
            ));
        }
    }
    lines.push(ui::RULE.to_string());
    lines.join("\n")
}

fn row(name: &str, wins: &str, losses: &str, ties: &str, total: &str) -> String {
    format!(
        "{:<15} {:<5} {:<7} {:<5} {}",
        name, wins, losses, ties, total
    )
}

pub fn format_balance(player: &str, entry: &BalanceEntry) -> String {
    [
        ui::RULE.to_string(),
        format!("Balance info for {}:", player),
        format!("  Initial Balance: {}", entry.initial_balance),
        format!("  Current Balance: {}", entry.current_balance),
        format!("  Profit: {}", entry.profit()),
        ui::RULE.to_string(),
    ]
    .join("\n")
}

/// One line per unlocked achievement, or a placeholder when there are none.
pub fn format_achievements(unlocked: &[(&str, &str)]) -> String {
    if unlocked.is_empty() {
        return "No achievements unlocked yet.".to_string();
    }
    unlocked
        .iter()
        .map(|(title, description)| format!("{}: {}", title, description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_history(log: &ActionLog) -> String {
    log.iter().collect::<Vec<_>>().join("\n")
}
