//! Settlement Binary
//!
//! Reads a JSON match sheet and prints the settled book: one row per hole,
//! one column per active player, totals at the bottom.

use clap::Parser;
use colored::Colorize;
use greenside::Money;
use greenside::dto::Sheet;
use greenside::dto::Tab;
use greenside::game::Ledger;

#[derive(Parser)]
#[command(name = "settle", about = "Settle a hole-by-hole wagering match")]
struct Args {
    /// Path to the JSON match sheet.
    sheet: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    greenside::log();
    let args = Args::parse();
    let sheet: Sheet = serde_json::from_str(&std::fs::read_to_string(&args.sheet)?)?;
    let roster = sheet.roster();
    let holes = sheet.holes();
    log::info!(
        "settling {} holes for {} players",
        holes.len(),
        roster.count()
    );
    let ledger = Ledger::tally(&roster, &sheet.rules, &holes);
    render(&Tab::from((&roster, &ledger)));
    Ok(())
}

fn render(tab: &Tab) {
    print!("{:>6}", "hole");
    for player in tab.players.iter() {
        print!("{:>10}", player);
    }
    println!();
    for (hole, row) in tab.rows.iter().enumerate() {
        print!("{:>6}", hole + 1);
        for delta in row.iter() {
            print!("{:>10}", cell(*delta));
        }
        println!();
    }
    print!("{:>6}", "total");
    for total in tab.totals.iter() {
        print!("{:>10}", cell(*total));
    }
    println!();
}

fn cell(amount: Money) -> colored::ColoredString {
    let text = format!("{:+.2}", amount);
    if amount > 0.0 {
        text.green()
    } else if amount < 0.0 {
        text.red()
    } else {
        format!("{:.2}", amount).normal()
    }
}
