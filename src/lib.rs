//! Settlement engine for hole-by-hole golf wagering.
//!
//! Callers hand the engine a roster, a rules record, and an ordered list of
//! holes; the engine hands back a dense per-hole, per-player delta matrix and
//! running totals. Everything else (forms, persistence, rendering) lives
//! outside this crate and talks to it through [`dto`].

pub mod dto;
pub mod game;

/// Signed monetary amounts. Payout legs are rational (stake scaled by side
/// sizes), so settlements carry fractional units; callers display 2 decimals.
pub type Money = f64;
/// Recorded stroke counts.
pub type Strokes = u8;
/// Per-hole target value.
pub type Par = u8;
/// Count of consecutive pushed holes feeding the next decisive stake.
pub type Carry = u32;

/// Number of roster slots on a scorecard.
pub const SEATS: usize = 5;
/// Nominal round count of a full match. Informational: the engine settles
/// whatever ordered list of holes it is given.
pub const HOLES: usize = 18;
/// Fallback target when a hole's par is absent or below the legal minimum.
pub const DEFAULT_PAR: Par = 4;
/// Smallest legal par; anything under it is treated as unset.
pub const MIN_PAR: Par = 3;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
