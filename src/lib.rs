//! Adaptive rock-paper-scissors toolkit.
//!
//! The model learns the opponent's tendencies from a bounded window of
//! observed throws and plays the counter to its prediction.
//!
//! ## Module Organization
//!
//! - [`game`] — Throw alphabet, beats relation, round outcomes
//! - [`markov`] — Bounded history and transition-count sequence model
//! - [`players`] — The house player built on top of the model
//! - [`dto`] — API request/response types
//! - [`hosting`] — HTTP server exposing play/reset/health

pub mod game;
pub mod markov;
pub mod players;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod hosting;

/// Transition and frequency counts learned by the sequence model.
pub type Count = usize;

/// Window length of prior throws used as a prediction state key.
pub const MARKOV_ORDER: usize = 3;
/// Maximum number of opponent throws retained in the model's history.
pub const HISTORY_CAPACITY: usize = 50;
/// Default bind address for the HTTP server.
#[cfg(feature = "server")]
pub const BIND_ADDR: &str = "127.0.0.1:8000";

/// Random instance generation for testing and cold-start fallbacks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
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

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
