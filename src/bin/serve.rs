//! Arcade Server Binary
//!
//! Runs the HTTP server that plays adaptive rock-paper-scissors,
//! learning the opponent's patterns as rounds come in.

use clap::Parser;
use roboshambo::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind, falls back to BIND_ADDR env var.
    #[arg(long)]
    bind: Option<String>,
    /// Markov window length used as the prediction state key.
    #[arg(long, default_value_t = MARKOV_ORDER)]
    order: usize,
    /// Maximum number of opponent throws retained in history.
    #[arg(long, default_value_t = HISTORY_CAPACITY)]
    capacity: usize,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let bind = args
        .bind
        .or_else(|| std::env::var("BIND_ADDR").ok())
        .unwrap_or_else(|| BIND_ADDR.to_string());
    log();
    kys();
    hosting::Server::run(&bind, args.order, args.capacity)
        .await
        .unwrap();
}
