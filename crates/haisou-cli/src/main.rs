//! Haisou Balancer - Inbound delivery slot balancing
//!
//! A CLI tool that balances planned delivery quantities against fixed
//! trailer capacity per delivery slot.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
