//! Rental Checker - vehicle rental marketplace from the command line
//!
//! Search listings, price and request bookings, and manage the demo
//! todo and user stores.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = rental_app::logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
