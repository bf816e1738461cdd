// src/bin/cli.rs
use sc_scrape::cli;

fn main() {
    color_eyre::install().expect("error-report hook");
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
