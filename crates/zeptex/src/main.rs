#![forbid(unsafe_code)]

//! Zeptex binary entry point.

use zeptex::{app, cli};

fn main() {
    let opts = cli::parse();
    if let Err(err) = app::run(opts) {
        eprintln!("zeptex: {err}");
        std::process::exit(1);
    }
}
