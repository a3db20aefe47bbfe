mod config;

use std::env;
use std::io::{self, BufWriter, Write};

use env_logger::Env;
use log::*;
use tapers_core::scaling;

use crate::config::{Config, USAGE};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_nanos()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|x| x == "--help" || x == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let config = Config::from_args(args)?;

    debug!("config: {:?}", config);

    let (kind, params) = config.window.lookup()?;

    let window = kind.generate(config.length, &params, !config.periodic)?;

    info!(
        "window: {} ({}) length={} periodic={} scaling={}",
        config.window,
        kind,
        window.len(),
        config.periodic,
        scaling(&window)
    );

    let mut stdout = BufWriter::new(io::stdout().lock());

    for x in window {
        writeln!(stdout, "{:.*}", config.precision, x)?;
    }

    stdout.flush()?;

    Ok(())
}
