mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use festival_clock::lunisolar;
use festival_clock::service::{DateSupplier, FestivalInfo, FestivalService, FixedDate, SystemClock};

use crate::cli::{Cli, Command, LunarArgs, NextArgs, OutputFormat};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Next(args) => next(args),
        Command::Lunar(args) => lunar(args),
    }
}

fn next(args: NextArgs) -> Result<()> {
    let info = match args.date {
        Some(date) => next_festival(FixedDate(date), args.horizon),
        None => next_festival(SystemClock, args.horizon),
    };
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
        OutputFormat::Text if info == FestivalInfo::none() => println!("no festival ahead"),
        OutputFormat::Text => println!("{} ({}) in {} days", info.name, info.kind, info.days),
    }
    Ok(())
}

fn next_festival<S: DateSupplier>(supplier: S, horizon: i32) -> FestivalInfo {
    FestivalService::new(supplier)
        .with_horizon(horizon)
        .next_festival()
}

fn lunar(args: LunarArgs) -> Result<()> {
    let date = match args.date {
        Some(date) => date,
        None => SystemClock.today().context("reading local date")?,
    };
    let lunar = lunisolar::to_lunisolar(date).with_context(|| format!("converting {date}"))?;
    let term = lunisolar::solar_term_for(date).with_context(|| format!("solar term of {date}"))?;
    println!("{date} {lunar}");
    match term.days_since {
        0 => println!("{}", term.name()),
        n => println!("{} +{n}", term.name()),
    }
    Ok(())
}
