use clap::{Parser, Subcommand, ValueEnum};

use festival_clock::GregorianDate;
use festival_clock::service::DEFAULT_HORIZON_DAYS;

/// Countdown to the next festival.
#[derive(Parser)]
#[command(
    name = "festival-clock",
    version,
    about = "Countdown to the next Chinese or Gregorian festival"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the next festival and the days left until it.
    Next(NextArgs),
    /// Print the lunisolar date and solar term of a day.
    Lunar(LunarArgs),
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Reference date (YYYY-MM-DD); today if omitted.
    #[arg(short, long)]
    pub date: Option<GregorianDate>,

    /// Number of days to look ahead.
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    pub horizon: i32,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Date to describe (YYYY-MM-DD); today if omitted.
    #[arg(short, long)]
    pub date: Option<GregorianDate>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
