use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "thingvec")]
#[command(version, about = "Replay op scripts against a growable Thing buffer", long_about = None)]
pub struct Cli {
    /// The .ops script file to replay
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Run the built-in scenarios
    #[arg(short, long)]
    pub demo: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level selected by the number of `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
