use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use beacon_exclusion::{excluded_count_on_row, find_unique_gap, tuning_frequency, Report};

#[derive(Parser)]
#[command(about = "Sensor/beacon exclusion zone queries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count positions on one row that cannot contain an undetected beacon
    Count {
        /// Row to count on
        #[arg(long, allow_hyphen_values = true)]
        row: i64,
        /// Clip the count to an inclusive x-range
        #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_hyphen_values = true)]
        bound: Option<Vec<i64>>,
        /// Sensor report file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Locate the one uncovered position in the square [lo, hi] x [lo, hi]
    /// and print it with its tuning frequency
    Locate {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        lo: i64,
        #[arg(long, default_value_t = 4_000_000, allow_hyphen_values = true)]
        hi: i64,
        /// Sensor report file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn read_report(file: Option<&PathBuf>) -> Result<Report> {
    let report = match file {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
            Report::read(BufReader::new(f))?
        }
        None => Report::read(io::stdin().lock())?,
    };
    Ok(report)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Count { row, bound, file } => {
            let report = read_report(file.as_ref())?;
            let bound = bound.map(|b| (b[0], b[1]));
            if let Some((lo, hi)) = bound {
                if lo > hi {
                    bail!("bound lower end {lo} exceeds upper end {hi}");
                }
            }
            println!("{}", excluded_count_on_row(report.sensors(), row, bound));
        }
        Command::Locate { lo, hi, file } => {
            if lo > hi {
                bail!("bound lower end {lo} exceeds upper end {hi}");
            }
            let report = read_report(file.as_ref())?;
            info!("searching rows {lo}..={hi} across {} sensors", report.sensors().len());
            let Some(p) = find_unique_gap(report.sensors(), lo, hi) else {
                bail!("no uncovered position within [{lo}, {hi}]");
            };
            println!("({}, {}) tuning frequency {}", p.x, p.y, tuning_frequency(p.x, p.y));
        }
    }
    Ok(())
}
