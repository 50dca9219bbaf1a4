//! Command line reporter: feeds recorded samples to a [Tracker]
//! and prints the statistics of every body.
use clap::Parser;
use itertools::Itertools;
use log::{error, info, warn};

use kinetrack::prelude::{Entry, Tracker};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Sample files, one "<id> <time> <x> <y>" record per line.
    /// Lines starting with '#' are ignored.
    /// Files are processed in the given order.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Only retain the latest N samples of each body
    #[arg(short, long, value_name = "N")]
    max_samples: Option<usize>,
}

fn main() -> Result<(), std::io::Error> {
    env_logger::init();

    let cli = Cli::parse();

    let mut tracker = Tracker::new();
    if let Some(max_samples) = cli.max_samples {
        tracker = tracker.with_max_samples(max_samples);
    }

    for path in cli.files.iter() {
        let fd = File::open(path)?;
        let reader = BufReader::new(fd);

        let mut total = 0;
        for (nth, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match Entry::from_str(trimmed) {
                Ok(entry) => {
                    tracker.add_sample(&entry.body, entry.sample);
                    total += 1;
                },
                Err(e) => {
                    warn!("{}:{} - {}", path.display(), nth + 1, e);
                },
            }
        }
        info!("{} - {} sample(s)", path.display(), total);
    }

    if tracker.is_empty() {
        error!("no samples to analyze");
        return Ok(());
    }

    let report = tracker.report();
    for body in report.keys().sorted() {
        println!("Body: {}", body);
        println!("{}", report[body]);
    }

    Ok(())
}
