mod error;
mod parser;
mod processor;
mod serialiser;
mod srt;
mod store;
mod timecode;

use crate::processor::Config;
use crate::store::DirStore;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Turn SRT subtitles into plain text transcripts")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "The directory to scan. Every file whose name contains '.srt' is converted to a '.txt' file next to it.",
        default_value = processor::DEFAULT_INPUT_DIR
    )]
    dir: PathBuf,
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        help = "Start a new paragraph when the pause between two subtitles is longer than this.",
        default_value_t = processor::DEFAULT_PAUSE_THRESHOLD
    )]
    pause: u32,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        input_dir: cli.dir,
        pause_threshold_seconds: cli.pause,
    };
    let store = DirStore::new(&config.input_dir);

    let reports = processor::convert_all(&store, &config)?;
    for report in reports.iter().filter(|r| r.problems > 0) {
        warn!(
            "{} --> {}: written with {} problem(s)",
            report.input, report.output, report.problems
        );
    }
    let problems: usize = reports.iter().map(|r| r.problems).sum();
    let entries: usize = reports.iter().map(|r| r.entries).sum();
    info!(
        "Converted {} file(s) in '{}': {} subtitle(s), {} problem(s)",
        reports.len(),
        config.input_dir.display(),
        entries,
        problems
    );

    Ok(())
}
