use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "csvgen",
    about = "Write a synthetic ID,Value,Description dataset",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write large_dataset.csv in the current directory (default)
    Generate,

    /// Sort a CSV file by its first column and summarize one numeric column
    Stats {
        /// CSV file to read
        #[arg(default_value = csvgen::DEFAULT_PATH)]
        file: PathBuf,

        /// 1-based column to summarize
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        column: u32,

        /// Number of sorted rows to print
        #[arg(long, default_value_t = 5)]
        head: usize,

        /// Treat the first record as a header instead of data
        #[arg(long)]
        header: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => csvgen::generate::generate_file(Path::new(csvgen::DEFAULT_PATH)),
        Command::Stats {
            file,
            column,
            head,
            header,
        } => {
            let report = csvgen::stats::summarize(&file, header, column as usize - 1, head)?;
            let stdout = io::stdout().lock();
            let mut out = BufWriter::new(stdout);
            csvgen::stats::write_report(&mut out, &report).context("failed to write report")?;
            out.flush()?;
            Ok(())
        }
    }
}

fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to initialize logger")
}
