//! Command-line interface components.

use crate::config::ClimateConfig;
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_STORE_FILE, DEFAULT_TOP_N};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climate-log")]
#[command(about = "Daily temperature, humidity and mold-risk statistics from an indoor/outdoor climate log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Climate log to ingest when the store is empty
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Parquet file holding previously ingested readings
    #[arg(short, long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Location label of indoor readings (case-insensitive)
    #[arg(long, default_value = crate::constants::DEFAULT_INDOOR_LABEL)]
    pub indoor_label: String,

    /// Location label of outdoor readings (case-insensitive)
    #[arg(long, default_value = crate::constants::DEFAULT_OUTDOOR_LABEL)]
    pub outdoor_label: String,

    /// Entries per ranking
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Print the report and exit without the date lookup prompt
    #[arg(long)]
    pub no_interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> ClimateConfig {
        let config = ClimateConfig::default()
            .with_input_path(&self.input)
            .with_store_path(&self.store)
            .with_labels(&self.indoor_label, &self.outdoor_label)
            .with_top_n(self.top);

        if self.no_interactive {
            config.without_interactive()
        } else {
            config
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("climate_log_processor={}", args.log_level()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Run the full pipeline, print the report and serve date lookups
pub fn run(args: &Args) -> anyhow::Result<()> {
    use crate::pipeline::{ClimateProcessor, IngestOutcome};
    use crate::report::{ClimateReport, render_report};
    use crate::storage::ParquetStore;
    use anyhow::Context;
    use colored::*;
    use std::io;

    let config = args.to_config();
    let store = ParquetStore::open(&config.store_path);
    let mut processor =
        ClimateProcessor::new(config, store).context("Invalid configuration")?;

    println!("{}", "Loading climate log...".bright_yellow());
    let summary = processor.process().context("Failed to process climate log")?;

    match &summary.outcome {
        IngestOutcome::Loaded {
            source, inserted, ..
        } => println!(
            "  {} {} readings from {}",
            "Stored".bright_green(),
            inserted.to_string().bright_white().bold(),
            source.display()
        ),
        IngestOutcome::Skipped { existing } => println!(
            "  {} {} readings already stored, skipping ingestion",
            "Found".bright_green(),
            existing.to_string().bright_white().bold()
        ),
        IngestOutcome::NoValidData { source, .. } => println!(
            "  {} no valid data found in {}",
            "Warning:".bright_red(),
            source.display()
        ),
    }

    println!(
        "\n{} ({} readings, {} ms)",
        "Computing statistics...".bright_yellow(),
        summary.readings_used,
        summary.processing_time_ms
    );

    let report = ClimateReport::build(&summary.series, processor.config());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&report, &mut out).context("Failed to write report")?;

    if processor.config().interactive {
        let stdin = io::stdin();
        interactive::run_query_loop(&summary.series, &mut stdin.lock(), &mut out)?;
    }

    Ok(())
}

/// Interactive date lookups against the daily series
pub mod interactive {
    use crate::constants::QUIT_COMMAND;
    use crate::models::DailySeries;
    use crate::report::{lookup_date, parse_query_date, render_lookup};
    use anyhow::{Context, Result};
    use chrono::NaiveDate;
    use colored::*;
    use std::io::{BufRead, Write};

    /// One line of user input, interpreted
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum QueryCommand {
        Quit,
        Lookup(NaiveDate),
        Invalid(String),
    }

    /// Interpret a line: `q` (any case) quits, otherwise a `YYYY-MM-DD` date
    pub fn parse_command(line: &str) -> QueryCommand {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case(QUIT_COMMAND) {
            return QueryCommand::Quit;
        }
        match parse_query_date(trimmed) {
            Ok(date) => QueryCommand::Lookup(date),
            Err(_) => QueryCommand::Invalid(trimmed.to_string()),
        }
    }

    /// Prompt for dates until the user quits or input ends
    ///
    /// Returns the number of lookups answered.
    pub fn run_query_loop<R: BufRead, W: Write>(
        series: &DailySeries,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize> {
        writeln!(output, "\n{}", "DATE LOOKUP".bright_green().bold())?;
        let mut answered = 0;

        loop {
            write!(
                output,
                "\n{}",
                "Enter a date (YYYY-MM-DD) or 'q' to quit: ".bright_white()
            )?;
            output.flush().context("Failed to flush output")?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read user input")?;
            if read == 0 {
                writeln!(output)?;
                break;
            }

            match parse_command(&line) {
                QueryCommand::Quit => break,
                QueryCommand::Lookup(date) => {
                    writeln!(output)?;
                    render_lookup(&lookup_date(series, date), output)?;
                    answered += 1;
                }
                QueryCommand::Invalid(_) => {
                    writeln!(output, "{}", "Invalid date format. Try again.".bright_red())?;
                }
            }
        }

        Ok(answered)
    }
}
