use anyhow::Result;
use clap::Parser;
use schoolday::cli::{Cli, Commands, OutputFormat};
use schoolday::commands::{read_input, run_recurrence, run_timetable, watch_recurrence};
use schoolday::output::{format_output, json, pretty};
use schoolday::Config;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolday=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()
        .with_overrides(cli.debounce_ms, cli.format)
        .validate()?;

    match cli.command {
        Commands::Timetable(cmd) => {
            let raw = read_input(cmd.input.as_deref()).await?;
            let (day, timetable) = run_timetable(&raw)?;
            match config.format {
                OutputFormat::Json => println!("{}", format_output(&timetable, config.format)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_day_timetable(day.date, &timetable))
                }
            }
        }
        Commands::Recurrence(cmd) => {
            let raw = read_input(cmd.input.as_deref()).await?;
            let filter = run_recurrence(&raw)?;
            match config.format {
                OutputFormat::Json => println!("{}", format_output(&filter, config.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_filter(filter.as_ref())),
            }
        }
        Commands::WatchRecurrence => {
            if !cli.quiet {
                eprintln!(
                    "Reading drafts from stdin (debounce {}ms)...",
                    config.debounce_ms
                );
            }
            let stdin = BufReader::new(tokio::io::stdin());
            let format = config.format;
            watch_recurrence(stdin, &config, |filter| match format {
                // One settled filter per line
                OutputFormat::Json => println!("{}", json::format_json(&filter)),
                OutputFormat::Pretty => println!("{}", pretty::format_filter(filter.as_ref())),
            })
            .await?;
        }
    }

    tracing::debug!("done");
    Ok(())
}
