//! Intermobil CLI
//!
//! Command-line companion to the dashboard:
//! - Validate a statistics CSV exactly as the dashboard import does
//! - Print KPIs and the sorted table
//! - Generate a default config file

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intermobil::config::{generate_default_config, Config, LoggingConfig};
use intermobil::stats::{
    format_count, format_duration, sample_rows, write_csv_with_delimiter, DateRange, StatsImporter,
    StatsRow, StatsSnapshot,
};

#[derive(Parser)]
#[command(name = "intermobil")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Intermobil dashboard tools")]
#[command(long_about = "Validate and summarize virtual tour statistics exported as CSV.\nThe checks match the import of the Intermobil dashboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a statistics CSV and print its summary
    Import {
        /// Path to CSV file
        path: PathBuf,
        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Print the summary of the built-in sample data
    Sample,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Import {
            path,
            delimiter,
            from,
            to,
        } => {
            let delimiter = u8::try_from(delimiter)
                .ok()
                .filter(u8::is_ascii)
                .with_context(|| format!("Delimiter must be an ASCII character: {:?}", delimiter))?;

            let report = match StatsImporter::new()
                .with_delimiter(delimiter)
                .import(&path)
            {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("{}", e.alert_message());
                    std::process::exit(1);
                }
            };

            if report.rows_discarded > 0 {
                eprintln!("Discarded lines: {}", report.rows_discarded);
                for line in report.discarded.iter().take(10) {
                    eprintln!("  line {}: {}", line.line, line.reason);
                }
            }

            let mut options = config.dashboard.summary_options();
            options.range = DateRange { from, to };
            let snapshot = StatsSnapshot::build(&report.rows, &options);
            print_snapshot(&snapshot, cli.format, delimiter)?;
        }

        Commands::Sample => {
            let options = config.dashboard.summary_options();
            let snapshot = StatsSnapshot::build(&sample_rows(), &options);
            print_snapshot(&snapshot, cli.format, b',')?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("intermobil={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Print KPIs and rows; CSV output uses the input delimiter
fn print_snapshot(snapshot: &StatsSnapshot, format: OutputFormat, delimiter: u8) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "kpis": snapshot.kpis,
                "average_time": format_duration(snapshot.kpis.average_seconds),
                "chart": snapshot.chart,
                "rows": snapshot.table,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => {
            write_csv_with_delimiter(&snapshot.table, delimiter, std::io::stdout())?;
        }
        OutputFormat::Table => {
            let kpis = &snapshot.kpis;
            println!("Totale Tour:            {}", kpis.total_tours);
            println!("Visitatori Unici (UV):  {}", format_count(kpis.unique_visitors));
            println!("Tempo Medio:            {}", format_duration(kpis.average_seconds));
            println!("Richieste Totali:       {}", kpis.total_requests);
            println!();
            print_table(&snapshot.table);
        }
    }
    Ok(())
}

fn print_table(rows: &[StatsRow]) {
    if rows.is_empty() {
        println!("Nessun dato da visualizzare");
        return;
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Nome Tour".len());

    println!(
        "{:<12} {:<name_width$} {:>16} {:>12}",
        "Data", "Nome Tour", "Visitatori Unici", "Tempo Medio"
    );
    println!("{}", "-".repeat(12 + name_width + 16 + 12 + 3));
    for row in rows {
        println!(
            "{:<12} {:<name_width$} {:>16} {:>12}",
            row.date, row.name, row.uv, row.avg_time
        );
    }
}
