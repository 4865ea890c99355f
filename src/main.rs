use analytics::{ReportRow, SalesAnalyzer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use core_types::SalesData;
use std::path::PathBuf;
use strategies::Strategies;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Salesboard application.
fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays machine-readable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller revenue, profit and bonus report from sales records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank sellers by profit and compute their bonuses.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// JSON file with `products`, `sellers` and `purchase_records`.
    #[arg(long)]
    data: PathBuf,

    /// Configuration file. Defaults to an optional `config.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = configuration::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;

    let raw = std::fs::read_to_string(&args.data)
        .with_context(|| format!("Failed to read dataset {}", args.data.display()))?;
    let data = SalesData::from_json_str(&raw)
        .with_context(|| format!("Failed to parse dataset {}", args.data.display()))?;

    let strategies = Strategies::from_settings(&config.strategies)
        .context("Failed to build strategies from configuration")?;
    tracing::debug!("Using strategies: {:?}", strategies);

    let report = SalesAnalyzer::new(config.analysis.clone())
        .analyze(&data, &strategies)
        .context("Sales analysis failed")?;

    let output = match args.format {
        OutputFormat::Table => render_table(&report).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{output}");

    Ok(())
}

/// Builds a terminal table with one row per seller, in rank order.
fn render_table(report: &[ReportRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top products",
    ]);

    for (rank, row) in report.iter().enumerate() {
        let top = row
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&row.seller_id),
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.revenue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.profit)).set_alignment(CellAlignment::Right),
            Cell::new(row.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.bonus)).set_alignment(CellAlignment::Right),
            Cell::new(top),
        ]);
    }

    table
}
