use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use impact_core::{CategoryFilter, MonthFilter};
use rust_decimal::Decimal;

use crate::config::SessionOverrides;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimate the carbon footprint of your shopping.
///
/// Purchases are read from a CSV file, priced against a table of per-category
/// multipliers and summarized. Nothing is stored between runs.
#[derive(Debug, Parser)]
#[command(name = "shopimpact", version, about)]
pub struct Cli {
    /// TOML file with multipliers and session settings.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a category multiplier, e.g. `--set "Electronics=0.40"`.
    /// Repeatable. Unknown categories are added.
    #[arg(
        long = "set",
        global = true,
        value_name = "CATEGORY=MULTIPLIER",
        value_parser = parse_multiplier_override
    )]
    pub overrides: Vec<(String, Decimal)>,

    /// Reject purchases without a brand (`true` / `false`).
    #[arg(long, global = true, value_name = "BOOL")]
    pub require_brand: Option<bool>,

    /// Log filter, e.g. `warn` or `impact_core=debug`. `RUST_LOG` wins.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known categories and their multipliers.
    Categories,

    /// Add every purchase in a CSV file and show per-purchase feedback.
    Add(InputArgs),

    /// Totals, the monthly table and the latest month's badge.
    Dashboard {
        #[command(flatten)]
        input: InputArgs,
        /// Also save the monthly spend and impact charts as an SVG image.
        #[arg(long, value_name = "FILE")]
        chart: Option<PathBuf>,
    },

    /// List purchases, optionally filtered by month and category.
    History {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write purchases as CSV, optionally filtered.
    Export {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file. Defaults to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the quick report, optionally also saving it as an SVG image.
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// CSV file with one purchase per row.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// `YYYY-MM` or `All`.
    #[arg(long, default_value = "All")]
    pub month: MonthFilter,

    /// Exact category name or `All`.
    #[arg(long, default_value = "All")]
    pub category: CategoryFilter,
}

impl Cli {
    pub fn session_overrides(&self) -> SessionOverrides {
        SessionOverrides {
            require_brand: self.require_brand,
            multipliers: self.overrides.clone(),
        }
    }
}

/// Parses `CATEGORY=MULTIPLIER`. The split is on the last `=`, so category
/// names may contain one.
pub fn parse_multiplier_override(s: &str) -> Result<(String, Decimal), String> {
    let (category, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CATEGORY=MULTIPLIER, got '{s}'"))?;

    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing category in '{s}'"));
    }

    let value: Decimal = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid multiplier '{}': {e}", value.trim()))?;
    if value < Decimal::ZERO {
        return Err(format!("multiplier for '{category}' must not be negative"));
    }

    Ok((category.to_string(), value))
}
