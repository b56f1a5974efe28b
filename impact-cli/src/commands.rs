//! Subcommand implementations.
//!
//! Every command writes its output to a caller-supplied writer so it can be
//! driven from tests; `main` passes stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use impact_core::calculations::common::format_amount;
use impact_core::calculations::{
    PurchaseFeedback, classify, dashboard_totals, latest_month, summarize_by_month,
};
use impact_core::{
    CategoryFilter, CategoryMultiplierTable, MonthFilter, PurchaseInput, PurchaseRecord, Quote,
    Session, filter_records, pick_quote, suggestions,
};
use impact_data::{EntryLoadError, QuickReport, load_entries_from_file, monthly_chart, write_csv};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::table::{Align, Table};

const EMPTY_LEDGER: &str = "No purchases yet. Add purchases to start logging items.";

/// Result of replaying one CSV row into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Added {
        row: usize,
        record: PurchaseRecord,
        feedback: PurchaseFeedback,
    },
    Rejected {
        row: usize,
        reason: String,
    },
}

impl EntryOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Adds each parsed entry to `session` in file order. Bad rows and
/// rejected submissions are logged and reported, never fatal.
pub fn replay_entries(
    session: &mut Session,
    entries: Vec<Result<PurchaseInput, EntryLoadError>>,
) -> Vec<EntryOutcome> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let row = idx + 1;
            let input = match entry {
                Ok(input) => input,
                Err(err) => {
                    warn!(row, error = %err, "skipping unreadable entry");
                    return EntryOutcome::Rejected {
                        row,
                        reason: err.to_string(),
                    };
                }
            };
            match session.add_purchase(input) {
                Ok(record) => {
                    let record = record.clone();
                    let multiplier = session.multipliers().multiplier_for(&record.category);
                    let feedback = PurchaseFeedback::for_purchase(&record, multiplier);
                    EntryOutcome::Added {
                        row,
                        record,
                        feedback,
                    }
                }
                Err(err) => {
                    warn!(row, error = %err, "purchase rejected");
                    EntryOutcome::Rejected {
                        row,
                        reason: err.to_string(),
                    }
                }
            }
        })
        .collect()
}

/// Reads `path` and replays it into `session`.
pub fn load_purchases(
    session: &mut Session,
    path: &Path,
) -> Result<Vec<EntryOutcome>> {
    let entries = load_entries_from_file(path)
        .with_context(|| format!("Failed to read purchases: {}", path.display()))?;

    let outcomes = replay_entries(session, entries);
    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    if rejected > 0 {
        warn!(rejected, accepted = outcomes.len() - rejected, "some entries were rejected");
    } else {
        info!(accepted = outcomes.len(), file = %path.display(), "purchases loaded");
    }
    Ok(outcomes)
}

/// Runs the selected subcommand against a session built from config.
pub fn run(
    cli: &Cli,
    mut session: Session,
    out: &mut dyn Write,
) -> Result<()> {
    match &cli.command {
        Command::Categories => write_categories(out, session.multipliers()),
        Command::Add(input) => {
            let outcomes = load_purchases(&mut session, &input.input)?;
            write_add_results(out, &outcomes, Some(pick_quote()))
        }
        Command::Dashboard { input, chart } => {
            load_purchases(&mut session, &input.input)?;
            write_dashboard(out, session.ledger().all())?;
            if let Some(path) = chart {
                let months = summarize_by_month(session.ledger().all());
                svg::save(path, &monthly_chart(&months))
                    .with_context(|| format!("Failed to save chart: {}", path.display()))?;
                info!(months = months.len(), file = %path.display(), "chart saved");
                writeln!(out, "\nChart saved to {}", path.display())?;
            }
            Ok(())
        }
        Command::History { input, filter } => {
            load_purchases(&mut session, &input.input)?;
            write_history(out, &session, &filter.month, &filter.category)
        }
        Command::Export {
            input,
            filter,
            output,
        } => {
            load_purchases(&mut session, &input.input)?;
            let records = filter_records(session.ledger().all(), &filter.month, &filter.category);
            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?;
                    let rows = write_csv(BufWriter::new(file), records)
                        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
                    writeln!(out, "Exported {rows} purchases to {}", path.display())?;
                }
                None => {
                    write_csv(&mut *out, records).context("Failed to write CSV")?;
                }
            }
            Ok(())
        }
        Command::Report {
            input,
            filter,
            svg: image,
        } => {
            load_purchases(&mut session, &input.input)?;
            let records = filter_records(session.ledger().all(), &filter.month, &filter.category);
            let report = QuickReport::from_records(records.iter().copied());
            write!(out, "{report}")?;
            if let Some(path) = image {
                svg::save(path, &report.to_svg())
                    .with_context(|| format!("Failed to save report image: {}", path.display()))?;
                writeln!(out, "\nReport image saved to {}", path.display())?;
            }
            Ok(())
        }
    }
}

/// Two places like prices, unless the multiplier was configured with more.
fn format_multiplier(multiplier: Decimal) -> String {
    if multiplier.normalize().scale() > 2 {
        multiplier.normalize().to_string()
    } else {
        format!("{multiplier:.2}")
    }
}

pub fn write_categories(
    out: &mut dyn Write,
    table: &CategoryMultiplierTable,
) -> Result<()> {
    let mut view = Table::new(&[
        ("category", Align::Left),
        ("multiplier", Align::Right),
        ("suggestions", Align::Left),
    ]);
    for (category, multiplier) in table.iter() {
        view.push_row(vec![
            category.to_string(),
            format_multiplier(multiplier),
            suggestions(category).join("; "),
        ]);
    }
    write!(out, "{view}")?;
    Ok(())
}

/// Per-row feedback, preceded by `quote` when one is given.
pub fn write_add_results(
    out: &mut dyn Write,
    outcomes: &[EntryOutcome],
    quote: Option<&Quote>,
) -> Result<()> {
    if let Some(quote) = quote {
        writeln!(out, "{quote}\n")?;
    }
    let mut added = 0;
    for outcome in outcomes {
        match outcome {
            EntryOutcome::Added {
                row,
                record,
                feedback,
            } => {
                added += 1;
                writeln!(
                    out,
                    "row {row}: {} {} ({}) {} -> {} kg CO2e. {}",
                    record.date,
                    record.product_name,
                    record.category,
                    format_amount(record.price),
                    format_amount(record.impact),
                    feedback.message()
                )?;
                for tip in suggestions(&record.category) {
                    writeln!(out, "    tip: {tip}")?;
                }
            }
            EntryOutcome::Rejected { row, reason } => {
                writeln!(out, "row {row}: rejected: {reason}")?;
            }
        }
    }
    writeln!(out, "{added} added, {} rejected", outcomes.len() - added)?;
    Ok(())
}

pub fn write_dashboard(
    out: &mut dyn Write,
    records: &[PurchaseRecord],
) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_LEDGER}")?;
        return Ok(());
    }

    let totals = dashboard_totals(records);
    writeln!(out, "Total spend:       {}", format_amount(totals.total_spend))?;
    writeln!(out, "Total purchases:   {}", totals.count)?;
    writeln!(out, "Total impact:      {} kg CO2e", format_amount(totals.total_impact))?;
    writeln!(out, "Avg impact/item:   {} kg CO2e", format_amount(totals.average_impact))?;

    let mut monthly = Table::new(&[
        ("month", Align::Left),
        ("count", Align::Right),
        ("total_spend", Align::Right),
        ("total_impact", Align::Right),
    ]);
    for summary in summarize_by_month(records) {
        monthly.push_row(vec![
            summary.month.to_string(),
            summary.count.to_string(),
            format_amount(summary.total_spend),
            format_amount(summary.total_impact),
        ]);
    }
    writeln!(out, "\nMonthly summary")?;
    write!(out, "{monthly}")?;

    if let Some(latest) = latest_month(records) {
        let badge = classify(latest.total_impact);
        writeln!(
            out,
            "\nBadge for {}: {} ({} kg CO2e)",
            latest.month,
            badge.label(),
            format_amount(latest.total_impact)
        )?;
        writeln!(out, "{}", badge.message())?;
    }
    Ok(())
}

pub fn write_history(
    out: &mut dyn Write,
    session: &Session,
    month: &MonthFilter,
    category: &CategoryFilter,
) -> Result<()> {
    let months: Vec<String> = std::iter::once(MonthFilter::All.to_string())
        .chain(session.ledger().months().iter().map(ToString::to_string))
        .collect();
    writeln!(out, "Available months: {}", months.join(", "))?;
    writeln!(out, "Showing month: {month}, category: {category}\n")?;

    let records = filter_records(session.ledger().all(), month, category);
    if records.is_empty() {
        writeln!(out, "No matching purchases.")?;
        return Ok(());
    }

    let mut view = Table::new(&[
        ("date", Align::Left),
        ("product_type", Align::Left),
        ("product_name", Align::Left),
        ("brand", Align::Left),
        ("price", Align::Right),
        ("impact", Align::Right),
        ("eco_brand", Align::Left),
    ]);
    for record in &records {
        view.push_row(vec![
            record.date.to_string(),
            record.category.clone(),
            record.product_name.clone(),
            record.brand.clone().unwrap_or_default(),
            format_amount(record.price),
            format_amount(record.impact),
            if record.eco_brand { "yes" } else { "no" }.to_string(),
        ]);
    }
    write!(out, "{view}")?;
    writeln!(out, "{} purchases", records.len())?;
    Ok(())
}
