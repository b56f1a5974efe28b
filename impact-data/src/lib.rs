pub mod chart;
pub mod entries;
pub mod export;
pub mod report;

pub use chart::{monthly_chart, to_monthly_chart_svg};
pub use entries::{EntryLoadError, load_entries, load_entries_from_file, parse_entries};
pub use export::{CSV_HEADER, ExportError, parse_csv, to_csv, write_csv};
pub use report::{QuickReport, to_summary_svg, to_summary_text};
