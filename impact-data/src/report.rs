//! Quick report: a short text summary of a set of purchases, and the same
//! summary rendered as an SVG image.

use std::fmt;

use impact_core::calculations::common::format_amount;
use impact_core::calculations::{dashboard_totals, top_categories};
use impact_core::{CategorySummary, DashboardTotals, PurchaseRecord};
use svg::Document;
use svg::node::element::{Rectangle, Text};

/// Number of categories listed in a report.
pub const TOP_CATEGORY_COUNT: usize = 3;

const TITLE: &str = "ShopImpact Quick Report";

const LINE_HEIGHT: f64 = 22.0;
const MARGIN: f64 = 24.0;
const IMAGE_WIDTH: f64 = 640.0;
const FONT_SIZE: f64 = 14.0;

/// Figures shown in a quick report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReport {
    pub totals: DashboardTotals,
    /// Highest-impact categories, highest first, at most three.
    pub top_categories: Vec<(String, CategorySummary)>,
}

impl QuickReport {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PurchaseRecord> + Clone,
    {
        Self {
            totals: dashboard_totals(records.clone()),
            top_categories: top_categories(records, TOP_CATEGORY_COUNT),
        }
    }

    /// The report as text lines, title first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            TITLE.to_string(),
            String::new(),
            format!("Total items: {}", self.totals.count),
            format!("Total spend: {}", format_amount(self.totals.total_spend)),
            format!("Total impact: {}", format_amount(self.totals.total_impact)),
            String::new(),
            "Top categories:".to_string(),
        ];
        lines.extend(
            self.top_categories
                .iter()
                .map(|(name, summary)| {
                    format!(" - {}: {}", name, format_amount(summary.total_impact))
                }),
        );
        lines
    }

    /// Renders the report lines as a monospace SVG document.
    pub fn to_svg(&self) -> Document {
        let lines = self.lines();
        let height = MARGIN * 2.0 + LINE_HEIGHT * lines.len() as f64;

        let background = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", IMAGE_WIDTH)
            .set("height", height)
            .set("fill", "white");

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, IMAGE_WIDTH, height))
            .set("width", IMAGE_WIDTH)
            .set("height", height)
            .add(background);

        for (idx, line) in lines.iter().enumerate().filter(|(_, l)| !l.is_empty()) {
            let text = Text::new()
                .set("x", MARGIN)
                .set("y", MARGIN + LINE_HEIGHT * (idx + 1) as f64)
                .set("font-family", "monospace")
                .set("font-size", FONT_SIZE)
                .set("fill", "black")
                .add(svg::node::Text::new(escape_text(line)));
            document = document.add(text);
        }

        document
    }
}

/// Escapes XML markup characters. `svg::node::Text` writes its content as-is.
pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl fmt::Display for QuickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Item count, total spend, total impact and the top three categories by
/// impact, as a human-readable block.
pub fn to_summary_text<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a PurchaseRecord> + Clone,
{
    QuickReport::from_records(records).to_string()
}

/// The summary text rendered as an SVG image.
pub fn to_summary_svg<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a PurchaseRecord> + Clone,
{
    QuickReport::from_records(records).to_svg().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use impact_core::{PurchaseInput, Session};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    fn add(
        session: &mut Session,
        category: &str,
        price: Decimal,
    ) {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        session
            .add_purchase(PurchaseInput::new(date, category, price).with_brand("Acme"))
            .unwrap();
    }

    fn sample_session() -> Session {
        let mut session = Session::with_defaults();
        add(&mut session, "Electronics", Decimal::new(10000, 2)); // 35.00
        add(&mut session, "Groceries (Fresh/Local)", Decimal::new(2000, 2)); // 0.40
        add(&mut session, "Furniture", Decimal::new(4000, 2)); // 10.00
        add(&mut session, "Personal Care", Decimal::new(1000, 2)); // 0.60
        session
    }

    #[test]
    fn summary_text_lists_totals_and_top_three() {
        let session = sample_session();

        let text = to_summary_text(session.ledger());

        assert_eq!(
            text,
            "ShopImpact Quick Report\n\
             \n\
             Total items: 4\n\
             Total spend: 170.00\n\
             Total impact: 46.00\n\
             \n\
             Top categories:\n \
             - Electronics: 35.00\n \
             - Furniture: 10.00\n \
             - Personal Care: 0.60\n"
        );
    }

    #[test]
    fn summary_text_for_empty_input_is_zeroed() {
        let text = to_summary_text(&Vec::<PurchaseRecord>::new());

        assert!(text.contains("Total items: 0\n"));
        assert!(text.contains("Total spend: 0.00\n"));
        assert!(text.contains("Total impact: 0.00\n"));
        assert!(text.ends_with("Top categories:\n"));
    }

    #[test]
    fn report_keeps_at_most_three_categories() {
        let session = sample_session();

        let report = QuickReport::from_records(session.ledger());

        assert_eq!(report.top_categories.len(), TOP_CATEGORY_COUNT);
        assert_eq!(report.totals.count, 4);
    }

    #[test]
    fn summary_text_rounds_amounts_half_up() {
        let mut session = Session::with_defaults();
        add(&mut session, "Other", Decimal::new(19999, 3)); // 19.999 -> impact 2.00

        let text = to_summary_text(session.ledger());

        assert!(text.contains("Total spend: 20.00\n"), "got {text}");
        assert!(text.contains(" - Other: 2.00\n"));
    }

    #[test]
    fn summary_svg_escapes_markup_in_category_names() {
        let mut session = Session::with_defaults();
        add(&mut session, "Books & Stationery", Decimal::new(1000, 2));
        add(&mut session, "<Gadgets>", Decimal::new(1000, 2));

        let svg = to_summary_svg(session.ledger());

        assert!(svg.contains("Books &amp; Stationery: 0.20"), "got {svg}");
        assert!(svg.contains("&lt;Gadgets&gt;: 1.00"));
        assert!(!svg.contains("Books & Stationery"));
        assert!(!svg.contains("<Gadgets>"));
    }

    #[test]
    fn escape_text_leaves_plain_text_alone() {
        assert_eq!(escape_text("Total items: 4"), "Total items: 4");
        assert_eq!(escape_text("a<b>&c"), "a&lt;b&gt;&amp;c");
    }

    #[test]
    fn summary_svg_contains_the_text_lines() {
        let session = sample_session();

        let svg = to_summary_svg(session.ledger());

        assert!(svg.starts_with("<svg"), "got {svg}");
        assert!(svg.contains("ShopImpact Quick Report"));
        assert!(svg.contains("Total items: 4"));
        assert!(svg.contains("Electronics: 35.00"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
