//! Monthly dashboard charts: spend as bars, impact as a line, one panel each,
//! stacked in a single SVG image.

use impact_core::MonthlySummary;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Rectangle, Text};

const WIDTH: f64 = 640.0;
const PANEL_HEIGHT: f64 = 240.0;
const MARGIN: f64 = 24.0;
const TITLE_SPACE: f64 = 32.0;
const LABEL_SPACE: f64 = 28.0;
const BAR_FILL: f64 = 0.7;
const STROKE_WIDTH: f64 = 2.0;

const SPEND_COLOR: &str = "#39ff14";
const IMPACT_COLOR: &str = "#0ff0fc";

/// Plot area of one panel, in image coordinates.
#[derive(Debug, Clone, Copy)]
struct Panel {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Panel {
    fn nth(index: usize) -> Self {
        let top = PANEL_HEIGHT * index as f64;
        Self {
            left: MARGIN,
            top: top + TITLE_SPACE,
            width: WIDTH - 2.0 * MARGIN,
            height: PANEL_HEIGHT - TITLE_SPACE - LABEL_SPACE,
        }
    }

    fn baseline(&self) -> f64 {
        self.top + self.height
    }

    fn slot_width(
        &self,
        slots: usize,
    ) -> f64 {
        self.width / slots.max(1) as f64
    }

    fn slot_center(
        &self,
        slots: usize,
        index: usize,
    ) -> f64 {
        self.left + self.slot_width(slots) * (index as f64 + 0.5)
    }

    /// Height of `value` when `max` fills the panel.
    fn scale(
        &self,
        value: f64,
        max: f64,
    ) -> f64 {
        if max <= 0.0 { 0.0 } else { value / max * self.height }
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn title(
    panel: Panel,
    text: &str,
) -> Text {
    Text::new()
        .set("x", panel.left)
        .set("y", panel.top - TITLE_SPACE / 3.0)
        .set("font-family", "sans-serif")
        .set("font-size", 16.0)
        .set("fill", "black")
        .add(svg::node::Text::new(text))
}

fn axis(panel: Panel) -> Line {
    Line::new()
        .set("x1", panel.left)
        .set("x2", panel.left + panel.width)
        .set("y1", panel.baseline())
        .set("y2", panel.baseline())
        .set("stroke", "black")
        .set("stroke-width", 1.0)
}

fn month_label(
    panel: Panel,
    x: f64,
    summary: &MonthlySummary,
) -> Text {
    Text::new()
        .set("x", x)
        .set("y", panel.baseline() + LABEL_SPACE * 0.6)
        .set("text-anchor", "middle")
        .set("font-family", "monospace")
        .set("font-size", 11.0)
        .set("fill", "black")
        .add(svg::node::Text::new(summary.month.to_string()))
}

/// Builds the chart document. An empty slice yields a single
/// "No purchases yet" panel.
pub fn monthly_chart(months: &[MonthlySummary]) -> Document {
    let height = if months.is_empty() {
        PANEL_HEIGHT / 2.0
    } else {
        PANEL_HEIGHT * 2.0
    };

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, height))
        .set("width", WIDTH)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", WIDTH)
                .set("height", height)
                .set("fill", "white"),
        );

    if months.is_empty() {
        return document.add(title(Panel::nth(0), "No purchases yet"));
    }

    let slots = months.len();

    // Spend: one bar per month.
    let spend = Panel::nth(0);
    let max_spend = months
        .iter()
        .map(|m| to_f64(m.total_spend))
        .fold(0.0, f64::max);
    document = document
        .add(title(spend, "Monthly Spend"))
        .add(axis(spend));
    for (idx, summary) in months.iter().enumerate() {
        let bar_height = spend.scale(to_f64(summary.total_spend), max_spend);
        let bar_width = spend.slot_width(slots) * BAR_FILL;
        let center = spend.slot_center(slots, idx);
        document = document
            .add(
                Rectangle::new()
                    .set("x", center - bar_width / 2.0)
                    .set("y", spend.baseline() - bar_height)
                    .set("width", bar_width)
                    .set("height", bar_height)
                    .set("fill", SPEND_COLOR),
            )
            .add(month_label(spend, center, summary));
    }

    // Impact: a polyline with a marker per month.
    let impact = Panel::nth(1);
    let max_impact = months
        .iter()
        .map(|m| to_f64(m.total_impact))
        .fold(0.0, f64::max);
    let points: Vec<(f64, f64)> = months
        .iter()
        .enumerate()
        .map(|(idx, summary)| {
            (
                impact.slot_center(slots, idx),
                impact.baseline() - impact.scale(to_f64(summary.total_impact), max_impact),
            )
        })
        .collect();

    let data = points
        .iter()
        .skip(1)
        .fold(Data::new().move_to(points[0]), |data, point| {
            data.line_to(*point)
        });
    document = document
        .add(title(impact, "Monthly CO2 Impact"))
        .add(axis(impact))
        .add(
            Path::new()
                .set("fill", "none")
                .set("stroke", IMPACT_COLOR)
                .set("stroke-width", STROKE_WIDTH)
                .set("d", data),
        );
    for ((x, y), summary) in points.iter().zip(months) {
        document = document
            .add(
                Circle::new()
                    .set("cx", *x)
                    .set("cy", *y)
                    .set("r", 3.0)
                    .set("fill", IMPACT_COLOR),
            )
            .add(month_label(impact, *x, summary));
    }

    document
}

/// The monthly charts as SVG markup.
pub fn to_monthly_chart_svg(months: &[MonthlySummary]) -> String {
    monthly_chart(months).to_string()
}
