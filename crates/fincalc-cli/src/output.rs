//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use fincalc_core::investment::{InvestmentInputs, InvestmentProjection};
use fincalc_core::profit::{ProfitInputs, ProfitReport};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// A calculation result that can be rendered in every output format.
pub trait Report {
    /// Inputs the result was computed from.
    type Inputs: Serialize;

    /// Title printed above the table.
    fn title(&self) -> &'static str;

    /// Plain-text lines, one per result.
    fn text_lines(&self) -> Vec<String>;

    /// Metric/value rows for table and CSV output, in display order.
    fn rows(&self) -> Vec<KeyValue>;
}

impl Report for InvestmentProjection {
    type Inputs = InvestmentInputs;

    fn title(&self) -> &'static str {
        "Investment Projection"
    }

    fn text_lines(&self) -> Vec<String> {
        vec![
            format!("The future value is: ${}", self.future_value),
            format!(
                "The future real value considering inflation is: ${}",
                self.future_real_value
            ),
        ]
    }

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("future_value", "Future Value", self.future_value.to_string()),
            KeyValue::new(
                "future_real_value",
                "Future Real Value",
                self.future_real_value.to_string(),
            ),
        ]
    }
}

impl Report for ProfitReport {
    type Inputs = ProfitInputs;

    fn title(&self) -> &'static str {
        "Profit Report"
    }

    fn text_lines(&self) -> Vec<String> {
        vec![
            format!("EBT: ${:.2}", self.earnings_before_tax),
            format!("Profit: ${:.2}", self.profit),
            format!("Ratio (EBT/profit): {:.2}", self.ratio),
        ]
    }

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::from_amount("earnings_before_tax", "EBT", self.earnings_before_tax, 2),
            KeyValue::from_amount("profit", "Profit", self.profit, 2),
            KeyValue::from_amount("ratio", "Ratio (EBT/profit)", self.ratio, 2),
        ]
    }
}

/// JSON document: the inputs next to the results.
#[derive(Serialize)]
struct Document<'a, I: Serialize, R: Serialize> {
    inputs: &'a I,
    results: &'a R,
}

/// Writes `report` to `out` in the requested format.
///
/// CSV is one header of metric names and one record of values. Non-finite
/// values come out as `inf`/`NaN` in text, table and CSV, and as `null` in
/// JSON.
pub fn write_report<W, R>(
    out: &mut W,
    format: OutputFormat,
    inputs: &R::Inputs,
    report: &R,
) -> CliResult<()>
where
    W: Write,
    R: Report + Serialize,
{
    match format {
        OutputFormat::Text => {
            for line in report.text_lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{}", report.title().bold().underline())?;
            writeln!(out, "{}", render_table(&report.rows()))?;
        }
        OutputFormat::Json => {
            let doc = Document {
                inputs,
                results: report,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Csv => {
            let rows = report.rows();
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(rows.iter().map(|row| row.name))?;
            wtr.write_record(rows.iter().map(|row| row.value.as_str()))?;
            wtr.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Renders rows as a rounded table.
fn render_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// A key-value pair for display.
#[derive(Debug, Clone, Tabled)]
pub struct KeyValue {
    /// Machine-readable metric name, used as the CSV header.
    #[tabled(skip)]
    pub name: &'static str,
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(name: &'static str, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair with a fixed number of decimals.
    pub fn from_amount(
        name: &'static str,
        key: impl Into<String>,
        value: f64,
        precision: usize,
    ) -> Self {
        Self {
            name,
            key: key.into(),
            value: format!("{value:.precision$}"),
        }
    }
}
