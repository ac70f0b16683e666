//! Statement ingestion
//!
//! Turns the two supported statement sources into candidates:
//! the extraction service's JSON report (produced from a PDF statement)
//! and plain bank CSV exports. All date handling is normalized here;
//! downstream code only ever sees `NaiveDateTime`.

use serde::Deserialize;

use crate::error::{UpiqError, UpiqResult};
use crate::models::date::parse_flexible_str;
use crate::models::{Amount, StatementCandidate, TransactionKind};

/// Wire shape of an extraction service report
#[derive(Debug, Deserialize)]
pub struct ExtractionReport {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ExtractionData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a successful extraction report
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionData {
    #[serde(default)]
    pub transactions: Vec<StatementCandidate>,
    #[serde(default)]
    pub total_transactions: Option<usize>,
}

/// Parse an extraction service JSON report into candidates
///
/// A report with `success: false` surfaces the service message as a
/// transport error.
pub fn parse_extraction_json(content: &str) -> UpiqResult<Vec<StatementCandidate>> {
    let report: ExtractionReport = serde_json::from_str(content)
        .map_err(|e| UpiqError::Transport(format!("Failed to parse extraction report: {}", e)))?;

    if !report.success {
        let message = report
            .message
            .unwrap_or_else(|| "Extraction service reported failure".to_string());
        return Err(UpiqError::Transport(message));
    }

    let data = report.data.ok_or_else(|| {
        UpiqError::Transport("Extraction report has no data section".to_string())
    })?;

    Ok(data.transactions)
}

/// Column positions for a bank CSV statement
#[derive(Debug, Clone)]
struct ColumnLayout {
    date: usize,
    description: usize,
    amount: usize,
    kind: Option<usize>,
    category: Option<usize>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: 0,
            description: 1,
            amount: 2,
            kind: None,
            category: None,
        }
    }
}

impl ColumnLayout {
    /// Detect column positions from a header row
    fn detect(headers: &csv::StringRecord) -> Self {
        let mut layout = Self::default();

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            if h.contains("date") {
                layout.date = idx;
            } else if h.contains("desc") || h.contains("narration") || h.contains("remark") {
                layout.description = idx;
            } else if h.contains("amount") {
                layout.amount = idx;
            } else if h.contains("type") || h.contains("dr/cr") {
                layout.kind = Some(idx);
            } else if h.contains("categ") {
                layout.category = Some(idx);
            }
        }

        layout
    }
}

/// Whether a record looks like data rather than headers (first column
/// parses as a date)
fn looks_like_data_row(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .map(|first| parse_flexible_str(first).is_some())
        .unwrap_or(false)
}

/// Parse a bank CSV statement into candidates
///
/// Expected columns: `date, description, amount[, type[, category]]`,
/// detected from the header row when one is present. Without a type
/// column the kind is inferred from the amount sign (negative means
/// expense). Rows that cannot be parsed fail the whole statement with
/// the offending row number.
pub fn parse_csv_statement(content: &str) -> UpiqResult<Vec<StatementCandidate>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| UpiqError::Validation(format!("Failed to read CSV header: {}", e)))?
        .clone();

    // Headerless files start straight with a date; fall back to the
    // positional layout and re-read from the top
    let (layout, mut reader) = if looks_like_data_row(&headers) {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());
        (ColumnLayout::default(), reader)
    } else {
        (ColumnLayout::detect(&headers), reader)
    };

    let mut candidates = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| UpiqError::Validation(format!("Row {}: {}", idx + 1, e)))?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let candidate = parse_record(&record, &layout)
            .map_err(|e| UpiqError::Validation(format!("Row {}: {}", idx + 1, e)))?;
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Parse one CSV record into a candidate
fn parse_record(
    record: &csv::StringRecord,
    layout: &ColumnLayout,
) -> Result<StatementCandidate, String> {
    let description = record
        .get(layout.description)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let amount_str = record
        .get(layout.amount)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Missing amount".to_string())?;

    let signed = Amount::parse(amount_str)
        .map_err(|e| format!("Could not parse amount '{}': {}", amount_str, e))?;

    let kind_value = layout
        .kind
        .and_then(|col| record.get(col))
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let kind = match kind_value {
        Some(value) => value
            .parse::<TransactionKind>()
            .map_err(|e| e.to_string())?,
        None => {
            if signed.is_negative() {
                TransactionKind::Expense
            } else {
                TransactionKind::Income
            }
        }
    };

    let mut candidate = StatementCandidate::new(description, signed.abs(), kind);

    candidate.date = record.get(layout.date).and_then(parse_flexible_str);

    candidate.category = layout
        .category
        .and_then(|col| record.get(col))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(candidate)
}
