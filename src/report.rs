use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

use crate::config;
use crate::stats::{Summary, TextStats};

/// Columns the data row is written in: filepath, total words, line count, most common word.
pub const EXPECTED_COLUMNS: usize = 4;

/// One data row of the analysis CSV.
///
/// Field order is the column order of the sample header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub filepath: String,
    pub total_words: usize,
    pub sentence_count: usize,
    pub most_common_word: Option<String>,
}

impl From<&TextStats> for AnalysisRow {
    fn from(stats: &TextStats) -> Self {
        AnalysisRow {
            filepath: stats.filepath().to_string(),
            total_words: stats.word_count(),
            sentence_count: stats.sentence_count(),
            most_common_word: stats.most_common().map(|(word, _)| word),
        }
    }
}

/// Reads the header row of the sample CSV.
///
/// The first line is split on every comma with no quote handling; only the
/// outer whitespace of the line is trimmed, fields keep their own spacing.
pub fn read_sample_csv<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open sample CSV: {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let record = match reader.records().next() {
        Some(record) => {
            record.with_context(|| format!("Failed to parse sample CSV: {}", path.display()))?
        }
        None => anyhow::bail!("Sample CSV is empty: {}", path.display()),
    };

    let mut header: Vec<String> = record.iter().map(str::to_string).collect();
    if let Some(first) = header.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(last) = header.last_mut() {
        *last = last.trim_end().to_string();
    }

    if header.len() != EXPECTED_COLUMNS {
        warn!(
            columns = header.len(),
            expected = EXPECTED_COLUMNS,
            "sample header column count differs from the data row"
        );
    }

    Ok(header)
}

/// Writes the configured sample header and the analysis row of `stats` to `csvfile`.
pub fn write_analysis_details<P: AsRef<Path>>(stats: &TextStats, csvfile: P) -> Result<()> {
    write_analysis_details_from(stats, config::sample_csv_path(), csvfile)
}

/// Reads the header from `sample_csv`, then writes it and the analysis row of `stats`.
pub fn write_analysis_details_from<S: AsRef<Path>, P: AsRef<Path>>(
    stats: &TextStats,
    sample_csv: S,
    csvfile: P,
) -> Result<()> {
    let header = read_sample_csv(sample_csv)?;
    write_batch(&header, std::slice::from_ref(stats), csvfile)
}

/// Writes `header` followed by one analysis row per document, in order.
pub fn write_batch<P: AsRef<Path>>(
    header: &[String],
    stats: &[TextStats],
    csvfile: P,
) -> Result<()> {
    let rows: Vec<AnalysisRow> = stats.iter().map(AnalysisRow::from).collect();
    write_rows(header, &rows, csvfile)
}

/// Writes pre-computed rows under `header`.
pub fn write_rows<P: AsRef<Path>>(
    header: &[String],
    rows: &[AnalysisRow],
    csvfile: P,
) -> Result<()> {
    let path = csvfile.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(header)
        .with_context(|| format!("Failed to write header to {}", path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for {}", row.filepath))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    debug!(path = %path.display(), rows = rows.len(), "wrote analysis CSV");
    Ok(())
}

/// Renders a summary as pretty-printed JSON.
pub fn summary_json(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize summary")
}
