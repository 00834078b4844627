//! Dataset summary: load a CSV file, sort it by the first column, and report
//! the sum and average of one numeric column.

use anyhow::{Context, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::strip_bom;

/// A loaded CSV file. Records may have differing field counts.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub header: Option<csv::StringRecord>,
    pub rows: Vec<csv::StringRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnStats {
    /// Rows long enough to have the column.
    pub count: usize,
    pub sum: f64,
    pub average: f64,
}

/// Everything `write_report` prints.
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub dataset: Dataset,
    pub sort_elapsed: Duration,
    /// 0-based.
    pub column: usize,
    pub stats: ColumnStats,
    pub head: usize,
}

/// Read and parse `path`. Empty lines are skipped; with `has_header` the first
/// record is split off as the header.
pub fn load(path: &Path, has_header: bool) -> Result<Dataset> {
    let mut buf =
        std::fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    strip_bom(&mut buf);
    parse(&buf, has_header).with_context(|| format!("failed to parse CSV: {}", path.display()))
}

pub fn parse(buf: &[u8], has_header: bool) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(buf);

    let mut dataset = Dataset::default();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed record {}", index + 1))?;
        if has_header && dataset.header.is_none() && dataset.rows.is_empty() {
            dataset.header = Some(record);
        } else {
            dataset.rows.push(record);
        }
    }
    Ok(dataset)
}

/// Stable parallel sort on the first field, compared as text. Records with no
/// fields come first.
pub fn sort_by_first_column(rows: &mut [csv::StringRecord]) {
    rows.par_sort_by(|a, b| a.get(0).cmp(&b.get(0)));
}

/// Sum and average of column `index`. Short rows are skipped and fields that
/// are not numbers count as zero.
pub fn column_stats(rows: &[csv::StringRecord], index: usize) -> ColumnStats {
    let (count, sum) = rows
        .par_iter()
        .filter_map(|row| row.get(index))
        .map(|field| (1usize, parse_number(field)))
        .reduce(|| (0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1));

    if count == 0 {
        return ColumnStats::default();
    }
    ColumnStats {
        count,
        sum,
        average: sum / count as f64,
    }
}

fn parse_number(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

/// Load, sort and summarize `path`.
pub fn summarize(path: &Path, has_header: bool, column: usize, head: usize) -> Result<Report> {
    let mut dataset = load(path, has_header)?;
    debug!("loaded {} rows from {}", dataset.rows.len(), path.display());

    let t0 = Instant::now();
    sort_by_first_column(&mut dataset.rows);
    let sort_elapsed = t0.elapsed();

    let stats = column_stats(&dataset.rows, column);
    if stats.count < dataset.rows.len() {
        warn!(
            "{} rows have no column {}",
            dataset.rows.len() - stats.count,
            column + 1
        );
    }

    Ok(Report {
        path: path.to_path_buf(),
        dataset,
        sort_elapsed,
        column,
        stats,
        head,
    })
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(
        out,
        "Loaded {} rows from {}",
        report.dataset.rows.len(),
        report.path.display()
    )?;
    writeln!(
        out,
        "Sorting completed in {} seconds.",
        report.sort_elapsed.as_secs_f64()
    )?;
    writeln!(out, "Column {} statistics:", report.column + 1)?;
    writeln!(out, "  Sum: {}", report.stats.sum)?;
    writeln!(out, "  Average: {}", report.stats.average)?;

    writeln!(out)?;
    writeln!(out, "First {} rows after sorting:", report.head)?;
    for row in report.dataset.rows.iter().take(report.head) {
        let mut fields = row.iter();
        if let Some(first) = fields.next() {
            out.write_all(first.as_bytes())?;
        }
        for field in fields {
            out.write_all(b" ")?;
            out.write_all(field.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}
