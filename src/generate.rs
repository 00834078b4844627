//! Synthetic dataset generation.
//!
//! Writes the fixed header followed by `ROW_COUNT` rows with sequential IDs.
//! The library takes any `Rng` so callers can seed it; the binary uses the
//! thread-local generator, so values differ between runs.

use anyhow::{Context, Result};
use log::{debug, info};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::ROW_COUNT;
use crate::output::RowWriter;
use crate::row::Row;

/// Rows `1..=ROW_COUNT` in order.
pub fn rows<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Row> + '_ {
    (1..=ROW_COUNT).map(move |id| Row::random(id, rng))
}

/// Write the header and every row to `sink`, then flush it and return it.
pub fn write_dataset<W: Write, R: Rng + ?Sized>(sink: W, rng: &mut R) -> Result<W> {
    let mut writer = RowWriter::new(sink);
    writer.write_header().context("failed to write header")?;
    for row in rows(rng) {
        writer
            .write_row(&row)
            .with_context(|| format!("failed to write row {}", row.id))?;
    }
    writer.finish().context("failed to flush dataset")
}

/// Create or truncate `path` and write the dataset to it.
pub fn generate_file(path: &Path) -> Result<()> {
    let t0 = Instant::now();
    let file = File::create(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;
    let out = BufWriter::with_capacity(64 * 1024, file);

    let out = write_dataset(out, &mut rand::rng())
        .with_context(|| format!("failed to write dataset: {}", path.display()))?;
    out.into_inner()
        .map_err(|e| e.into_error())
        .and_then(|file| file.sync_all())
        .with_context(|| format!("failed to flush file: {}", path.display()))?;

    info!("wrote {} rows to {}", ROW_COUNT, path.display());
    debug!("generation took {:.2}ms", t0.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}
