//! Load, compute, report.

use std::{io::Write, path::Path};

use anyhow::{anyhow, Context, Result};

use crate::{
    config::Config,
    debug, info,
    loader::{is_stdin, load_values},
    report::{dat_path, Report},
    stats::Dataset,
};

/// Run the whole pipeline for the file at `input`, printing the
/// listing to `out`. The data file is written last, thus not at all
/// if anything before fails. Returns the report for the caller's
/// inspection.
pub fn run(input: &Path, config: &Config, out: &mut impl Write) -> Result<Report> {
    debug!("config: {config:?}");

    let vals = load_values(input, config.mode)?;
    info!("read {} values from {input:?}", vals.len());

    let dataset = Dataset::from_values(vals).with_context(|| anyhow!("input {input:?}"))?;
    let report = dataset.report(&config.ranks);

    report
        .print_to(out, config.summary)
        .context("printing report")?;

    if config.write_dat {
        if is_stdin(input) {
            info!("reading from stdin, not writing a data file");
        } else {
            report.write_dat(&dat_path(input))?;
        }
    }

    Ok(report)
}
