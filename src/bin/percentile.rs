use std::{io::stdout, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use percentile_report::{
    config::ReportOpts,
    get_terminal_width::get_terminal_width,
    pipeline::run,
    utillib::logging::{set_log_level, LogLevelOpt},
};

/// Print percentiles (lower interpolation) of the integers in a file,
/// one per line, and write them to `<PATH>.dat` as `<rank> <value>`
/// lines.
#[derive(clap::Parser, Debug)]
#[clap(version, next_line_help = true)]
#[clap(set_term_width = get_terminal_width())]
struct Opts {
    #[clap(flatten)]
    log_level: LogLevelOpt,

    #[clap(flatten)]
    report_opts: ReportOpts,

    /// The file holding the values, `-` for stdin
    path: PathBuf,
}

fn main() -> Result<()> {
    let Opts {
        log_level,
        report_opts,
        path,
    } = Opts::parse();
    set_log_level(log_level.into());

    let config = report_opts.load()?;
    let mut out = stdout().lock();
    run(&path, &config, &mut out)?;
    Ok(())
}
