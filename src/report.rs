//! Percentile reports: the human readable listing on stdout and the
//! two-column `.dat` file for plotting.

use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};

use crate::{info, rank::Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileRecord {
    pub rank: Rank,
    pub value: i64,
}

/// The result of [`Dataset::report`](crate::stats::Dataset::report),
/// records in ascending rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub records: Vec<PercentileRecord>,
    pub num_values: usize,
    pub min: i64,
    pub max: i64,
}

impl Report {
    /// `P<rank>: <value>` lines, then if `summary` is true, an empty
    /// line and the minimum and maximum.
    pub fn print_to(&self, out: &mut impl Write, summary: bool) -> std::io::Result<()> {
        for PercentileRecord { rank, value } in &self.records {
            writeln!(out, "P{rank}: {value}")?;
        }
        if summary {
            writeln!(out)?;
            writeln!(out, "Min: {}", self.min)?;
            writeln!(out, "Max: {}", self.max)?;
        }
        Ok(())
    }

    /// `<rank> <value>` lines.
    pub fn write_dat_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        for PercentileRecord { rank, value } in &self.records {
            writeln!(out, "{rank} {value}")?;
        }
        Ok(())
    }

    /// Create or truncate the file at `path` and write the records
    /// to it.
    pub fn write_dat(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| anyhow!("creating data file {path:?}"))?;
        let mut out = BufWriter::new(file);
        self.write_dat_to(&mut out)
            .and_then(|()| out.flush())
            .with_context(|| anyhow!("writing data file {path:?}"))?;
        info!("wrote {} records to {path:?}", self.records.len());
        Ok(())
    }
}

/// The data file for `input`: ".dat" appended to the whole path, an
/// existing extension is kept (`lat.log` -> `lat.log.dat`).
pub fn dat_path(input: &Path) -> PathBuf {
    let mut s = OsString::from(input.as_os_str());
    s.push(".dat");
    PathBuf::from(s)
}

/// Parse a file written by [`Report::write_dat`].
pub fn read_dat(path: &Path) -> Result<Vec<PercentileRecord>> {
    let file = File::open(path).with_context(|| anyhow!("opening data file {path:?}"))?;
    parse_dat(BufReader::new(file)).with_context(|| anyhow!("reading data file {path:?}"))
}

pub fn parse_dat(input: impl BufRead) -> Result<Vec<PercentileRecord>> {
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line_num = i + 1;
        let Some((rank, value)) = line.split_once(' ') else {
            bail!("line {line_num}: expecting `<rank> <value>`, got {line:?}")
        };
        records.push(PercentileRecord {
            rank: rank
                .parse()
                .with_context(|| anyhow!("line {line_num}: rank"))?,
            value: value
                .parse()
                .with_context(|| anyhow!("line {line_num}: value {value:?}"))?,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rank::RankSet, stats::Dataset};

    #[test]
    fn t_dat_path() {
        assert_eq!(dat_path(Path::new("lat.log")), Path::new("lat.log.dat"));
        assert_eq!(dat_path(Path::new("./data/x")), Path::new("./data/x.dat"));
    }

    #[test]
    fn t_print_with_summary() -> Result<()> {
        let report = Dataset::from_values(vec![3, 1, 2])?.report(&RankSet::list(vec![
            "1".parse()?,
            "50".parse()?,
            "99".parse()?,
        ])?);
        let mut out = Vec::new();
        report.print_to(&mut out, true)?;
        assert_eq!(
            String::from_utf8(out)?,
            "P1: 1\nP50: 2\nP99: 3\n\nMin: 1\nMax: 3\n"
        );

        let mut out = Vec::new();
        report.print_to(&mut out, false)?;
        assert_eq!(String::from_utf8(out)?, "P1: 1\nP50: 2\nP99: 3\n");
        Ok(())
    }

    #[test]
    fn t_dat_matches_printed_values() -> Result<()> {
        let report = Dataset::from_values(vec![-5, 100, 42, 7, 7, 13])?.report(&RankSet::All);
        let mut dat = Vec::new();
        report.write_dat_to(&mut dat)?;
        let dat = String::from_utf8(dat)?;
        assert!(dat.starts_with("1 -5\n"));
        assert!(dat.ends_with("100 100\n"));

        let reread = parse_dat(dat.as_bytes())?;
        assert_eq!(reread, report.records);
        Ok(())
    }

    #[test]
    fn t_parse_dat_errors() {
        assert!(parse_dat("5 1\n10\n".as_bytes()).is_err());
        assert!(parse_dat("0 1\n".as_bytes()).is_err());
        assert!(parse_dat("5 x\n".as_bytes()).is_err());
    }
}
