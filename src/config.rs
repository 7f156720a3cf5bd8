//! The settings for one run: how to read the input, which ranks to
//! report, which outputs to produce. Built from a preset, then the
//! config file, then the command line options, later ones winning.

use std::{num::NonZeroU8, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::{
    load_config_file::LoadConfigFile,
    loader::InputMode,
    rank::{Rank, RankSet},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: InputMode,
    pub ranks: RankSet,
    /// Write `<input>.dat`
    pub write_dat: bool,
    /// Print Min and Max after the percentiles
    pub summary: bool,
}

impl Config {
    /// 1, 5, 10 .. 95, 99, with summary and data file.
    pub fn standard() -> Self {
        Config {
            mode: InputMode::WholeLine,
            ranks: RankSet::default(),
            write_dat: true,
            summary: true,
        }
    }

    /// All ranks 1..=100, printed only.
    pub fn full_range() -> Self {
        Config {
            mode: InputMode::WholeLine,
            ranks: RankSet::All,
            write_dat: false,
            summary: false,
        }
    }

    pub fn apply_file(&mut self, file: &ConfigFile) -> Result<()> {
        let ConfigFile {
            column,
            step,
            ranks,
            write_dat,
            summary,
        } = file;
        if let Some(index) = column {
            self.mode = InputMode::Column { index: *index };
        }
        match (ranks, step) {
            (Some(RanksSetting::Named(RanksName::All)), _) => self.ranks = RankSet::All,
            (Some(RanksSetting::List(ranks)), _) => {
                let ranks = ranks
                    .iter()
                    .map(|r| Rank::new(*r))
                    .collect::<Result<Vec<_>, _>>()
                    .context("config file `ranks`")?;
                self.ranks = RankSet::list(ranks).context("config file `ranks`")?;
            }
            (Some(RanksSetting::Named(RanksName::Bracketed)), step) => {
                let step = step.unwrap_or(crate::rank::DEFAULT_STEP.get());
                self.ranks = RankSet::bracketed(step).context("config file `step`")?;
            }
            (None, Some(step)) => {
                self.ranks = RankSet::bracketed(*step).context("config file `step`")?;
            }
            (None, None) => (),
        }
        if let Some(write_dat) = write_dat {
            self.write_dat = *write_dat;
        }
        if let Some(summary) = summary {
            self.summary = *summary;
        }
        Ok(())
    }
}

/// `ranks` in the config file: `"bracketed"`, `"all"`, or a list of
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RanksSetting {
    Named(RanksName),
    List(Vec<u64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RanksName {
    Bracketed,
    All,
}

/// Contents of the optional JSON5 config file, all fields optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Read values from this comma separated field (counting from 0)
    #[serde(default)]
    pub column: Option<usize>,
    /// Increment for the bracketed ranks
    #[serde(default)]
    pub step: Option<u8>,
    #[serde(default)]
    pub ranks: Option<RanksSetting>,
    #[serde(default)]
    pub write_dat: Option<bool>,
    #[serde(default)]
    pub summary: Option<bool>,
}

impl LoadConfigFile for ConfigFile {
    fn default_config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".percentile-report.json5"))
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct ReportOpts {
    /// Read fio style comma separated logs, taking the value from the
    /// second field
    #[clap(long, conflicts_with = "column")]
    pub fio: bool,

    /// Read comma separated records, taking the value from field N
    /// (counting from 0)
    #[clap(long, value_name = "N")]
    pub column: Option<usize>,

    /// Report 1, then every multiple of N up to 95, then 99 [default: 5]
    #[clap(long, value_name = "N", conflicts_with_all = &["all-ranks", "ranks"])]
    pub step: Option<NonZeroU8>,

    /// Report all ranks from 1 to 100
    #[clap(long, conflicts_with = "ranks")]
    pub all_ranks: bool,

    /// Report exactly these ranks (comma separated, 1..=100)
    #[clap(long, value_name = "LIST", value_delimiter = ',')]
    pub ranks: Vec<Rank>,

    /// Do not write the `<input>.dat` file
    #[clap(long)]
    pub no_dat: bool,

    /// Do not print Min and Max
    #[clap(long)]
    pub no_summary: bool,

    /// Print all ranks from 1 to 100 and nothing else (no summary,
    /// no data file); the other options here are applied on top
    #[clap(long)]
    pub full_range: bool,

    /// Path to a JSON5 config file providing defaults for the
    /// options above (default: ~/.percentile-report.json5 if it
    /// exists)
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl ReportOpts {
    pub fn into_config(self, file: &ConfigFile) -> Result<Config> {
        let Self {
            fio,
            column,
            step,
            all_ranks,
            ranks,
            no_dat,
            no_summary,
            full_range,
            config: _,
        } = self;

        let mut config = Config::standard();
        config.apply_file(file)?;
        if full_range {
            let Config {
                mode: _,
                ranks,
                write_dat,
                summary,
            } = Config::full_range();
            config.ranks = ranks;
            config.write_dat = write_dat;
            config.summary = summary;
        }

        if fio {
            config.mode = InputMode::FIO;
        }
        if let Some(index) = column {
            config.mode = InputMode::Column { index };
        }
        if let Some(step) = step {
            config.ranks = RankSet::Bracketed { step };
        }
        if all_ranks {
            config.ranks = RankSet::All;
        }
        if !ranks.is_empty() {
            config.ranks = RankSet::list(ranks).map_err(|e| anyhow!("--ranks: {e}"))?;
        }
        if no_dat {
            config.write_dat = false;
        }
        if no_summary {
            config.summary = false;
        }
        Ok(config)
    }

    /// Load the config file (the given one or the default) and
    /// combine it with the options.
    pub fn load(self) -> Result<Config> {
        let file = ConfigFile::load_config(self.config.as_ref())?;
        self.into_config(&file)
    }
}

#[cfg(test)]
mod tests {
    use crate::json5_from_str::json5_from_str;

    use super::*;

    #[test]
    fn t_defaults() -> Result<()> {
        let config = ReportOpts::default().into_config(&ConfigFile::default())?;
        assert_eq!(config, Config::standard());
        Ok(())
    }

    #[test]
    fn t_fio_and_full_range() -> Result<()> {
        let opts = ReportOpts {
            fio: true,
            full_range: true,
            ..Default::default()
        };
        let config = opts.into_config(&ConfigFile::default())?;
        assert_eq!(config.mode, InputMode::Column { index: 1 });
        assert_eq!(config.ranks, RankSet::All);
        assert!(!config.write_dat);
        assert!(!config.summary);
        Ok(())
    }

    #[test]
    fn t_config_file() -> Result<()> {
        let file: ConfigFile = json5_from_str(
            "{
               // comments are fine in JSON5
               column: 2,
               step: 10,
               write_dat: false,
             }",
        )?;
        let config = ReportOpts::default().into_config(&file)?;
        assert_eq!(config.mode, InputMode::Column { index: 2 });
        assert_eq!(config.ranks, RankSet::bracketed(10)?);
        assert!(!config.write_dat);
        assert!(config.summary);

        // command line wins
        let opts = ReportOpts {
            all_ranks: true,
            ..Default::default()
        };
        assert_eq!(opts.into_config(&file)?.ranks, RankSet::All);
        Ok(())
    }

    #[test]
    fn t_config_file_ranks() -> Result<()> {
        let file: ConfigFile = json5_from_str("{ ranks: [90, 50, 10] }")?;
        let config = ReportOpts::default().into_config(&file)?;
        let ranks: Vec<u8> = config.ranks.ranks().into_iter().map(Rank::get).collect();
        assert_eq!(ranks, [10, 50, 90]);

        let file: ConfigFile = json5_from_str("{ ranks: 'all' }")?;
        assert_eq!(file.ranks, Some(RanksSetting::Named(RanksName::All)));

        let file: ConfigFile = json5_from_str("{ ranks: [0] }")?;
        assert!(ReportOpts::default().into_config(&file).is_err());

        let file: ConfigFile = json5_from_str("{ step: 0 }")?;
        assert!(ReportOpts::default().into_config(&file).is_err());
        Ok(())
    }

    #[test]
    fn t_config_file_unknown_key() {
        let r: Result<ConfigFile, _> = json5_from_str("{ stepping: 5 }");
        assert!(r.is_err());
    }

    #[test]
    fn t_missing_explicit_config_file() {
        let opts = ReportOpts {
            config: Some("/nonexistent/percentile-report.json5".into()),
            ..Default::default()
        };
        assert!(opts.load().is_err());
    }
}
