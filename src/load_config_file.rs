//! Generic config file loader

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::de::DeserializeOwned;

use crate::{debug, json5_from_str::json5_from_str};

/// Returns None if the file does not exist
pub fn try_load_json5_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(json5_from_str(&s).with_context(|| {
            anyhow!("decoding JSON5 from config file {path:?}")
        })?)),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(None),
            _ => bail!("loading config file from {path:?}: {e}"),
        },
    }
}

pub trait LoadConfigFile: Default + DeserializeOwned {
    fn default_config_path() -> Option<PathBuf>;

    /// If `path` is given, the file must exist or an error is
    /// returned. Otherwise, a default location is checked
    /// (`default_config_path`) and if it exists, is loaded, if it
    /// doesn't exist, a `Default` instance is generated.
    fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        if let Some(path) = path {
            let path = path.as_ref();
            debug!("loading config from {path:?}");
            try_load_json5_file(path)?
                .ok_or_else(|| anyhow!("config file with specified location {path:?} does not exist"))
        } else if let Some(path) = Self::default_config_path() {
            debug!("checking for config at default location {path:?}");
            Ok(try_load_json5_file(&path)?.unwrap_or_else(Self::default))
        } else {
            Ok(Self::default())
        }
    }
}
