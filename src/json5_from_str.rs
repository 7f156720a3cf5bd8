//! json5 0.4.1 includes location info with its errors, but its
//! `Display` implementation does not show it. Wrap the errors so
//! that config file mistakes are reported with line and column.

use std::fmt::Display;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub struct Json5FromStrError(pub json5::Error);

impl Json5FromStrError {
    pub fn message_without_location(&self) -> &str {
        match &self.0 {
            json5::Error::Message { msg, location: _ } => msg,
        }
    }

    /// `(line, column)`
    pub fn location(&self) -> Option<(usize, usize)> {
        match &self.0 {
            json5::Error::Message { msg: _, location } => location
                .as_ref()
                .map(|json5::Location { line, column }| (*line, *column)),
        }
    }
}

impl Display for Json5FromStrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = self.message_without_location();
        if let Some((line, column)) = self.location() {
            write!(f, "{msg} at line:column {line}:{column}")
        } else {
            write!(f, "{msg}")
        }
    }
}

pub fn json5_from_str<'t, T: Deserialize<'t>>(s: &'t str) -> Result<T, Json5FromStrError> {
    json5::from_str(s).map_err(Json5FromStrError)
}
