//! Reading the integer dataset from a text file, one value per line.

use std::{
    fs::File,
    io::{stdin, BufRead, BufReader},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use crate::debug;

/// Which part of each line holds the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The whole line (surrounding whitespace ignored) is the value.
    #[default]
    WholeLine,
    /// Comma separated records, the value is in field `index`
    /// (zero-based), other fields are ignored.
    Column { index: usize },
}

impl InputMode {
    /// The mode selected via `--fio`: the second field of fio's
    /// comma separated latency logs.
    pub const FIO: InputMode = InputMode::Column { index: 1 };
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("opening input file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading {path:?} at line {line}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} line {line}: missing field {index} (counting from 0) in {text:?}")]
    MissingField {
        path: PathBuf,
        line: usize,
        index: usize,
        text: String,
    },
    #[error("{path:?} line {line}: invalid integer {text:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// The path that makes `load_values` read from stdin.
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Pick the text holding the value out of `line`. `line_num` is
/// 1-based, for messages.
fn select_field<'l>(
    line: &'l str,
    mode: InputMode,
    path: &Path,
    line_num: usize,
) -> Result<&'l str, LoadError> {
    match mode {
        InputMode::WholeLine => Ok(line.trim()),
        InputMode::Column { index } => {
            line.split(',')
                .nth(index)
                .map(str::trim)
                .ok_or_else(|| LoadError::MissingField {
                    path: path.to_owned(),
                    line: line_num,
                    index,
                    text: line.to_string(),
                })
        }
    }
}

/// Parse all lines of `input`. `path` is only used in error
/// messages. No line is skipped: an empty line is a parse error.
pub fn read_values(
    input: impl BufRead,
    mode: InputMode,
    path: &Path,
) -> Result<Vec<i64>, LoadError> {
    let mut vals = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line_num = i + 1;
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_owned(),
            line: line_num,
            source,
        })?;
        let text = select_field(&line, mode, path, line_num)?;
        let val: i64 = text.parse().map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            line: line_num,
            text: text.to_string(),
            source,
        })?;
        vals.push(val);
    }
    Ok(vals)
}

/// Read the values from the file at `path`, or from stdin if `path`
/// is [`STDIN_PATH`].
pub fn load_values(path: &Path, mode: InputMode) -> Result<Vec<i64>, LoadError> {
    debug!("reading {path:?} in mode {mode:?}");
    if is_stdin(path) {
        read_values(stdin().lock(), mode, Path::new("<stdin>"))
    } else {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
        read_values(BufReader::new(file), mode, path)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    fn read(s: &str, mode: InputMode) -> Result<Vec<i64>, LoadError> {
        read_values(s.as_bytes(), mode, Path::new("test.txt"))
    }

    #[test]
    fn t_whole_line() -> Result<()> {
        assert_eq!(read("3\n1\n2\n", InputMode::WholeLine)?, [3, 1, 2]);
        assert_eq!(read("  -4 \r\n+6\t\n10", InputMode::WholeLine)?, [-4, 6, 10]);
        assert_eq!(read("", InputMode::WholeLine)?, Vec::<i64>::new());
        Ok(())
    }

    #[test]
    fn t_fio_column() -> Result<()> {
        assert_eq!(read("x,7,y\n", InputMode::FIO)?, [7]);
        assert_eq!(
            read("0, 812, 0, 4096, 0\n1, 915, 1, 4096, 0\n", InputMode::FIO)?,
            [812, 915]
        );
        // last field, trailing whitespace
        assert_eq!(read("a,42 \n", InputMode::FIO)?, [42]);
        assert_eq!(read("5,6,7\n", InputMode::Column { index: 2 })?, [7]);
        Ok(())
    }

    #[test]
    fn t_parse_error() {
        match read("1\n2\nthree\n", InputMode::WholeLine) {
            Err(LoadError::Parse { line, text, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "three");
            }
            r => panic!("expected parse error, got {r:?}"),
        }
        match read("1\n\n2\n", InputMode::WholeLine) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
            r => panic!("expected parse error, got {r:?}"),
        }
    }

    #[test]
    fn t_missing_field() {
        match read("x,1\nonly\n", InputMode::FIO) {
            Err(LoadError::MissingField { line, index, text, .. }) => {
                assert_eq!((line, index), (2, 1));
                assert_eq!(text, "only");
            }
            r => panic!("expected missing field error, got {r:?}"),
        }
    }

    #[test]
    fn t_missing_file() {
        let r = load_values(
            Path::new("/nonexistent/percentile-input.txt"),
            InputMode::WholeLine,
        );
        assert!(matches!(r, Err(LoadError::Open { .. })));
    }
}
