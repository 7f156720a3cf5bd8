//! Percentile reports over integer datasets read from text files.
//!
//! The pipeline is [`loader`] → [`stats`] → [`report`]; [`config`]
//! ties the choices together (input mode, which ranks, which
//! outputs).

pub mod config;
pub mod get_terminal_width;
pub mod io_utils;
pub mod json5_from_str;
pub mod load_config_file;
pub mod loader;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod stats;
pub mod utillib;
