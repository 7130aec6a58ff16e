//! CLI command implementations

pub mod generate;
pub mod generate_all;
pub mod inspect;
pub mod list;

mod reporting;

/// Output directory used when `--out-dir` is not given.
pub const DEFAULT_OUT_DIR: &str = "./sounds";
