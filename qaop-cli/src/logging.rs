//! Logger set-up for the CLI.
//!
//! Records go to stderr as `timestamp | LEVEL | target | message` so stdout
//! stays clean for JSON output.

use std::io::Write;

use env_logger::{Builder, Env, Target, WriteStyle, fmt::Formatter};
use log::Record;

use crate::CliError;

/// Environment variable holding the default log filter.
pub(crate) const ENV_LOG_LEVEL: &str = "QAOP_LOG_LEVEL";

const DEFAULT_FILTER: &str = "info";

/// Install the global logger.
///
/// `filter` from `--log-level` wins over `QAOP_LOG_LEVEL`; without either the
/// filter is `info`.
pub(crate) fn init(filter: Option<&str>) -> Result<(), CliError> {
    let mut builder = Builder::from_env(Env::new().filter_or(ENV_LOG_LEVEL, DEFAULT_FILTER));
    if let Some(spec) = filter {
        builder.parse_filters(spec);
    }
    builder
        .target(Target::Stderr)
        .write_style(WriteStyle::Never)
        .format(write_record);
    builder.try_init().map_err(CliError::from)
}

fn write_record(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} | {:<5} | {} | {}",
        buf.timestamp_millis(),
        record.level(),
        record.target(),
        record.args()
    )
}
