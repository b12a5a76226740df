//! Logger setup
//!
//! Log records go to stderr as `[ LEVEL ] message`, with the level colored.
//! `-v` enables debug output, `-vv` trace output.

use std::io::Write;

use flexi_logger::{DeferredNow, FlexiLoggerError, LogSpecification, Logger, LoggerHandle, style};
use log::LevelFilter;

/// Map the `-v` count to a log level
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Start the stderr logger. The returned handle must stay alive until exit.
pub fn init(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let spec = LogSpecification::builder()
        .default(level_for(verbosity))
        .build();

    Logger::with(spec)
        .log_to_stderr()
        .format(format_log_entry)
        .start()
}

fn format_log_entry(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &log::Record,
) -> std::io::Result<()> {
    let level = record.level();
    write!(
        w,
        "[ {} ] {}",
        style(level).paint(level.to_string()),
        record.args()
    )
}
