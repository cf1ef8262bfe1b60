use std::{
    fs::File,
    io::{self, Write},
};

use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter, Record};

use crate::options::{LogFormat, Options};
use crate::{Error, Result};

/// Crates whose records follow `--log-level`. Everything else is capped at `warn`.
const INSTANCE_TARGETS: [&str; 2] = ["tsplib", env!("CARGO_CRATE_NAME")];

pub fn init_logger(options: &Options) -> Result<()> {
    let level = options.log_level.to_filter();
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(level.min(LevelFilter::Warn))
        .write_style(WriteStyle::Never)
        .format(move |buf, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            write_record(buf, record, log_format)
        });
    for target in INSTANCE_TARGETS {
        builder.filter_module(target, level);
    }

    if let Some(log_path) = options.log_output_path() {
        let log_file = File::create(log_path).map_err(|e| {
            Error::other(format!(
                "failed to create log output file {}: {e}",
                log_path.display()
            ))
        })?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

/// Writes one record without timestamp. `Pretty` adds the emitting module as
/// a path, e.g. `tsplib/sections`.
fn write_record(out: &mut impl Write, record: &Record<'_>, format: LogFormat) -> io::Result<()> {
    let tag = level_tag(record.level());
    match format {
        LogFormat::Compact => writeln!(out, "{tag:<5} {}", record.args()),
        LogFormat::Pretty => writeln!(
            out,
            "{tag:<5} [{}] {}",
            record.target().replace("::", "/"),
            record.args()
        ),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
