use std::{
    env,
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use log::LevelFilter;
use tsplib::EdgeWeightFormat;

use crate::{Error, Result};

/// Command-line options for loading and re-emitting an instance.
#[derive(Clone, Debug)]
pub struct Options {
    /// Instance file to parse.
    pub input: PathBuf,
    /// Layout to re-emit the parsed instance in, if any.
    pub emit: Option<EdgeWeightFormat>,
    /// Where `emit` writes. Empty means stdout.
    pub output: String,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {raw} (expected error|warn|info|debug|trace|off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {raw} (expected compact|pretty)"
            ))),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            emit: None,
            output: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "input" => options.input = PathBuf::from(require_value(&name, value)?),
                "emit" => {
                    let raw = require_value(&name, value)?;
                    let format = EdgeWeightFormat::from_keyword(&raw.to_ascii_uppercase())
                        .ok_or_else(|| {
                            Error::invalid_input(format!(
                                "Invalid value for --emit: {raw} (expected {})",
                                EdgeWeightFormat::KEYWORDS.join("|")
                            ))
                        })?;
                    options.emit = Some(format);
                }
                "output" => options.output = require_value(&name, value)?,
                "log-level" => options.log_level = LogLevel::parse(&require_value(&name, value)?)?,
                "log-format" => {
                    options.log_format = LogFormat::parse(&require_value(&name, value)?)?;
                }
                "log-output" => options.log_output = require_value(&name, value)?,
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        if options.input.as_os_str().is_empty() {
            return Err(Error::invalid_input(format!(
                "Missing --input\n\n{}",
                Self::usage()
            )));
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-instance --input <file.tsp> [options]\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --emit <FULL_MATRIX|UPPER_ROW|LOWER_DIAG_ROW>\n",
            "  --output <path>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-instance --input gr17.tsp\n",
            "  tsp-instance --input gr17.tsp --emit=FULL_MATRIX --output gr17.full.tsp\n",
            "  tsp-instance --input gr17.tsp --log-level=debug --log-format=pretty\n",
        )
    }

    pub fn output_path(&self) -> Option<&Path> {
        optional_path(&self.output)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        optional_path(&self.log_output)
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "input={} emit=", self.input.display())?;
        match self.emit {
            Some(format) => write!(f, "{format}")?,
            None => f.write_str("-")?,
        }
        write!(
            f,
            " output={} log_level={:?} log_format={:?}",
            self.output_path()
                .map_or_else(|| "-".into(), |p| p.display().to_string()),
            self.log_level,
            self.log_format
        )
    }
}

fn optional_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn require_value(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;
    use tsplib::EdgeWeightFormat;

    use super::{LogFormat, LogLevel, Options, parse_bool};

    #[test]
    fn parse_bool_accepts_common_values() {
        assert!(parse_bool("x", "true").expect("parse"));
        assert!(parse_bool("x", "ON").expect("parse"));
        assert!(!parse_bool("x", "0").expect("parse"));
        assert!(!parse_bool("x", "no").expect("parse"));

        let err = parse_bool("log-timestamp", "maybe").expect_err("invalid bool should fail");
        assert!(
            err.to_string()
                .contains("Invalid boolean for --log-timestamp: maybe")
        );
    }

    #[test]
    fn log_level_parses_aliases_and_maps_to_filter() {
        assert_eq!(LogLevel::parse("WARNING").expect("parse"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("trace").expect("parse").to_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
        assert!(LogLevel::parse("loud").is_err());
        assert_eq!(LogFormat::parse("Pretty").expect("parse"), LogFormat::Pretty);
    }

    #[test]
    fn parse_from_iter_applies_options() {
        let options = Options::parse_from_iter([
            "--input",
            "gr17.tsp",
            "--emit=lower_diag_row",
            "--output=out.tsp",
            "--log-level=debug",
            "--log-format",
            "pretty",
            "--log-timestamp",
            "--log-output=-",
        ])
        .expect("parse options");

        assert_eq!(options.input, Path::new("gr17.tsp"));
        assert_eq!(options.emit, Some(EdgeWeightFormat::LowerDiagRow));
        assert_eq!(options.output_path(), Some(Path::new("out.tsp")));
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert!(options.log_timestamp);
        assert_eq!(options.log_output_path(), None);
    }

    #[test]
    fn parse_from_iter_rejects_bad_input() {
        let err = Options::parse_from_iter(["--emit=UPPER_COL", "--input=a.tsp"])
            .expect_err("unsupported layout");
        assert!(err.to_string().contains("FULL_MATRIX|UPPER_ROW|LOWER_DIAG_ROW"));

        let err = Options::parse_from_iter(["--emit=FULL_MATRIX"]).expect_err("missing input");
        assert!(err.to_string().contains("Missing --input"));

        let err = Options::parse_from_iter(["--input=a.tsp", "--bogus"]).expect_err("unknown option");
        assert!(err.to_string().contains("Unknown option: --bogus"));

        let err = Options::parse_from_iter(["a.tsp"]).expect_err("positional argument");
        assert!(err.to_string().contains("Unexpected argument: a.tsp"));

        let err = Options::parse_from_iter(["--input=a.tsp", "--no-log-timestamp=1"])
            .expect_err("flag with value");
        assert!(err.to_string().contains("does not take a value"));
    }
}
