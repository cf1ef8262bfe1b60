use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};

use thiserror::Error;

/// Why a `DISPLAY_DATA_SECTION` node index was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidNodeReason {
    OutOfRange,
    Duplicate,
}

impl Display for InvalidNodeReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("out of range"),
            Self::Duplicate => f.write_str("already assigned"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TsplibError {
    #[error("file {path} not open: {source}")]
    FileNotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed line \"{0}\"")]
    MalformedLine(String),
    #[error("field {0} is unsupported")]
    UnsupportedField(String),
    #[error("field {field} does not support the value '{value}'")]
    InvalidFieldValue { field: String, value: String },
    #[error("field {field} not defined before {context}")]
    MissingField { field: String, context: String },
    #[error("unsupported EDGE_WEIGHT_FORMAT with value '{0}'")]
    UnsupportedFormat(String),
    #[error("error building matrix on row {row}, col {col}")]
    MatrixParse { row: usize, col: usize },
    #[error("invalid node {index} in DISPLAY_DATA_SECTION: {reason}")]
    InvalidNode {
        index: i64,
        reason: InvalidNodeReason,
    },
    #[error("bad DISPLAY_DATA_SECTION entry {entry}: expected '<node> <x> <y>'")]
    DisplayDataParse { entry: usize },
    #[error("corrupted file: specification found in the data section")]
    SpecificationAfterData,
    #[error("unexpected end of file before EOF marker")]
    UnexpectedEof,
    #[error("distance matrix not defined")]
    MissingDistanceMatrix,
    #[error("pattern engine error: {0}")]
    PatternEngine(#[from] regex::Error),
    #[error("{source}\nLast entry parsed (line {line_number}): \"{line}\"")]
    AtLine {
        line_number: usize,
        line: String,
        #[source]
        source: Box<TsplibError>,
    },
}

pub type TsplibResult<T> = std::result::Result<T, TsplibError>;

impl TsplibError {
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    pub fn unsupported_field(field: impl Into<String>) -> Self {
        Self::UnsupportedField(field.into())
    }

    /// Attaches the raw line being processed when this error occurred.
    /// An error that already carries a line keeps its original annotation.
    pub fn at_line(self, line_number: usize, line: impl Into<String>) -> Self {
        match self {
            Self::AtLine { .. } => self,
            other => Self::AtLine {
                line_number,
                line: line.into(),
                source: Box::new(other),
            },
        }
    }

    /// The underlying error kind, with any line annotation removed.
    pub fn root(&self) -> &TsplibError {
        match self {
            Self::AtLine { source, .. } => source.root(),
            other => other,
        }
    }

    /// The raw line and its 1-based number, if the driver recorded one.
    pub fn line(&self) -> Option<(usize, &str)> {
        match self {
            Self::AtLine {
                line_number, line, ..
            } => Some((*line_number, line.as_str())),
            _ => None,
        }
    }
}
