//! Classification of raw lines into header entries and data-section markers.

use regex::Regex;

use crate::{TsplibError, TsplibResult};

const EOF_MARKER: &str = "EOF";

// Group 1: key. Group 2: the `: ` separator. Group 3: trailing content.
// Without the separator the line introduces a data section named by the key
// and the trailing content is ignored.
const ENTRY_PATTERN: &str = r"^[ \t]*([A-Za-z0-9_]+)(: )?[ \t]*(.*)$";

/// Shape of one input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineKind {
    Blank,
    EndMarker,
    Header { key: String, value: String },
    DataMarker(String),
}

pub(crate) struct LineClassifier {
    entry: Regex,
}

impl LineClassifier {
    pub(crate) fn new() -> TsplibResult<Self> {
        Ok(Self {
            entry: Regex::new(ENTRY_PATTERN)?,
        })
    }

    pub(crate) fn classify(&self, line: &str) -> TsplibResult<LineKind> {
        if line.trim().is_empty() {
            return Ok(LineKind::Blank);
        }

        if line == EOF_MARKER {
            return Ok(LineKind::EndMarker);
        }

        let Some(captures) = self.entry.captures(line) else {
            return Err(TsplibError::MalformedLine(line.to_string()));
        };

        let key = captures.get(1).map_or("", |m| m.as_str()).to_string();
        if captures.get(2).is_none() {
            return Ok(LineKind::DataMarker(key));
        }

        let value = captures.get(3).map_or("", |m| m.as_str()).trim_end();
        Ok(LineKind::Header {
            key,
            value: value.to_string(),
        })
    }
}
