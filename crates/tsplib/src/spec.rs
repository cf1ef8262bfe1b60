//! Validation of specification (header) entries into a typed field table.

use std::collections::HashMap;

use log::{trace, warn};

use crate::{
    TsplibError, TsplibResult,
    keywords::{DisplayDataType, EdgeWeightType, NodeCoordType, ProblemType, SpecField},
};

/// A validated header value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(usize),
}

/// Header fields validated so far in one parse, keyed by field name.
#[derive(Debug, Default)]
pub struct FieldTable {
    entries: HashMap<SpecField, FieldValue>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one `key: value` entry and records it. Later entries for the
    /// same key replace earlier ones.
    pub fn apply(&mut self, key: &str, value: &str) -> TsplibResult<()> {
        let field = SpecField::from_keyword(key).ok_or_else(|| TsplibError::unsupported_field(key))?;
        let normalized = validate(field, value)?;

        trace!("header: {field} = {value}");
        if let Some(previous) = self.entries.insert(field, normalized)
            && field != SpecField::Comment
        {
            warn!("header: {field} redefined; previous value {previous:?} replaced");
        }
        Ok(())
    }

    pub fn get(&self, field: SpecField) -> Option<&FieldValue> {
        self.entries.get(&field)
    }

    pub fn text(&self, field: SpecField) -> Option<&str> {
        match self.entries.get(&field)? {
            FieldValue::Text(text) => Some(text),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn integer(&self, field: SpecField) -> Option<usize> {
        match self.entries.get(&field)? {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

fn validate(field: SpecField, value: &str) -> TsplibResult<FieldValue> {
    let accepted = match field {
        SpecField::Name | SpecField::Comment => true,
        // Checked against the format registry once the section is reached.
        SpecField::EdgeWeightFormat => true,
        SpecField::Type => ProblemType::from_keyword(value).is_some(),
        SpecField::EdgeWeightType => EdgeWeightType::from_keyword(value).is_some(),
        SpecField::NodeCoordType => NodeCoordType::from_keyword(value).is_some(),
        SpecField::DisplayDataType => DisplayDataType::from_keyword(value).is_some(),
        SpecField::Dimension => {
            return match value.parse::<usize>() {
                Ok(n) if n > 0 => Ok(FieldValue::Integer(n)),
                _ => Err(TsplibError::invalid_value(field.keyword(), value)),
            };
        }
    };

    if !accepted {
        return Err(TsplibError::invalid_value(field.keyword(), value));
    }
    Ok(FieldValue::Text(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{FieldTable, FieldValue};
    use crate::{TsplibError, keywords::SpecField};

    fn apply(key: &str, value: &str) -> Result<FieldTable, TsplibError> {
        let mut table = FieldTable::new();
        table.apply(key, value)?;
        Ok(table)
    }

    #[test]
    fn free_text_fields_are_stored_verbatim() {
        let table = apply("NAME", "gr 17 (sym)").unwrap();
        assert_eq!(table.text(SpecField::Name), Some("gr 17 (sym)"));

        let table = apply("EDGE_WEIGHT_FORMAT", "LOWER_COL").unwrap();
        assert_eq!(table.text(SpecField::EdgeWeightFormat), Some("LOWER_COL"));
    }

    #[test]
    fn dimension_is_a_positive_integer() {
        let table = apply("DIMENSION", "17").unwrap();
        assert_eq!(table.get(SpecField::Dimension), Some(&FieldValue::Integer(17)));
        assert_eq!(table.integer(SpecField::Dimension), Some(17));
        assert_eq!(table.text(SpecField::Dimension), None);

        for bad in ["0", "-3", "seventeen", "", "4.5"] {
            let err = apply("DIMENSION", bad).unwrap_err();
            assert!(
                matches!(&err, TsplibError::InvalidFieldValue { field, value } if field == "DIMENSION" && value == bad),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn enumerated_fields_accept_only_their_values() {
        assert!(apply("TYPE", "TSP").is_ok());
        assert!(apply("EDGE_WEIGHT_TYPE", "EXPLICIT").is_ok());
        assert!(apply("NODE_COORD_TYPE", "NO_COORDS").is_ok());
        assert!(apply("DISPLAY_DATA_TYPE", "TWOD_DISPLAY").is_ok());
        assert!(apply("DISPLAY_DATA_TYPE", "NO_DISPLAY").is_ok());

        for (key, value) in [
            ("TYPE", "ATSP"),
            ("TYPE", "tsp"),
            ("EDGE_WEIGHT_TYPE", "EUC_2D"),
            ("NODE_COORD_TYPE", "TWOD_COORDS"),
            ("DISPLAY_DATA_TYPE", "COORD_DISPLAY"),
        ] {
            let err = apply(key, value).unwrap_err();
            assert!(
                matches!(&err, TsplibError::InvalidFieldValue { field, .. } if field == key),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn unknown_keys_are_unsupported() {
        for key in ["CAPACITY", "EDGE_DATA_FORMAT", "name", "NODE_COORD_SECTION"] {
            let err = apply(key, "x").unwrap_err();
            assert!(
                matches!(&err, TsplibError::UnsupportedField(k) if k == key),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn last_write_wins() {
        let mut table = FieldTable::new();
        table.apply("COMMENT", "first").unwrap();
        table.apply("COMMENT", "second").unwrap();
        table.apply("DIMENSION", "3").unwrap();
        table.apply("DIMENSION", "5").unwrap();

        assert_eq!(table.text(SpecField::Comment), Some("second"));
        assert_eq!(table.integer(SpecField::Dimension), Some(5));
        assert_eq!(table.get(SpecField::Name), None);
    }
}
