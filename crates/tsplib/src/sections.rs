//! Decoding of `EDGE_WEIGHT_SECTION` and `DISPLAY_DATA_SECTION` payloads.

use log::debug;

use crate::{
    Dist, InvalidNodeReason, Pos, TsplibError, TsplibResult,
    keywords::{DataSection, DisplayDataType, EdgeWeightFormat, SpecField},
    matrix::{Matrix, SquareMatrix},
    reader::TokenSource,
    spec::FieldTable,
};

const TSPLIB_NODE_ID_OFFSET: i64 = 1;

/// Sections decoded so far in one parse.
#[derive(Debug, Default)]
pub(crate) struct SectionData {
    pub(crate) distances: Option<SquareMatrix<Dist>>,
    pub(crate) positions: Option<Matrix<Pos>>,
}

impl SectionData {
    /// Decodes the section introduced by `key`, reading its payload from `tokens`.
    pub(crate) fn dispatch(
        &mut self,
        key: &str,
        fields: &FieldTable,
        tokens: &mut impl TokenSource,
    ) -> TsplibResult<()> {
        let section =
            DataSection::from_keyword(key).ok_or_else(|| TsplibError::unsupported_field(key))?;
        debug!("section: {section}");

        match section {
            DataSection::EdgeWeightSection => {
                self.distances = Some(parse_edge_weights(fields, tokens)?);
            }
            DataSection::DisplayDataSection => {
                self.positions = Some(parse_display_data(fields, tokens)?);
            }
        }
        Ok(())
    }
}

fn require_dimension(fields: &FieldTable, section: DataSection) -> TsplibResult<usize> {
    fields
        .integer(SpecField::Dimension)
        .ok_or_else(|| TsplibError::missing_field(SpecField::Dimension.keyword(), section.keyword()))
}

fn require_text(
    fields: &FieldTable,
    field: SpecField,
    section: DataSection,
) -> TsplibResult<&str> {
    fields
        .text(field)
        .ok_or_else(|| TsplibError::missing_field(field.keyword(), section.keyword()))
}

fn oversized_dimension(n: usize) -> TsplibError {
    TsplibError::invalid_value(SpecField::Dimension.keyword(), n.to_string())
}

fn parse_edge_weights(
    fields: &FieldTable,
    tokens: &mut impl TokenSource,
) -> TsplibResult<SquareMatrix<Dist>> {
    let section = DataSection::EdgeWeightSection;
    let n = require_dimension(fields, section)?;
    let format_name = require_text(fields, SpecField::EdgeWeightFormat, section)?;

    let mut matrix = SquareMatrix::try_new(n).ok_or_else(|| oversized_dimension(n))?;
    for i in 0..n {
        matrix[(i, i)] = 0;
    }

    let format = EdgeWeightFormat::lookup(format_name)?;
    debug!("section: reading {} {format} weights for n={n}", format.token_count(n));
    format.build(tokens, &mut matrix)?;
    Ok(matrix)
}

fn parse_display_data(
    fields: &FieldTable,
    tokens: &mut impl TokenSource,
) -> TsplibResult<Matrix<Pos>> {
    let section = DataSection::DisplayDataSection;
    let n = require_dimension(fields, section)?;
    let display_type = require_text(fields, SpecField::DisplayDataType, section)?;
    if DisplayDataType::from_keyword(display_type) != Some(DisplayDataType::TwodDisplay) {
        return Err(TsplibError::invalid_value(
            SpecField::DisplayDataType.keyword(),
            display_type,
        ));
    }

    let mut positions = Matrix::try_new(n, 2).ok_or_else(|| oversized_dimension(n))?;
    let mut visited = vec![false; n];
    for entry in 0..n {
        let node = next_value::<i64>(tokens, entry)?;
        let x = next_value::<Pos>(tokens, entry)?;
        let y = next_value::<Pos>(tokens, entry)?;

        let idx = node_index(node, n).ok_or(TsplibError::InvalidNode {
            index: node,
            reason: InvalidNodeReason::OutOfRange,
        })?;
        if visited[idx] {
            return Err(TsplibError::InvalidNode {
                index: node,
                reason: InvalidNodeReason::Duplicate,
            });
        }

        positions[(idx, 0)] = x;
        positions[(idx, 1)] = y;
        visited[idx] = true;
    }

    // n distinct in-range indices over n entries cover every node.
    debug_assert!(visited.iter().all(|&seen| seen));
    Ok(positions)
}

fn node_index(node: i64, n: usize) -> Option<usize> {
    let idx = usize::try_from(node.checked_sub(TSPLIB_NODE_ID_OFFSET)?).ok()?;
    (idx < n).then_some(idx)
}

fn next_value<T: std::str::FromStr>(
    tokens: &mut impl TokenSource,
    entry: usize,
) -> TsplibResult<T> {
    tokens
        .next_token()?
        .and_then(|token| token.parse::<T>().ok())
        .ok_or(TsplibError::DisplayDataParse { entry })
}
