//! Closed keyword sets accepted in the specification and data parts of a file.

use tsplib_derive::Keyword;

/// Header fields understood by the specification validator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Keyword)]
pub enum SpecField {
    Name,
    Type,
    Comment,
    Dimension,
    EdgeWeightType,
    EdgeWeightFormat,
    NodeCoordType,
    DisplayDataType,
}

/// Keys introducing a data section.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum DataSection {
    EdgeWeightSection,
    DisplayDataSection,
}

/// `TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum ProblemType {
    Tsp,
}

/// `EDGE_WEIGHT_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum EdgeWeightType {
    Explicit,
}

/// `NODE_COORD_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum NodeCoordType {
    NoCoords,
}

/// `DISPLAY_DATA_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum DisplayDataType {
    TwodDisplay,
    NoDisplay,
}

/// `EDGE_WEIGHT_FORMAT` layouts with a matrix builder.
///
/// Declaration order is registry order. Other TSPLIB layouts (`LOWER_ROW`,
/// `UPPER_DIAG_ROW`, the column variants) are deliberately absent and are
/// rejected like any unknown name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Keyword)]
pub enum EdgeWeightFormat {
    FullMatrix,
    UpperRow,
    LowerDiagRow,
}
