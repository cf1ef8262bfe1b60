//! Matrix builders for the supported `EDGE_WEIGHT_FORMAT` layouts.

use std::ops::Range;

use crate::{
    Dist, TsplibError, TsplibResult, keywords::EdgeWeightFormat, matrix::SquareMatrix,
    reader::TokenSource,
};

impl EdgeWeightFormat {
    /// Looks up a layout by its exact name, failing with `UnsupportedFormat`.
    pub fn lookup(name: &str) -> TsplibResult<Self> {
        Self::from_keyword(name).ok_or_else(|| TsplibError::UnsupportedFormat(name.to_string()))
    }

    /// Number of tokens the layout reads for an `n x n` matrix.
    pub const fn token_count(self, n: usize) -> usize {
        match self {
            Self::FullMatrix => n * n,
            Self::UpperRow => n * n.saturating_sub(1) / 2,
            Self::LowerDiagRow => n * (n + 1) / 2,
        }
    }

    /// Columns of `row` that the layout stores for an `n x n` matrix.
    pub fn cols(self, row: usize, n: usize) -> Range<usize> {
        match self {
            Self::FullMatrix => 0..n,
            Self::UpperRow => row + 1..n,
            Self::LowerDiagRow => 0..row + 1,
        }
    }

    /// Cells read by the layout, in reading order.
    pub fn cells(self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).flat_map(move |i| self.cols(i, n).map(move |j| (i, j)))
    }

    pub(crate) fn build(
        self,
        tokens: &mut impl TokenSource,
        matrix: &mut SquareMatrix<Dist>,
    ) -> TsplibResult<()> {
        let symmetric = self != Self::FullMatrix;
        for (i, j) in self.cells(matrix.size()) {
            let value = next_dist(tokens, i, j)?;
            if symmetric {
                matrix.set_symmetric(i, j, value);
            } else {
                matrix[(i, j)] = value;
            }
        }
        Ok(())
    }
}

fn next_dist(tokens: &mut impl TokenSource, row: usize, col: usize) -> TsplibResult<Dist> {
    tokens
        .next_token()?
        .and_then(|token| token.parse::<Dist>().ok())
        .ok_or(TsplibError::MatrixParse { row, col })
}
