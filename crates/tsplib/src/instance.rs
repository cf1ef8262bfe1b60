//! Parsed TSPLIB instance and its serialization back to text.

use std::{
    fmt::{Display, Formatter},
    fs::{self, File},
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::{
    Dist, Pos, TsplibError, TsplibResult,
    keywords::{
        DataSection, DisplayDataType, EdgeWeightFormat, EdgeWeightType, ProblemType, SpecField,
    },
    matrix::{Matrix, SquareMatrix},
    parser::InstanceParser,
    spec_writer::SpecWriter,
};

const EOF_MARKER: &str = "EOF";
const TSPLIB_NODE_ID_BASE: usize = 1;

/// A symmetric TSP instance with explicit edge weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub(crate) name: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) distances: SquareMatrix<Dist>,
    /// One `(x, y)` row per node, used only for display.
    pub(crate) positions: Option<Matrix<Pos>>,
}

impl Instance {
    /// Opens and parses an instance file. The file is closed on every exit path.
    pub fn from_file(path: impl AsRef<Path>) -> TsplibResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TsplibError::FileNotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses an instance held in memory.
    pub fn from_text(text: impl AsRef<str>) -> TsplibResult<Self> {
        Self::from_reader(Cursor::new(text.as_ref().as_bytes()))
    }

    /// Parses an instance from any buffered reader, up to its `EOF` line.
    pub fn from_reader(reader: impl BufRead) -> TsplibResult<Self> {
        InstanceParser::new(reader)?.parse()
    }

    /// Builds an instance from a distance matrix, e.g. to write it out.
    pub fn new(distances: SquareMatrix<Dist>) -> Self {
        Self {
            name: None,
            comment: None,
            distances,
            positions: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attaches display coordinates. Fails unless there is one `(x, y)` row per node.
    pub fn with_positions(mut self, positions: Matrix<Pos>) -> TsplibResult<Self> {
        if positions.rows() != self.dimension() || positions.cols() != 2 {
            return Err(TsplibError::invalid_value(
                DataSection::DisplayDataSection.keyword(),
                format!("{}x{} positions", positions.rows(), positions.cols()),
            ));
        }
        self.positions = Some(positions);
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn dimension(&self) -> usize {
        self.distances.size()
    }

    pub fn distances(&self) -> &SquareMatrix<Dist> {
        &self.distances
    }

    pub fn distance(&self, from: usize, to: usize) -> Dist {
        self.distances[(from, to)]
    }

    pub fn positions(&self) -> Option<&Matrix<Pos>> {
        self.positions.as_ref()
    }

    /// Display coordinates of the 0-based `node`, if the instance has any.
    pub fn position(&self, node: usize) -> Option<(Pos, Pos)> {
        let positions = self.positions.as_ref()?;
        (node < positions.rows()).then(|| (positions[(node, 0)], positions[(node, 1)]))
    }

    /// Text form of this instance with edge weights laid out as `format`.
    pub fn to_tsplib(&self, format: EdgeWeightFormat) -> TsplibText<'_> {
        TsplibText {
            instance: self,
            format,
        }
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>, format: EdgeWeightFormat) -> TsplibResult<()> {
        fs::write(path, self.to_tsplib(format).to_string())?;
        Ok(())
    }
}

/// [`Display`] adapter returned by [`Instance::to_tsplib`].
pub struct TsplibText<'a> {
    instance: &'a Instance,
    format: EdgeWeightFormat,
}

impl Display for TsplibText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let instance = self.instance;
        let n = instance.dimension();
        let display_type = if instance.positions.is_some() {
            DisplayDataType::TwodDisplay
        } else {
            DisplayDataType::NoDisplay
        };
        let mut writer = SpecWriter::new(f);

        writer.opt_kv_colon(SpecField::Name, instance.name())?;
        writer.kv_colon(SpecField::Type, ProblemType::Tsp)?;
        writer.opt_kv_colon(SpecField::Comment, instance.comment())?;
        writer.kv_colon(SpecField::Dimension, n)?;
        writer.kv_colon(SpecField::EdgeWeightType, EdgeWeightType::Explicit)?;
        writer.kv_colon(SpecField::EdgeWeightFormat, self.format)?;
        writer.kv_colon(SpecField::DisplayDataType, display_type)?;

        writer.line(DataSection::EdgeWeightSection)?;
        for i in 0..n {
            let cols = self.format.cols(i, n);
            if cols.is_empty() {
                continue;
            }
            writer.row(cols.map(|j| instance.distances[(i, j)]))?;
        }

        if let Some(positions) = &instance.positions {
            writer.line(DataSection::DisplayDataSection)?;
            for (idx, pos) in positions.iter_rows().enumerate() {
                writer.row([
                    (idx + TSPLIB_NODE_ID_BASE).to_string(),
                    pos[0].to_string(),
                    pos[1].to_string(),
                ])?;
            }
        }

        writer.line(EOF_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::Instance;
    use crate::{
        TsplibError,
        keywords::EdgeWeightFormat,
        matrix::{Matrix, SquareMatrix},
    };

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tsplib-tests-{name}-{nanos}"))
    }

    fn sample() -> Instance {
        let distances = SquareMatrix::from(vec![
            vec![0, 29, 82, 46],
            vec![29, 0, 55, 46],
            vec![82, 55, 0, 68],
            vec![46, 46, 68, 0],
        ]);
        let mut positions = Matrix::new(4, 2);
        for (node, (x, y)) in [(0.5, 1.0), (2.0, -3.25), (4.0, 4.0), (1e-3, 7.0)]
            .into_iter()
            .enumerate()
        {
            positions[(node, 0)] = x;
            positions[(node, 1)] = y;
        }
        Instance::new(distances)
            .with_name("sample4")
            .with_comment("hand-made: 4 nodes")
            .with_positions(positions)
            .expect("positions match dimension")
    }

    #[test]
    fn every_layout_round_trips() {
        let original = sample();
        for &format in EdgeWeightFormat::ALL {
            let text = original.to_tsplib(format).to_string();
            let parsed = Instance::from_text(&text).unwrap_or_else(|e| panic!("{format}: {e}\n{text}"));
            assert_eq!(parsed, original, "{format}");
            assert!(parsed.distances().is_symmetric(), "{format}");
        }
    }

    #[test]
    fn writer_emits_header_then_sections() {
        let text = sample().to_tsplib(EdgeWeightFormat::UpperRow).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "NAME: sample4");
        assert_eq!(lines[1], "TYPE: TSP");
        assert_eq!(lines[2], "COMMENT: hand-made: 4 nodes");
        assert_eq!(lines[3], "DIMENSION: 4");
        assert_eq!(lines[4], "EDGE_WEIGHT_TYPE: EXPLICIT");
        assert_eq!(lines[5], "EDGE_WEIGHT_FORMAT: UPPER_ROW");
        assert_eq!(lines[6], "DISPLAY_DATA_TYPE: TWOD_DISPLAY");
        assert!(text.contains("EDGE_WEIGHT_SECTION\n29 82 46\n55 46\n68\nDISPLAY_DATA_SECTION\n"));
        assert!(text.contains("\n2 2 -3.25\n"));
        assert!(text.ends_with("EOF\n"));
    }

    #[test]
    fn writer_without_positions_declares_no_display() {
        let instance = Instance::new(SquareMatrix::from(vec![vec![0, 3], vec![3, 0]]));
        let text = instance.to_tsplib(EdgeWeightFormat::LowerDiagRow).to_string();
        assert_eq!(
            text,
            "TYPE: TSP\nDIMENSION: 2\nEDGE_WEIGHT_TYPE: EXPLICIT\nEDGE_WEIGHT_FORMAT: LOWER_DIAG_ROW\n\
             DISPLAY_DATA_TYPE: NO_DISPLAY\nEDGE_WEIGHT_SECTION\n0\n3 0\nEOF\n"
        );
        assert_eq!(Instance::from_text(&text).unwrap(), instance);
    }

    #[test]
    fn writer_handles_large_instances() {
        let n = 300;
        let mut distances = SquareMatrix::new(n);
        for i in 0..n {
            for j in i + 1..n {
                distances.set_symmetric(i, j, (i * n + j) as i64);
            }
        }
        let instance = Instance::new(distances);

        let text = instance.to_tsplib(EdgeWeightFormat::UpperRow).to_string();
        let section = text
            .split_once("EDGE_WEIGHT_SECTION\n")
            .and_then(|(_, rest)| rest.strip_suffix("EOF\n"))
            .expect("edge weight section");
        assert_eq!(section.lines().count(), n - 1);
        assert_eq!(section.lines().next_back(), Some("89699"));
        assert_eq!(Instance::from_text(&text).unwrap(), instance);
    }

    #[test]
    fn with_positions_checks_shape() {
        let instance = Instance::new(SquareMatrix::new(3));
        let err = instance.with_positions(Matrix::new(2, 2)).unwrap_err();
        assert!(matches!(err, TsplibError::InvalidFieldValue { .. }), "{err}");
    }

    #[test]
    fn file_round_trip_and_missing_file() {
        let dir = unique_temp_dir("instance-file");
        fs::create_dir_all(&dir).expect("create temp dir");

        let path = dir.join("sample4.tsp");
        let original = sample();
        original
            .write_to_file(&path, EdgeWeightFormat::FullMatrix)
            .expect("write instance file");
        let parsed = Instance::from_file(&path).expect("parse instance file");
        assert_eq!(parsed, original);

        let err = Instance::from_file(dir.join("missing.tsp")).unwrap_err();
        assert!(matches!(err, TsplibError::FileNotOpen { .. }), "{err}");

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }
}
