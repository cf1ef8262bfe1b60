//! `tsplib` reads and writes symmetric TSP instances in the TSPLIB text format,
//! restricted to explicit edge weights.
//!
//! A file is a block of `KEY: value` specification entries followed by data
//! sections introduced by a bare key line, and ends at an `EOF` line:
//!
//! ```text
//! NAME: sample4
//! TYPE: TSP
//! DIMENSION: 4
//! EDGE_WEIGHT_TYPE: EXPLICIT
//! EDGE_WEIGHT_FORMAT: LOWER_DIAG_ROW
//! EDGE_WEIGHT_SECTION
//! 0 1 0 2 3 0 4 5 6 0
//! EOF
//! ```
//!
//! Supported layouts are `FULL_MATRIX`, `UPPER_ROW` and `LOWER_DIAG_ROW`, plus
//! an optional `DISPLAY_DATA_SECTION` of 2-D display coordinates.
//!
//! # Quickstart
//!
//! ```no_run
//! use tsplib::{EdgeWeightFormat, Instance};
//!
//! fn main() -> tsplib::TsplibResult<()> {
//!     let instance = Instance::from_file("gr17.tsp")?;
//!     println!("{} nodes, d(0,1) = {}", instance.dimension(), instance.distance(0, 1));
//!     instance.write_to_file("gr17.full.tsp", EdgeWeightFormat::FullMatrix)?;
//!     Ok(())
//! }
//! ```

pub mod instance;
pub mod keywords;
pub mod matrix;
pub mod spec;

mod error;
mod format;
mod line;
mod parser;
mod reader;
mod sections;
mod spec_writer;

pub use error::{InvalidNodeReason, TsplibError, TsplibResult};
pub use instance::{Instance, TsplibText};
pub use keywords::{DisplayDataType, EdgeWeightFormat};

/// Edge weight type used for every distance matrix.
pub type Dist = i64;

/// Display coordinate type.
pub type Pos = f64;
