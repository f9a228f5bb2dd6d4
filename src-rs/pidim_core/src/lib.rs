//! Dimensional matrix engine for dimensional analysis.
//!
//! Physical quantities are described as [`Variable`]s carrying exponents
//! over named base dimensions. A [`Group`] collects variables without
//! repetition, and a [`DimensionalMatrix`] arranges their exponents with
//! one row per dimension and one column per variable, exposing its rank,
//! a maximal set of independent rows and per-variable submatrices.
//!
//! ```rust
//! use pidim_core::{DimensionalMatrix, Variable};
//!
//! let force = Variable::new("F", [("M", 1), ("L", 1), ("T", -2)]);
//! let stiffness = Variable::new("k", [("M", 1), ("T", -2)]);
//! let displacement = Variable::new("x", [("L", 1)]);
//!
//! let matrix = DimensionalMatrix::new([force.clone(), stiffness, displacement.clone()]);
//! let submatrix = matrix.submatrix(&[&force, &displacement])?;
//!
//! assert_eq!(submatrix.shape(), (3, 2));
//! # Ok::<(), pidim_core::matrix::SubmatrixError>(())
//! ```

pub mod diagnostics;
pub mod group;
pub mod matrix;
pub mod variable;


pub use diagnostics::{Advisory, DiagnosticSink, DiscardDiagnostics};
pub use group::{Group, HomogeneousGroup};
pub use matrix::{DimensionalMatrix, RationalMatrix};
pub use variable::{DimensionMap, Exponent, Variable, VariableBuilder, VariableError};
