//! Dimensional matrices.
//!
//! A dimensional matrix has one row per dimension and one column per
//! variable; entry `[i, j]` is the exponent of dimension `i` in variable
//! `j`. Its rank is the number of independent dimensions exercised by the
//! variables, and its independent rows name a maximal set of dimensions
//! that are not combinations of each other.

mod error;
mod rational;

use std::sync::OnceLock;

use indexmap::{IndexMap, IndexSet};

use crate::{
    diagnostics::{Advisory, DiagnosticSink, DiscardDiagnostics},
    group::Group,
    variable::Variable,
};

pub use error::{DimensionOrderError, SubmatrixError};
pub use rational::RationalMatrix;

/// A dimensional matrix built from a group of variables.
///
/// The matrix, its rank and its independent rows are computed when the
/// matrix is built. The per-variable column vectors used by
/// [`DimensionalMatrix::submatrix`] are built on the first request and
/// kept for the lifetime of the matrix.
///
/// The variables of a built matrix can not be replaced. Build a new matrix
/// instead.
///
/// # Examples
///
/// ```rust
/// use pidim_core::{DimensionalMatrix, Variable};
///
/// let force = Variable::new("F", [("M", 1), ("L", 1), ("T", -2)]);
/// let stiffness = Variable::new("k", [("M", 1), ("T", -2)]);
/// let displacement = Variable::new("x", [("L", 1)]);
///
/// let matrix = DimensionalMatrix::new([force, stiffness, displacement]);
///
/// assert_eq!(matrix.dimensions(), ["M", "L", "T"]);
/// assert_eq!(matrix.rank(), 2);
/// assert_eq!(matrix.independent_rows(), [0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct DimensionalMatrix {
    group: Group,
    dimensions: Vec<String>,
    matrix: RationalMatrix,
    rank: usize,
    independent_rows: Vec<usize>,
    submatrices: OnceLock<IndexMap<Variable, RationalMatrix>>,
}

impl DimensionalMatrix {
    /// Creates a dimensional matrix, deriving the dimensions from the
    /// variables.
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        Self::from_group(Group::new(variables), None, &mut DiscardDiagnostics)
    }

    /// Creates a dimensional matrix with an explicit dimension order.
    ///
    /// Dimensions no variable declares produce rows of zeros. Dimensions
    /// declared by the variables but left out are ignored.
    pub fn with_dimensions<D: Into<String>>(
        variables: impl IntoIterator<Item = Variable>,
        dimensions: impl IntoIterator<Item = D>,
    ) -> Self {
        let dimensions = dimensions.into_iter().map(Into::into).collect();
        Self::from_group(Group::new(variables), Some(dimensions), &mut DiscardDiagnostics)
    }

    /// Creates a dimensional matrix from a group.
    ///
    /// When `dimensions` is `None`, the group's dimensions are used.
    /// Repeated dimensions keep their first position.
    ///
    /// If the rank is lower than the number of dimensions, an
    /// [`Advisory::RedundantDimensions`] is reported to `diagnostics`.
    pub fn from_group(
        group: Group,
        dimensions: Option<Vec<String>>,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Self {
        let dimensions = dimensions.map_or_else(
            || group.dimensions().to_vec(),
            |dimensions| {
                dimensions
                    .into_iter()
                    .collect::<IndexSet<_>>()
                    .into_iter()
                    .collect()
            },
        );

        let matrix = build_matrix(group.variables(), &dimensions);
        let rank = matrix.rank();
        let independent_rows = find_independent_rows(&matrix, rank);

        if independent_rows.len() < dimensions.len() {
            diagnostics.report(Advisory::RedundantDimensions {
                dimensions: dimensions.clone(),
                independent: independent_rows
                    .iter()
                    .map(|&row| dimensions[row].clone())
                    .collect(),
            });
        }

        Self {
            group,
            dimensions,
            matrix,
            rank,
            independent_rows,
            submatrices: OnceLock::new(),
        }
    }

    /// Returns the variables, in column order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        self.group.variables()
    }

    /// Returns the dimensions, in row order.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns the matrix of exponents.
    #[must_use]
    pub const fn matrix(&self) -> &RationalMatrix {
        &self.matrix
    }

    /// Returns the rank of the matrix.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the indices of a maximal set of independent rows.
    ///
    /// When every row is independent these are simply `0..n`. Otherwise
    /// they are the lexicographically first independent rows.
    #[must_use]
    pub fn independent_rows(&self) -> &[usize] {
        &self.independent_rows
    }

    /// Returns the dimensions of the independent rows.
    #[must_use]
    pub fn independent_dimensions(&self) -> Vec<&str> {
        self.independent_rows
            .iter()
            .map(|&row| self.dimensions[row].as_str())
            .collect()
    }

    /// Checks if the per-variable column vectors have been built.
    #[must_use]
    pub fn has_cached_submatrices(&self) -> bool {
        self.submatrices.get().is_some()
    }

    /// Builds the submatrix made of the given variables' columns.
    ///
    /// Columns follow the order of `variables`, and a variable given twice
    /// produces two columns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variables that are not part of the
    /// matrix, if any.
    pub fn submatrix(&self, variables: &[&Variable]) -> Result<RationalMatrix, SubmatrixError> {
        let invalid: IndexSet<&Variable> = variables
            .iter()
            .copied()
            .filter(|variable| !self.group.contains(variable))
            .collect();

        if !invalid.is_empty() {
            return Err(SubmatrixError::VariablesNotInMatrix {
                invalid: invalid.into_iter().cloned().collect(),
                available: self.variables().to_vec(),
            });
        }

        let submatrices = self.submatrices.get_or_init(|| self.build_submatrices());
        let columns = variables.iter().map(|&variable| &submatrices[variable]);

        Ok(RationalMatrix::hstack(self.matrix.nrows(), columns))
    }

    /// Checks if the given variables form a dimensionally independent
    /// basis, that is, if there are `rank` of them and their submatrix
    /// restricted to the independent rows has rank `rank`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is not part of the matrix.
    pub fn forms_scaling_basis(&self, variables: &[&Variable]) -> Result<bool, SubmatrixError> {
        let submatrix = self.submatrix(variables)?;

        if variables.len() != self.rank {
            return Ok(false);
        }

        Ok(submatrix.select_rows(&self.independent_rows).rank() == self.rank)
    }

    /// Returns a new matrix whose dimensions start with `leading`, followed
    /// by the remaining dimensions in their current order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the dimensions that are not part of the
    /// matrix, if any.
    pub fn reorder_dimensions(
        &self,
        leading: &[&str],
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Self, DimensionOrderError> {
        let unknown: IndexSet<&str> = leading
            .iter()
            .copied()
            .filter(|dimension| !self.dimensions.iter().any(|known| known == dimension))
            .collect();

        if !unknown.is_empty() {
            return Err(DimensionOrderError::UnknownDimensions {
                unknown: unknown.into_iter().map(str::to_string).collect(),
                available: self.dimensions.clone(),
            });
        }

        let dimensions = leading
            .iter()
            .map(|dimension| (*dimension).to_string())
            .chain(self.dimensions.iter().cloned())
            .collect();

        Ok(Self::from_group(self.group.clone(), Some(dimensions), diagnostics))
    }

    fn build_submatrices(&self) -> IndexMap<Variable, RationalMatrix> {
        self.variables()
            .iter()
            .enumerate()
            .map(|(col, variable)| (variable.clone(), self.matrix.column(col)))
            .collect()
    }
}

impl PartialEq for DimensionalMatrix {
    /// Matrices are equal when they are built from the same set of
    /// variables.
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
    }
}

impl Eq for DimensionalMatrix {}

fn build_matrix(variables: &[Variable], dimensions: &[String]) -> RationalMatrix {
    RationalMatrix::from_fn(dimensions.len(), variables.len(), |row, col| {
        variables[col].exponent(&dimensions[row])
    })
}

fn find_independent_rows(matrix: &RationalMatrix, rank: usize) -> Vec<usize> {
    if matrix.nrows() <= rank {
        return (0..matrix.nrows()).collect();
    }

    let (_, pivots) = matrix.transpose().rref();
    pivots
}
