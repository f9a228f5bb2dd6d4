use std::fmt;

use pidim_error::{AsPidimError, Context};

use crate::{diagnostics::join_names, variable::Variable};

/// Errors raised when requesting a submatrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmatrixError {
    /// Some requested variables are not part of the matrix.
    VariablesNotInMatrix {
        /// The offending variables, without repetition
        invalid: Vec<Variable>,
        /// The variables of the matrix
        available: Vec<Variable>,
    },
}

impl AsPidimError for SubmatrixError {
    fn message(&self) -> String {
        match self {
            Self::VariablesNotInMatrix { invalid, .. } => format!(
                "variables ({}) are not part of the dimensional matrix",
                join_names(invalid)
            ),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::VariablesNotInMatrix { available, .. } => vec![Context::Note(format!(
                "the dimensional matrix contains the variables ({})",
                join_names(available)
            ))],
        }
    }
}

impl fmt::Display for SubmatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubmatrixError {}

/// Errors raised when reordering the dimensions of a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionOrderError {
    /// Some requested dimensions are not part of the matrix.
    UnknownDimensions {
        /// The offending dimensions, without repetition
        unknown: Vec<String>,
        /// The dimensions of the matrix
        available: Vec<String>,
    },
}

impl AsPidimError for DimensionOrderError {
    fn message(&self) -> String {
        match self {
            Self::UnknownDimensions { unknown, .. } => {
                format!("Invalid dimensions ({})", unknown.join(", "))
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownDimensions { available, .. } => vec![Context::Note(format!(
                "the dimensional matrix has the dimensions ({})",
                available.join(", ")
            ))],
        }
    }
}

impl fmt::Display for DimensionOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DimensionOrderError {}
