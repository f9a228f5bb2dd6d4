//! Non-fatal advisories raised while analysing variables.
//!
//! The engine never prints. Operations that may adjust their input accept a
//! [`DiagnosticSink`] supplied by the caller and report an [`Advisory`]
//! there, then carry on with the adjusted input.

use pidim_error::{AsPidimError, Context};

use crate::variable::Variable;

/// An advisory about an adjusted computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Variables that could not be related to the others were discarded.
    UnrelatedVariables {
        /// The discarded variables, in discard order
        variables: Vec<Variable>,
    },
    /// Some dimensions are linear combinations of the others.
    RedundantDimensions {
        /// All dimensions of the matrix
        dimensions: Vec<String>,
        /// The dimensions treated as independent
        independent: Vec<String>,
    },
}

impl Advisory {
    /// Returns the name of the advisory category.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnrelatedVariables { .. } => "UnrelatedVariableWarning",
            Self::RedundantDimensions { .. } => "RedundantDimensionWarning",
        }
    }
}

impl AsPidimError for Advisory {
    fn message(&self) -> String {
        match self {
            Self::UnrelatedVariables { variables } => {
                format!("Discarded variables ({})", join_names(variables))
            }
            Self::RedundantDimensions {
                dimensions,
                independent,
            } => format!(
                "From the dimensions ({}), only ({}) are treated as independent",
                dimensions.join(", "),
                independent.join(", ")
            ),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnrelatedVariables { .. } => vec![Context::Note(
                "each discarded variable was the only one carrying one of the group's dimensions"
                    .to_string(),
            )],
            Self::RedundantDimensions { .. } => vec![],
        }
    }
}

pub(crate) fn join_names(variables: &[Variable]) -> String {
    variables
        .iter()
        .map(Variable::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A destination for advisories.
pub trait DiagnosticSink {
    /// Records an advisory.
    fn report(&mut self, advisory: Advisory);
}

impl DiagnosticSink for Vec<Advisory> {
    fn report(&mut self, advisory: Advisory) {
        self.push(advisory);
    }
}

/// A sink that drops every advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardDiagnostics;

impl DiagnosticSink for DiscardDiagnostics {
    fn report(&mut self, advisory: Advisory) {
        let _ = advisory;
    }
}
