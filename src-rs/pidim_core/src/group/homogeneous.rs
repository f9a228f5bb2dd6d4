//! Groups that only keep variables related to each other.

use crate::{
    diagnostics::{Advisory, DiagnosticSink},
    group::{Group, collect_dimensions},
    variable::Variable,
};

/// A dimensionally homogeneous group of variables.
///
/// A variable that is the only one carrying some dimension can never be
/// combined with the others into a dimensionless product. Such variables
/// are discarded, one at a time, until every dimension is shared by at
/// least two variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomogeneousGroup {
    group: Group,
    discarded: Vec<Variable>,
}

impl HomogeneousGroup {
    /// Creates a homogeneous group from the given variables.
    ///
    /// If any variable is discarded, an [`Advisory::UnrelatedVariables`]
    /// listing them is reported to `diagnostics`.
    pub fn new(
        variables: impl IntoIterator<Item = Variable>,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut remaining = Group::new(variables).variables().to_vec();
        let mut discarded = Vec::new();

        while let Some(index) = find_unrelated_variable(&remaining) {
            discarded.push(remaining.remove(index));
        }

        if !discarded.is_empty() {
            diagnostics.report(Advisory::UnrelatedVariables {
                variables: discarded.clone(),
            });
        }

        Self {
            group: Group::new(remaining),
            discarded,
        }
    }

    /// Returns the underlying group.
    #[must_use]
    pub const fn group(&self) -> &Group {
        &self.group
    }

    /// Returns the kept variables.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        self.group.variables()
    }

    /// Returns the dimensions of the kept variables.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        self.group.dimensions()
    }

    /// Returns the discarded variables, in discard order.
    #[must_use]
    pub fn discarded(&self) -> &[Variable] {
        &self.discarded
    }
}

/// Finds the first variable that alone carries one of the dimensions,
/// scanning dimensions in first-seen order.
fn find_unrelated_variable(variables: &[Variable]) -> Option<usize> {
    collect_dimensions(variables).iter().find_map(|dimension| {
        let mut carriers = variables
            .iter()
            .enumerate()
            .filter(|(_, variable)| variable.dimensions().contains(dimension))
            .map(|(index, _)| index);

        match (carriers.next(), carriers.next()) {
            (Some(index), None) => Some(index),
            (None | Some(_), _) => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str, dimensions: &[(&str, i64)]) -> Variable {
        Variable::new(name, dimensions.iter().copied())
    }

    #[test]
    fn related_variables_are_kept() {
        let force = variable("F", &[("M", 1), ("L", 1), ("T", -2)]);
        let stiffness = variable("k", &[("M", 1), ("T", -2)]);
        let displacement = variable("x", &[("L", 1)]);
        let mut diagnostics: Vec<Advisory> = Vec::new();

        let group = HomogeneousGroup::new(
            [force.clone(), stiffness.clone(), displacement.clone()],
            &mut diagnostics,
        );

        assert_eq!(group.variables(), [force, stiffness, displacement]);
        assert!(group.discarded().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn lone_dimension_carrier_is_discarded() {
        let force = variable("F", &[("M", 1), ("L", 1), ("T", -2)]);
        let stiffness = variable("k", &[("M", 1), ("T", -2)]);
        let displacement = variable("x", &[("L", 1)]);
        let current = variable("i", &[("I", 1)]);
        let mut diagnostics: Vec<Advisory> = Vec::new();

        let group = HomogeneousGroup::new(
            [force.clone(), current.clone(), stiffness.clone(), displacement.clone()],
            &mut diagnostics,
        );

        assert_eq!(group.variables(), [force, stiffness, displacement]);
        assert_eq!(group.dimensions(), ["M", "L", "T"]);
        assert_eq!(group.discarded(), [current.clone()]);
        assert_eq!(
            diagnostics,
            [Advisory::UnrelatedVariables {
                variables: vec![current]
            }]
        );
    }

    #[test]
    fn discarding_cascades() {
        // once `q` goes, `E` is the only carrier of `I`
        let length = variable("L0", &[("L", 1)]);
        let width = variable("W", &[("L", 1)]);
        let charge = variable("q", &[("I", 1), ("T", 1)]);
        let field = variable("E", &[("L", 1), ("I", -1)]);
        let mut diagnostics: Vec<Advisory> = Vec::new();

        let group = HomogeneousGroup::new(
            [length.clone(), width.clone(), charge.clone(), field.clone()],
            &mut diagnostics,
        );

        assert_eq!(group.variables(), [length, width]);
        assert_eq!(group.discarded(), [charge.clone(), field.clone()]);
        assert_eq!(
            diagnostics,
            [Advisory::UnrelatedVariables {
                variables: vec![charge, field]
            }]
        );
    }

    #[test]
    fn nondimensional_variables_are_kept() {
        let angle = Variable::nondimensional("theta");
        let mut diagnostics: Vec<Advisory> = Vec::new();

        let group = HomogeneousGroup::new([angle.clone()], &mut diagnostics);

        assert_eq!(group.variables(), [angle]);
        assert!(diagnostics.is_empty());
    }
}
