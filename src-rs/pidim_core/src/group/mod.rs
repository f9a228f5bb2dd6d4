//! Ordered, duplicate-free collections of variables.

mod homogeneous;

use std::{fmt, ptr, slice};

use indexmap::IndexSet;

use crate::variable::Variable;

pub use homogeneous::HomogeneousGroup;

/// A group of variables.
///
/// The group keeps the first occurrence of every variable, in the order
/// given, and derives the dimensions referenced by its members in
/// first-seen order.
///
/// Two groups are equal when they hold the same set of variables,
/// regardless of order.
#[derive(Debug, Clone, Default)]
pub struct Group {
    variables: Vec<Variable>,
    dimensions: Vec<String>,
}

impl Group {
    /// Creates a group from the given variables.
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        let mut group = Self::default();
        group.set_variables(variables);
        group
    }

    /// Returns the variables of the group.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Replaces the variables of the group.
    ///
    /// Duplicates are removed and the dimensions are recomputed.
    pub fn set_variables(&mut self, variables: impl IntoIterator<Item = Variable>) {
        let variables: IndexSet<Variable> = variables.into_iter().collect();
        self.variables = variables.into_iter().collect();
        self.dimensions = collect_dimensions(&self.variables);
    }

    /// Returns the dimension names referenced by the variables.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Checks if the group has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Checks if the variable belongs to the group.
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.variables.contains(variable)
    }

    /// Iterates over the variables in order.
    pub fn iter(&self) -> slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Returns the scaling variables, in order.
    #[must_use]
    pub fn scaling_variables(&self) -> Vec<&Variable> {
        self.filter(Variable::is_scaling)
    }

    /// Returns the variables that are not scaling, in order.
    #[must_use]
    pub fn nonscaling_variables(&self) -> Vec<&Variable> {
        self.filter(|variable| !variable.is_scaling())
    }

    /// Returns the dependent variables, in order.
    #[must_use]
    pub fn dependent_variables(&self) -> Vec<&Variable> {
        self.filter(Variable::is_dependent)
    }

    /// Returns the variables that are not dependent, in order.
    #[must_use]
    pub fn independent_variables(&self) -> Vec<&Variable> {
        self.filter(|variable| !variable.is_dependent())
    }

    fn filter(&self, predicate: impl Fn(&Variable) -> bool) -> Vec<&Variable> {
        self.variables
            .iter()
            .filter(|variable| predicate(variable))
            .collect()
    }
}

/// Collects the dimension names of the variables in first-seen order.
pub(crate) fn collect_dimensions(variables: &[Variable]) -> Vec<String> {
    let dimensions: IndexSet<&str> = variables
        .iter()
        .flat_map(|variable| variable.dimensions().names())
        .collect();

    dimensions.into_iter().map(str::to_string).collect()
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        // no duplicates on either side, so equal lengths and inclusion
        // imply equal sets
        self.len() == other.len() && self.iter().all(|variable| other.contains(variable))
    }
}

impl Eq for Group {}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Variable;
    type IntoIter = slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Variable> for Group {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variables = self
            .variables
            .iter()
            .map(Variable::name)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Group({variables})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str, dimensions: &[(&str, i64)]) -> Variable {
        Variable::new(name, dimensions.iter().copied())
    }

    fn scaling(name: &str, dimensions: &[(&str, i64)]) -> Variable {
        dimensions
            .iter()
            .fold(Variable::builder(name), |builder, (dimension, exponent)| {
                builder.exponent(*dimension, *exponent)
            })
            .scaling()
            .build()
            .expect("scaling variables in tests are dimensional")
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let a = variable("a", &[("A", 3), ("B", -1)]);
        let b = variable("b", &[("C", -4), ("A", 1)]);
        let c = variable("c", &[("A", -5)]);

        let group = Group::new([a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]);

        assert_eq!(group.variables(), [a, b, c]);
    }

    #[test]
    fn dimensions_are_ordered_union() {
        let a = variable("a", &[("A", 3), ("B", -1)]);
        let b = variable("b", &[("C", -4), ("A", 1)]);
        let c = variable("c", &[("D", -5), ("B", 2)]);

        let group = Group::new([a, b, c]);

        assert_eq!(group.dimensions(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_group_has_no_dimensions() {
        let group = Group::new([]);

        assert!(group.is_empty());
        assert!(group.dimensions().is_empty());
        assert_eq!(group.to_string(), "Group()");
    }

    #[test]
    fn nondimensional_group_has_no_dimensions() {
        let group = Group::new([
            Variable::nondimensional("A"),
            Variable::nondimensional("B"),
        ]);

        assert_eq!(group.len(), 2);
        assert!(group.dimensions().is_empty());
    }

    #[test]
    fn setting_variables_recomputes_dimensions() {
        let a = variable("a", &[("M", 1)]);
        let b = variable("b", &[("L", 1), ("T", 1)]);
        let mut group = Group::new([a.clone()]);

        group.set_variables([b.clone(), a.clone(), b.clone()]);

        assert_eq!(group.variables(), [b, a]);
        assert_eq!(group.dimensions(), ["L", "T", "M"]);
    }

    #[test]
    fn equality_is_set_based() {
        let a = variable("a", &[("M", 1)]);
        let b = variable("b", &[("L", 1)]);
        let c = variable("c", &[("T", 1)]);

        let group = Group::new([a.clone(), b.clone()]);

        assert_eq!(group, group);
        assert_eq!(group, Group::new([b.clone(), a.clone(), b.clone()]));
        assert_ne!(group, Group::new([a.clone()]));
        assert_ne!(group, Group::new([a, c]));
    }

    #[test]
    fn role_partitions_keep_order() {
        let rho = scaling("rho", &[("M", 1), ("L", -3)]);
        let v = scaling("V", &[("L", 1), ("T", -1)]);
        let d = scaling("D", &[("L", 1)]);
        let mu = variable("mu", &[("M", 1), ("L", -1), ("T", -1)]);
        let force = Variable::builder("F")
            .exponent("M", 1)
            .exponent("L", 1)
            .exponent("T", -2)
            .dependent()
            .build()
            .expect("a dependent force is valid");

        let group = Group::new([
            force.clone(),
            rho.clone(),
            mu.clone(),
            v.clone(),
            d.clone(),
        ]);

        assert_eq!(group.scaling_variables(), [&rho, &v, &d]);
        assert_eq!(group.nonscaling_variables(), [&force, &mu]);
        assert_eq!(group.dependent_variables(), [&force]);
        assert_eq!(group.independent_variables(), [&rho, &mu, &v, &d]);
    }

    #[test]
    fn variables_are_shared_not_copied() {
        let a = variable("a", &[("M", 1)]);
        let first = Group::new([a.clone()]);
        let second = Group::new([a.clone()]);

        assert!(first.variables()[0].is_same_instance(&second.variables()[0]));
        assert!(first.variables()[0].is_same_instance(&a));
    }

    #[test]
    fn display_lists_names() {
        let group = Group::new([variable("F", &[("M", 1)]), variable("x", &[("L", 1)])]);

        assert_eq!(group.to_string(), "Group(F, x)");
    }
}
