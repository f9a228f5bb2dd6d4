//! Physical variables annotated with dimension exponents.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use pidim_error::{AsPidimError, Context};

/// The exponent of a dimension.
///
/// Exponents are exact arbitrary-precision rationals, so rank computations
/// neither round nor overflow.
pub type Exponent = BigRational;

fn integer_exponent(value: i64) -> Exponent {
    Exponent::from_integer(BigInt::from(value))
}

/// A map of dimension names and their exponents.
///
/// For example, a force is represented as
/// `DimensionMap(IndexMap::from([("M", 1), ("L", 1), ("T", -2)]))`.
///
/// Dimensions with a zero exponent are never stored, so a map built from
/// `M=0` is equal to the empty map. Insertion order is kept because it
/// determines the row order of dimensional matrices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionMap(IndexMap<String, Exponent>);

impl DimensionMap {
    /// Creates a dimension map, dropping dimensions with a zero exponent.
    #[must_use]
    pub fn new(dimensions: IndexMap<String, Exponent>) -> Self {
        Self(
            dimensions
                .into_iter()
                .filter(|(_, exponent)| !exponent.is_zero())
                .collect(),
        )
    }

    /// Checks if every exponent is zero, which includes the empty map.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.0.values().all(Zero::is_zero)
    }

    /// Returns the exponent of the given dimension, if it is declared.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<Exponent> {
        self.0.get(dimension).cloned()
    }

    /// Checks if the dimension is declared.
    #[must_use]
    pub fn contains(&self, dimension: &str) -> bool {
        self.0.contains_key(dimension)
    }

    /// Returns the exponent of the given dimension, or zero if it is absent.
    #[must_use]
    pub fn exponent(&self, dimension: &str) -> Exponent {
        self.get(dimension).unwrap_or_else(Exponent::zero)
    }

    /// Returns the declared dimension names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the declared dimensions and exponents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Exponent)> {
        self.0
            .iter()
            .map(|(dimension, exponent)| (dimension.as_str(), exponent))
    }

    /// Returns the number of declared dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if no dimension is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Hash for DimensionMap {
    /// Hashes the entries in name order, since equality ignores
    /// insertion order.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.hash(state);
    }
}

impl<D: Into<String>> FromIterator<(D, Exponent)> for DimensionMap {
    fn from_iter<I: IntoIterator<Item = (D, Exponent)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(dimension, exponent)| (dimension.into(), exponent))
                .collect(),
        )
    }
}

/// A physical variable.
///
/// A variable is a name, the exponents of the dimensions it carries, and
/// two role flags. It is immutable once built. Cloning a variable clones a
/// shared handle, so a variable placed in several groups is never copied.
///
/// Two variables are equal when their names, dimensions, and role flags
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable(Arc<VariableData>);

#[derive(Debug, PartialEq, Eq, Hash)]
struct VariableData {
    name: String,
    dimensions: DimensionMap,
    is_dependent: bool,
    is_scaling: bool,
}

impl Variable {
    /// Creates a variable with integer exponents and no role.
    ///
    /// This cannot fail, since only scaling or dependent variables are
    /// validated. Use [`Variable::builder`] for roles or rational exponents.
    ///
    /// ```rust
    /// use pidim_core::Variable;
    ///
    /// let force = Variable::new("F", [("M", 1), ("L", 1), ("T", -2)]);
    /// assert_eq!(force.dimensions().names().collect::<Vec<_>>(), ["M", "L", "T"]);
    /// ```
    pub fn new<D: Into<String>>(
        name: impl Into<String>,
        dimensions: impl IntoIterator<Item = (D, i64)>,
    ) -> Self {
        let dimensions = dimensions
            .into_iter()
            .map(|(dimension, exponent)| (dimension, integer_exponent(exponent)))
            .collect();

        Self(Arc::new(VariableData {
            name: name.into(),
            dimensions,
            is_dependent: false,
            is_scaling: false,
        }))
    }

    /// Creates a nondimensional variable with no role.
    pub fn nondimensional(name: impl Into<String>) -> Self {
        Self::new::<String>(name, [])
    }

    /// Starts building a variable with the given name.
    pub fn builder(name: impl Into<String>) -> VariableBuilder {
        VariableBuilder {
            name: name.into(),
            dimensions: IndexMap::new(),
            is_dependent: false,
            is_scaling: false,
        }
    }

    /// Returns the name of the variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the declared dimensions of the variable.
    #[must_use]
    pub fn dimensions(&self) -> &DimensionMap {
        &self.0.dimensions
    }

    /// Returns the exponent of the given dimension, or zero if absent.
    #[must_use]
    pub fn exponent(&self, dimension: &str) -> Exponent {
        self.0.dimensions.exponent(dimension)
    }

    /// Whether the variable is the target of the analysis.
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        self.0.is_dependent
    }

    /// Whether the variable can be used as a scaling parameter.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.0.is_scaling
    }

    /// Whether every dimension exponent of the variable is zero.
    #[must_use]
    pub fn is_nondimensional(&self) -> bool {
        self.0.dimensions.is_dimensionless()
    }

    /// Checks if both handles point to the same variable, as opposed to
    /// two equal variables built separately.
    #[must_use]
    pub fn is_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builder for variables with roles or rational exponents.
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    name: String,
    dimensions: IndexMap<String, Exponent>,
    is_dependent: bool,
    is_scaling: bool,
}

impl VariableBuilder {
    /// Sets an integer exponent for a dimension.
    #[must_use]
    pub fn exponent(self, dimension: impl Into<String>, exponent: i64) -> Self {
        self.rational_exponent(dimension, integer_exponent(exponent))
    }

    /// Sets a rational exponent for a dimension.
    ///
    /// Setting the same dimension twice keeps its first position and the
    /// last exponent.
    #[must_use]
    pub fn rational_exponent(mut self, dimension: impl Into<String>, exponent: Exponent) -> Self {
        self.dimensions.insert(dimension.into(), exponent);
        self
    }

    /// Marks the variable as dependent.
    #[must_use]
    pub const fn dependent(self) -> Self {
        self.with_dependent_as(true)
    }

    /// Marks the variable as scaling.
    #[must_use]
    pub const fn scaling(self) -> Self {
        self.with_scaling_as(true)
    }

    /// Sets the `is_dependent` flag.
    #[must_use]
    pub const fn with_dependent_as(mut self, is_dependent: bool) -> Self {
        self.is_dependent = is_dependent;
        self
    }

    /// Sets the `is_scaling` flag.
    #[must_use]
    pub const fn with_scaling_as(mut self, is_scaling: bool) -> Self {
        self.is_scaling = is_scaling;
        self
    }

    /// Validates the roles and builds the variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is both dependent and scaling, or
    /// if it is scaling but nondimensional.
    pub fn build(self) -> Result<Variable, VariableError> {
        let dimensions = DimensionMap::new(self.dimensions);

        if self.is_dependent && self.is_scaling {
            return Err(VariableError::DependentAndScaling { name: self.name });
        }

        if self.is_scaling && dimensions.is_dimensionless() {
            return Err(VariableError::ScalingAndNondimensional { name: self.name });
        }

        Ok(Variable(Arc::new(VariableData {
            name: self.name,
            dimensions,
            is_dependent: self.is_dependent,
            is_scaling: self.is_scaling,
        })))
    }
}

/// Errors raised while building a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// The variable was set as both dependent and scaling.
    DependentAndScaling {
        /// Name of the rejected variable
        name: String,
    },
    /// The variable was set as scaling but has no dimensions.
    ScalingAndNondimensional {
        /// Name of the rejected variable
        name: String,
    },
}

impl AsPidimError for VariableError {
    fn message(&self) -> String {
        match self {
            Self::DependentAndScaling { name } => {
                format!("variable `{name}` can not be both dependent and scaling")
            }
            Self::ScalingAndNondimensional { name } => {
                format!("variable `{name}` can not be both scaling and nondimensional")
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DependentAndScaling { .. } => vec![Context::Note(
                "a dependent variable is the target of the analysis, so it can not scale the others"
                    .to_string(),
            )],
            Self::ScalingAndNondimensional { .. } => vec![Context::Help(
                "give the variable at least one nonzero dimension exponent".to_string(),
            )],
        }
    }
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VariableError {}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Variable {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        const NAMES: [&str; 8] = ["F", "k", "x", "m", "rho", "V", "D", "mu"];
        const DIMENSIONS: [&str; 5] = ["M", "L", "T", "I", "N"];

        let name = *u.choose(&NAMES)?;
        let mut builder = Variable::builder(name);

        let dimension_count = u.int_in_range(0..=DIMENSIONS.len())?;
        for _ in 0..dimension_count {
            let dimension = *u.choose(&DIMENSIONS)?;
            let exponent = u.int_in_range(-3..=3)?;
            builder = builder.exponent(dimension, exponent);
        }

        let builder = builder
            .with_dependent_as(u.arbitrary()?)
            .with_scaling_as(u.arbitrary()?);

        builder
            .build()
            .map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
