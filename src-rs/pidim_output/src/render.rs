//! Labeled renderings of dimensional matrices.

use num_traits::Signed;
use pidim_core::{DimensionalMatrix, Exponent, Variable};

/// Something that turns a dimensional matrix into text.
pub trait Render {
    /// Renders the matrix.
    fn render(&self, matrix: &DimensionalMatrix) -> String;
}

/// A plain-text table with variable names over the columns and dimension
/// names beside the rows.
///
/// Every column is right-aligned to its widest cell and columns are
/// separated by two spaces.
///
/// # Examples
///
/// ```rust
/// use pidim_core::{DimensionalMatrix, Variable};
/// use pidim_output::{Render, TextTable};
///
/// let matrix = DimensionalMatrix::new([
///     Variable::new("F", [("M", 1), ("L", 1), ("T", -2)]),
///     Variable::new("k", [("M", 1), ("T", -2)]),
///     Variable::new("x", [("L", 1)]),
/// ]);
///
/// assert_eq!(
///     TextTable::new().render(&matrix),
///     "    F   k  x\nM   1   1  0\nL   1   0  1\nT  -2  -2  0",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextTable {
    mark_independent: bool,
}

impl TextTable {
    /// Creates a table renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mark_independent: false,
        }
    }

    /// Suffixes the labels of the independent rows with `*`.
    #[must_use]
    pub const fn mark_independent(mut self) -> Self {
        self.mark_independent = true;
        self
    }
}

impl Render for TextTable {
    fn render(&self, matrix: &DimensionalMatrix) -> String {
        let names = matrix
            .variables()
            .iter()
            .map(|variable| variable.name().to_string());
        let header = std::iter::once(String::new())
            .chain(names)
            .collect::<Vec<_>>();

        let body = matrix.dimensions().iter().enumerate().map(|(row, dimension)| {
            let label = if self.mark_independent && matrix.independent_rows().contains(&row) {
                format!("{dimension}*")
            } else {
                dimension.clone()
            };

            std::iter::once(label)
                .chain(matrix.matrix().row(row).iter().map(Exponent::to_string))
                .collect::<Vec<_>>()
        });

        let rows: Vec<Vec<String>> = std::iter::once(header).chain(body).collect();

        let widths = (0..=matrix.variables().len())
            .map(|col| {
                rows.iter()
                    .map(|cells| cells[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();

        rows.iter()
            .map(|cells| {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:>width$}"))
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A LaTeX `array` environment.
///
/// Dimension names are set in `\mathsf`, non-negative entries are padded
/// with `\phantom{-}` so that columns line up, and non-integer exponents
/// are written as `\frac`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latex;

impl Render for Latex {
    fn render(&self, matrix: &DimensionalMatrix) -> String {
        let columns = "r".repeat(matrix.variables().len());

        let names = matrix
            .variables()
            .iter()
            .map(|variable| variable.name().to_string());
        let header = std::iter::once(String::new())
            .chain(names)
            .collect::<Vec<_>>()
            .join(" & ");

        let mut lines = vec![
            format!("\\begin{{array}}{{r|{columns}}}"),
            format!("{header} \\\\"),
            "\\hline".to_string(),
        ];

        lines.extend(matrix.dimensions().iter().enumerate().map(|(row, dimension)| {
            let cells = std::iter::once(format!("\\mathsf{{{dimension}}}"))
                .chain(matrix.matrix().row(row).iter().map(latex_entry))
                .collect::<Vec<_>>()
                .join(" & ");

            format!("{cells} \\\\")
        }));

        lines.push("\\end{array}".to_string());
        lines.join("\n")
    }
}

fn latex_entry(exponent: &Exponent) -> String {
    let sign = if exponent.is_negative() {
        "-"
    } else {
        "\\phantom{-}"
    };

    let magnitude = exponent.abs();
    let magnitude = if magnitude.is_integer() {
        magnitude.numer().to_string()
    } else {
        format!("\\frac{{{}}}{{{}}}", magnitude.numer(), magnitude.denom())
    };

    format!("{sign}{magnitude}")
}

/// Describes the rank and independent dimensions of the matrix.
///
/// ```rust
/// use pidim_core::{DimensionalMatrix, Variable};
///
/// let matrix = DimensionalMatrix::new([
///     Variable::new("F", [("M", 1), ("L", 1), ("T", -2)]),
///     Variable::new("x", [("L", 1)]),
/// ]);
///
/// assert_eq!(
///     pidim_output::summary(&matrix),
///     "rank 2 over (F, x); independent dimensions (M, L)",
/// );
/// ```
#[must_use]
pub fn summary(matrix: &DimensionalMatrix) -> String {
    let variables = matrix
        .variables()
        .iter()
        .map(Variable::name)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "rank {} over ({variables}); independent dimensions ({})",
        matrix.rank(),
        matrix.independent_dimensions().join(", ")
    )
}
