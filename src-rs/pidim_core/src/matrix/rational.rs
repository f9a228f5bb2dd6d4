//! Dense matrices of exact rationals.

use std::{fmt, ops};

use num_traits::Zero;

use crate::variable::Exponent;

/// A dense, row-major matrix of exact rationals.
///
/// The shape is stored explicitly, so matrices with zero rows or zero
/// columns (for example the 0x1 matrix of a single nondimensional
/// variable) are represented faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<Exponent>,
}

impl RationalMatrix {
    /// Creates a matrix whose entry `[i, j]` is `entry(i, j)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut entry: impl FnMut(usize, usize) -> Exponent,
    ) -> Self {
        let entries = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| entry(row, col))
            .collect();

        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Concatenates matrices horizontally.
    ///
    /// The number of rows is given explicitly so that concatenating no
    /// matrices yields a matrix with `rows` rows and zero columns.
    ///
    /// # Panics
    ///
    /// Panics if a matrix does not have `rows` rows.
    #[must_use]
    pub fn hstack<'a>(rows: usize, matrices: impl IntoIterator<Item = &'a Self>) -> Self {
        let matrices: Vec<&Self> = matrices.into_iter().collect();

        assert!(
            matrices.iter().all(|matrix| matrix.rows == rows),
            "all matrices must have {rows} rows"
        );

        let cols = matrices.iter().map(|matrix| matrix.cols).sum();
        let mut entries = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for matrix in &matrices {
                entries.extend_from_slice(matrix.row(row));
            }
        }

        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the entry at the given position, if it exists.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Exponent> {
        let in_bounds = row < self.rows && col < self.cols;
        in_bounds.then(|| self[(row, col)].clone())
    }

    /// Returns the entries of a row.
    ///
    /// # Panics
    ///
    /// Panics if the row is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Exponent] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.entries[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns a column as a single-column matrix.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of bounds.
    #[must_use]
    pub fn column(&self, col: usize) -> Self {
        assert!(col < self.cols, "column {col} out of bounds");
        Self::from_fn(self.rows, 1, |row, _| self[(row, col)].clone())
    }

    /// Returns the entries of a column.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of bounds.
    #[must_use]
    pub fn column_entries(&self, col: usize) -> Vec<Exponent> {
        assert!(col < self.cols, "column {col} out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)].clone())
    }

    /// Returns the matrix made of the given rows, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a row is out of bounds.
    #[must_use]
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self::from_fn(rows.len(), self.cols, |row, col| {
            self[(rows[row], col)].clone()
        })
    }

    /// Returns the rank over the rationals.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }

    /// Returns the reduced row echelon form and the pivot columns.
    ///
    /// Columns are scanned left to right and the first row with a nonzero
    /// entry becomes the pivot row, so the pivot columns are the
    /// lexicographically first set of independent columns. Pivot columns
    /// are returned in ascending order.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let mut reduced = self.clone();
        let mut pivots = Vec::new();

        for col in 0..self.cols {
            let pivot_row = pivots.len();
            if pivot_row == self.rows {
                break;
            }

            let Some(found) = reduced.find_pivot(col, pivot_row) else {
                continue;
            };

            reduced.swap_rows(pivot_row, found);

            let pivot = reduced[(pivot_row, col)].clone();
            for entry in col..self.cols {
                let scaled = &reduced[(pivot_row, entry)] / &pivot;
                reduced[(pivot_row, entry)] = scaled;
            }

            for row in (0..self.rows).filter(|&row| row != pivot_row) {
                let factor = reduced[(row, col)].clone();
                if factor.is_zero() {
                    continue;
                }

                for entry in col..self.cols {
                    let eliminated =
                        &reduced[(row, entry)] - &factor * &reduced[(pivot_row, entry)];
                    reduced[(row, entry)] = eliminated;
                }
            }

            pivots.push(col);
        }

        (reduced, pivots)
    }

    fn find_pivot(&self, col: usize, from: usize) -> Option<usize> {
        (from..self.rows).find(|&row| !self[(row, col)].is_zero())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        for col in 0..self.cols {
            self.entries.swap(a * self.cols + col, b * self.cols + col);
        }
    }
}

impl ops::Index<(usize, usize)> for RationalMatrix {
    type Output = Exponent;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.entries[row * self.cols + col]
    }
}

impl ops::IndexMut<(usize, usize)> for RationalMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.entries[row * self.cols + col]
    }
}

impl fmt::Display for RationalMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }

            let entries = self
                .row(row)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "[{entries}]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::test::{integer, matrix, ratio, zeros};

    #[test]
    fn rank_of_identity_is_full() {
        let identity = matrix(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);

        assert_eq!(identity.rank(), 3);
    }

    #[test]
    fn rank_detects_dependent_rows() {
        let spring = matrix(&[&[1, 1, 0], &[1, 0, 1], &[-2, -2, 0]]);

        assert_eq!(spring.rank(), 2);
    }

    #[test]
    fn rank_of_empty_shapes_is_zero() {
        assert_eq!(zeros(0, 0).rank(), 0);
        assert_eq!(zeros(0, 3).rank(), 0);
        assert_eq!(zeros(3, 0).rank(), 0);
        assert_eq!(zeros(2, 2).rank(), 0);
    }

    #[test]
    fn rref_uses_first_nonzero_pivot() {
        let (reduced, pivots) = matrix(&[&[0, 2, 4], &[1, 1, 1], &[2, 2, 2]]).rref();

        assert_eq!(pivots, [0, 1]);
        assert_eq!(reduced, matrix(&[&[1, 0, -1], &[0, 1, 2], &[0, 0, 0]]));
    }

    #[test]
    fn rref_of_transpose_selects_first_independent_rows() {
        // rows 0 and 2 are parallel, so rows 0 and 1 are selected
        let spring = matrix(&[&[1, 1, 0], &[1, 0, 1], &[-2, -2, 0]]);

        let (_, pivots) = spring.transpose().rref();

        assert_eq!(pivots, [0, 1]);
    }

    #[test]
    fn rref_handles_rationals_exactly() {
        let (reduced, pivots) = matrix(&[&[3, 1], &[1, 3]]).rref();

        assert_eq!(pivots, [0, 1]);
        assert_eq!(reduced, matrix(&[&[1, 0], &[0, 1]]));

        let (reduced, _) = matrix(&[&[3, 1]]).rref();
        assert_eq!(reduced[(0, 1)], ratio(1, 3));
    }

    #[test]
    fn rank_of_large_integer_entries_is_exact() {
        let m = RationalMatrix::from_fn(2, 2, |row, col| match (row, col) {
            (0, 0) => integer(4_000_000_000),
            (1, 1) => integer(4_000_000_001),
            _ => integer(1),
        });

        let (reduced, pivots) = m.rref();

        assert_eq!(pivots, [0, 1]);
        assert_eq!(reduced, matrix(&[&[1, 0], &[0, 1]]));
    }

    #[test]
    fn rank_of_tiny_fractions_is_exact() {
        let a = ratio(1, 1_000_003);
        let b = ratio(1, 1_000_033);
        let c = ratio(1, 1_000_037);
        let circulant = [[&a, &b, &c], [&b, &c, &a], [&c, &a, &b]];

        let full = RationalMatrix::from_fn(3, 3, |row, col| circulant[row][col].clone());
        let (reduced, pivots) = full.rref();
        assert_eq!(pivots, [0, 1, 2]);
        assert_eq!(reduced, matrix(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));

        // the last row is the sum of the first two
        let deficient = RationalMatrix::from_fn(3, 3, |row, col| match row {
            0 | 1 => circulant[row][col].clone(),
            _ => circulant[0][col] + circulant[1][col],
        });
        assert_eq!(deficient.rank(), 2);
        assert_eq!(deficient.transpose().rref().1, [0, 1]);
    }

    #[test]
    fn hstack_concatenates_in_order() {
        let a = matrix(&[&[1], &[2]]);
        let b = matrix(&[&[3, 4], &[5, 6]]);

        let stacked = RationalMatrix::hstack(2, [&b, &a, &a]);

        assert_eq!(stacked, matrix(&[&[3, 4, 1, 1], &[5, 6, 2, 2]]));
    }

    #[test]
    fn hstack_of_nothing_keeps_rows() {
        let stacked = RationalMatrix::hstack(3, []);

        assert_eq!(stacked.shape(), (3, 0));
    }

    #[test]
    #[should_panic(expected = "all matrices must have 2 rows")]
    fn hstack_rejects_mismatched_rows() {
        let _ = RationalMatrix::hstack(2, [&matrix(&[&[1]])]);
    }

    #[test]
    fn column_and_selection() {
        let m = matrix(&[&[1, 2], &[3, 4], &[5, 6]]);

        assert_eq!(m.column(1), matrix(&[&[2], &[4], &[6]]));
        assert_eq!(m.select_rows(&[2, 0]), matrix(&[&[5, 6], &[1, 2]]));
        assert_eq!(m.transpose(), matrix(&[&[1, 3, 5], &[2, 4, 6]]));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(2, 1), Some(integer(6)));
    }

    #[test]
    fn display_is_nested_rows() {
        let m = RationalMatrix::from_fn(2, 2, |row, col| {
            ratio(
                i64::try_from(row + 1).unwrap_or(1),
                i64::try_from(col + 1).unwrap_or(1),
            )
        });

        assert_eq!(m.to_string(), "[[1, 1/2], [2, 1]]");
    }

    #[test]
    fn rank_matches_transpose_rank_on_random_matrices() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let rows = rng.random_range(0..6);
            let cols = rng.random_range(0..6);
            let m = RationalMatrix::from_fn(rows, cols, |_, _| integer(rng.random_range(-3..=3)));

            let (reduced, pivots) = m.rref();

            assert_eq!(m.rank(), m.transpose().rank(), "rank mismatch for {m}");
            assert!(pivots.windows(2).all(|pair| pair[0] < pair[1]));
            for (row, &col) in pivots.iter().enumerate() {
                assert_eq!(reduced[(row, col)], integer(1));
            }
        }
    }
}
