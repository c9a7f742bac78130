//! Square distance matrix indexed by node position.

use super::error::DistanceError;

/// Pairwise distances in nautical miles, indexed by node position.
///
/// Construction checks that the matrix is square. Symmetry and a zero
/// diagonal are properties of the model that filled it, not of this type.
///
/// # Examples
/// ```
/// use qaop_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 4.5], vec![4.5, 0.0]])?;
/// assert_eq!(matrix.get(0, 1), Some(4.5));
/// assert_eq!(matrix.get(2, 0), None);
/// # Ok::<(), qaop_core::DistanceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::NotSquare`] when any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DistanceError> {
        let expected = rows.len();
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != expected)
        {
            return Err(DistanceError::NotSquare {
                row,
                len: values.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    /// Matrix dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from position `from` to position `to`, if both exist.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Distances out of position `from`.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        self.rows.get(from).map(Vec::as_slice)
    }

    /// Distance lookup that reports the failing positions.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::OutOfBounds`] when either position is outside
    /// the matrix.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64, DistanceError> {
        self.get(from, to).ok_or(DistanceError::OutOfBounds {
            from,
            to,
            size: self.len(),
        })
    }

    /// Sum of consecutive-pair distances along `positions`.
    ///
    /// No rounding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::OutOfBounds`] for the first leg that leaves
    /// the matrix.
    #[expect(
        clippy::float_arithmetic,
        reason = "path length accumulates floating-point distances"
    )]
    pub fn path_length(&self, positions: &[usize]) -> Result<f64, DistanceError> {
        positions
            .windows(2)
            .try_fold(0.0, |total, leg| match leg {
                [from, to] => Ok(total + self.distance(*from, *to)?),
                _ => Ok(total),
            })
    }
}
