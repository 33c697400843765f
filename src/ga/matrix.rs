//! Pairwise travel costs.

use crate::error::{Result, TspError};

/// An N×N table of travel costs, stored row-major.
///
/// `cost(i, j)` is the cost of travelling directly from city `i` to city `j`.
/// The matrix may be asymmetric. It is validated once at construction and is
/// read-only afterwards, so it can be shared by reference for a whole run.
///
/// # Examples
///
/// ```
/// use tsp_evolve::ga::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(&[
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ])
/// .unwrap();
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.cost(1, 2), 35.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    cities: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from rows of any numeric type convertible to `f64`.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyMatrix`] if there are no rows
    /// - [`TspError::NotSquare`] if any row length differs from the row count
    /// - [`TspError::NonFiniteCost`] if any entry is NaN or infinite
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: Copy + Into<f64>,
        R: AsRef<[T]>,
    {
        let cities = rows.len();
        if cities == 0 {
            return Err(TspError::EmptyMatrix);
        }

        let mut costs = Vec::with_capacity(cities * cities);
        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cities {
                return Err(TspError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: cities,
                });
            }
            for (to, &value) in row.iter().enumerate() {
                let value: f64 = value.into();
                if !value.is_finite() {
                    return Err(TspError::NonFiniteCost { from, to });
                }
                costs.push(value);
            }
        }

        Ok(Self { cities, costs })
    }

    /// Number of cities (the matrix dimension).
    pub fn len(&self) -> usize {
        self.cities
    }

    /// Always `false`: construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        self.cities == 0
    }

    /// Cost of travelling from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        debug_assert!(to < self.cities, "city {to} out of range");
        self.costs[from * self.cities + to]
    }

    /// Total cost of the closed tour `start → tour[0] → … → tour[last] → start`.
    ///
    /// An empty `tour` costs `cost(start, start)`.
    ///
    /// # Complexity
    /// O(len(tour))
    pub fn tour_cost(&self, start: usize, tour: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut current = start;
        for &city in tour {
            total += self.cost(current, city);
            current = city;
        }
        total + self.cost(current, start)
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.costs[from * self.cities..(from + 1) * self.cities]
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        (0..matrix.cities).map(|i| matrix.row(i).to_vec()).collect()
    }
}
