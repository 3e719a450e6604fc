use std::collections::BTreeMap;
use std::fmt::Debug;
use std::ops::{AddAssign, Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Opaque vertex identifier accepted by every SIMPL operation.
///
/// Vertices are kept in ordered containers so that iteration, and therefore
/// sampling for a fixed seed, is reproducible.
pub trait Vertex: Ord + Clone + Debug {}

impl<T> Vertex for T where T: Ord + Clone + Debug {}

/// Number of edges incident to each vertex.
pub type DegreeMap<V> = BTreeMap<V, usize>;

/// Square matrix indexed by `(size - 1, size - 1)` of edge pairs.
///
/// The dimension is fixed at construction and never grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMatrix<T> {
    cells: Array2<T>,
}

impl<T: Clone + Default> SizeMatrix<T> {
    /// Creates a `dim x dim` matrix filled with `T::default()`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            cells: Array2::from_elem((dim, dim), T::default()),
        }
    }
}

impl<T> SizeMatrix<T> {
    /// Returns the number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.cells.nrows()
    }

    /// Returns the entry at `(row, col)` if it lies inside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get((row, col))
    }

    /// Iterates over all entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Copies the matrix into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Applies `f` to every entry, producing a matrix of the same dimension.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SizeMatrix<U> {
        SizeMatrix {
            cells: self.cells.map(f),
        }
    }

    /// Borrows the underlying array.
    pub fn as_array(&self) -> &Array2<T> {
        &self.cells
    }
}

impl SizeMatrix<u64> {
    /// Sum of all entries.
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }
}

impl<T> Index<(usize, usize)> for SizeMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<(usize, usize)> for SizeMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.cells[index]
    }
}

impl<T: Clone + AddAssign> AddAssign<&SizeMatrix<T>> for SizeMatrix<T> {
    fn add_assign(&mut self, other: &SizeMatrix<T>) {
        assert_eq!(self.dim(), other.dim(), "size matrix dimensions differ");
        self.cells += &other.cells;
    }
}
