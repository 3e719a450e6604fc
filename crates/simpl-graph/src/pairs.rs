use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use simpl_core::{SimplError, SizeMatrix, Vertex};
use tracing::trace;

use crate::flags::PairFlags;
use crate::index::{incidence_index, IncidenceIndex};

/// Slot of an ordered count where the smaller edge arrived first.
pub const SMALLER_FIRST: usize = 0;
/// Slot of an ordered count where the larger edge arrived first.
pub const LARGER_FIRST: usize = 1;

/// Simplicial pair count in the shape requested through [`PairFlags`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimplicialPairs {
    /// Number of pairs `(e, f)` with `e` a strict subset of `f`.
    Total(u64),
    /// Pairs split by arrival order, indexed by [`SMALLER_FIRST`] and [`LARGER_FIRST`].
    Ordered([u64; 2]),
    /// Pairs stratified by edge size.
    Matrix(SizeMatrix<u64>),
}

impl SimplicialPairs {
    /// Total number of pairs regardless of shape.
    pub fn total(&self) -> u64 {
        match self {
            SimplicialPairs::Total(count) => *count,
            SimplicialPairs::Ordered(split) => split.iter().sum(),
            SimplicialPairs::Matrix(matrix) => matrix.total(),
        }
    }
}

/// Counts simplicial pairs of `edges` in the shape selected by `flags`.
///
/// With `edge_order` set, the edges must be pairwise distinct as vertex sets.
pub fn simplicial_pairs<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    flags: PairFlags,
) -> Result<SimplicialPairs, SimplError> {
    match (flags.as_matrix, flags.edge_order) {
        (false, false) => count_pairs(vertices, edges).map(SimplicialPairs::Total),
        (false, true) => count_pairs_ordered(vertices, edges).map(SimplicialPairs::Ordered),
        (true, edge_order) => {
            count_pairs_matrix(vertices, edges, edge_order).map(SimplicialPairs::Matrix)
        }
    }
}

/// Counts pairs `(e, f)` of edges with `e` a strict subset of `f`.
pub fn count_pairs<V: Vertex>(vertices: &[V], edges: &[Vec<V>]) -> Result<u64, SimplError> {
    let prepared = PreparedEdges::new(vertices, edges)?;
    let mut count = 0u64;
    prepared.for_each_pair(|_, _| count += 1)?;
    trace!(edges = edges.len(), pairs = count, "counted simplicial pairs");
    Ok(count)
}

/// Counts simplicial pairs split by which edge of the pair was supplied first.
pub fn count_pairs_ordered<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
) -> Result<[u64; 2], SimplError> {
    let prepared = PreparedEdges::new(vertices, edges)?;
    prepared.ensure_distinct()?;
    let mut split = [0u64; 2];
    prepared.for_each_pair(|e, f| {
        if e < f {
            split[SMALLER_FIRST] += 1;
        } else {
            split[LARGER_FIRST] += 1;
        }
    })?;
    Ok(split)
}

/// Counts simplicial pairs into a matrix sized by the largest edge.
///
/// Entry `(|e| - 1, |f| - 1)` counts pairs with `e` contained in `f`. When
/// `edge_order` is set, pairs whose larger edge arrived first are recorded at
/// the transposed position `(|f| - 1, |e| - 1)` instead.
pub fn count_pairs_matrix<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    edge_order: bool,
) -> Result<SizeMatrix<u64>, SimplError> {
    let prepared = PreparedEdges::new(vertices, edges)?;
    let dim = prepared.max_size;
    prepared.matrix(dim, edge_order)
}

/// Order-insensitive matrix count at a caller-chosen dimension.
pub(crate) fn count_pairs_matrix_sized<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    dim: usize,
) -> Result<SizeMatrix<u64>, SimplError> {
    let prepared = PreparedEdges::new(vertices, edges)?;
    if prepared.max_size > dim {
        return Err(SimplError::input(
            "edge-size-exceeds-matrix",
            "edge is larger than the requested matrix dimension",
        )
        .with_context("max_size", prepared.max_size)
        .with_context("dim", dim));
    }
    prepared.matrix(dim, false)
}

struct PreparedEdges<V> {
    sets: Vec<BTreeSet<V>>,
    index: IncidenceIndex<V>,
    max_size: usize,
}

impl<V: Vertex> PreparedEdges<V> {
    fn new(vertices: &[V], edges: &[Vec<V>]) -> Result<Self, SimplError> {
        if let Some(position) = edges.iter().position(Vec::is_empty) {
            return Err(
                SimplError::input("empty-edge", "edges must contain at least one vertex")
                    .with_context("edge", position),
            );
        }
        let index = incidence_index(vertices, edges)?;
        let sets: Vec<BTreeSet<V>> = edges
            .iter()
            .map(|edge| edge.iter().cloned().collect())
            .collect();
        let max_size = edges.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self {
            sets,
            index,
            max_size,
        })
    }

    fn ensure_distinct(&self) -> Result<(), SimplError> {
        let mut seen: BTreeMap<&BTreeSet<V>, usize> = BTreeMap::new();
        for (position, set) in self.sets.iter().enumerate() {
            if let Some(first) = seen.insert(set, position) {
                return Err(SimplError::input(
                    "duplicate-edge",
                    "order-sensitive counting requires distinct edges",
                )
                .with_context("first", first)
                .with_context("duplicate", position));
            }
        }
        Ok(())
    }

    /// Calls `visit(e, f)` with edge positions for every pair where `e` is a strict subset of `f`.
    fn for_each_pair(&self, mut visit: impl FnMut(usize, usize)) -> Result<(), SimplError> {
        for (e_pos, e) in self.sets.iter().enumerate() {
            let anchor = self.anchor(e)?;
            for &f_pos in self.index.edges_at(anchor)? {
                let f = &self.sets[f_pos];
                if e.len() < f.len() && e.is_subset(f) {
                    visit(e_pos, f_pos);
                }
            }
        }
        Ok(())
    }

    /// Lowest-degree vertex of `edge`; every superset of `edge` is incident to it.
    fn anchor<'a>(&self, edge: &'a BTreeSet<V>) -> Result<&'a V, SimplError> {
        let mut best: Option<(&V, usize)> = None;
        for vertex in edge {
            let degree = self.index.degree(vertex)?;
            if best.map_or(true, |(_, current)| degree < current) {
                best = Some((vertex, degree));
            }
        }
        best.map(|(vertex, _)| vertex).ok_or_else(|| {
            SimplError::input("empty-edge", "edges must contain at least one vertex")
        })
    }

    fn matrix(&self, dim: usize, edge_order: bool) -> Result<SizeMatrix<u64>, SimplError> {
        if edge_order {
            self.ensure_distinct()?;
        }
        let mut matrix = SizeMatrix::<u64>::zeros(dim);
        self.for_each_pair(|e_pos, f_pos| {
            let e_size = self.sets[e_pos].len();
            let f_size = self.sets[f_pos].len();
            if edge_order && f_pos < e_pos {
                matrix[(f_size - 1, e_size - 1)] += 1;
            } else {
                matrix[(e_size - 1, f_size - 1)] += 1;
            }
        })?;
        Ok(matrix)
    }
}
