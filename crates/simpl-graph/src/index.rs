use std::collections::{BTreeMap, BTreeSet};

use simpl_core::{unknown_vertex, DegreeMap, SimplError, Vertex};

use crate::degrees::ensure_unique_vertices;

/// Maps every vertex to the positions of the edges containing it, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceIndex<V> {
    lists: BTreeMap<V, Vec<usize>>,
}

impl<V: Vertex> IncidenceIndex<V> {
    /// Returns the edge positions incident to `vertex`, oldest first.
    pub fn edges_at(&self, vertex: &V) -> Result<&[usize], SimplError> {
        self.lists
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_vertex(vertex))
    }

    /// Number of edges incident to `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize, SimplError> {
        Ok(self.edges_at(vertex)?.len())
    }

    /// Degree map implied by the index.
    pub fn degrees(&self) -> DegreeMap<V> {
        self.lists
            .iter()
            .map(|(vertex, list)| (vertex.clone(), list.len()))
            .collect()
    }

    /// Iterates over `(vertex, edge positions)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[usize])> {
        self.lists.iter().map(|(vertex, list)| (vertex, list.as_slice()))
    }
}

/// Builds the incidence index of `edges` over `vertices`.
///
/// Every vertex receives an entry, possibly empty. Repeated vertices inside an
/// edge record that edge once.
pub fn incidence_index<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
) -> Result<IncidenceIndex<V>, SimplError> {
    ensure_unique_vertices(vertices)?;
    let mut lists: BTreeMap<V, Vec<usize>> =
        vertices.iter().map(|v| (v.clone(), Vec::new())).collect();
    for (position, edge) in edges.iter().enumerate() {
        let members: BTreeSet<&V> = edge.iter().collect();
        for vertex in members {
            lists
                .get_mut(vertex)
                .ok_or_else(|| unknown_vertex(vertex).with_context("edge", position))?
                .push(position);
        }
    }
    Ok(IncidenceIndex { lists })
}

/// Groups edges by their length.
pub fn partition_by_size<V: Clone>(edges: &[Vec<V>]) -> BTreeMap<usize, Vec<Vec<V>>> {
    let mut partition: BTreeMap<usize, Vec<Vec<V>>> = BTreeMap::new();
    for edge in edges {
        partition.entry(edge.len()).or_default().push(edge.clone());
    }
    partition
}

/// Number of edges of each size: `counts[k - 1]` edges have `k` vertices.
///
/// The result is as long as the largest edge; an empty collection yields an
/// empty vector.
pub fn size_counts<V: Clone>(edges: &[Vec<V>]) -> Vec<usize> {
    let partition = partition_by_size(edges);
    let max_size = partition.keys().next_back().copied().unwrap_or(0);
    let mut counts = vec![0; max_size];
    for (size, members) in partition {
        if size > 0 {
            counts[size - 1] = members.len();
        }
    }
    counts
}
