use std::collections::{BTreeMap, BTreeSet};

use simpl_core::{unknown_vertex, DegreeMap, SimplError, Vertex};

/// Where [`volume_of`] reads vertex degrees from.
#[derive(Debug, Clone, Copy)]
pub enum DegreeSource<'a, V> {
    /// Degrees are counted on the fly over the union of the subset and the edge vertices.
    Edges(&'a [Vec<V>]),
    /// A precomputed degree mapping.
    Degrees(&'a DegreeMap<V>),
}

/// Counts the edges incident to every vertex in `vertices`.
///
/// Vertices that appear in no edge get degree zero. A vertex repeated inside
/// one edge is counted once for that edge. A vertex listed twice in
/// `vertices` fails with `duplicate-vertex`.
pub fn degrees_of<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
) -> Result<DegreeMap<V>, SimplError> {
    ensure_unique_vertices(vertices)?;
    let mut degrees: DegreeMap<V> = vertices.iter().map(|v| (v.clone(), 0)).collect();
    for (position, edge) in edges.iter().enumerate() {
        let members: BTreeSet<&V> = edge.iter().collect();
        for vertex in members {
            let slot = degrees
                .get_mut(vertex)
                .ok_or_else(|| unknown_vertex(vertex).with_context("edge", position))?;
            *slot += 1;
        }
    }
    Ok(degrees)
}

/// Sums the degrees of `subset` as reported by `source`.
pub fn volume_of<V: Vertex>(
    subset: &[V],
    source: DegreeSource<'_, V>,
) -> Result<usize, SimplError> {
    match source {
        DegreeSource::Degrees(degrees) => sum_degrees(subset, degrees),
        DegreeSource::Edges(edges) => {
            let mut universe: BTreeSet<V> = subset.iter().cloned().collect();
            for edge in edges {
                universe.extend(edge.iter().cloned());
            }
            let universe: Vec<V> = universe.into_iter().collect();
            let degrees = degrees_of(&universe, edges)?;
            sum_degrees(subset, &degrees)
        }
    }
}

/// Total volume of a degree map, i.e. the length of the degree-weighted pool.
pub fn total_volume<V>(degrees: &DegreeMap<V>) -> Result<usize, SimplError> {
    degrees
        .values()
        .try_fold(0usize, |acc, &degree| add_volume(acc, degree))
}

/// Rejects a vertex list that names the same vertex more than once.
pub(crate) fn ensure_unique_vertices<V: Vertex>(vertices: &[V]) -> Result<(), SimplError> {
    let mut seen: BTreeMap<&V, usize> = BTreeMap::new();
    for (position, vertex) in vertices.iter().enumerate() {
        if let Some(first) = seen.insert(vertex, position) {
            return Err(
                SimplError::input("duplicate-vertex", "vertices must be listed exactly once")
                    .with_context("vertex", format!("{vertex:?}"))
                    .with_context("first", first)
                    .with_context("duplicate", position),
            );
        }
    }
    Ok(())
}

pub(crate) fn add_volume(acc: usize, degree: usize) -> Result<usize, SimplError> {
    acc.checked_add(degree).ok_or_else(|| {
        SimplError::input("volume-overflow", "total degree volume does not fit in usize")
            .with_context("volume", acc)
            .with_context("degree", degree)
    })
}

fn sum_degrees<V: Vertex>(subset: &[V], degrees: &DegreeMap<V>) -> Result<usize, SimplError> {
    subset.iter().try_fold(0usize, |acc, vertex| {
        let degree = degrees.get(vertex).ok_or_else(|| unknown_vertex(vertex))?;
        add_volume(acc, *degree)
    })
}
