use sha2::{Digest, Sha256};
use simpl_core::Vertex;

/// Computes the canonical structural hash of an edge collection.
///
/// Vertices inside an edge are sorted and edges are sorted before hashing, so
/// the digest does not depend on the order in which either was supplied.
/// Vertices are encoded through their `Debug` representation.
pub fn canonical_hash<V: Vertex>(edges: &[Vec<V>]) -> String {
    let mut canonical: Vec<Vec<String>> = edges
        .iter()
        .map(|edge| {
            let mut sorted: Vec<&V> = edge.iter().collect();
            sorted.sort();
            sorted.into_iter().map(|v| format!("{v:?}")).collect()
        })
        .collect();
    canonical.sort();

    let mut hasher = Sha256::new();
    hasher.update(b"simpl-edges:v1");
    hasher.update((canonical.len() as u64).to_le_bytes());
    for edge in &canonical {
        update_edge(edge, &mut hasher);
    }
    format!("{:x}", hasher.finalize())
}

fn update_edge(vertices: &[String], hasher: &mut Sha256) {
    hasher.update((vertices.len() as u64).to_le_bytes());
    for vertex in vertices {
        hasher.update((vertex.len() as u64).to_le_bytes());
        hasher.update(vertex.as_bytes());
    }
}
