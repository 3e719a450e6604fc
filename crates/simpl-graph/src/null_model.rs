use simpl_core::rng::RngHandle;
use simpl_core::{unknown_vertex, DegreeMap, SimplError, Vertex};
use tracing::{debug, warn};

use crate::degrees::{add_volume, degrees_of, ensure_unique_vertices};
use crate::flags::NullModelConfig;
use crate::index::size_counts;

/// Degrees supplied explicitly to the null-model sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeSpec<V> {
    /// Degree per vertex; entries for vertices outside the vertex list are ignored.
    Map(DegreeMap<V>),
    /// Degrees aligned with the order of the vertex list.
    Sequence(Vec<usize>),
}

/// What the null model has to reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullModelSpec<'a, V> {
    /// Per-size edge counts and vertex degrees are taken from these edges.
    Reference(&'a [Vec<V>]),
    /// `sizes[k - 1]` edges of size `k` drawn against the given degrees.
    Explicit {
        /// Number of edges to draw for each size, starting at size one.
        sizes: Vec<usize>,
        /// Degree specification for the vertex list.
        degrees: DegreeSpec<V>,
    },
}

/// Vertices `0..n`, for callers that describe a hypergraph by its vertex count.
pub fn range_vertices(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Degree-weighted choice pool.
///
/// Conceptually a sequence of length `volume` in which every vertex appears
/// `degree` times. Only the running degree totals are stored; a slot is
/// resolved to its vertex by binary search.
#[derive(Debug, Clone)]
pub struct DegreePool<V> {
    vertices: Vec<V>,
    ends: Vec<usize>,
}

impl<V: Vertex> DegreePool<V> {
    /// Builds the pool for `vertices`, in the given order, from `degrees`.
    ///
    /// Each vertex must be listed once and the degrees must sum to at most
    /// `usize::MAX`.
    pub fn new(vertices: &[V], degrees: &DegreeMap<V>) -> Result<Self, SimplError> {
        ensure_unique_vertices(vertices)?;
        let mut pool = Self {
            vertices: Vec::new(),
            ends: Vec::new(),
        };
        let mut running = 0usize;
        for vertex in vertices {
            let degree = *degrees.get(vertex).ok_or_else(|| unknown_vertex(vertex))?;
            if degree == 0 {
                continue;
            }
            running = add_volume(running, degree)?;
            pool.vertices.push(vertex.clone());
            pool.ends.push(running);
        }
        Ok(pool)
    }

    /// Length of the virtual pool, i.e. the total volume.
    pub fn volume(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Number of vertices with a positive degree.
    pub fn support(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex occupying `slot` of the virtual pool.
    pub fn vertex_at(&self, slot: usize) -> Option<&V> {
        let idx = self.ends.partition_point(|&end| end <= slot);
        self.vertices.get(idx)
    }

    /// Draws a vertex with probability proportional to its degree.
    pub fn draw(&self, rng: &mut RngHandle) -> Result<&V, SimplError> {
        let volume = self.volume();
        if volume == 0 {
            return Err(zero_volume());
        }
        let slot = rng.index_below(volume);
        self.vertex_at(slot).ok_or_else(|| {
            SimplError::sampling("pool-slot-out-of-range", "pool slot resolved to no vertex")
                .with_context("slot", slot)
                .with_context("volume", volume)
        })
    }
}

/// Samples a Chung–Lu style random hypergraph.
///
/// The result has exactly `sizes[k - 1]` edges of size `k`, listed by size,
/// and every vertex is drawn with probability proportional to its degree.
/// With `config.multisets` unset each edge holds distinct vertices; edges that
/// cannot be completed within `config.max_draw_attempts` draws fail with
/// `exhausted-sampling`.
pub fn generate_null_model<V: Vertex>(
    vertices: &[V],
    spec: NullModelSpec<'_, V>,
    config: &NullModelConfig,
    rng: &mut RngHandle,
) -> Result<Vec<Vec<V>>, SimplError> {
    let (sizes, degrees) = resolve_spec(vertices, spec)?;
    let pool = DegreePool::new(vertices, &degrees)?;
    let required = sizes.iter().try_fold(0usize, |acc, &count| {
        acc.checked_add(count).ok_or_else(|| {
            SimplError::input("edge-count-overflow", "requested edge count does not fit in usize")
        })
    })?;
    if required == 0 {
        return Ok(Vec::new());
    }
    if pool.volume() == 0 {
        return Err(zero_volume().with_context("edges", required));
    }
    debug!(
        volume = pool.volume(),
        support = pool.support(),
        edges = required,
        multisets = config.multisets,
        "sampling null model"
    );

    let mut edges = Vec::with_capacity(required);
    for (offset, &count) in sizes.iter().enumerate() {
        let size = offset + 1;
        for _ in 0..count {
            let edge = if config.multisets {
                draw_multiset(&pool, size, rng)?
            } else {
                draw_distinct(&pool, size, config.max_draw_attempts, rng)?
            };
            edges.push(edge);
        }
    }
    Ok(edges)
}

fn resolve_spec<V: Vertex>(
    vertices: &[V],
    spec: NullModelSpec<'_, V>,
) -> Result<(Vec<usize>, DegreeMap<V>), SimplError> {
    match spec {
        NullModelSpec::Reference(edges) => {
            if let Some(position) = edges.iter().position(Vec::is_empty) {
                return Err(
                    SimplError::input("empty-edge", "edges must contain at least one vertex")
                        .with_context("edge", position),
                );
            }
            let degrees = degrees_of(vertices, edges)?;
            Ok((size_counts(edges), degrees))
        }
        NullModelSpec::Explicit {
            sizes,
            degrees: DegreeSpec::Map(degrees),
        } => Ok((sizes, degrees)),
        NullModelSpec::Explicit {
            sizes,
            degrees: DegreeSpec::Sequence(sequence),
        } => {
            if sequence.len() != vertices.len() {
                return Err(SimplError::input(
                    "degree-sequence-length",
                    "degree sequence must align with the vertex list",
                )
                .with_context("vertices", vertices.len())
                .with_context("degrees", sequence.len()));
            }
            let degrees = vertices.iter().cloned().zip(sequence).collect();
            Ok((sizes, degrees))
        }
    }
}

fn draw_multiset<V: Vertex>(
    pool: &DegreePool<V>,
    size: usize,
    rng: &mut RngHandle,
) -> Result<Vec<V>, SimplError> {
    (0..size).map(|_| pool.draw(rng).cloned()).collect()
}

fn draw_distinct<V: Vertex>(
    pool: &DegreePool<V>,
    size: usize,
    max_attempts: usize,
    rng: &mut RngHandle,
) -> Result<Vec<V>, SimplError> {
    if pool.support() < size {
        return Err(exhausted(size, 0, 0)
            .with_context("support", pool.support())
            .with_hint("fewer vertices have positive degree than the edge size; enable multisets"));
    }
    let mut edge: Vec<V> = Vec::with_capacity(size);
    for _ in 0..max_attempts {
        let vertex = pool.draw(rng)?;
        if !edge.contains(vertex) {
            edge.push(vertex.clone());
            if edge.len() == size {
                return Ok(edge);
            }
        }
    }
    warn!(
        size,
        collected = edge.len(),
        attempts = max_attempts,
        "distinct-vertex draw exhausted"
    );
    Err(exhausted(size, edge.len(), max_attempts)
        .with_hint("raise max_draw_attempts or enable multisets"))
}

fn zero_volume() -> SimplError {
    SimplError::input("zero-volume", "degree-weighted pool is empty")
        .with_context("volume", 0)
}

fn exhausted(size: usize, collected: usize, attempts: usize) -> SimplError {
    SimplError::sampling(
        "exhausted-sampling",
        "could not collect distinct vertices for an edge",
    )
    .with_context("size", size)
    .with_context("collected", collected)
    .with_context("attempts", attempts)
}
