use rand::RngCore;
use serde::{Deserialize, Serialize};
use simpl_core::provenance::{RunProvenance, SchemaVersion};
use simpl_core::rng::RngHandle;
use simpl_core::{SimplError, SizeMatrix, Vertex};
use tracing::debug;

use crate::flags::MeasureConfig;
use crate::hash::canonical_hash;
use crate::null_model::{generate_null_model, NullModelSpec};
use crate::pairs::{
    count_pairs, count_pairs_matrix, count_pairs_matrix_sized, count_pairs_ordered,
    SimplicialPairs, LARGER_FIRST, SMALLER_FIRST,
};

/// Observed over expected simplicial pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimplicialRatio {
    /// Ratio over all pairs.
    Scalar(f64),
    /// Ratios for pairs whose smaller edge arrived first and last, respectively.
    Ordered([f64; 2]),
}

/// Full outcome of a simpliciality measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureReport {
    /// Layout version of the report.
    pub schema_version: SchemaVersion,
    /// Input hash, master seed and sample count.
    pub provenance: RunProvenance,
    /// Pair count of the supplied edges.
    pub observed: SimplicialPairs,
    /// Pair count summed over every null-model sample.
    pub null_total: u64,
    /// Smoothed expectation for each slot of `observed`.
    pub expected: Vec<f64>,
    /// Observed divided by expected.
    pub ratio: SimplicialRatio,
}

/// Ratio of observed simplicial pairs to their smoothed null-model expectation.
///
/// The expectation is `(1 + total) / samples`, where `total` sums the pair
/// counts of `config.samples` independent null-model draws. With
/// `config.edge_order` the observed pairs are split by arrival order and each
/// slot is compared against half of that expectation.
pub fn simplicial_measure<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    config: &MeasureConfig,
    rng: &mut RngHandle,
) -> Result<SimplicialRatio, SimplError> {
    Ok(simplicial_report(vertices, edges, config, rng)?.ratio)
}

/// Same computation as [`simplicial_measure`], returning every intermediate value.
pub fn simplicial_report<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    config: &MeasureConfig,
    rng: &mut RngHandle,
) -> Result<MeasureReport, SimplError> {
    config.validate()?;
    let master = rng.next_u64();
    let samples = config.samples as f64;

    let observed = if config.edge_order {
        SimplicialPairs::Ordered(count_pairs_ordered(vertices, edges)?)
    } else {
        SimplicialPairs::Total(count_pairs(vertices, edges)?)
    };

    let mut null_total = 0u64;
    for index in 0..config.samples {
        let sample = null_sample(vertices, edges, config, master, index)?;
        null_total += count_pairs(vertices, &sample)?;
    }
    let smoothed = 1.0 + null_total as f64;

    let (expected, ratio) = match &observed {
        SimplicialPairs::Ordered(split) => {
            let expected = smoothed / (2.0 * samples);
            let ratio = SimplicialRatio::Ordered([
                split[SMALLER_FIRST] as f64 / expected,
                split[LARGER_FIRST] as f64 / expected,
            ]);
            (vec![expected; 2], ratio)
        }
        other => {
            let expected = smoothed / samples;
            let ratio = SimplicialRatio::Scalar(other.total() as f64 / expected);
            (vec![expected], ratio)
        }
    };
    debug!(
        samples = config.samples,
        observed = observed.total(),
        null_total,
        "simplicial measure"
    );

    Ok(MeasureReport {
        schema_version: SchemaVersion::default(),
        provenance: RunProvenance::new(canonical_hash(edges), master, config.samples),
        observed,
        null_total,
        expected,
        ratio,
    })
}

/// Cell-wise ratio of the observed size matrix to its null-model expectation.
///
/// Null-model matrices are summed entrywise at the observed dimension, every
/// cell receives a pseudo-count of one and the sum is divided by the number of
/// samples. Null models carry no edge order, so with `config.edge_order` each
/// off-diagonal expectation is halved and mirrored across the diagonal.
pub fn simplicial_matrix<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    config: &MeasureConfig,
    rng: &mut RngHandle,
) -> Result<SizeMatrix<f64>, SimplError> {
    config.validate()?;
    let master = rng.next_u64();
    let samples = config.samples as f64;

    let observed = count_pairs_matrix(vertices, edges, config.edge_order)?;
    let dim = observed.dim();
    let mut null_sum = SizeMatrix::<u64>::zeros(dim);
    for index in 0..config.samples {
        let sample = null_sample(vertices, edges, config, master, index)?;
        null_sum += &count_pairs_matrix_sized(vertices, &sample, dim)?;
    }

    let mut expected = null_sum.map(|count| (1.0 + *count as f64) / samples);
    if config.edge_order {
        for row in 0..dim {
            for col in row + 1..dim {
                let half = expected[(row, col)] / 2.0;
                expected[(row, col)] = half;
                expected[(col, row)] = half;
            }
        }
    }

    let mut ratio = SizeMatrix::<f64>::zeros(dim);
    for row in 0..dim {
        for col in 0..dim {
            ratio[(row, col)] = observed[(row, col)] as f64 / expected[(row, col)];
        }
    }
    debug!(
        samples = config.samples,
        dim,
        observed = observed.total(),
        null_total = null_sum.total(),
        "simplicial matrix"
    );
    Ok(ratio)
}

fn null_sample<V: Vertex>(
    vertices: &[V],
    edges: &[Vec<V>],
    config: &MeasureConfig,
    master: u64,
    index: usize,
) -> Result<Vec<Vec<V>>, SimplError> {
    let mut rng = RngHandle::substream(master, index as u64);
    generate_null_model(
        vertices,
        NullModelSpec::Reference(edges),
        &config.null_model(),
        &mut rng,
    )
}
