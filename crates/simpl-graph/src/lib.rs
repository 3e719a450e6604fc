#![deny(missing_docs)]
#![doc = include_str!("../docs/simpliciality-api.md")]

//! Simplicial pair counting and Chung–Lu null models for hypergraphs.

mod degrees;
mod flags;
mod hash;
mod index;
mod null_model;
mod pairs;
mod ratio;

pub use degrees::{degrees_of, total_volume, volume_of, DegreeSource};
pub use flags::{MeasureConfig, NullModelConfig, PairFlags};
pub use hash::canonical_hash;
pub use index::{incidence_index, partition_by_size, size_counts, IncidenceIndex};
pub use null_model::{generate_null_model, range_vertices, DegreePool, DegreeSpec, NullModelSpec};
pub use pairs::{
    count_pairs, count_pairs_matrix, count_pairs_ordered, simplicial_pairs, SimplicialPairs,
    LARGER_FIRST, SMALLER_FIRST,
};
pub use ratio::{
    simplicial_matrix, simplicial_measure, simplicial_report, MeasureReport, SimplicialRatio,
};
