#![deny(missing_docs)]
#![doc = "Core error, randomness and data types shared by the SIMPL crates."]

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{unknown_vertex, ErrorInfo, SimplError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{DegreeMap, SizeMatrix, Vertex};
