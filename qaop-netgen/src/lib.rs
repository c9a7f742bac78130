//! Synthetic Arctic network generator.
//!
//! Produces reproducible [`Network`](qaop_core::Network) fixtures: nodes are
//! scattered uniformly over a latitude/longitude box with a seeded
//! `ChaCha8Rng`, and each node is linked to its `k` nearest neighbours by
//! auxiliary edges carrying a great-circle distance and a random weather
//! factor. The solver ignores those edges; they exist so generated files look
//! like real operational networks.
//!
//! ```
//! use qaop_netgen::{GeneratorConfig, generate_network};
//!
//! let config = GeneratorConfig { nodes: 5, ..GeneratorConfig::default() };
//! let network = generate_network(&config)?;
//! assert_eq!(network.len(), 5);
//! assert_eq!(network.edges.len(), 15);
//! # Ok::<(), qaop_netgen::GenerateError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod generate;
mod io;

pub use config::{DEFAULT_OUTPUT_PATH, GeneratorConfig};
pub use error::GenerateError;
pub use generate::generate_network;
pub use io::{network_to_json, write_network};
