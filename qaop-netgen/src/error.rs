use std::io;

use camino::Utf8PathBuf;
use qaop_core::DistanceError;
use thiserror::Error;

/// Errors raised while generating or writing a synthetic network.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A network with zero nodes was requested.
    #[error("at least one node must be generated")]
    NoNodes,
    /// A sampling range was empty, reversed, not finite or out of bounds.
    #[error("invalid {field} range {start}..{end}")]
    InvalidRange {
        /// Name of the offending range.
        field: &'static str,
        /// Lower bound.
        start: f64,
        /// Upper bound.
        end: f64,
    },
    /// Computing distances between the placed nodes failed.
    #[error("failed to compute distances: {0}")]
    Distance(#[from] DistanceError),
    /// Serialising the network failed.
    #[error("failed to serialise network: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Writing the output file failed.
    #[error("failed to write network to {path}: {source}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}
