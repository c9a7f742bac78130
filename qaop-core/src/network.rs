//! Node networks submitted for optimization.
//!
//! A [`Network`] is an ordered list of [`Node`]s plus an optional list of
//! auxiliary [`Edge`]s. Node order defines the position index used by the
//! distance matrix and the tour. Edges are accepted for compatibility with
//! producers that emit them, but the engine recomputes every distance from
//! coordinates and never reads them.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::SolveError;

/// Caller-assigned node identifier; any integer, including negatives.
pub type NodeId = i64;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A geographic stop in degrees.
///
/// # Examples
/// ```
/// use qaop_core::Node;
///
/// let node = Node::new(7, 70.0, -150.0);
/// assert_eq!(node.location().x, -150.0);
/// assert_eq!(node.location().y, 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within a network.
    pub id: NodeId,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Node {
    /// Construct a node from an id and a latitude/longitude pair.
    #[must_use]
    pub const fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon }
    }

    /// Position as a `geo` coordinate (`x = lon`, `y = lat`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    /// Check that both coordinates are finite and inside their valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidCoordinate`] naming the offending field.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !LATITUDE_RANGE.contains(&self.lat) {
            return Err(SolveError::InvalidCoordinate {
                id: self.id,
                field: CoordinateField::Latitude,
                value: self.lat,
            });
        }
        if !LONGITUDE_RANGE.contains(&self.lon) {
            return Err(SolveError::InvalidCoordinate {
                id: self.id,
                field: CoordinateField::Longitude,
                value: self.lon,
            });
        }
        Ok(())
    }
}

/// Which half of a coordinate pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    /// The `lat` field.
    Latitude,
    /// The `lon` field.
    Longitude,
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("lat"),
            Self::Longitude => f.write_str("lon"),
        }
    }
}

/// Precomputed link between two nodes, as emitted by network generators.
///
/// The solver ignores edges; they only survive deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Great-circle length in nautical miles.
    pub distance_nm: f64,
    /// Weather multiplier in `[1, 2]`.
    pub weather_factor: f64,
}

/// Ordered node set submitted for a solve.
///
/// # Examples
/// ```
/// use qaop_core::{Network, Node};
///
/// let network = Network::from_nodes(vec![Node::new(0, 70.0, -150.0)]);
/// assert_eq!(network.len(), 1);
/// assert!(network.edges.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Network {
    /// Nodes in position order.
    pub nodes: Vec<Node>,
    /// Auxiliary edges; never consulted by the engine.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Network {
    /// Construct a network with no auxiliary edges.
    #[must_use]
    pub const fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in position order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    /// Validate the node set before any computation.
    ///
    /// Checks run in order: the network must not be empty, every coordinate
    /// must be in range and every id must be unique. Edges are not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyNetwork`], [`SolveError::InvalidCoordinate`]
    /// or [`SolveError::DuplicateNodeId`].
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.nodes.is_empty() {
            return Err(SolveError::EmptyNetwork);
        }
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            node.validate()?;
            if !seen.insert(node.id) {
                return Err(SolveError::DuplicateNodeId { id: node.id });
            }
        }
        Ok(())
    }
}
