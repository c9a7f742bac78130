//! Closed tours over node positions.
//!
//! A [`Tour`] lists `n + 1` positions: it starts at the start position,
//! visits each of the `n` positions exactly once, and ends back at the start.
//! The only way to obtain a `Tour` is through [`Tour::new`], which enforces
//! that shape, so downstream code never sees a partial tour.

use thiserror::Error;

/// Errors returned by [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A tour over zero nodes was requested.
    #[error("a tour needs at least one node")]
    NoNodes,
    /// The sequence length was not `node_count + 1`.
    #[error("tour over {node_count} nodes must list {expected} positions, found {found}")]
    WrongLength {
        /// Number of nodes the tour covers.
        node_count: usize,
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// The first and last positions differ.
    #[error("tour starts at {first} but ends at {last}")]
    NotClosed {
        /// First position.
        first: usize,
        /// Last position.
        last: usize,
    },
    /// A position does not name a node.
    #[error("position {position} is outside 0..{node_count}")]
    UnknownPosition {
        /// Offending position.
        position: usize,
        /// Number of nodes the tour covers.
        node_count: usize,
    },
    /// A position appeared more than once before the closing return.
    #[error("position {position} is visited more than once")]
    RepeatedPosition {
        /// Offending position.
        position: usize,
    },
}

/// A closed visiting order over node positions.
///
/// # Examples
/// ```
/// use qaop_core::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 3)?;
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.node_count(), 3);
/// assert_eq!(tour.legs().count(), 3);
/// # Ok::<(), qaop_core::TourError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    positions: Vec<usize>,
}

impl Tour {
    /// Validate and wrap a closed position sequence covering `node_count`
    /// nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`TourError`] describing the first violated rule.
    pub fn new(positions: Vec<usize>, node_count: usize) -> Result<Self, TourError> {
        if node_count == 0 {
            return Err(TourError::NoNodes);
        }
        let expected = node_count + 1;
        if positions.len() != expected {
            return Err(TourError::WrongLength {
                node_count,
                expected,
                found: positions.len(),
            });
        }
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            return Err(TourError::NoNodes);
        };
        if first != last {
            return Err(TourError::NotClosed { first, last });
        }
        let mut visited = vec![false; node_count];
        for &position in positions.iter().take(node_count) {
            let Some(slot) = visited.get_mut(position) else {
                return Err(TourError::UnknownPosition {
                    position,
                    node_count,
                });
            };
            if *slot {
                return Err(TourError::RepeatedPosition { position });
            }
            *slot = true;
        }
        Ok(Self { positions })
    }

    /// Position the tour starts and ends at.
    #[must_use]
    pub fn start(&self) -> usize {
        self.positions.first().copied().unwrap_or_default()
    }

    /// Number of distinct nodes visited.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Full closed sequence, including the return to the start.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Consecutive `(from, to)` legs, including the closing leg.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.windows(2).filter_map(|leg| match leg {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }

    /// Consume the tour and return its positions.
    #[must_use]
    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}
