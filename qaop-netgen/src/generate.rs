//! Node placement and nearest-neighbour edges.

use qaop_core::{DistanceMatrix, DistanceModel, Edge, HaversineDistanceModel, Network, Node};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{GenerateError, GeneratorConfig};

/// Generate a synthetic network.
///
/// All coordinates are drawn first, in node order; weather factors are drawn
/// afterwards in edge order. The same configuration therefore always yields
/// the same network. Each node's edges are listed nearest first, ties broken
/// by the lower node id.
///
/// # Errors
///
/// Returns the validation error from [`GeneratorConfig::validate`], or
/// [`GenerateError::Distance`] if the distance matrix cannot be built.
pub fn generate_network(config: &GeneratorConfig) -> Result<Network, GenerateError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let nodes: Vec<Node> = (0_i64..)
        .take(config.nodes)
        .map(|id| {
            let lat = rng.gen_range(config.lat_range.clone());
            let lon = rng.gen_range(config.lon_range.clone());
            Node::new(id, lat, lon)
        })
        .collect();

    let matrix = HaversineDistanceModel.distance_matrix(&nodes)?;
    let k = config.k_nearest.min(nodes.len().saturating_sub(1));
    let mut edges = Vec::with_capacity(nodes.len() * k);
    for (position, source) in nodes.iter().enumerate() {
        for (distance_nm, target) in nearest(&matrix, position, k) {
            let Some(target_node) = nodes.get(target) else {
                continue;
            };
            edges.push(Edge {
                source: source.id,
                target: target_node.id,
                distance_nm,
                weather_factor: rng.gen_range(config.weather_range.clone()),
            });
        }
    }

    log::debug!(
        "generated {} nodes and {} edges from seed {}",
        nodes.len(),
        edges.len(),
        config.seed
    );
    Ok(Network { nodes, edges })
}

/// The `k` positions closest to `from`, excluding itself, nearest first.
fn nearest(matrix: &DistanceMatrix, from: usize, k: usize) -> Vec<(f64, usize)> {
    let Some(row) = matrix.row(from) else {
        return Vec::new();
    };
    let mut candidates: Vec<(f64, usize)> = row
        .iter()
        .enumerate()
        .filter(|&(to, _)| to != from)
        .map(|(to, &distance)| (distance, to))
        .collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    candidates.truncate(k);
    candidates
}
