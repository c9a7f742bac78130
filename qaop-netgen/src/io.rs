//! Writing generated networks to disk.

use camino::Utf8Path;
use qaop_core::Network;

use crate::GenerateError;

/// Render a network as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`GenerateError::Serialize`] if the network cannot be encoded,
/// which only happens for non-finite coordinates or distances.
pub fn network_to_json(network: &Network) -> Result<String, GenerateError> {
    let mut json = serde_json::to_string_pretty(network)?;
    json.push('\n');
    Ok(json)
}

/// Write `network` to `path` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`GenerateError::Serialize`] or [`GenerateError::Write`].
pub fn write_network(path: &Utf8Path, network: &Network) -> Result<(), GenerateError> {
    let json = network_to_json(network)?;
    qaop_fs::write_utf8_file(path, &json).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote network with {} nodes to {path}", network.len());
    Ok(())
}
