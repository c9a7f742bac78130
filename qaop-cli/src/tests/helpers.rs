//! Test helpers for temporary workspaces and request files.

use camino::{Utf8Path, Utf8PathBuf};
use qaop_core::{Mode, SolveRequest};
use qaop_core::test_support::triangle_network;
use tempfile::TempDir;

/// A temporary directory addressed by a UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &str) {
    qaop_fs::write_utf8_file(path, contents).expect("write test file");
}

/// Write the triangle network as a bare network document.
pub(super) fn write_triangle_network(path: &Utf8Path) {
    let payload = serde_json::to_string_pretty(&triangle_network()).expect("serialize network");
    write_utf8(path, &payload);
}

/// Write the triangle network wrapped in a request for `mode`.
pub(super) fn write_triangle_request(path: &Utf8Path, mode: Mode) {
    let request = SolveRequest::new(triangle_network(), mode);
    let payload = serde_json::to_string_pretty(&request).expect("serialize request");
    write_utf8(path, &payload);
}
