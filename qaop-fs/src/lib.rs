//! UTF-8 file helpers built on `cap-std` and `camino`.
//!
//! Every operation opens the containing directory with ambient authority and
//! then works relative to that capability, so callers pass plain paths while
//! the actual IO stays capability-scoped.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a whole UTF-8 file.
///
/// # Errors
///
/// Returns the underlying IO error, including `InvalidData` for non-UTF-8
/// contents.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name)
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
///
/// Returns the underlying IO error.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent(path)?;
    dir.write(name, contents)
}

/// Whether `path` names an existing regular file.
///
/// A missing file or missing parent directory is `Ok(false)`.
///
/// # Errors
///
/// Returns any IO error other than `NotFound`.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let lookup = open_parent(path).and_then(|(dir, name)| dir.metadata(name));
    match lookup {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
///
/// # Errors
///
/// Returns the underlying IO error.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&relative)
}

fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory path into the root it hangs off and the part below it.
///
/// Relative paths hang off the current directory.
fn split_anchor(dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir
                if relative.as_str().is_empty() =>
            {
                anchor.push(component.as_str());
            }
            Utf8Component::CurDir => {}
            other => relative.push(other.as_str()),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
        (dir, root)
    }

    #[rstest]
    fn written_files_can_be_read_back(temp_root: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp_root;
        let path = root.join("nested/deeper/net.json");
        write_utf8_file(&path, "{\"nodes\": []}").expect("write file");
        assert_eq!(read_utf8_file(&path).expect("read file"), "{\"nodes\": []}");
    }

    #[rstest]
    fn writing_replaces_existing_contents(temp_root: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp_root;
        let path = root.join("out.json");
        write_utf8_file(&path, "first").expect("first write");
        write_utf8_file(&path, "second").expect("second write");
        assert_eq!(read_utf8_file(&path).expect("read file"), "second");
    }

    #[rstest]
    fn regular_file_checks(temp_root: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp_root;
        let file = root.join("present.json");
        write_utf8_file(&file, "{}").expect("write file");

        assert!(is_regular_file(&file).expect("file check"));
        assert!(!is_regular_file(&root.join("absent.json")).expect("missing check"));
        assert!(!is_regular_file(&root.join("no/such/dir.json")).expect("missing parent"));
        assert!(!is_regular_file(&root).expect("directory check"));
    }

    #[rstest]
    fn reading_a_missing_file_fails(temp_root: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = temp_root;
        let err = read_utf8_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    #[case("/var/data", "/", "var/data")]
    #[case("data/out", ".", "data/out")]
    #[case("./data", ".", "data")]
    fn anchors_are_split_from_relative_parts(
        #[case] input: &str,
        #[case] anchor: &str,
        #[case] relative: &str,
    ) {
        let (found_anchor, found_relative) = split_anchor(Utf8Path::new(input));
        assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
        assert_eq!(found_relative, Utf8PathBuf::from(relative));
    }
}
