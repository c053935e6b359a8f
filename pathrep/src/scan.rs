//! Directory-entry integration with the capability protocol.
//!
//! A directory scan produces records that already carry a resolved path
//! value; wrapping them as [`PathCapable`] lets them flow through the
//! resolver without re-deriving or re-querying anything. The variant an
//! entry carries matches the variant of the scan root: a raw root
//! yields raw entries, a textual root yields textual entries. The entry
//! itself never transcodes, which preserves the resolver's
//! non-auto-transcoding policy.

use serde::Serialize;

use crate::codec::EncodingContext;
use crate::error::{Error, Result};
use crate::resolve::PathCapable;
use crate::value::{PathKind, PathValue};

/// A single directory entry: a name component and the entry's full
/// path, both in the same variant.
///
/// # Examples
///
/// ```
/// use pathrep::{DirEntry, PathCapable, PathValue};
///
/// let entry = DirEntry::new(
///     PathValue::text("data.log"),
///     PathValue::text("/var/log/data.log"),
/// )
/// .unwrap();
/// assert_eq!(entry.fs_path().unwrap(), PathValue::text("/var/log/data.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    name: PathValue,
    path: PathValue,
}

impl DirEntry {
    /// Create an entry from a name component and a full path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the two values do not carry the
    /// same variant.
    pub fn new(name: PathValue, path: PathValue) -> Result<Self> {
        if name.kind() != path.kind() {
            return Err(Error::Validation {
                field: "directory entry".to_string(),
                message: format!(
                    "name is {} but path is {}; both must carry the scan root's variant",
                    name.kind(),
                    path.kind()
                ),
            });
        }
        Ok(Self { name, path })
    }

    /// The entry's name component.
    #[must_use]
    pub fn name(&self) -> &PathValue {
        &self.name
    }

    /// The entry's full path value.
    #[must_use]
    pub fn path_value(&self) -> &PathValue {
        &self.path
    }

    /// The variant both components carry.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.path.kind()
    }
}

impl PathCapable for DirEntry {
    /// Return the carried path value unchanged: no re-query of the
    /// underlying storage, no variant change.
    fn fs_path(&self) -> Result<PathValue> {
        Ok(self.path.clone())
    }
}

/// Scan a directory, materializing entries in the root's variant.
///
/// This is the boundary to the directory-scanning collaborator
/// ([`std::fs::read_dir`]). A raw root passes the operating system's
/// bytes through untouched; a textual root decodes them here, at the
/// collaborator boundary, with the supplied encoding context. The
/// entries themselves never transcode after construction.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read, or a codec
/// error if a textual root's entries cannot be decoded under the
/// context's policy.
///
/// # Examples
///
/// ```no_run
/// use pathrep::{scan_dir, EncodingContext, PathValue};
///
/// let ctx = EncodingContext::default();
/// let entries = scan_dir(&PathValue::text("/var/log"), &ctx).unwrap();
/// for entry in &entries {
///     assert_eq!(entry.kind(), pathrep::PathKind::Text);
/// }
/// ```
pub fn scan_dir(root: &PathValue, ctx: &EncodingContext) -> Result<Vec<DirEntry>> {
    let root_path = root.clone().into_path_buf()?;
    let mut entries = Vec::new();

    for entry in std::fs::read_dir(&root_path)? {
        let entry = entry?;
        let name = entry_value(entry.file_name().as_os_str(), root.kind(), ctx)?;
        let path = entry_value(entry.path().as_os_str(), root.kind(), ctx)?;
        entries.push(DirEntry { name, path });
    }

    log::debug!(
        "scanned {} entr{} under a {} root",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        root.kind()
    );
    Ok(entries)
}

#[cfg(unix)]
fn entry_value(
    os: &std::ffi::OsStr,
    kind: PathKind,
    ctx: &EncodingContext,
) -> Result<PathValue> {
    use std::os::unix::ffi::OsStrExt;
    match kind {
        PathKind::Bytes => Ok(PathValue::bytes(os.as_bytes())),
        PathKind::Text => ctx.decode(os.as_bytes()).map(PathValue::Text),
    }
}

#[cfg(not(unix))]
fn entry_value(
    os: &std::ffi::OsStr,
    kind: PathKind,
    ctx: &EncodingContext,
) -> Result<PathValue> {
    let text = os.to_str().ok_or_else(|| Error::Validation {
        field: "directory entry".to_string(),
        message: "entry name is not valid Unicode".to_string(),
    })?;
    match kind {
        PathKind::Text => Ok(PathValue::text(text)),
        PathKind::Bytes => ctx.encode(text).map(PathValue::Bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_matching_variants() {
        let err = DirEntry::new(
            PathValue::text("name"),
            PathValue::bytes(b"/dir/name".to_vec()),
        )
        .unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "directory entry"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_pass_through_capability() {
        let entry = DirEntry::new(
            PathValue::bytes(b"blob".to_vec()),
            PathValue::bytes(b"/store/blob".to_vec()),
        )
        .unwrap();
        assert_eq!(entry.kind(), PathKind::Bytes);
        assert_eq!(
            entry.fs_path().unwrap(),
            PathValue::bytes(b"/store/blob".to_vec())
        );
        assert_eq!(entry.name(), &PathValue::bytes(b"blob".to_vec()));
    }

    #[test]
    fn test_entry_serializes_with_kind_tags() {
        let entry = DirEntry::new(
            PathValue::text("a.txt"),
            PathValue::text("/docs/a.txt"),
        )
        .unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"]["kind"], "text");
        assert_eq!(json["path"]["value"], "/docs/a.txt");
    }
}
