use crate::domain::model::MapFile;
use crate::utils::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Lazily walks `root` and yields every regular file whose extension is
/// exactly `extension`. Entries are sorted by file name within each
/// directory so repeated runs visit files in the same order.
pub fn discover_map_files(
    root: impl AsRef<Path>,
    extension: &str,
) -> impl Iterator<Item = Result<MapFile>> {
    let extension = extension.to_string();

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            // Symlinked map files count; symlinked directories are not entered.
            if !entry.path().is_file() {
                return None;
            }

            let matches = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == extension);
            if !matches {
                return None;
            }

            MapFile::from_path(entry.into_path()).map(Ok)
        })
}
