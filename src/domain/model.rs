use crate::utils::error::SyncError;
use std::path::PathBuf;

/// A map-definition file found on disk. The file stem doubles as the WMS
/// layer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    pub path: PathBuf,
    pub layer: String,
}

impl MapFile {
    /// Returns `None` for paths without a file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let layer = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self { path, layer })
    }

    /// Sibling path with the same stem and the given extension.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}

/// A successful (2xx) GetStyles response.
#[derive(Debug, Clone)]
pub struct StyleResponse {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Written(PathBuf),
    Skipped { content_type: Option<String> },
}

#[derive(Debug)]
pub struct SyncFailure {
    pub map_file: MapFile,
    pub error: SyncError,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<MapFile>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, map_file: MapFile, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Written(path) => self.written.push(path),
            SyncOutcome::Skipped { .. } => self.skipped.push(map_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_is_file_stem() {
        let map_file = MapFile::from_path("mapfiles/roads/ch.roads.map").unwrap();
        assert_eq!(map_file.layer, "ch.roads");
        assert_eq!(
            map_file.output_path("sld"),
            PathBuf::from("mapfiles/roads/ch.roads.sld")
        );
    }

    #[test]
    fn test_report_counts() {
        let mut report = SyncReport::default();
        let a = MapFile::from_path("a.map").unwrap();
        let b = MapFile::from_path("b.map").unwrap();
        report.record(a, SyncOutcome::Written(PathBuf::from("a.sld")));
        report.record(b, SyncOutcome::Skipped { content_type: None });

        assert_eq!(report.total(), 2);
        assert!(report.is_success());
        assert_eq!(report.written, vec![PathBuf::from("a.sld")]);
    }
}
