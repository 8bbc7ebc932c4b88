use crate::adapters::discovery::discover_map_files;
use crate::config::ErrorPolicy;
use crate::core::sld;
use crate::domain::model::{MapFile, SyncFailure, SyncOutcome, SyncReport};
use crate::domain::ports::{Storage, StyleSource};
use crate::utils::error::Result;
use std::path::Path;

/// Fetches the SLD for every map file under a directory and writes it next
/// to the map file. Files are processed strictly one after another.
pub struct StyleSynchronizer<S: StyleSource, W: Storage> {
    source: S,
    storage: W,
    input_extension: String,
    output_extension: String,
    error_policy: ErrorPolicy,
}

impl<S: StyleSource, W: Storage> StyleSynchronizer<S, W> {
    pub fn new(source: S, storage: W) -> Self {
        Self {
            source,
            storage,
            input_extension: crate::config::DEFAULT_INPUT_EXTENSION.to_string(),
            output_extension: crate::config::DEFAULT_OUTPUT_EXTENSION.to_string(),
            error_policy: ErrorPolicy::Halt,
        }
    }

    pub fn with_extensions(mut self, input: &str, output: &str) -> Self {
        self.input_extension = input.to_string();
        self.output_extension = output.to_string();
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Map files that a run over `root` would visit, in visiting order.
    pub fn plan(&self, root: impl AsRef<Path>) -> Result<Vec<MapFile>> {
        discover_map_files(root, &self.input_extension).collect()
    }

    /// Syncs every map file under `root`.
    ///
    /// With [`ErrorPolicy::Halt`] the first failing file aborts the run and
    /// its error is returned; output already written stays on disk. With
    /// [`ErrorPolicy::Continue`] failures are collected in the report.
    /// Errors from walking the directory itself always abort.
    pub async fn run(&self, root: impl AsRef<Path>) -> Result<SyncReport> {
        let root = root.as_ref();
        tracing::info!("Scanning {} for *.{} files", root.display(), self.input_extension);

        let mut report = SyncReport::default();

        for map_file in discover_map_files(root, &self.input_extension) {
            let map_file = map_file?;

            match self.sync_file(&map_file).await {
                Ok(outcome) => report.record(map_file, outcome),
                Err(error) => match self.error_policy {
                    ErrorPolicy::Halt => {
                        tracing::error!("Failed to sync {}: {}", map_file.path.display(), error);
                        return Err(error);
                    }
                    ErrorPolicy::Continue => {
                        tracing::warn!("Failed to sync {}: {}", map_file.path.display(), error);
                        report.failures.push(SyncFailure { map_file, error });
                    }
                },
            }
        }

        tracing::info!(
            "Synced {} files: {} written, {} skipped, {} failed",
            report.total(),
            report.written.len(),
            report.skipped.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Fetch, check, reformat and write the style for one map file.
    pub async fn sync_file(&self, map_file: &MapFile) -> Result<SyncOutcome> {
        let response = self.source.fetch_style(&map_file.layer).await?;

        if !sld::is_sld_content_type(response.content_type.as_deref()) {
            tracing::info!(
                "Skipping {}: content type {}",
                map_file.layer,
                response.content_type.as_deref().unwrap_or("<missing>")
            );
            return Ok(SyncOutcome::Skipped {
                content_type: response.content_type,
            });
        }

        let document = sld::pretty_print(&response.body)?;
        let output_path = map_file.output_path(&self.output_extension);
        self.storage.write_file(&output_path, &document).await?;

        tracing::info!("Wrote {} ({} bytes)", output_path.display(), document.len());
        Ok(SyncOutcome::Written(output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StyleResponse;
    use crate::utils::error::SyncError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const SLD: &str = "application/vnd.ogc.sld+xml";

    #[derive(Clone, Default)]
    struct MockSource {
        responses: HashMap<String, std::result::Result<StyleResponse, u16>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl MockSource {
        fn respond(mut self, layer: &str, content_type: &str, body: &str) -> Self {
            self.responses.insert(
                layer.to_string(),
                Ok(StyleResponse {
                    content_type: Some(content_type.to_string()),
                    body: body.to_string(),
                }),
            );
            self
        }

        fn fail(mut self, layer: &str, status: u16) -> Self {
            self.responses.insert(layer.to_string(), Err(status));
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl StyleSource for MockSource {
        async fn fetch_style(&self, layer: &str) -> Result<StyleResponse> {
            self.requests.lock().unwrap().push(layer.to_string());
            match self.responses.get(layer) {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(status)) => Err(SyncError::HttpStatusError {
                    layer: layer.to_string(),
                    status: *status,
                }),
                None => Err(SyncError::HttpStatusError {
                    layer: layer.to_string(),
                    status: 404,
                }),
            }
        }
    }

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    fn map_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "MAP\nEND\n").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_sync_file_writes_reformatted_sld() {
        let source = MockSource::default().respond("roads", SLD, "<Sld><Layer/></Sld>");
        let storage = MockStorage::default();
        let synchronizer = StyleSynchronizer::new(source, storage.clone());

        let map_file = MapFile::from_path("/maps/roads.map").unwrap();
        let outcome = synchronizer.sync_file(&map_file).await.unwrap();

        let expected = PathBuf::from("/maps/roads.sld");
        assert_eq!(outcome, SyncOutcome::Written(expected.clone()));
        assert_eq!(
            storage.get_file(&expected).unwrap(),
            b"<Sld>\n\t<Layer/>\n</Sld>\n"
        );
    }

    #[tokio::test]
    async fn test_non_sld_content_type_writes_nothing() {
        let source = MockSource::default().respond("water", "text/plain", "<Sld/>");
        let storage = MockStorage::default();
        let synchronizer = StyleSynchronizer::new(source, storage.clone());

        let map_file = MapFile::from_path("/maps/water.map").unwrap();
        let outcome = synchronizer.sync_file(&map_file).await.unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Skipped {
                content_type: Some("text/plain".to_string())
            }
        );
        assert!(storage.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_sld_is_an_error_and_writes_nothing() {
        let source = MockSource::default().respond("broken", SLD, "<Sld><Layer></Sld>");
        let storage = MockStorage::default();
        let synchronizer = StyleSynchronizer::new(source, storage.clone());

        let map_file = MapFile::from_path("/maps/broken.map").unwrap();
        assert!(synchronizer.sync_file(&map_file).await.is_err());
        assert!(storage.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_halt_policy_stops_at_first_failure() {
        let dir = map_dir(&["a.map", "b.map", "c.map"]);
        let source = MockSource::default()
            .respond("a", SLD, "<Sld/>")
            .fail("b", 500)
            .respond("c", SLD, "<Sld/>");
        let storage = MockStorage::default();
        let synchronizer = StyleSynchronizer::new(source.clone(), storage.clone());

        let result = synchronizer.run(dir.path()).await;

        assert!(matches!(
            result,
            Err(SyncError::HttpStatusError { status: 500, .. })
        ));
        assert_eq!(source.requested(), vec!["a", "b"]);
        assert!(storage.get_file(&dir.path().join("a.sld")).is_some());
        assert!(storage.get_file(&dir.path().join("c.sld")).is_none());
    }

    #[tokio::test]
    async fn test_continue_policy_collects_failures() {
        let dir = map_dir(&["a.map", "b.map", "c.map", "notes.txt"]);
        let source = MockSource::default()
            .respond("a", SLD, "<Sld/>")
            .fail("b", 500)
            .respond("c", "application/vnd.ogc.se_xml", "<ServiceExceptionReport/>");
        let storage = MockStorage::default();
        let synchronizer = StyleSynchronizer::new(source.clone(), storage)
            .with_error_policy(ErrorPolicy::Continue);

        let report = synchronizer.run(dir.path()).await.unwrap();

        assert_eq!(source.requested(), vec!["a", "b", "c"]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.written, vec![dir.path().join("a.sld")]);
        assert_eq!(report.skipped[0].layer, "c");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].map_file.layer, "b");
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn test_custom_extensions() {
        let dir = map_dir(&["roads.mapfile", "roads.map"]);
        let source = MockSource::default().respond("roads", SLD, "<Sld/>");
        let synchronizer = StyleSynchronizer::new(source.clone(), MockStorage::default())
            .with_extensions("mapfile", "xml");

        let planned = synchronizer.plan(dir.path()).unwrap();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].path, dir.path().join("roads.mapfile"));

        let report = synchronizer.run(dir.path()).await.unwrap();
        assert_eq!(report.written, vec![dir.path().join("roads.xml")]);
    }
}
