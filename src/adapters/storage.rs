use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Writes files straight to the local filesystem, replacing whatever was
/// there.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data).await?;
        Ok(())
    }
}
