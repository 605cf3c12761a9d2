use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid asset name: {0}")]
    InvalidName(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flat directory of public assets, served under `/assets`.
#[derive(Clone, Debug)]
pub struct AssetStorage {
    root: PathBuf,
}

impl AssetStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await?;
        info!("Assets directory ready at {}", self.root.display());
        Ok(())
    }

    /// Writes `data` to `<root>/<file_name>`, replacing any previous file.
    ///
    /// The file handle is closed when this returns, on success and on error.
    pub async fn write(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name == "."
            || file_name == ".."
        {
            return Err(StorageError::InvalidName(file_name.to_string()));
        }

        let path = self.root.join(file_name);
        let wrap = |source| StorageError::Write { path: path.clone(), source };

        let mut file = fs::File::create(&path).await.map_err(wrap)?;
        file.write_all(data).await.map_err(wrap)?;
        file.flush().await.map_err(wrap)?;

        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(path)
    }
}
