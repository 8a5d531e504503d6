use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

// Append-only failure trail, one block per failed product. The file is
// opened per append so concurrent tasks rely on plain append semantics.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn append(&self, url: &str, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let entry = format!("Product URL: {url}\nError message: {message}\n\n");
        file.write_all(entry.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
