use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::Product;

// Writes the accumulated run output as one JSON array. The filename
// carries the run start time; the directory is created if absent.
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub async fn write_all(
        &self,
        started_at: DateTime<Local>,
        products: &[Product],
    ) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let filename = format!("apteka_data_{}.json", started_at.format("%Y%m%d_%H%M%S"));
        let path = self.output_dir.join(filename);

        // serde_json leaves non-ASCII text unescaped, which the feed relies on.
        let body = serde_json::to_vec_pretty(products)?;

        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(&body).await?;
        file.flush().await?;

        Ok(path)
    }
}
