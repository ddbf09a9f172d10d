use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Sequential writer for one rendered audio file.
///
/// Creating it makes the parent directory if needed and truncates any existing file.
pub struct AudioFileWriter {
    path: PathBuf,
    file: BufWriter<File>,
    bytes_written: u64,
}

impl AudioFileWriter {
    pub async fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = File::create(&path).await?;
        tracing::debug!(path = %path.display(), "Audio file opened");

        Ok(Self {
            path,
            file: BufWriter::new(file),
            bytes_written: 0,
        })
    }

    pub async fn write_chunk(&mut self, data: &[u8]) -> std::io::Result<()> {
        self.file.write_all(data).await?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close, returning the total byte count
    pub async fn finish(mut self) -> std::io::Result<u64> {
        self.file.flush().await?;
        self.file.into_inner().sync_all().await?;
        Ok(self.bytes_written)
    }
}
