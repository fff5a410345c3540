use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::application::ports::BackendError;

/// Buffer size for I/O operations. 256KB balances throughput and memory.
const BUFFER_SIZE: usize = 256 * 1024;

/// Utility for computing SHA-256 ETags.
///
/// ETags are the lowercase hex encoding of the 32-byte digest, so they are
/// always 64 characters long.
pub struct ContentHasher;

impl ContentHasher {
    /// Hash an in-memory buffer
    pub fn hash_bytes(data: &[u8]) -> String {
        hex::encode(Sha256::digest(data))
    }

    /// Write `data` to `dest_path` and compute its ETag in the same pass.
    ///
    /// With `durable` set the file is fsynced before returning.
    pub async fn write_and_hash(
        dest_path: &Path,
        data: &[u8],
        durable: bool,
    ) -> Result<(String, u64), BackendError> {
        let mut file =
            tokio::io::BufWriter::with_capacity(BUFFER_SIZE, File::create(dest_path).await?);
        let mut hasher = Sha256::new();

        for chunk in data.chunks(BUFFER_SIZE) {
            hasher.update(chunk);
            file.write_all(chunk).await?;
        }

        file.flush().await?;
        if durable {
            file.get_mut().sync_all().await?;
        }

        Ok((hex::encode(hasher.finalize()), data.len() as u64))
    }
}
