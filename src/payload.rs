use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::Target;
use crate::report;

/// A file and its full text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
}

/// One batch as handed to the push tool.
///
/// Field order is the key order of the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub message: String,
    pub files: Vec<FileRecord>,
}

impl UploadRequest {
    pub fn new(target: &Target, message: String, files: Vec<FileRecord>) -> Self {
        Self {
            owner: target.owner.clone(),
            repo: target.repo.clone(),
            branch: target.branch.clone(),
            message,
            files,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Read every path of `batch` under `root` as UTF-8 text.
///
/// Unreadable files are reported on `stdout` and left out; the remaining
/// records keep their batch order.
pub async fn read_batch(
    root: &Path,
    batch: &[String],
    stdout: &mut impl std::io::Write,
) -> anyhow::Result<Vec<FileRecord>> {
    let mut records = Vec::with_capacity(batch.len());
    for path in batch {
        match tokio::fs::read_to_string(root.join(path)).await {
            Ok(content) => {
                debug!(path = %path, bytes = content.len(), "Read file");
                records.push(FileRecord {
                    path: path.clone(),
                    content,
                });
            }
            Err(err) => report::read_error(stdout, path, &err)?,
        }
    }
    Ok(records)
}
