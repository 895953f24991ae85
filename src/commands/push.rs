use anyhow::Context;
use anyhow::Result;
use log::warn;
use tracing::instrument;

use crate::App;
use crate::clients::push_tool::PushTool;
use crate::payload;
use crate::payload::UploadRequest;
use crate::report;

impl<T: PushTool> App<T> {
    /// Push `files` to the configured target, one batch at a time.
    ///
    /// 1. Split the file list into batches of `batch_size`.
    /// 2. For each batch, read its files under `root`, skipping unreadable
    ///    ones.
    /// 3. Hand the batch to the push tool as a single JSON argument.
    ///
    /// Each batch is attempted exactly once. Read failures and tool failures
    /// are reported and the loop moves on, so this only returns an error if
    /// `stdout` cannot be written or a request cannot be serialized.
    pub async fn cmd_push(&self, files: &[String], stdout: &mut impl std::io::Write) -> Result<()> {
        let batches = self.batches(files);
        let total = batches.len();

        for (i, batch) in batches.into_iter().enumerate() {
            self.push_batch(i + 1, total, batch, stdout).await?;
        }

        report::finished(stdout)?;
        Ok(())
    }

    #[instrument(skip(self, batch, stdout), fields(files = batch.len()))]
    async fn push_batch(
        &self,
        index: usize,
        total: usize,
        batch: &[String],
        stdout: &mut impl std::io::Write,
    ) -> Result<()> {
        report::batch_start(stdout, index, total)?;

        let records = payload::read_batch(&self.config.root, batch, stdout).await?;
        if records.is_empty() {
            warn!("Batch {} has no readable files", index);
            report::batch_skipped(stdout, index)?;
            return Ok(());
        }

        let request = UploadRequest::new(
            &self.config.target,
            self.config.commit_message(index, total),
            records,
        );
        let json = request
            .to_json()
            .context("Failed to serialize upload request")?;

        match self.tool.push_files(&json).await {
            Ok(output) if output.success => report::batch_pushed(stdout, index)?,
            Ok(output) => report::batch_failed(stdout, index, &output.stderr)?,
            Err(err) => report::batch_failed(stdout, index, &format!("{:#}", err))?,
        }
        Ok(())
    }
}
