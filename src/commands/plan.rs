use anyhow::Result;
use colored::Colorize;

use crate::App;
use crate::clients::push_tool::PushTool;

impl<T: PushTool> App<T> {
    /// Show how `files` would be split into batches without reading or
    /// pushing anything.
    pub fn cmd_plan(&self, files: &[String], stdout: &mut impl std::io::Write) -> Result<()> {
        let batches = self.batches(files);
        let total = batches.len();

        for (i, batch) in batches.iter().enumerate() {
            let header = format!("Batch {}/{} ({} files)", i + 1, total, batch.len());
            writeln!(stdout, "{}", header.bold())?;
            for path in batch.iter() {
                writeln!(stdout, "  {}", path)?;
            }
        }

        writeln!(stdout, "{} files in {} batches", files.len(), total)?;
        Ok(())
    }
}
