use crate::batch;
use crate::clients::push_tool::PushTool;
use crate::config::Config;

pub struct App<T: PushTool> {
    pub config: Config,
    pub tool: T,
}

impl<T: PushTool> App<T> {
    pub fn new(config: Config, tool: T) -> Self {
        Self { config, tool }
    }

    /// Split `files` into batches of the configured size.
    pub(crate) fn batches<'a>(&self, files: &'a [String]) -> Vec<&'a [String]> {
        batch::batches(files, self.config.batch_size)
    }
}
