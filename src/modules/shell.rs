//! Login shell from `$SHELL`.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;

pub struct ShellCollector;

impl Collector for ShellCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let shell = ctx
            .env("SHELL")
            .ok_or_else(|| CollectError::unavailable("$SHELL is not set"))?;

        let (dir, name) = match shell.rfind('/') {
            Some(pos) => shell.split_at(pos + 1),
            None => ("", shell.as_str()),
        };

        Ok(vec![Collected::new(name, vec![FormatArg::from(dir), FormatArg::from(name)])])
    }
}
