//! Locale from the environment.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;

pub struct LocaleCollector;

impl Collector for LocaleCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let locale = ["LC_ALL", "LANG"]
            .into_iter()
            .find_map(|var| ctx.env(var))
            .ok_or_else(|| CollectError::unavailable("Neither $LC_ALL nor $LANG is set"))?;

        Ok(vec![Collected::new(locale.clone(), vec![FormatArg::from(locale)])])
    }
}
