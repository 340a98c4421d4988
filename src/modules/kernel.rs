//! Kernel name, release and build version.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_trimmed;

pub struct KernelCollector;

impl Collector for KernelCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let release = read_trimmed(&ctx.path("/proc/sys/kernel/osrelease"))
            .ok_or_else(|| CollectError::unavailable("/proc/sys/kernel/osrelease could not be read"))?;
        let sysname = read_trimmed(&ctx.path("/proc/sys/kernel/ostype"));
        let version = read_trimmed(&ctx.path("/proc/sys/kernel/version"));

        Ok(vec![Collected::new(
            release.clone(),
            vec![FormatArg::from(sysname), FormatArg::from(release), FormatArg::from(version)],
        )])
    }
}
