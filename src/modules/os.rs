//! Operating system name and architecture.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::{find_property, read_trimmed};

/// Reads `PRETTY_NAME` (or `NAME`) from `/etc/os-release`, falling back to
/// the kernel's own name.
pub struct OsCollector;

impl Collector for OsCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let release = std::fs::read_to_string(ctx.path("/etc/os-release"))
            .or_else(|_| std::fs::read_to_string(ctx.path("/usr/lib/os-release")))
            .unwrap_or_default();

        let name = find_property(&release, "PRETTY_NAME")
            .or_else(|| find_property(&release, "NAME"))
            .or_else(|| read_trimmed(&ctx.path("/proc/sys/kernel/ostype")))
            .ok_or_else(|| CollectError::unavailable("No os-release file could be read"))?;

        let arch = std::env::consts::ARCH;

        Ok(vec![Collected::new(
            format!("{name} {arch}"),
            vec![FormatArg::from(name), FormatArg::from(arch)],
        )])
    }
}
