//! Used and total memory.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;

pub struct MemoryCollector;

impl Collector for MemoryCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let meminfo = std::fs::read_to_string(ctx.path("/proc/meminfo")).map_err(|err| {
            CollectError::Unreadable {
                path: "/proc/meminfo".to_string(),
                reason: err.to_string(),
            }
        })?;

        let field = |name: &str| -> Option<u64> {
            meminfo.lines().find_map(|line| {
                let rest = line.strip_prefix(name)?.strip_prefix(':')?;
                rest.split_whitespace().next()?.parse().ok()
            })
        };

        let total_kib = field("MemTotal").filter(|t| *t > 0).ok_or_else(|| CollectError::Parse {
            what: "/proc/meminfo".to_string(),
            reason: "MemTotal missing".to_string(),
        })?;

        let available_kib = field("MemAvailable").unwrap_or_else(|| {
            let free = field("MemFree").unwrap_or(0);
            let buffers = field("Buffers").unwrap_or(0);
            let cached = field("Cached").unwrap_or(0);
            let shmem = field("Shmem").unwrap_or(0);
            (free + buffers + cached).saturating_sub(shmem)
        });

        let used_kib = total_kib.saturating_sub(available_kib);
        let total = to_u32(total_kib / 1024);
        let used = to_u32(used_kib / 1024);
        let percent = to_u32(used_kib * 100 / total_kib);

        Ok(vec![Collected::new(
            format!("{used}MiB / {total}MiB ({percent}%)"),
            vec![FormatArg::UInt(used), FormatArg::UInt(total), FormatArg::UInt(percent)],
        )])
    }
}

fn to_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
