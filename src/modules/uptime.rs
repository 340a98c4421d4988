//! Time since boot.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_trimmed;

pub struct UptimeCollector;

impl Collector for UptimeCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let content = read_trimmed(&ctx.path("/proc/uptime"))
            .ok_or_else(|| CollectError::unavailable("/proc/uptime could not be read"))?;

        let seconds = content
            .split_whitespace()
            .next()
            .and_then(|s| s.split('.').next())
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| CollectError::Parse {
                what: "/proc/uptime".to_string(),
                reason: format!("unexpected content '{content}'"),
            })?;

        let total = u32::try_from(seconds).unwrap_or(u32::MAX);
        let days = total / 86400;
        let hours = total % 86400 / 3600;
        let minutes = total % 3600 / 60;
        let secs = total % 60;

        Ok(vec![Collected::new(
            describe(days, hours, minutes, secs),
            vec![
                FormatArg::UInt(days),
                FormatArg::UInt(hours),
                FormatArg::UInt(minutes),
                FormatArg::UInt(secs),
            ],
        )])
    }
}

fn describe(days: u32, hours: u32, minutes: u32, seconds: u32) -> String {
    if days == 0 && hours == 0 && minutes == 0 {
        return format!("{seconds} seconds");
    }

    let unit = |n: u32, name: &str| format!("{n} {name}{}", if n == 1 { "" } else { "s" });

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "min"));
    }
    parts.join(", ")
}
