//! `user@host` title line data.

use super::CollectContext;
use crate::utils::read_trimmed;

/// User and host name for the title line. Never fails; unknown parts get a
/// generic name.
#[must_use]
pub fn collect_title(ctx: &CollectContext) -> (String, String) {
    let user = ctx
        .env("USER")
        .or_else(|| ctx.env("LOGNAME"))
        .unwrap_or_else(|| "user".to_string());

    let host = read_trimmed(&ctx.path("/proc/sys/kernel/hostname"))
        .or_else(|| read_trimmed(&ctx.path("/etc/hostname")))
        .or_else(|| ctx.env("HOSTNAME"))
        .unwrap_or_else(|| "localhost".to_string());

    (user, host)
}
