//! Installed package counts.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::count_dirs;

/// Counts one directory per package in the pacman and flatpak databases.
pub struct PackagesCollector;

impl Collector for PackagesCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let pacman = count_dirs(&ctx.path("/var/lib/pacman/local"));
        let flatpak = count_dirs(&ctx.path("/var/lib/flatpak/app"));
        let all = pacman.saturating_add(flatpak);

        if all == 0 {
            return Err(CollectError::unavailable(
                "No packages from known package managers found",
            ));
        }

        let value = [(pacman, "pacman"), (flatpak, "flatpak")]
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, manager)| format!("{count} ({manager})"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(vec![Collected::new(
            value,
            vec![FormatArg::UInt(all), FormatArg::UInt(pacman), FormatArg::UInt(flatpak)],
        )])
    }
}
