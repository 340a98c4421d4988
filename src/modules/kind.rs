//! The closed set of module kinds.

use std::fmt;

use super::Collector;
use super::{battery, cpu, host, kernel, locale, memory, os, packages, shell, terminal, theme, uptime};

/// Every module that can appear in the structure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Title,
    Separator,
    Os,
    Host,
    Kernel,
    Uptime,
    Packages,
    Shell,
    Terminal,
    Theme,
    Font,
    Cpu,
    Memory,
    Battery,
    Locale,
    Break,
    Colors,
}

impl ModuleKind {
    /// All kinds in default display order.
    pub const ALL: [Self; 17] = [
        Self::Title,
        Self::Separator,
        Self::Os,
        Self::Host,
        Self::Kernel,
        Self::Uptime,
        Self::Packages,
        Self::Shell,
        Self::Terminal,
        Self::Theme,
        Self::Font,
        Self::Cpu,
        Self::Memory,
        Self::Battery,
        Self::Locale,
        Self::Break,
        Self::Colors,
    ];

    /// Look up a kind by structure-list name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let kind = match lower.as_str() {
            "title" => Self::Title,
            "separator" | "seperator" => Self::Separator,
            "os" => Self::Os,
            "host" => Self::Host,
            "kernel" => Self::Kernel,
            "uptime" => Self::Uptime,
            "packages" => Self::Packages,
            "shell" => Self::Shell,
            "terminal" => Self::Terminal,
            "theme" => Self::Theme,
            "font" => Self::Font,
            "cpu" => Self::Cpu,
            "memory" => Self::Memory,
            "battery" => Self::Battery,
            "locale" => Self::Locale,
            "break" => Self::Break,
            "colors" => Self::Colors,
            _ => return None,
        };
        Some(kind)
    }

    /// Display name, used as the key and as the cache file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Separator => "Separator",
            Self::Os => "OS",
            Self::Host => "Host",
            Self::Kernel => "Kernel",
            Self::Uptime => "Uptime",
            Self::Packages => "Packages",
            Self::Shell => "Shell",
            Self::Terminal => "Terminal",
            Self::Theme => "Theme",
            Self::Font => "Font",
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Battery => "Battery",
            Self::Locale => "Locale",
            Self::Break => "Break",
            Self::Colors => "Colors",
        }
    }

    /// Number of format arguments each instance provides.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Title | Self::Separator | Self::Break | Self::Colors => 0,
            Self::Terminal | Self::Locale => 1,
            Self::Os | Self::Shell => 2,
            Self::Host | Self::Kernel | Self::Packages | Self::Cpu | Self::Memory => 3,
            Self::Uptime => 4,
            Self::Theme | Self::Font | Self::Battery => 5,
        }
    }

    /// Whether results are written to and served from the cache.
    ///
    /// Only values that stay put between runs are cached.
    #[must_use]
    pub const fn cacheable(self) -> bool {
        matches!(
            self,
            Self::Os
                | Self::Host
                | Self::Kernel
                | Self::Theme
                | Self::Font
                | Self::Cpu
                | Self::Battery
        )
    }

    /// Names of the format arguments, for `--help-format`.
    #[must_use]
    pub const fn arg_names(self) -> &'static [&'static str] {
        match self {
            Self::Os => &["Name of the OS", "Architecture of the OS"],
            Self::Host => &["Host family", "Host name", "Host version"],
            Self::Kernel => &["Kernel sysname", "Kernel release", "Kernel version"],
            Self::Uptime => &["Days", "Hours", "Minutes", "Seconds"],
            Self::Packages => &[
                "Number of all packages",
                "Number of pacman packages",
                "Number of flatpak packages",
            ],
            Self::Shell => &["Shell path (without name)", "Shell name"],
            Self::Terminal => &["Terminal name"],
            Self::Theme => &[
                "Plasma theme",
                "GTK2 theme",
                "GTK3 theme",
                "GTK4 theme",
                "Combined GTK themes",
            ],
            Self::Font => &[
                "Plasma font",
                "GTK2 font",
                "GTK3 font",
                "GTK4 font",
                "Combined GTK fonts",
            ],
            Self::Cpu => &["CPU name", "CPU logical core count", "CPU frequency (GHz)"],
            Self::Memory => &["Used memory (MiB)", "Total memory (MiB)", "Used memory percentage"],
            Self::Battery => &[
                "Battery manufacturer",
                "Battery model",
                "Battery technology",
                "Battery capacity",
                "Battery status",
            ],
            Self::Locale => &["Locale code"],
            Self::Title | Self::Separator | Self::Break | Self::Colors => &[],
        }
    }

    /// The collector for data modules, `None` for layout modules.
    #[must_use]
    pub fn collector(self) -> Option<&'static dyn Collector> {
        let collector: &'static dyn Collector = match self {
            Self::Os => &os::OsCollector,
            Self::Host => &host::HostCollector,
            Self::Kernel => &kernel::KernelCollector,
            Self::Uptime => &uptime::UptimeCollector,
            Self::Packages => &packages::PackagesCollector,
            Self::Shell => &shell::ShellCollector,
            Self::Terminal => &terminal::TerminalCollector,
            Self::Theme => &theme::ThemeCollector,
            Self::Font => &theme::FontCollector,
            Self::Cpu => &cpu::CpuCollector,
            Self::Memory => &memory::MemoryCollector,
            Self::Battery => &battery::BatteryCollector,
            Self::Locale => &locale::LocaleCollector,
            Self::Title | Self::Separator | Self::Break | Self::Colors => return None,
        };
        Some(collector)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for kind in ModuleKind::ALL {
            assert_eq!(ModuleKind::from_name(kind.name()), Some(kind));
            assert_eq!(ModuleKind::from_name(&kind.name().to_uppercase()), Some(kind));
        }
        assert_eq!(ModuleKind::from_name("seperator"), Some(ModuleKind::Separator));
        assert_eq!(ModuleKind::from_name("weather"), None);
    }

    #[test]
    fn test_arity_matches_arg_names() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.arg_names().len(), kind.arity(), "{kind}");
        }
    }

    #[test]
    fn test_layout_modules_have_no_collector() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.collector().is_none(), kind.arity() == 0, "{kind}");
            if kind.cacheable() {
                assert!(kind.collector().is_some());
            }
        }
    }
}
