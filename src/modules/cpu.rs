//! Processor model, logical core count and maximum frequency.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_trimmed;

pub struct CpuCollector;

impl Collector for CpuCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let path = ctx.path("/proc/cpuinfo");
        let cpuinfo = std::fs::read_to_string(&path).map_err(|err| CollectError::Unreadable {
            path: "/proc/cpuinfo".to_string(),
            reason: err.to_string(),
        })?;

        let mut name = None;
        let mut mhz = None;
        let mut cores = 0u32;

        for line in cpuinfo.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "processor" => cores += 1,
                "model name" | "Hardware" if name.is_none() => name = Some(value.to_string()),
                "cpu MHz" if mhz.is_none() => mhz = value.parse::<f64>().ok(),
                _ => {}
            }
        }

        let name = name.ok_or_else(|| CollectError::unavailable("No CPU model in /proc/cpuinfo"))?;

        let ghz = read_trimmed(&ctx.path("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq"))
            .and_then(|khz| khz.parse::<f64>().ok())
            .map(|khz| khz / 1_000_000.0)
            .or_else(|| mhz.map(|mhz| mhz / 1000.0))
            .map(|ghz| format!("{ghz:.2}"));

        let mut value = name.clone();
        if cores > 0 {
            value.push_str(&format!(" ({cores})"));
        }
        if let Some(ghz) = &ghz {
            value.push_str(&format!(" @ {ghz}GHz"));
        }

        Ok(vec![Collected::new(
            value,
            vec![FormatArg::from(name), FormatArg::UInt(cores), FormatArg::from(ghz)],
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeRoot;

    const CPUINFO: &str = "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X 8-Core Processor\ncpu MHz\t\t: 2200.000\n\nprocessor\t: 1\nmodel name\t: AMD Ryzen 7 5800X 8-Core Processor\ncpu MHz\t\t: 3800.000\n";

    #[test]
    fn test_cpu_with_cpufreq() {
        let root = FakeRoot::new();
        root.write("proc/cpuinfo", CPUINFO);
        root.write("sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq", "4850000\n");

        let out = CpuCollector.collect(&root.context()).unwrap();
        assert_eq!(out[0].value, "AMD Ryzen 7 5800X 8-Core Processor (2) @ 4.85GHz");
        assert_eq!(out[0].args[1], FormatArg::UInt(2));
    }

    #[test]
    fn test_cpu_mhz_fallback() {
        let root = FakeRoot::new();
        root.write("proc/cpuinfo", CPUINFO);

        let out = CpuCollector.collect(&root.context()).unwrap();
        assert_eq!(out[0].args[2], FormatArg::from("2.20"));
    }

    #[test]
    fn test_no_model() {
        let root = FakeRoot::new();
        root.write("proc/cpuinfo", "processor\t: 0\n");
        assert!(CpuCollector.collect(&root.context()).is_err());
    }
}
