//! Batteries under `/sys/class/power_supply`, one instance each.

use super::{CollectContext, Collected, Collector};
use crate::constants::MAX_BATTERIES;
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_trimmed;

const POWER_SUPPLY: &str = "/sys/class/power_supply";

pub struct BatteryCollector;

impl Collector for BatteryCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let batteries: Vec<Collected> = (0..MAX_BATTERIES)
            .map(|i| format!("{POWER_SUPPLY}/BAT{i}"))
            .map(|logical| (ctx.path(&logical), logical))
            .filter(|(dir, _)| dir.is_dir())
            .map(|(dir, logical)| {
                let read = |file: &str| read_trimmed(&dir.join(file));
                let fields = [
                    read("manufacturer"),
                    read("model_name"),
                    read("technology"),
                    read("capacity"),
                    read("status"),
                ];
                if fields.iter().all(Option::is_none) {
                    tracing::debug!("{}: no readable attributes", dir.display());
                    return Collected::failed(CollectError::unavailable(format!(
                        "No file in {logical}/ could be read"
                    )));
                }
                instance(fields)
            })
            .collect();

        if batteries.is_empty() {
            return Err(CollectError::unavailable(format!(
                "No file in {POWER_SUPPLY}/BAT* could be read"
            )));
        }

        Ok(batteries)
    }
}

fn instance(fields: [Option<String>; 5]) -> Collected {
    let [manufacturer, model, technology, capacity, status] = &fields;

    let mut parts: Vec<String> = Vec::with_capacity(4);
    parts.extend(manufacturer.iter().cloned());
    parts.extend(model.iter().cloned());
    if let Some(technology) = technology {
        parts.push(format!("({technology})"));
    }
    match (capacity, status) {
        (Some(capacity), Some(status)) => parts.push(format!("[{capacity}%; {status}]")),
        (Some(capacity), None) => parts.push(format!("[{capacity}%]")),
        (None, Some(status)) => parts.push(format!("[{status}]")),
        (None, None) => {}
    }

    Collected::new(parts.join(" "), fields.into_iter().map(FormatArg::from).collect())
}
