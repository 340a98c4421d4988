//! Machine model from DMI.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;
use crate::utils::read_trimmed;

const DMI_DIR: &str = "/sys/devices/virtual/dmi/id";

pub struct HostCollector;

impl Collector for HostCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let read = |file: &str| {
            read_trimmed(&ctx.path(format!("{DMI_DIR}/{file}"))).filter(|v| !is_placeholder(v))
        };

        let family = read("product_family");
        let name = read("product_name");
        let version = read("product_version");

        if family.is_none() && name.is_none() && version.is_none() {
            return Err(CollectError::unavailable(format!(
                "No file in {DMI_DIR} could be read"
            )));
        }

        let value = [&family, &name, &version]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(vec![Collected::new(
            value,
            vec![FormatArg::from(family), FormatArg::from(name), FormatArg::from(version)],
        )])
    }
}

/// Firmware vendors fill unset DMI fields with boilerplate.
fn is_placeholder(value: &str) -> bool {
    matches!(
        value,
        "To be filled by O.E.M." | "To Be Filled By O.E.M." | "Default string" | "None" | "System Product Name"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeRoot;

    #[test]
    fn test_host_fields() {
        let root = FakeRoot::new();
        root.write("sys/devices/virtual/dmi/id/product_family", "ThinkPad X1 Carbon\n");
        root.write("sys/devices/virtual/dmi/id/product_name", "20KH006HGE\n");
        root.write("sys/devices/virtual/dmi/id/product_version", "ThinkPad X1 Carbon 6th\n");

        let out = HostCollector.collect(&root.context()).unwrap();
        assert_eq!(out[0].value, "ThinkPad X1 Carbon 20KH006HGE ThinkPad X1 Carbon 6th");
        assert_eq!(out[0].args.len(), 3);
    }

    #[test]
    fn test_placeholders_are_null() {
        let root = FakeRoot::new();
        root.write("sys/devices/virtual/dmi/id/product_name", "B450 Tomahawk\n");
        root.write("sys/devices/virtual/dmi/id/product_version", "To be filled by O.E.M.\n");

        let out = HostCollector.collect(&root.context()).unwrap();
        assert_eq!(out[0].value, "B450 Tomahawk");
        assert_eq!(out[0].args[0], FormatArg::Null);
        assert_eq!(out[0].args[2], FormatArg::Null);
    }

    #[test]
    fn test_no_dmi() {
        let root = FakeRoot::new();
        let err = HostCollector.collect(&root.context()).unwrap_err();
        assert!(err.to_string().contains("dmi"));
    }
}
