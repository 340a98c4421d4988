//! Parsing of the colon-separated structure list.

use std::collections::BTreeMap;

use super::ModuleKind;
use crate::constants::STRUCTURE_DELIMITER;

/// One position in the output, resolved once before anything is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureEntry {
    /// A built-in module.
    Module(ModuleKind),
    /// A user-supplied fixed value, printed under `key`.
    Custom { key: String, value: String },
    /// A name nothing answers to.
    Unknown(String),
}

/// Split `structure` on `:` and resolve each name.
///
/// `custom` maps lower-case names to fixed values and shadows built-in
/// modules of the same name. Empty segments are skipped.
#[must_use]
pub fn parse_structure(structure: &str, custom: &BTreeMap<String, String>) -> Vec<StructureEntry> {
    structure
        .split(STRUCTURE_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            if let Some(value) = custom.get(&name.to_ascii_lowercase()) {
                return StructureEntry::Custom {
                    key: name.to_string(),
                    value: value.clone(),
                };
            }
            ModuleKind::from_name(name)
                .map_or_else(|| StructureEntry::Unknown(name.to_string()), StructureEntry::Module)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_STRUCTURE;

    #[test]
    fn test_default_structure_is_all_known() {
        let entries = parse_structure(DEFAULT_STRUCTURE, &BTreeMap::new());
        assert_eq!(entries.len(), ModuleKind::ALL.len());
        assert!(entries.iter().all(|e| matches!(e, StructureEntry::Module(_))));
    }

    #[test]
    fn test_custom_shadows_module() {
        let mut custom = BTreeMap::new();
        custom.insert("kernel".to_string(), "hand-written".to_string());

        let entries = parse_structure("Kernel:OS", &custom);
        assert_eq!(
            entries,
            vec![
                StructureEntry::Custom {
                    key: "Kernel".to_string(),
                    value: "hand-written".to_string()
                },
                StructureEntry::Module(ModuleKind::Os),
            ]
        );
    }

    #[test]
    fn test_unknown_and_empty_segments() {
        let entries = parse_structure("os::Nonsense:", &BTreeMap::new());
        assert_eq!(
            entries,
            vec![
                StructureEntry::Module(ModuleKind::Os),
                StructureEntry::Unknown("Nonsense".to_string()),
            ]
        );
    }
}
