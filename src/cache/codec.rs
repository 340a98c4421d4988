//! NUL-delimited record layout for cache files.
//!
//! Value files (`.ffcv`) hold one field per instance: the rendered text.
//! Split files (`.ffcs`) hold the raw argument text of every instance
//! back-to-back, one field per argument. The reader groups every `arity`
//! consecutive fields into one instance, so no marker separates instances.
//!
//! Every field is followed by a single NUL byte.
//!
//! Instance numbering: a stream holding exactly one instance reports index 0
//! (printed as the bare module name), otherwise instances are numbered from 1.

use std::borrow::Cow;

use crate::format::FormatArg;

/// Field terminator.
pub const DELIMITER: u8 = b'\0';

/// One decoded instance together with its display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedInstance<T> {
    /// 0 for a lone instance, otherwise 1-based position.
    pub index: u8,
    pub data: T,
}

/// Append one rendered-value record.
pub fn encode_value(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(text.as_bytes());
    out.push(DELIMITER);
}

/// Append one split-argument record: every argument's canonical text, each
/// terminated by NUL.
pub fn encode_split(out: &mut Vec<u8>, args: &[FormatArg]) {
    for arg in args {
        out.extend_from_slice(arg.to_text().as_bytes());
        out.push(DELIMITER);
    }
}

/// Decode a value file into its instances.
#[must_use]
pub fn decode_values(content: &[u8]) -> Vec<CachedInstance<String>> {
    let fields = fields(content);
    number(fields.into_iter().map(Cow::into_owned).collect())
}

/// Decode a split file, grouping fields by `arity`.
///
/// An incomplete trailing group is dropped. An arity of zero yields no
/// instances.
#[must_use]
pub fn decode_split(content: &[u8], arity: usize) -> Vec<CachedInstance<Vec<String>>> {
    if arity == 0 {
        return Vec::new();
    }

    let fields = fields(content);
    let groups = fields
        .chunks_exact(arity)
        .map(|chunk| chunk.iter().map(|f| f.clone().into_owned()).collect())
        .collect();

    number(groups)
}

/// Split content into NUL-delimited fields.
///
/// The final terminator is stripped first, so content made of a single NUL
/// is empty and yields no fields.
fn fields(content: &[u8]) -> Vec<Cow<'_, str>> {
    let content = content.strip_suffix(&[DELIMITER]).unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }

    content.split(|b| *b == DELIMITER).map(String::from_utf8_lossy).collect()
}

fn number<T>(items: Vec<T>) -> Vec<CachedInstance<T>> {
    let single = items.len() == 1;
    items
        .into_iter()
        .enumerate()
        .map(|(i, data)| CachedInstance {
            index: if single {
                0
            } else {
                u8::try_from(i + 1).unwrap_or(u8::MAX)
            },
            data,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery(fields: [&str; 5]) -> Vec<FormatArg> {
        fields.iter().map(|f| FormatArg::from(*f)).collect()
    }

    #[test]
    fn test_empty_content_has_no_instances() {
        assert!(decode_values(b"").is_empty());
        assert!(decode_split(b"", 3).is_empty());
    }

    #[test]
    fn test_single_trailing_nul_is_empty() {
        assert!(decode_values(b"\0").is_empty());
        assert!(decode_split(b"\0", 1).is_empty());
    }

    #[test]
    fn test_single_value_is_unindexed() {
        let mut buf = Vec::new();
        encode_value(&mut buf, "6.1.0-arch1");
        assert_eq!(buf, b"6.1.0-arch1\0");

        let decoded = decode_values(&buf);
        assert_eq!(
            decoded,
            vec![CachedInstance {
                index: 0,
                data: "6.1.0-arch1".to_string()
            }]
        );
    }

    #[test]
    fn test_multiple_values_numbered_from_one() {
        let mut buf = Vec::new();
        encode_value(&mut buf, "first");
        encode_value(&mut buf, "second");
        encode_value(&mut buf, "third");

        let decoded = decode_values(&buf);
        let indices: Vec<u8> = decoded.iter().map(|i| i.index).collect();
        let data: Vec<&str> = decoded.iter().map(|i| i.data.as_str()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(data, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_value_instance_survives_among_others() {
        let mut buf = Vec::new();
        encode_value(&mut buf, "a");
        encode_value(&mut buf, "");

        let decoded = decode_values(&buf);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].data, "");
        assert_eq!(decoded[1].index, 2);
    }

    #[test]
    fn test_split_roundtrip_preserves_grouping() {
        let first = battery(["SONY", "MODEL", "Li-ion", "80", "Charging"]);
        let second = battery(["ACME", "X1", "Li-poly", "55", "Discharging"]);

        let mut buf = Vec::new();
        encode_split(&mut buf, &first);
        encode_split(&mut buf, &second);

        let decoded = decode_split(&buf, 5);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].index, 1);
        assert_eq!(decoded[0].data, vec!["SONY", "MODEL", "Li-ion", "80", "Charging"]);
        assert_eq!(decoded[1].index, 2);
        assert_eq!(decoded[1].data, vec!["ACME", "X1", "Li-poly", "55", "Discharging"]);
    }

    #[test]
    fn test_split_single_instance_is_unindexed() {
        let mut buf = Vec::new();
        encode_split(&mut buf, &[FormatArg::UInt(3), FormatArg::Null, FormatArg::from("x")]);
        assert_eq!(buf, b"3\0\0x\0");

        let decoded = decode_split(&buf, 3);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].index, 0);
        assert_eq!(decoded[0].data, vec!["3", "", "x"]);
    }

    #[test]
    fn test_split_incomplete_group_dropped() {
        let decoded = decode_split(b"a\0b\0c\0", 2);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].data, vec!["a", "b"]);
        assert!(decode_split(b"a\0", 2).is_empty());
        assert!(decode_split(b"a\0b\0", 0).is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let decoded = decode_values(b"ok\xff\0");
        assert_eq!(decoded[0].data, "ok\u{fffd}");
    }
}
