//! Size-specification parsing.
//!
//! Profiles carry sizes the way mkfs users write them (`"512M"`, `"1G"`).
//! The dispatcher forwards the specification verbatim; only the image
//! allocator needs the byte value.

use crate::errors::{RigError, RigResult};

const KIB: u64 = 1024;

/// Parse a size specification into bytes.
///
/// Accepts a plain byte count or a K/M/G/T suffix (binary multipliers,
/// case insensitive). Whitespace around the value is tolerated.
pub fn parse_size(spec: &str) -> RigResult<u64> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(RigError::Config("empty size specification".to_string()));
    }

    let (digits, multiplier) = match spec.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => {
            let multiplier = match c.to_ascii_uppercase() {
                'K' => KIB,
                'M' => KIB * KIB,
                'G' => KIB * KIB * KIB,
                'T' => KIB * KIB * KIB * KIB,
                other => {
                    return Err(RigError::Config(format!(
                        "unknown size suffix '{}' in '{}'",
                        other, spec
                    )));
                }
            };
            (&spec[..idx], multiplier)
        }
        _ => (spec, 1),
    };

    let value: u64 = digits.trim().parse().map_err(|_| {
        RigError::Config(format!("invalid size specification '{}'", spec))
    })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| RigError::Config(format!("size specification '{}' overflows", spec)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bytes() {
        assert_eq!(parse_size("20480").unwrap(), 20480);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(parse_size("512M").unwrap(), 512 * 1024 * 1024);
        assert_eq!(parse_size("1G").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("4k").unwrap(), 4096);
        assert_eq!(parse_size("2T").unwrap(), 2 * 1024u64.pow(4));
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_size(" 10M ").unwrap(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_size("").is_err());
        assert!(parse_size("M").is_err());
        assert!(parse_size("10X").is_err());
        assert!(parse_size("-5M").is_err());
        assert!(parse_size("ten megabytes").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_size("99999999999999999999").is_err());
        assert!(parse_size("18446744073709551615T").is_err());
    }
}
