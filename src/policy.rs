//! Pluggable cell-value semantics.
//!
//! The policy is picked once when a [`Machine`](crate::Machine) is built and
//! applied by the tape after every arithmetic update. Storage is always
//! `i64`; under the byte policy the stored pattern is the canonical
//! `0..=255` byte, and signedness only changes how values are reported.

/// How a signed-byte cell is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Arithmetic and printing semantics for cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellPolicy {
    /// Plain integers: arithmetic never wraps; printing requires the value
    /// to be a valid character codepoint.
    #[default]
    Unbounded,
    /// Byte cells: every update wraps modulo 256; printing never fails.
    Byte(Signedness),
}

impl CellPolicy {
    /// Applied after every arithmetic update before the value is stored.
    pub fn wrap(self, value: i64) -> i64 {
        match self {
            CellPolicy::Unbounded => value,
            CellPolicy::Byte(_) => value.rem_euclid(256),
        }
    }

    /// The character a cell value prints as, or `None` when the value is
    /// not a valid codepoint under this policy.
    pub fn to_output_char(self, value: i64) -> Option<char> {
        match self {
            CellPolicy::Unbounded => u32::try_from(value).ok().and_then(char::from_u32),
            CellPolicy::Byte(_) => Some(value as u8 as char),
        }
    }

    /// The value as reported to the user. Signed bytes reinterpret the
    /// stored pattern as two's complement; everything else reports the
    /// stored value unchanged.
    pub fn display_value(self, value: i64) -> i64 {
        match self {
            CellPolicy::Byte(Signedness::Signed) => i64::from(value as u8 as i8),
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_wrap_is_identity() {
        let policy = CellPolicy::Unbounded;
        for v in [-300, -1, 0, 255, 256, 1_000_000] {
            assert_eq!(policy.wrap(v), v);
        }
    }

    #[test]
    fn byte_wrap_reduces_modulo_256() {
        let policy = CellPolicy::Byte(Signedness::Unsigned);
        assert_eq!(policy.wrap(256), 0);
        assert_eq!(policy.wrap(-1), 255);
        assert_eq!(policy.wrap(300), 44);
    }

    #[test]
    fn signed_and_unsigned_bytes_wrap_identically() {
        let signed = CellPolicy::Byte(Signedness::Signed);
        let unsigned = CellPolicy::Byte(Signedness::Unsigned);
        for v in [-257, -1, 0, 127, 128, 255, 256, 511] {
            assert_eq!(signed.wrap(v), unsigned.wrap(v));
        }
    }

    #[test]
    fn unbounded_output_requires_a_valid_codepoint() {
        let policy = CellPolicy::Unbounded;
        assert_eq!(policy.to_output_char(65), Some('A'));
        assert_eq!(policy.to_output_char(2), Some('\u{2}'));
        assert_eq!(policy.to_output_char(-1), None);
        assert_eq!(policy.to_output_char(0xD800), None); // surrogate
        assert_eq!(policy.to_output_char(0x110000), None);
    }

    #[test]
    fn byte_output_never_fails() {
        let policy = CellPolicy::Byte(Signedness::Unsigned);
        assert_eq!(policy.to_output_char(0), Some('\0'));
        assert_eq!(policy.to_output_char(255), Some('\u{ff}'));
    }

    #[test]
    fn signedness_affects_reporting_only() {
        let signed = CellPolicy::Byte(Signedness::Signed);
        let unsigned = CellPolicy::Byte(Signedness::Unsigned);
        assert_eq!(signed.display_value(255), -1);
        assert_eq!(unsigned.display_value(255), 255);
        assert_eq!(signed.display_value(127), 127);
    }
}
