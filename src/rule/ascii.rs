use core::hash::Hasher;

use super::Equivalence;

/// Equality over text that ignores ASCII case.
///
/// `"b"` and `"B"` are the same element under this rule. Non-ASCII
/// bytes compare verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCaseless;

impl<T: AsRef<str>> Equivalence<T> for AsciiCaseless {
    fn eq(&self, a: &T, b: &T) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }

    fn hash(&self, value: &T, state: &mut dyn Hasher) {
        for byte in value.as_ref().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        // str-style length terminator
        state.write_u8(0xff);
    }
}
