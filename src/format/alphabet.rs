// The 64-symbol numeral alphabet and its reverse index table.
//
// The alphabet doubles as an exclusion list: the four structural separators
// (`~`, `'`, `(`, `)`) never occur in it, so an encoded number can never be
// mistaken for a separator.  The visually ambiguous letters `I`, `O` and
// `l` are left out as well.

/// Ordered numeral alphabet. Index 0 = `.`, index 1 = `-`, index 10 = `F`.
pub const CHAR64: &str = ".-_!*ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz0123456789";

/// The alphabet as bytes, for indexed emission.
pub const CHAR64_BYTES: &[u8; 64] =
    b".-_!*ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz0123456789";

/// Characters with structural meaning in the grammar. None of them occur
/// in [`CHAR64`]; attribute/style sanitization replaces them with `_`.
pub const RESERVED: [char; 4] = ['~', '\'', '(', ')'];

/// Continuation flag OR'd into every non-final 5-bit group.
pub const CONTINUATION: u64 = 32;

/// Mask for one 5-bit group.
pub const GROUP_MASK: u64 = 31;

/// Bits consumed per emitted character.
pub const GROUP_BITS: u32 = 5;

const fn build_index() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < CHAR64_BYTES.len() {
        table[CHAR64_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Reverse lookup: byte -> alphabet index, -1 for bytes outside the alphabet.
const CHAR_INDEX: [i8; 256] = build_index();

/// Alphabet index of `byte`, or `None` for malformed input.
#[inline]
pub fn index_of(byte: u8) -> Option<u8> {
    let idx = CHAR_INDEX[byte as usize];
    if idx < 0 { None } else { Some(idx as u8) }
}
