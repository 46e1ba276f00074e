//! Counter block construction and big-endian increment.

use crate::BLOCK_SIZE;

/// Builds the initial counter block for the given nonce.
///
/// The nonce occupies the leading bytes of the block; the trailing bytes
/// start at zero and are what increments first across keystream blocks. A
/// 16-byte nonce supplies the entire initial counter value.
pub(crate) fn block_from_nonce(nonce: &[u8]) -> [u8; BLOCK_SIZE] {
    debug_assert!(nonce.len() <= BLOCK_SIZE);
    let mut block = [0u8; BLOCK_SIZE];
    block[..nonce.len()].copy_from_slice(nonce);
    block
}

/// Increments `buf` in place as a big-endian integer of any length.
///
/// The carry runs from the last byte toward the first; once every byte has
/// overflowed the value silently wraps to all zeros. The same routine
/// advances the counter block between keystream blocks inside
/// [`encrypt`](crate::encrypt), and can be applied to a nonce to derive
/// successive per-message nonces under one key.
#[inline]
pub fn increment(buf: &mut [u8]) {
    for b in buf.iter_mut().rev() {
        *b = b.wrapping_add(1);
        if *b != 0 {
            break;
        }
    }
}
