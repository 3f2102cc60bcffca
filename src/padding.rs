//! The length-prefixed single-block padding scheme.
//!
//! A message is packed into one zero-filled block of `block_size(n)` bytes:
//! the message sits at the front and the pad count (block length minus
//! message length) is written as a big-endian `u16` into the final two
//! bytes. The block is one byte narrower than the modulus, so its integer
//! value always stays below `n`.
//!
//! Unpadding only inspects the trailing length field; the zero filler in
//! between carries no information. It expects a buffer of exactly the block
//! width, so callers re-render the decrypted integer to that width first
//! (see [`crate::internals::left_pad`]) instead of trusting the minimal
//! big-endian encoding, whose length shifts with the value's leading zeros.

use num_bigint::BigUint;

use crate::errors::{Error, Result};

/// Width of the trailing pad-count field.
const PAD_COUNT_LEN: usize = 2;

/// Returns the padded block width for a modulus: one byte of headroom below
/// the modulus' own width.
#[inline]
pub(crate) fn block_size(n: &BigUint) -> usize {
    (n.bits() + 7) / 8 - 1
}

/// Packs `msg` into a `block_size`-byte block with a trailing pad count.
///
/// Fails with [`Error::MessageTooLong`] if the message does not leave room
/// for the two pad-count bytes; a block narrower than the count field holds
/// no message at all, not even an empty one. The count field caps the block
/// width at `u16::MAX` bytes, far beyond any practical modulus.
pub(crate) fn pad(msg: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size < PAD_COUNT_LEN || msg.len() > block_size - PAD_COUNT_LEN {
        return Err(Error::MessageTooLong);
    }
    debug_assert!(block_size <= u16::MAX as usize);

    let mut block = vec![0u8; block_size];
    block[..msg.len()].copy_from_slice(msg);

    // The pad count is at least 2, so the count field overlaps the padding
    // region it describes; decode only reads this field and never walks the
    // filler.
    let pad_count = (block_size - msg.len()) as u16;
    block[block_size - PAD_COUNT_LEN..].copy_from_slice(&pad_count.to_be_bytes());

    Ok(block)
}

/// Recovers the message from a full-width padded block.
///
/// `block` must be exactly as wide as the block the sender padded into.
/// A pad count that cannot have been produced by [`pad`] means the block
/// was decrypted with the wrong key or mangled in transit.
pub(crate) fn unpad(block: &[u8]) -> Result<Vec<u8>> {
    if block.len() < PAD_COUNT_LEN {
        return Err(Error::Decryption);
    }

    let mut count_bytes = [0u8; PAD_COUNT_LEN];
    count_bytes.copy_from_slice(&block[block.len() - PAD_COUNT_LEN..]);
    let pad_count = u16::from_be_bytes(count_bytes) as usize;

    if pad_count < PAD_COUNT_LEN || pad_count > block.len() {
        return Err(Error::Decryption);
    }

    Ok(block[..block.len() - pad_count].to_vec())
}
