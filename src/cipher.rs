//! The codec: plaintext bytes to ciphertext integers and back, in unpadded
//! and padded form.
//!
//! Encryption takes the recipient's [`PublicKey`]; decryption takes the
//! recipient's own [`PrivateKey`] together with the modulus it was generated
//! with. Nothing ties the two halves together at the type level: decrypting
//! with a key from a different pair yields garbage bytes, not an error.

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::internals;
use crate::key::{PrivateKey, PublicKeyParts};
use crate::padding;

/// Encrypts `msg` for the holder of `pub_key`, without padding.
///
/// The message bytes are interpreted directly as a big-endian integer `m`
/// and the result is `m^e mod n`. There is no check that `m < n`: a message
/// longer than the modulus silently aliases mod `n` and cannot be recovered,
/// and leading zero bytes are not representable in the integer domain. The
/// padded mode has neither problem.
pub fn encrypt<K: PublicKeyParts>(pub_key: &K, msg: &[u8]) -> BigUint {
    let m = Zeroizing::new(BigUint::from_bytes_be(msg));
    internals::encrypt(pub_key, &m)
}

/// Decrypts an unpadded ciphertext with the recipient's private key and
/// modulus, yielding the minimal big-endian bytes of `c^d mod n`.
pub fn decrypt(priv_key: &PrivateKey, n: &BigUint, ciphertext: &BigUint) -> Result<Vec<u8>> {
    let m = Zeroizing::new(internals::decrypt(priv_key, n, ciphertext)?);
    Ok(m.to_bytes_be())
}

/// Encrypts `msg` for the holder of `pub_key`, packed into a padded block.
///
/// The block is one byte narrower than the modulus and reserves its final
/// two bytes for the pad count, so `msg` may hold at most
/// `block_size(n) - 2` bytes; longer messages fail with
/// [`Error::MessageTooLong`](crate::Error::MessageTooLong).
pub fn encrypt_padded<K: PublicKeyParts>(pub_key: &K, msg: &[u8]) -> Result<BigUint> {
    let block = Zeroizing::new(padding::pad(msg, padding::block_size(pub_key.n()))?);
    let m = Zeroizing::new(BigUint::from_bytes_be(&block));
    Ok(internals::encrypt(pub_key, &m))
}

/// Decrypts a padded ciphertext with the recipient's private key and
/// modulus.
///
/// The recovered integer is re-rendered to the full block width before the
/// pad count is read, so a block whose leading bytes happen to be zero
/// round-trips unchanged.
pub fn decrypt_padded(priv_key: &PrivateKey, n: &BigUint, ciphertext: &BigUint) -> Result<Vec<u8>> {
    let m = Zeroizing::new(internals::decrypt(priv_key, n, ciphertext)?);
    let m_bytes = Zeroizing::new(m.to_bytes_be());

    // A recovered value wider than the block cannot come from encrypt_padded;
    // the ciphertext belongs to a different key pair.
    let block = Zeroizing::new(
        internals::left_pad(&m_bytes, padding::block_size(n)).map_err(|_| Error::Decryption)?,
    );

    padding::unpad(&block)
}
