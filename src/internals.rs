//! Raw RSA primitives: modular exponentiation in both directions, plus the
//! fixed-width byte rendering both padded operations rely on.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKeyParts};

/// Raw RSA encryption of m with the public key. No padding is performed.
#[inline]
pub(crate) fn encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> BigUint {
    m.modpow(key.e(), key.n())
}

/// Performs raw RSA decryption with no padding, resulting in a plaintext
/// `BigUint`.
///
/// The modulus is supplied by the caller: the private key alone does not
/// identify the key pair it belongs to.
#[inline]
pub(crate) fn decrypt(priv_key: &PrivateKey, n: &BigUint, c: &BigUint) -> Result<BigUint> {
    if c >= n {
        return Err(Error::Decryption);
    }

    if n.is_zero() {
        return Err(Error::Decryption);
    }

    Ok(c.modpow(priv_key.d(), n))
}

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
pub(crate) fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::Internal);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pad_restores_block_width() {
        // The 7-byte block of a 64-bit modulus, recovered from a value whose
        // minimal encoding dropped four leading zero bytes.
        let m_bytes = BigUint::from(0x010203u32).to_bytes_be();
        assert_eq!(m_bytes.len(), 3);
        assert_eq!(left_pad(&m_bytes, 7).unwrap(), [0, 0, 0, 0, 1, 2, 3]);

        // A full-width value passes through unchanged.
        assert_eq!(left_pad(&[9u8; 7], 7).unwrap(), [9u8; 7]);

        // A value wider than the block cannot be rendered into it.
        assert!(left_pad(&[9u8; 8], 7).is_err());
    }

    #[test]
    fn decrypt_rejects_out_of_range_ciphertext() {
        let priv_key = PrivateKey::new(
            BigUint::from(61u32),
            BigUint::from(53u32),
            BigUint::from(413u32),
        );
        let n = BigUint::from(3233u32);

        assert_eq!(
            decrypt(&priv_key, &n, &BigUint::from(3233u32)).unwrap_err(),
            Error::Decryption
        );
        assert_eq!(
            decrypt(&priv_key, &n, &BigUint::zero()).unwrap().bits(),
            0
        );
    }
}
