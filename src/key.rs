//! RSA key types.
//!
//! A [`KeyPair`] is generated as a unit and plays the role of one party: it
//! hands out its [`PublicKey`] freely and keeps its [`PrivateKey`] to itself.
//! The private key deliberately does not carry the modulus; operations that
//! need both are expressed on [`KeyPair`], or take the modulus explicitly
//! (see [`crate::cipher`]).

use core::fmt;

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::generate_key_components;
use crate::errors::Result;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Raw ciphertexts for or by this
    /// public key will have at most this size.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// The public part of an RSA key.
///
/// Immutable once constructed and meant to be distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    /// Modulus: product of the two secret primes.
    n: BigUint,
    /// Public exponent, coprime to φ(n).
    e: BigUint,
}

/// The private part of an RSA key.
///
/// Holds the prime factors of the modulus and the private exponent. The
/// material is zeroized on drop.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    p: BigUint,
    q: BigUint,
    d: BigUint,
}

/// A matched public/private key pair held by one party.
///
/// Both halves are created together by [`KeyPair::generate`]; the private
/// half is never handed out. Decryption with a pair's own modulus goes
/// through [`KeyPair::decrypt`] and [`KeyPair::decrypt_padded`].
#[derive(Debug, Clone)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl PublicKey {
    /// Constructs a public key from its raw components.
    pub fn new(n: BigUint, e: BigUint) -> PublicKey {
        PublicKey { n, e }
    }
}

impl PublicKeyParts for PublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(n = {}, e = {})", self.n, self.e)
    }
}

impl PrivateKey {
    /// Constructs a private key from its raw components.
    ///
    /// No consistency checks are performed; a private key only decrypts
    /// correctly together with the modulus it was generated with.
    pub fn new(p: BigUint, q: BigUint, d: BigUint) -> PrivateKey {
        PrivateKey { p, q, d }
    }

    /// Returns the first prime factor.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Returns the second prime factor.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Returns the private exponent.
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &PrivateKey) -> bool {
        self.p == other.p && self.q == other.q && self.d == other.d
    }
}

impl Eq for PrivateKey {}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.d.zeroize();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(p = {}, q = {}, d = {})", self.p, self.q, self.d)
    }
}

impl KeyPair {
    /// Generates a fresh key pair with a modulus of `bit_size` bits.
    ///
    /// The two primes get `bit_size / 2` bits each, drawn from `rng`, which
    /// must be cryptographically secure. Generation is CPU-bound rejection
    /// sampling and may take a while for large sizes; the internal retry
    /// caps turn the (astronomically unlikely) failure of the search into
    /// [`Error::RetriesExceeded`](crate::Error::RetriesExceeded) instead of
    /// looping forever.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<KeyPair> {
        let components = generate_key_components(rng, bit_size)?;

        Ok(KeyPair {
            public: PublicKey {
                n: components.n,
                e: components.e,
            },
            private: PrivateKey {
                p: components.p,
                q: components.q,
                d: components.d,
            },
        })
    }

    /// Assembles a pair from existing halves.
    ///
    /// The halves are not checked against each other; a mismatched pair
    /// produces garbage on decryption rather than an error.
    pub fn from_components(public: PublicKey, private: PrivateKey) -> KeyPair {
        KeyPair { public, private }
    }

    /// Returns the public half, for distribution to senders.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Decrypts a ciphertext produced by [`crate::cipher::encrypt`] for this
    /// pair's public key.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<Vec<u8>> {
        crate::cipher::decrypt(&self.private, &self.public.n, ciphertext)
    }

    /// Decrypts a ciphertext produced by [`crate::cipher::encrypt_padded`]
    /// for this pair's public key.
    pub fn decrypt_padded(&self, ciphertext: &BigUint) -> Result<Vec<u8>> {
        crate::cipher::decrypt_padded(&self.private, &self.public.n, ciphertext)
    }
}

impl From<&KeyPair> for PublicKey {
    fn from(pair: &KeyPair) -> PublicKey {
        pair.public.clone()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Public key: {}\nPrivate key: {}",
            self.public, self.private
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use num_traits::One;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn key_consistency() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let pair = KeyPair::generate(&mut rng, 128).unwrap();

        let n = pair.public().n();
        let e = pair.public().e();
        let private = &pair.private;

        assert_eq!(n, &(private.p() * private.q()));

        let phi = (private.p() - BigUint::one()) * (private.q() - BigUint::one());
        assert!(e.gcd(&phi).is_one());
        assert!(e > &BigUint::one());
        assert!(e < &phi);
        assert!(((e * private.d()) % &phi).is_one());
    }

    #[test]
    fn independent_pairs() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let first = KeyPair::generate(&mut rng, 64).unwrap();
        let second = KeyPair::generate(&mut rng, 64).unwrap();

        assert_ne!(first.public(), second.public());
        assert_ne!(first.private, second.private);
    }

    #[test]
    fn display_rendering() {
        let public = PublicKey::new(BigUint::from(3233u32), BigUint::from(17u32));
        assert_eq!(public.to_string(), "(n = 3233, e = 17)");

        let private = PrivateKey::new(
            BigUint::from(61u32),
            BigUint::from(53u32),
            BigUint::from(413u32),
        );
        assert_eq!(private.to_string(), "(p = 61, q = 53, d = 413)");

        let pair = KeyPair::from_components(public, private);
        assert_eq!(
            pair.to_string(),
            "Public key: (n = 3233, e = 17)\nPrivate key: (p = 61, q = 53, d = 413)"
        );
    }

    #[test]
    fn public_from_pair() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        let pair = KeyPair::generate(&mut rng, 64).unwrap();
        let public: PublicKey = (&pair).into();
        assert_eq!(&public, pair.public());
    }
}
