//! Error types.

/// Alias for [`core::result::Result`] with the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Plaintext does not fit the padded block for the given modulus.
    #[error("message too long")]
    MessageTooLong,

    /// Ciphertext is out of range for the modulus, or the recovered block
    /// carries an inconsistent pad count.
    #[error("decryption error")]
    Decryption,

    /// Too few primes of the given length to generate a key.
    #[error("too few primes of given length to generate an RSA key")]
    TooFewPrimes,

    /// Rejection sampling exhausted its retry cap.
    #[error("key generation exceeded the retry limit")]
    RetriesExceeded,

    /// Internal error.
    #[error("internal error")]
    Internal,
}
