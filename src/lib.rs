#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
//!
//! # Key model
//!
//! [`KeyPair::generate`] draws two probable primes of half the requested
//! width, picks a random public exponent coprime to `φ(n)`, and derives the
//! private exponent as its modular inverse. The pair acts as one party: the
//! [`PublicKey`] is handed out to senders, the [`PrivateKey`] stays inside
//! and is zeroized on drop.
//!
//! # Codec
//!
//! [`cipher`] converts between byte messages and ciphertext integers. The
//! unpadded mode interprets the message bytes directly as a big-endian
//! integer; the padded mode first packs them into a fixed-width block with a
//! trailing two-byte pad count, which preserves leading zero bytes and
//! rejects messages that would not fit below the modulus.

pub use num_bigint::BigUint;
pub use rand_core;

pub mod cipher;
pub mod errors;

mod algorithms;
mod internals;
mod key;
mod padding;

pub use crate::{
    errors::{Error, Result},
    key::{KeyPair, PrivateKey, PublicKey, PublicKeyParts},
};
