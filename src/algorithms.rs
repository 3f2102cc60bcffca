//! Key component generation.

use num_bigint::{BigUint, IntoBigUint, ModInverse, RandBigInt, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Cap on full regeneration rounds (prime pair rejected as equal, or the
/// modulus missing the target width) and on public-exponent candidates.
/// Either search succeeding is overwhelmingly likely per round, so hitting
/// the cap means a broken RNG rather than bad luck.
const MAX_ATTEMPTS: usize = 1000;

/// Raw output of key generation, consumed by [`crate::KeyPair::generate`].
#[derive(Debug)]
pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

/// Generates the components of a two-prime RSA key of the given bit size
/// from the given random source.
///
/// The public exponent is not fixed: candidates of `bit_size` bits are drawn
/// uniformly and rejected until `gcd(e, φ(n)) == 1` and `1 < e < φ(n)`.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<KeyComponents> {
    if bit_size < 64 {
        let prime_limit = (1u64 << (bit_size / 2) as u64) as f64;

        // pi approximates the number of primes less than prime_limit
        let mut pi = prime_limit / ((bit_size / 2) as f64 * core::f64::consts::LN_2 - 1.);
        // Generated primes start with 0b11, so we can only use a quarter of
        // them.
        pi /= 4.;
        // Use a factor of two to ensure that key generation terminates in a
        // reasonable amount of time.
        pi /= 2.;

        if pi < 2. {
            return Err(Error::TooFewPrimes);
        }
    }

    for _ in 0..MAX_ATTEMPTS {
        // `gen_prime` sets the top two bits of each prime, so for two primes
        // the product normally lands on exactly `bit_size` bits.
        let p = rng.gen_prime(bit_size / 2);
        let q = rng.gen_prime(bit_size - bit_size / 2);

        if p == q {
            continue;
        }

        let n = &p * &q;
        if n.bits() != bit_size {
            continue;
        }

        let totient = (&p - BigUint::one()) * (&q - BigUint::one());
        let e = match find_public_exponent(rng, bit_size, &totient) {
            Some(e) => e,
            None => return Err(Error::RetriesExceeded),
        };

        // Cannot fail once gcd(e, totient) == 1 held above; a None here
        // means the arithmetic itself is broken.
        let d = e
            .clone()
            .mod_inverse(&totient)
            .and_then(IntoBigUint::into_biguint)
            .ok_or(Error::Internal)?;

        return Ok(KeyComponents { n, e, d, p, q });
    }

    Err(Error::RetriesExceeded)
}

/// Draws uniform `bit_size`-bit candidates until one satisfies
/// `gcd(e, totient) == 1` and `1 < e < totient`.
fn find_public_exponent<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    totient: &BigUint,
) -> Option<BigUint> {
    let one = BigUint::one();

    for _ in 0..MAX_ATTEMPTS {
        let e = rng.gen_biguint(bit_size);
        if &e > &one && &e < totient && e.gcd(totient).is_one() {
            return Some(e);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn impossible_sizes() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);

        for bits in 0..10 {
            assert_eq!(
                generate_key_components(&mut rng, bits).unwrap_err(),
                Error::TooFewPrimes
            );
        }
    }

    macro_rules! key_generation {
        ($name:ident, $size:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                for _ in 0..10 {
                    let components = generate_key_components(&mut rng, $size).unwrap();
                    assert_eq!(components.n.bits(), $size);
                    assert_eq!(components.n, &components.p * &components.q);
                }
            }
        };
    }

    key_generation!(key_generation_64, 64);
    key_generation!(key_generation_128, 128);
    key_generation!(key_generation_512, 512);

    #[test]
    fn exponent_in_range() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let components = generate_key_components(&mut rng, 64).unwrap();

        let totient =
            (&components.p - BigUint::one()) * (&components.q - BigUint::one());
        assert!(components.e > BigUint::one());
        assert!(components.e < totient);
        assert!(components.e.gcd(&totient).is_one());
        assert!(((&components.e * &components.d) % &totient).is_one());
    }
}
