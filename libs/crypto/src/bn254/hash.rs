//! Hash operations: message-digest bindings and the try-and-increment
//! search mapping arbitrary messages onto the curve.

use blake2::Blake2b512;
use num_bigint::BigUint;
use num_traits::One as _;
use once_cell::sync::Lazy;
use sha3::{digest::Update as _, Digest as _, Keccak256, Sha3_512};
use tracing::trace;

use super::{Error, COEFF_B, MODULUS};

/// Exponent (q - 1) / 2 of Euler's criterion.
static QR_EXP: Lazy<BigUint> = Lazy::new(|| (&*MODULUS - BigUint::one()) >> 1u32);

/// Square-root exponent (q + 1) / 4, valid since q = 3 (mod 4).
static SQRT_EXP: Lazy<BigUint> = Lazy::new(|| (&*MODULUS + BigUint::one()) >> 2u32);

/// Hashes a message to affine G1 coordinates with the SHA3-512 binding.
pub fn hash_to_g1_sha3(message: &[u8]) -> Result<(BigUint, BigUint), Error> {
    try_and_increment(message, |data| {
        Sha3_512::new().chain(data).finalize().to_vec()
    })
}

/// Hashes a message to affine G1 coordinates with the Keccak-256 binding.
/// Keccak is only for compatibility with Ethereum hashing.
pub fn hash_to_g1_keccak256(message: &[u8]) -> Result<(BigUint, BigUint), Error> {
    try_and_increment(message, |data| {
        Keccak256::new().chain(data).finalize().to_vec()
    })
}

/// Hashes a message to affine G1 coordinates with the BLAKE2b-512 binding.
pub fn hash_to_g1_blake2b(message: &[u8]) -> Result<(BigUint, BigUint), Error> {
    try_and_increment(message, |data| {
        Blake2b512::new().chain(data).finalize().to_vec()
    })
}

/// Evaluates the right-hand side of the curve equation, x^3 + b, for a
/// reduced x coordinate.
fn y_squared(x: &BigUint) -> BigUint {
    (x.modpow(&BigUint::from(3u64), &MODULUS) + &*COEFF_B) % &*MODULUS
}

/// Maps a message to an affine curve point by hashing the message with a
/// one-byte counter suffix and interpreting the digest as a big-endian
/// integer mod q, until the candidate x coordinate satisfies the curve
/// equation for some y. A 32- or 64-byte digest goes through the same
/// reduction; the longer digest merely distributes more uniformly.
///
/// Returns the root produced by the (q + 1) / 4 exponentiation; the sign of
/// y is not canonicalized, so consumers pinning a root convention must
/// negate externally.
pub(crate) fn try_and_increment(
    message: &[u8],
    digest: impl Fn(&[u8]) -> Vec<u8>,
) -> Result<(BigUint, BigUint), Error> {
    for counter in 0..=u8::MAX {
        let hash = digest(&[message, &[counter]].concat());
        let x = BigUint::from_bytes_be(&hash) % &*MODULUS;
        let rhs = y_squared(&x);
        if rhs.modpow(&QR_EXP, &MODULUS).is_one() {
            let y = rhs.modpow(&SQRT_EXP, &MODULUS);
            trace!(
                "found a valid x coordinate after {} attempts",
                u32::from(counter) + 1
            );
            return Ok((x, y));
        }
    }
    Err(Error::PointNotFound)
}
