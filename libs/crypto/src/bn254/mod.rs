//! Deterministic hash-to-curve and affine point codecs for the bn254
//! (alt_bn128) elliptic curve: y^2 = x^3 + 3 over the prime field Fq.
//! The curve has cofactor 1, so every valid x coordinate yields a point in
//! the prime-order group and no cofactor multiplication is needed.
//!
//! Group arithmetic, pairings and on-curve validation are delegated to the
//! `pairing` crate; coordinates cross the boundary in the fixed-width
//! big-endian layout of the Ethereum precompiles (64 bytes for G1, 128 for
//! G2), so points are interchangeable with other implementations bit for
//! bit.

use crate::ByteFmt;
use ff_ce::{Field as _, PrimeField as _, PrimeFieldRepr as _};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use pairing::{
    bn256::{Fq, Fq2, FqRepr, G1Affine, G2Affine},
    CurveAffine as _,
};

pub use error::Error;

pub mod error;
pub mod hash;
pub mod testonly;

/// Base field modulus q of the bn254 curve.
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088696311157297823662689037894645226208583",
        10,
    )
    .unwrap()
});

/// Coefficient b of the curve equation y^2 = x^3 + b.
pub static COEFF_B: Lazy<BigUint> = Lazy::new(|| BigUint::from(3u64));

/// Precomputed (-1 + sqrt(-3)) / 2 in Fq.
pub static Z: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(b"2203960485148121921418603742825762020974279258880205651966", 10)
        .unwrap()
});

/// Precomputed sqrt(-3) in Fq.
pub static SQRT_NEG_THREE: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(b"4407920970296243842837207485651524041948558517760411303933", 10)
        .unwrap()
});

/// Byte length of an encoded G1 point.
pub const G1_BYTES_LEN: usize = 64;

/// Byte length of an encoded G2 point.
pub const G2_BYTES_LEN: usize = 128;

/// Converts a coordinate word to a field element, rejecting values >= q.
fn fq_from_be(word: &[u8]) -> Result<Fq, Error> {
    let mut repr = FqRepr::from(0);
    repr.read_be(word).map_err(|_| Error::InvalidCoordinate)?;
    Fq::from_repr(repr).map_err(|_| Error::InvalidCoordinate)
}

fn fq_from_biguint(value: &BigUint) -> Result<Fq, Error> {
    let raw = value.to_bytes_be();
    if raw.len() > 32 {
        return Err(Error::InvalidCoordinate);
    }
    let mut word = [0u8; 32];
    word[32 - raw.len()..].copy_from_slice(&raw);
    fq_from_be(&word)
}

fn fq_to_be(value: &Fq) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.into_repr().write_be(&mut word[..]).unwrap();
    word
}

fn biguint_from_fq(value: &Fq) -> BigUint {
    BigUint::from_bytes_be(&fq_to_be(value))
}

/// Type safety wrapper around an affine bn254 G1 point. Only finite points
/// are representable: the all-zero encoding of the point at infinity is
/// rejected by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(pub(crate) G1Affine);

impl G1 {
    /// Hashes an arbitrary message to a G1 point with the Keccak-256
    /// binding and returns the curve library's representation, ready for
    /// pairing and group operations. Keccak is used for compatibility with
    /// Ethereum hashing.
    pub fn hash_to_curve(message: &[u8]) -> Result<Self, Error> {
        let (x, y) = hash::hash_to_g1_keccak256(message)?;
        Self::from_coordinates(&x, &y)
    }

    /// Builds a point from affine coordinates. The curve library validates
    /// that the pair satisfies the curve equation.
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> Result<Self, Error> {
        Self::from_fq_pair(fq_from_biguint(x)?, fq_from_biguint(y)?)
    }

    /// Affine coordinates of the point, each in [0, q).
    pub fn coordinates(&self) -> (BigUint, BigUint) {
        let (x, y) = self.0.into_xy_unchecked();
        (biguint_from_fq(&x), biguint_from_fq(&y))
    }

    /// Decodes a point from the 64-byte layout: 32-byte big-endian x
    /// followed by 32-byte big-endian y.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G1_BYTES_LEN {
            return Err(Error::InvalidLength {
                expected: G1_BYTES_LEN,
                got: bytes.len(),
            });
        }
        Self::from_fq_pair(fq_from_be(&bytes[..32])?, fq_from_be(&bytes[32..])?)
    }

    /// Encodes the point to the 64-byte layout.
    pub fn to_bytes(&self) -> [u8; G1_BYTES_LEN] {
        let (x, y) = self.0.into_xy_unchecked();
        let mut buf = [0u8; G1_BYTES_LEN];
        buf[..32].copy_from_slice(&fq_to_be(&x));
        buf[32..].copy_from_slice(&fq_to_be(&y));
        buf
    }

    fn from_fq_pair(x: Fq, y: Fq) -> Result<Self, Error> {
        if x.is_zero() && y.is_zero() {
            return Err(Error::InvalidInfinityPoint);
        }
        G1Affine::from_xy_checked(x, y)
            .map(Self)
            .map_err(|_| Error::NotOnCurve)
    }
}

impl ByteFmt for G1 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::from_bytes(bytes)?)
    }

    fn encode(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

/// Type safety wrapper around an affine bn254 G2 point, defined over the
/// quadratic extension Fq2 = Fq[u] / (u^2 + 1). Nothing here hashes into
/// G2; the wrapper only converts points produced elsewhere to and from
/// their byte layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(pub(crate) G2Affine);

impl G2 {
    /// Builds a point from its four affine coordinate words, given in
    /// serialization order: the imaginary part of each coordinate precedes
    /// the real part, as in the EVM precompile ABI.
    pub fn from_coordinates(
        x_c1: &BigUint,
        x_c0: &BigUint,
        y_c1: &BigUint,
        y_c0: &BigUint,
    ) -> Result<Self, Error> {
        Self::from_fq2_pair(
            Fq2 {
                c0: fq_from_biguint(x_c0)?,
                c1: fq_from_biguint(x_c1)?,
            },
            Fq2 {
                c0: fq_from_biguint(y_c0)?,
                c1: fq_from_biguint(y_c1)?,
            },
        )
    }

    /// Affine coordinate words of the point in serialization order
    /// (x.c1, x.c0, y.c1, y.c0), each in [0, q).
    pub fn coordinates(&self) -> (BigUint, BigUint, BigUint, BigUint) {
        let (x, y) = self.0.into_xy_unchecked();
        (
            biguint_from_fq(&x.c1),
            biguint_from_fq(&x.c0),
            biguint_from_fq(&y.c1),
            biguint_from_fq(&y.c0),
        )
    }

    /// Decodes a point from the 128-byte layout: four 32-byte big-endian
    /// words (x.c1, x.c0, y.c1, y.c0).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G2_BYTES_LEN {
            return Err(Error::InvalidLength {
                expected: G2_BYTES_LEN,
                got: bytes.len(),
            });
        }
        Self::from_fq2_pair(
            Fq2 {
                c0: fq_from_be(&bytes[32..64])?,
                c1: fq_from_be(&bytes[..32])?,
            },
            Fq2 {
                c0: fq_from_be(&bytes[96..])?,
                c1: fq_from_be(&bytes[64..96])?,
            },
        )
    }

    /// Encodes the point to the 128-byte layout.
    pub fn to_bytes(&self) -> [u8; G2_BYTES_LEN] {
        let (x, y) = self.0.into_xy_unchecked();
        let mut buf = [0u8; G2_BYTES_LEN];
        buf[..32].copy_from_slice(&fq_to_be(&x.c1));
        buf[32..64].copy_from_slice(&fq_to_be(&x.c0));
        buf[64..96].copy_from_slice(&fq_to_be(&y.c1));
        buf[96..].copy_from_slice(&fq_to_be(&y.c0));
        buf
    }

    fn from_fq2_pair(x: Fq2, y: Fq2) -> Result<Self, Error> {
        if x.is_zero() && y.is_zero() {
            return Err(Error::InvalidInfinityPoint);
        }
        G2Affine::from_xy_checked(x, y)
            .map(Self)
            .map_err(|_| Error::NotOnCurve)
    }
}

impl ByteFmt for G2 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::from_bytes(bytes)?)
    }

    fn encode(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}
