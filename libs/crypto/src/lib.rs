//! Hash-to-curve and point-encoding primitives for the bn254 (alt_bn128)
//! elliptic curve, as used by BLS-style signature schemes. Group arithmetic
//! and pairings are supplied by the `pairing` crate; this crate only maps
//! messages onto the curve and converts points to/from the byte layout of
//! the Ethereum precompiles.

pub use fmt::*;

pub mod bn254;
mod fmt;
