//! Trait for the byte encodings of crypto primitives.

/// Trait converting a type from/to a byte format.
/// It is roughly equivalent to serde::Serialize + serde::Deserialize,
/// but has additional requirements:
/// - binary encoding should be well defined, rather than rely on the internals
///   of a serde::Serializer implementation.
/// - `x == decode(x.encode())` has to hold, and the encoding has to match the
///   layout expected by the external consumers of these points bit for bit.
pub trait ByteFmt: Sized {
    /// Decodes the object from the byte representation.
    fn decode(bytes: &[u8]) -> anyhow::Result<Self>;
    /// Encodes the object to the byte representation.
    fn encode(&self) -> Vec<u8>;
}
