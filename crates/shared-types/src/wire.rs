//! # Wire Encoding
//!
//! Bincode settings shared by every layer that moves messages to and from
//! bytes: fixed-width integers, little endian, and no trailing bytes. A
//! buffer that decodes with bytes left over is malformed, not a prefix.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

/// The bincode configuration of every signed payload and nested body.
pub fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Encode a message.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> bincode::Result<Vec<u8>> {
    options().serialize(value)
}

/// Decode a whole buffer as one message.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> bincode::Result<T> {
    options().deserialize(bytes)
}

/// Decode a tagged body. An empty body is the zero-valued message.
pub fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> bincode::Result<T> {
    if body.is_empty() {
        return Ok(T::default());
    }
    decode(body)
}
