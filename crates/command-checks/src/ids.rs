//! Identifier format recognizers.

/// Length of a hex-encoded Vega ID or public key.
pub const VEGA_ID_LENGTH: usize = 64;

/// The 64-zero key used as destination of global reward transfers.
pub const ZERO_PUBLIC_KEY: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Even-length hexadecimal string.
pub fn is_hex(value: &str) -> bool {
    hex::decode(value).is_ok()
}

/// 32 bytes, hex encoded.
pub fn is_vega_id(value: &str) -> bool {
    value.len() == VEGA_ID_LENGTH && is_hex(value)
}

/// Same shape as a Vega ID: a hex-encoded Ed25519 public key.
pub fn is_vega_public_key(value: &str) -> bool {
    is_vega_id(value)
}

/// `0x` followed by 20 hex-encoded bytes.
pub fn is_ethereum_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .is_some_and(|rest| rest.len() == 40 && is_hex(rest))
}
