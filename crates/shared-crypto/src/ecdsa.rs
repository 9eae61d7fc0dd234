//! # ECDSA Signatures (secp256k1)
//!
//! Alternative scheme for senders holding Ethereum-style keys. Public keys are
//! SEC1-encoded (33-byte compressed or 65-byte uncompressed); signatures are
//! 64-byte `r || s` over the SHA-256 digest of the message.

use crate::CryptoError;
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use zeroize::Zeroize;

/// Signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// secp256k1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey(VerifyingKey);

impl Secp256k1PublicKey {
    /// Parse SEC1 bytes (compressed or uncompressed).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Compressed SEC1 encoding (33 bytes).
    pub fn to_compressed(&self) -> Vec<u8> {
        self.0.to_sec1_bytes().to_vec()
    }

    /// Verify a signature over `message`.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Secp256k1Signature,
    ) -> Result<(), CryptoError> {
        let sig = Signature::from_slice(&signature.0).map_err(|_| CryptoError::InvalidSignature)?;

        self.0
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// ECDSA signature (64 bytes, r||s format).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Signature([u8; SIGNATURE_LENGTH]);

impl Secp256k1Signature {
    /// Parse an untrusted byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let raw: [u8; SIGNATURE_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSignatureLength {
                    expected: SIGNATURE_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }
}

/// secp256k1 ECDSA keypair. The signing key wipes itself on drop.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes). The local copy of `bytes` is
    /// wiped once the key is built.
    pub fn from_bytes(mut bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_bytes((&bytes).into());
        bytes.zeroize();
        let signing_key = signing_key.map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key.
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(self.signing_key.verifying_key().clone())
    }

    /// Sign a message (deterministic RFC 6979).
    pub fn sign(&self, message: &[u8]) -> Secp256k1Signature {
        let sig: Signature = self.signing_key.sign(message);
        Secp256k1Signature(sig.to_bytes().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_zeroize_on_drop<T: zeroize::ZeroizeOnDrop>() {}

    #[test]
    fn test_signing_key_zeroizes_on_drop() {
        assert_zeroize_on_drop::<SigningKey>();
    }

    #[test]
    fn test_sign_verify() {
        let keypair = Secp256k1KeyPair::generate();
        let signature = keypair.sign(b"chain-1\0payload");

        assert!(keypair
            .public_key()
            .verify(b"chain-1\0payload", &signature)
            .is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let keypair = Secp256k1KeyPair::generate();
        let signature = keypair.sign(b"message1");

        assert_eq!(
            keypair.public_key().verify(b"message2", &signature),
            Err(CryptoError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_compressed_key_roundtrip() {
        let keypair = Secp256k1KeyPair::from_bytes([0x11u8; 32]).unwrap();
        let compressed = keypair.public_key().to_compressed();

        assert_eq!(compressed.len(), 33);
        assert_eq!(
            Secp256k1PublicKey::from_slice(&compressed).unwrap(),
            keypair.public_key()
        );
    }

    #[test]
    fn test_garbage_public_key_rejected() {
        assert_eq!(
            Secp256k1PublicKey::from_slice(&[0xFFu8; 33]),
            Err(CryptoError::InvalidPublicKey)
        );
    }

    #[test]
    fn test_zero_signature_is_malformed() {
        let keypair = Secp256k1KeyPair::generate();
        let zero = Secp256k1Signature::from_slice(&[0u8; 64]).unwrap();

        assert_eq!(
            keypair.public_key().verify(b"msg", &zero),
            Err(CryptoError::InvalidSignature)
        );
    }
}
