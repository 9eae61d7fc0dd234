//! # Test Fixtures
//!
//! A minimal wallet that encodes and signs input data the way a client
//! does, plus a pipeline wired with the production adapters.

use rand::Rng;
use shared_crypto::{Ed25519KeyPair, Secp256k1KeyPair};
use shared_types::{signing_payload, Command, InputData, Signature, Signer, Transaction};
use tx_admission::{
    AdmissionConfig, AlgorithmRegistry, BincodeCodec, TransactionPipeline, ED25519, SECP256K1,
};

/// Network every fixture signs for unless told otherwise.
pub const CHAIN_ID: &str = "vega-testnet-0001";

/// A well-formed 64-hex id.
pub const MARKET_ID: &str = "e9982447fb4128f9968f9981612c5ea85d19b62058ec2636efc812dcbbc745ca";

/// The pipeline a node would build from its default configuration.
pub fn pipeline() -> TransactionPipeline<AlgorithmRegistry, BincodeCodec> {
    TransactionPipeline::from_config(&AdmissionConfig::for_chain(CHAIN_ID))
        .expect("default config is valid")
}

/// Encode input data with the production codec.
pub fn encode(input: &InputData) -> Vec<u8> {
    BincodeCodec.encode_input_data(input).expect("input data encodes")
}

/// Any nonzero nonce.
pub fn random_nonce() -> u64 {
    rand::thread_rng().gen_range(1..u64::MAX)
}

enum WalletKey {
    Ed25519(Ed25519KeyPair),
    Secp256k1(Secp256k1KeyPair),
}

/// Signs transactions for one key on one chain.
pub struct Wallet {
    key: WalletKey,
    chain_id: String,
}

impl Wallet {
    /// Deterministic Ed25519 wallet.
    pub fn ed25519(seed: u8) -> Self {
        Self {
            key: WalletKey::Ed25519(Ed25519KeyPair::from_seed([seed; 32])),
            chain_id: CHAIN_ID.to_string(),
        }
    }

    /// Fresh secp256k1 wallet.
    pub fn secp256k1() -> Self {
        Self {
            key: WalletKey::Secp256k1(Secp256k1KeyPair::generate()),
            chain_id: CHAIN_ID.to_string(),
        }
    }

    /// Sign for a different network.
    pub fn on_chain(mut self, chain_id: &str) -> Self {
        self.chain_id = chain_id.to_string();
        self
    }

    pub fn algorithm(&self) -> &'static str {
        match self.key {
            WalletKey::Ed25519(_) => ED25519,
            WalletKey::Secp256k1(_) => SECP256K1,
        }
    }

    pub fn public_key(&self) -> Vec<u8> {
        match &self.key {
            WalletKey::Ed25519(key) => key.public_key().as_bytes().to_vec(),
            WalletKey::Secp256k1(key) => key.public_key().to_compressed(),
        }
    }

    fn sign_bytes(&self, message: &[u8]) -> Vec<u8> {
        match &self.key {
            WalletKey::Ed25519(key) => key.sign(message).as_bytes().to_vec(),
            WalletKey::Secp256k1(key) => key.sign(message).as_bytes().to_vec(),
        }
    }

    /// Sign already-encoded input data.
    pub fn sign_raw(&self, input_data: Vec<u8>) -> Transaction {
        let value = self.sign_bytes(&signing_payload(&self.chain_id, &input_data));
        Transaction {
            input_data,
            signature: Some(Signature {
                algo: self.algorithm().to_string(),
                value,
                version: 1,
            }),
            from: Some(Signer {
                public_key: self.public_key(),
            }),
        }
    }

    /// Encode and sign input data.
    pub fn sign(&self, input: &InputData) -> Transaction {
        self.sign_raw(encode(input))
    }

    /// Sign a command under the given nonce.
    pub fn submit(&self, nonce: u64, command: Command) -> Transaction {
        self.sign(&InputData {
            nonce,
            command: Some(command),
        })
    }
}
