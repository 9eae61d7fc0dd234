//! # Transaction Pipeline
//!
//! Application service implementing [`TransactionAdmissionApi`].
//!
//! ## Flow
//!
//! ```text
//! Transaction ─► structure ─► signature ─► decode ─► semantic checks ─► AdmittedCommand
//!                   │             │           │             │
//!                   ▼             ▼           ▼             ▼
//!            StructuralError SignatureError DecodeError  ErrorSet
//! ```
//!
//! The first failing stage ends admission; its error is logged once with
//! the stage name and returned.

use crate::adapters::codec::BincodeCodec;
use crate::adapters::signatures::AlgorithmRegistry;
use crate::config::AdmissionConfig;
use crate::domain::entities::{AdmittedCommand, Stage};
use crate::domain::errors::{ConfigError, StructuralError, TransactionError, TransactionField};
use crate::ports::inbound::TransactionAdmissionApi;
use crate::ports::outbound::{CommandDecoder, SignatureVerifier};
use admission_telemetry::{log_admission, log_rejection};
use command_checks::check_input_data;
use shared_types::{signing_payload, Command, InputData, Signature, Signer, Transaction};

/// The admission pipeline.
///
/// Holds no mutable state: one instance serves any number of concurrent
/// admissions.
pub struct TransactionPipeline<V: SignatureVerifier, D: CommandDecoder> {
    chain_id: String,
    verifier: V,
    decoder: D,
}

impl TransactionPipeline<AlgorithmRegistry, BincodeCodec> {
    /// Pipeline with the built-in algorithm registry and bincode decoding.
    ///
    /// # Errors
    /// Fails when the configuration enables an algorithm this node lacks.
    pub fn from_config(config: &AdmissionConfig) -> Result<Self, ConfigError> {
        let verifier = AlgorithmRegistry::from_config(config)?;
        Ok(Self::new(config.chain_id.clone(), verifier, BincodeCodec))
    }
}

impl<V: SignatureVerifier, D: CommandDecoder> TransactionPipeline<V, D> {
    /// Create a pipeline over explicit ports.
    pub fn new(chain_id: impl Into<String>, verifier: V, decoder: D) -> Self {
        Self {
            chain_id: chain_id.into(),
            verifier,
            decoder,
        }
    }

    /// Network this pipeline admits transactions for.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Stage 1: every missing field is reported, then admission stops.
    fn check_structure(transaction: &Transaction) -> Result<(&Signature, &Signer), StructuralError> {
        let mut missing = Vec::new();

        if transaction.input_data.is_empty() {
            missing.push(TransactionField::InputData);
        }
        if transaction.signature.is_none() {
            missing.push(TransactionField::Signature);
        }
        match &transaction.from {
            None => missing.push(TransactionField::From),
            Some(signer) if signer.public_key.is_empty() => {
                missing.push(TransactionField::PublicKey)
            }
            Some(_) => {}
        }

        match (&transaction.signature, &transaction.from) {
            (Some(signature), Some(signer)) if missing.is_empty() => Ok((signature, signer)),
            _ => Err(StructuralError { missing }),
        }
    }

    /// Stage 4: nonce and command rules, all of them.
    ///
    /// Input that passes always carries a command; input without one is
    /// rejected by the checks themselves.
    fn check_semantics(input: InputData) -> Result<(u64, Command), TransactionError> {
        let errs = check_input_data(&input);
        match input.command {
            Some(command) if errs.is_empty() => Ok((input.nonce, command)),
            _ => Err(TransactionError::Rejected(errs)),
        }
    }

    fn run(&self, transaction: &Transaction) -> Result<AdmittedCommand, (Stage, TransactionError)> {
        let (signature, signer) = Self::check_structure(transaction)
            .map_err(|e| (Stage::Structural, TransactionError::from(e)))?;

        let payload = signing_payload(&self.chain_id, &transaction.input_data);
        self.verifier
            .verify(&signature.algo, &signer.public_key, &payload, &signature.value)
            .map_err(|e| (Stage::Signature, TransactionError::from(e)))?;

        let input = self
            .decoder
            .decode_input_data(&transaction.input_data)
            .map_err(|e| (Stage::Decode, TransactionError::from(e)))?;

        let (nonce, command) =
            Self::check_semantics(input).map_err(|e| (Stage::Semantic, e))?;

        Ok(AdmittedCommand {
            tx_hash: transaction.hash(),
            signer: signer.public_key.clone(),
            nonce,
            command,
        })
    }
}

impl<V: SignatureVerifier, D: CommandDecoder> TransactionAdmissionApi for TransactionPipeline<V, D> {
    fn admit(&self, transaction: &Transaction) -> Result<AdmittedCommand, TransactionError> {
        match self.run(transaction) {
            Ok(admitted) => {
                let root = admitted.command.kind().map_or("unknown", |kind| kind.root());
                log_admission!(admitted.tx_hash_hex(), root);
                Ok(admitted)
            }
            Err((stage, err)) => {
                log_rejection!(hex::encode(transaction.hash()), stage.as_str(), err);
                Err(err)
            }
        }
    }

    fn admit_raw(&self, bytes: &[u8]) -> Result<AdmittedCommand, TransactionError> {
        let transaction = self.decoder.decode_transaction(bytes).map_err(|err| {
            log_rejection!("-", Stage::Decode.as_str(), err);
            TransactionError::from(err)
        })?;
        self.admit(&transaction)
    }

    fn check_input_data(&self, input_data: &[u8]) -> Result<InputData, TransactionError> {
        let input = self.decoder.decode_input_data(input_data)?;
        check_input_data(&input).into_result()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DecodeError, SignatureError};
    use shared_types::{Command, VoteSubmission};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const PROPOSAL: &str = "e9982447fb4128f9968f9981612c5ea85d19b62058ec2636efc812dcbbc745ca";

    // =========================================================================
    // MOCKS
    // =========================================================================

    #[derive(Default)]
    struct MockVerifier {
        reject: Option<SignatureError>,
        calls: AtomicUsize,
        last_message: Mutex<Vec<u8>>,
    }

    impl SignatureVerifier for MockVerifier {
        fn verify(
            &self,
            _algorithm: &str,
            _public_key: &[u8],
            message: &[u8],
            _signature: &[u8],
        ) -> Result<(), SignatureError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = self.last_message.lock() {
                *last = message.to_vec();
            }
            match &self.reject {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    struct MockDecoder {
        input: Result<InputData, DecodeError>,
        calls: AtomicUsize,
    }

    impl MockDecoder {
        fn returning(input: InputData) -> Self {
            Self { input: Ok(input), calls: AtomicUsize::new(0) }
        }

        fn failing() -> Self {
            Self {
                input: Err(DecodeError::InputData("unexpected end of file".into())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl CommandDecoder for MockDecoder {
        fn decode_transaction(&self, _bytes: &[u8]) -> Result<Transaction, DecodeError> {
            Err(DecodeError::Transaction("not supported by mock".into()))
        }

        fn decode_input_data(&self, _bytes: &[u8]) -> Result<InputData, DecodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.input.clone()
        }
    }

    fn valid_vote() -> InputData {
        InputData {
            nonce: 1,
            command: Some(Command::VoteSubmission(VoteSubmission {
                proposal_id: PROPOSAL.into(),
                value: 2,
            })),
        }
    }

    fn signed_tx() -> Transaction {
        Transaction {
            input_data: vec![1, 2, 3],
            signature: Some(Signature {
                algo: "vega/ed25519".into(),
                value: vec![0; 64],
                version: 1,
            }),
            from: Some(Signer { public_key: vec![0xAA; 32] }),
        }
    }

    fn pipeline(
        verifier: MockVerifier,
        decoder: MockDecoder,
    ) -> TransactionPipeline<MockVerifier, MockDecoder> {
        TransactionPipeline::new("testnet", verifier, decoder)
    }

    // =========================================================================
    // TESTS
    // =========================================================================

    #[test]
    fn test_admits_valid_transaction() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));

        let admitted = pipeline.admit(&signed_tx()).unwrap();

        assert_eq!(admitted.nonce, 1);
        assert_eq!(admitted.signer, vec![0xAA; 32]);
        assert_eq!(admitted.tx_hash, signed_tx().hash());
        assert!(matches!(admitted.command, Command::VoteSubmission(_)));
    }

    #[test]
    fn test_verifies_chain_bound_payload() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));
        pipeline.admit(&signed_tx()).unwrap();

        let message = pipeline.verifier.last_message.lock().unwrap().clone();
        assert_eq!(message, b"testnet\0\x01\x02\x03".to_vec());
    }

    #[test]
    fn test_structural_errors_stop_before_signature() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));
        let tx = Transaction { input_data: Vec::new(), signature: None, from: None };

        let err = pipeline.admit(&tx).unwrap_err();

        assert_eq!(
            err.to_string(),
            "tx.input_data is required, tx.signature is required, tx.from is required"
        );
        assert_eq!(pipeline.verifier.calls.load(Ordering::SeqCst), 0);
        assert_eq!(pipeline.decoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_public_key_is_structural() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));
        let tx = Transaction { from: Some(Signer { public_key: Vec::new() }), ..signed_tx() };

        let err = pipeline.admit(&tx).unwrap_err();
        assert_eq!(err.to_string(), "tx.from.public_key is required");
    }

    #[test]
    fn test_bad_signature_stops_before_decode() {
        let verifier = MockVerifier { reject: Some(SignatureError::Invalid), ..Default::default() };
        let pipeline = pipeline(verifier, MockDecoder::returning(valid_vote()));

        let err = pipeline.admit(&signed_tx()).unwrap_err();

        assert_eq!(err, TransactionError::Signature(SignatureError::Invalid));
        assert_eq!(pipeline.decoder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_decode_failure_is_terminal() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::failing());

        let err = pipeline.admit(&signed_tx()).unwrap_err();
        assert!(matches!(err, TransactionError::Decode(DecodeError::InputData(_))));
    }

    #[test]
    fn test_semantic_errors_accumulate() {
        let input = InputData {
            nonce: 0,
            command: Some(Command::VoteSubmission(VoteSubmission::default())),
        };
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(input));

        let err = pipeline.admit(&signed_tx()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "tx.input_data.nonce (must be positive), \
             vote_submission.proposal_id (is required), vote_submission.value (is required)"
        );
    }

    #[test]
    fn test_missing_command_reports_check_output() {
        let input = InputData { nonce: 0, command: None };
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(input));

        let err = pipeline.admit(&signed_tx()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "tx.input_data.nonce (must be positive), tx.input_data.command (is required)"
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        let input = InputData { nonce: 3, command: Some(Command::Unknown { tag: 1023 }) };
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(input));

        let err = pipeline.admit(&signed_tx()).unwrap_err();
        assert_eq!(err.to_string(), "tx.input_data.command (is not supported)");
    }

    #[test]
    fn test_check_input_data_skips_signature() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));

        let input = pipeline.check_input_data(&[9, 9]).unwrap();

        assert_eq!(input, valid_vote());
        assert_eq!(pipeline.verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_admit_raw_reports_envelope_decode() {
        let pipeline = pipeline(MockVerifier::default(), MockDecoder::returning(valid_vote()));

        let err = pipeline.admit_raw(&[0xFF]).unwrap_err();
        assert!(matches!(err, TransactionError::Decode(DecodeError::Transaction(_))));
    }

    #[test]
    fn test_from_config_rejects_unknown_algorithm() {
        let config = AdmissionConfig {
            chain_id: "testnet".into(),
            signature_algorithms: vec!["rsa".into()],
        };
        assert!(matches!(
            TransactionPipeline::from_config(&config),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }
}
