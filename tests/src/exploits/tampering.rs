//! # Tampering and Malformed Input
//!
//! ## Attack Vectors
//!
//! | Vector | Expected stage |
//! |--------|----------------|
//! | Input data altered after signing | signature |
//! | Key swapped for another party | signature |
//! | Signature labelled with the wrong algorithm | signature |
//! | Cross-chain replay | signature |
//! | Signed but undecodable input data | decode |
//! | Random envelope bytes | decode, never a panic |
//! | Oversized free-text fields | semantic |

#[cfg(test)]
mod tests {
    use crate::fixtures::{pipeline, Wallet, MARKET_ID};
    use command_checks::Cause;
    use rand::Rng;
    use shared_types::{
        Command, CommandKind, OrderSubmission, OrderType, Side, TimeInForce, VoteSubmission,
    };
    use tx_admission::adapters::codec::{WireCommand, WireInputData};
    use tx_admission::{
        DecodeError, SignatureError, TransactionAdmissionApi, TransactionError, SECP256K1,
    };

    fn vote() -> Command {
        Command::VoteSubmission(VoteSubmission {
            proposal_id: MARKET_ID.into(),
            value: 1,
        })
    }

    #[test]
    fn test_tampered_input_data_is_invalid() {
        let mut tx = Wallet::ed25519(1).submit(1, vote());
        let last = tx.input_data.len() - 1;
        tx.input_data[last] ^= 0x01;

        assert_eq!(
            pipeline().admit(&tx).unwrap_err(),
            TransactionError::Signature(SignatureError::Invalid)
        );
    }

    #[test]
    fn test_swapped_signer_is_invalid() {
        let mut tx = Wallet::ed25519(1).submit(1, vote());
        tx.from = Some(shared_types::Signer {
            public_key: Wallet::ed25519(2).public_key(),
        });

        assert_eq!(
            pipeline().admit(&tx).unwrap_err(),
            TransactionError::Signature(SignatureError::Invalid)
        );
    }

    #[test]
    fn test_mislabelled_algorithm_is_malformed() {
        let mut tx = Wallet::ed25519(1).submit(1, vote());
        if let Some(signature) = tx.signature.as_mut() {
            signature.algo = SECP256K1.to_string();
        }

        assert!(matches!(
            pipeline().admit(&tx),
            Err(TransactionError::Signature(SignatureError::Malformed(_)))
        ));
    }

    #[test]
    fn test_truncated_signature_is_malformed() {
        let mut tx = Wallet::ed25519(1).submit(1, vote());
        if let Some(signature) = tx.signature.as_mut() {
            signature.value.truncate(10);
        }

        assert!(matches!(
            pipeline().admit(&tx),
            Err(TransactionError::Signature(SignatureError::Malformed(_)))
        ));
    }

    #[test]
    fn test_replay_on_other_chain_is_invalid() {
        let tx = Wallet::secp256k1().on_chain("vega-stagnet1-202307191148").submit(1, vote());

        assert_eq!(
            pipeline().admit(&tx).unwrap_err(),
            TransactionError::Signature(SignatureError::Invalid)
        );
    }

    #[test]
    fn test_signed_garbage_fails_decode() {
        let tx = Wallet::ed25519(3).sign_raw(vec![0xDE, 0xAD]);

        assert!(matches!(
            pipeline().admit(&tx),
            Err(TransactionError::Decode(DecodeError::InputData(_)))
        ));
    }

    #[test]
    fn test_signed_corrupt_body_fails_decode() {
        let input_data = bincode::serialize(&WireInputData {
            nonce: 1,
            command: Some(WireCommand {
                tag: CommandKind::OrderSubmission.tag(),
                body: vec![0x07],
            }),
        })
        .unwrap();
        let tx = Wallet::ed25519(3).sign_raw(input_data);

        assert!(matches!(
            pipeline().admit(&tx),
            Err(TransactionError::Decode(DecodeError::CommandBody { tag: 1001, .. }))
        ));
    }

    #[test]
    fn test_random_envelopes_never_panic() {
        let pipeline = pipeline();
        let mut rng = rand::thread_rng();

        for _ in 0..256 {
            let len = rng.gen_range(0..128);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert!(pipeline.admit_raw(&bytes).is_err());
        }
    }

    #[test]
    fn test_oversized_reference_is_rejected() {
        let order = Command::OrderSubmission(OrderSubmission {
            market_id: MARKET_ID.into(),
            price: "100".into(),
            size: 10,
            side: Side::Sell.value(),
            time_in_force: TimeInForce::Gtc.value(),
            order_type: OrderType::Limit.value(),
            reference: "x".repeat(101),
            ..Default::default()
        });
        let tx = Wallet::ed25519(4).submit(1, order);

        match pipeline().admit(&tx).unwrap_err() {
            TransactionError::Rejected(errs) => assert_eq!(
                errs.get("order_submission.reference"),
                vec![&Cause::MustNotExceedChars(100)]
            ),
            other => panic!("expected semantic rejection, got {other:?}"),
        }
    }
}
