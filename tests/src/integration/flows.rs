//! # Admission Flows
//!
//! ## Flow Tested
//!
//! ```text
//! Wallet ─► encode ─► sign(chain_id || 0x00 || input_data) ─► TransactionPipeline
//! ```
//!
//! 1. **Accepted**: valid commands come back as [`tx_admission::AdmittedCommand`]
//! 2. **Semantic rejection**: every violated rule is reported at once
//! 3. **Structural rejection**: nothing is verified or decoded

#[cfg(test)]
mod tests {
    use crate::fixtures::{encode, pipeline, random_nonce, Wallet, CHAIN_ID, MARKET_ID};
    use command_checks::Cause;
    use shared_types::{
        AccountType, Command, ConcentratedLiquidityParameters, CreateVault, InputData,
        OneOffTransfer, OrderSubmission, OrderType, ProposalChange, ProposalRationale,
        ProposalSubmission, ProposalTerms, RedemptionDate, RedemptionType, Side, SubmitAmm, TimeInForce, Transaction, Transfer, TransferKind, VaultMetadata, VoteSubmission,
        VoteValue,
    };
    use tx_admission::{
        AdmissionConfig, SignatureError, Stage, StructuralError, TransactionAdmissionApi,
        TransactionError, TransactionField, TransactionPipeline,
    };

    const PARTY: &str = "ae94a5a2d1a24b6f44a1e2e3a1f0a1c6a3a9de5a3e95b1c1a0c2d1b1e3f4a5b6";

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn vote() -> Command {
        Command::VoteSubmission(VoteSubmission {
            proposal_id: MARKET_ID.into(),
            value: VoteValue::Yes.value(),
        })
    }

    fn limit_order() -> Command {
        Command::OrderSubmission(OrderSubmission {
            market_id: MARKET_ID.into(),
            price: "100".into(),
            size: 10,
            side: Side::Buy.value(),
            time_in_force: TimeInForce::Gtc.value(),
            order_type: OrderType::Limit.value(),
            ..Default::default()
        })
    }

    fn transfer() -> Command {
        Command::Transfer(Transfer {
            from_account_type: AccountType::General.value(),
            to: PARTY.into(),
            to_account_type: AccountType::General.value(),
            asset: MARKET_ID.into(),
            amount: "1000".into(),
            reference: "rent".into(),
            kind: Some(TransferKind::OneOff(OneOffTransfer { deliver_on: 0 })),
        })
    }

    fn vault() -> Command {
        Command::CreateVault(CreateVault {
            asset: MARKET_ID.into(),
            metadata: Some(VaultMetadata {
                name: "zohar".into(),
                description: "really good fund".into(),
                url: "some url".into(),
                image_url: "some image url".into(),
            }),
            fee_period: "10h".into(),
            management_fee_factor: "0.09".into(),
            performance_fee_factor: "0.03".into(),
            cut_off_period_length: 1,
            redemption_dates: vec![RedemptionDate {
                redemption_date: 1234,
                redemption_type: RedemptionType::FreeCashOnly.value(),
                max_fraction: "0.1".into(),
            }],
        })
    }

    fn amm(base: &str, upper: &str) -> Command {
        Command::SubmitAmm(SubmitAmm {
            market_id: MARKET_ID.into(),
            commitment_amount: "10000".into(),
            slippage_tolerance: "0.05".into(),
            concentrated_liquidity_parameters: Some(ConcentratedLiquidityParameters {
                base: base.into(),
                lower_bound: Some("800".into()),
                upper_bound: Some(upper.into()),
                leverage_at_lower_bound: None,
                leverage_at_upper_bound: None,
            }),
            proposed_fee: "0.01".into(),
        })
    }

    fn rejected(err: TransactionError) -> command_checks::ErrorSet {
        match err {
            TransactionError::Rejected(errs) => errs,
            other => panic!("expected semantic rejection, got {other:?}"),
        }
    }

    // =========================================================================
    // ACCEPTED
    // =========================================================================

    #[test]
    fn test_valid_commands_are_admitted() {
        let pipeline = pipeline();
        let wallet = Wallet::ed25519(7);

        for command in [vote(), limit_order(), transfer(), vault(), amm("1000", "1100")] {
            let nonce = random_nonce();
            let tx = wallet.submit(nonce, command.clone());

            let admitted = pipeline.admit(&tx).unwrap();

            assert_eq!(admitted.command, command);
            assert_eq!(admitted.nonce, nonce);
            assert_eq!(admitted.signer, wallet.public_key());
            assert_eq!(admitted.tx_hash, tx.hash());
        }
    }

    #[test]
    fn test_secp256k1_wallet_is_admitted() {
        let wallet = Wallet::secp256k1();
        let admitted = pipeline().admit(&wallet.submit(9, vote())).unwrap();

        assert_eq!(admitted.party(), hex::encode(wallet.public_key()));
    }

    #[test]
    fn test_admit_raw_decodes_envelope() {
        let tx = Wallet::ed25519(1).submit(4, limit_order());
        let bytes = bincode::serialize(&tx).unwrap();

        let admitted = pipeline().admit_raw(&bytes).unwrap();
        assert_eq!(admitted.command, limit_order());
    }

    #[test]
    fn test_check_input_data_without_envelope() {
        let input = InputData { nonce: 11, command: Some(transfer()) };

        assert_eq!(pipeline().check_input_data(&encode(&input)).unwrap(), input);
    }

    // =========================================================================
    // SEMANTIC REJECTION
    // =========================================================================

    #[test]
    fn test_empty_vault_reports_asset_and_redemption_dates() {
        let tx = Wallet::ed25519(2).submit(1, Command::CreateVault(CreateVault::default()));

        let errs = rejected(pipeline().admit(&tx).unwrap_err());

        assert_eq!(errs.get("create_vault.asset"), vec![&Cause::IsRequired]);
        assert_eq!(errs.get("create_vault.redemption_dates"), vec![&Cause::IsRequired]);
        assert!(errs.len() > 2);
    }

    #[test]
    fn test_amm_base_above_upper_bound() {
        let tx = Wallet::ed25519(3).submit(1, amm("1000", "900"));

        let err = pipeline().admit(&tx).unwrap_err();

        assert!(err.to_string().contains(
            "submit_amm.concentrated_liquidity_parameters.base \
             (should be a smaller value than upper_bound)"
        ));
    }

    #[test]
    fn test_empty_transfer_reports_six_rules() {
        let tx = Wallet::ed25519(4).submit(1, Command::Transfer(Transfer::default()));

        let errs = rejected(pipeline().admit(&tx).unwrap_err());

        assert_eq!(errs.len(), 6);
        assert_eq!(
            errs.render(),
            "transfer_instruction.amount (is required), \
             transfer_instruction.asset (is required), \
             transfer_instruction.from_account_type (is not a valid value), \
             transfer_instruction.kind (is required), \
             transfer_instruction.to (is required), \
             transfer_instruction.to_account_type (is not a valid value)"
        );
    }

    #[test]
    fn test_empty_vote_accumulates() {
        let tx = Wallet::ed25519(5).submit(1, Command::VoteSubmission(VoteSubmission::default()));

        let errs = rejected(pipeline().admit(&tx).unwrap_err());

        assert_eq!(errs.len(), 2);
        assert!(!errs.is_empty_for("vote_submission.proposal_id"));
        assert!(!errs.is_empty_for("vote_submission.value"));
    }

    #[test]
    fn test_zero_nonce_joins_command_errors() {
        let tx = Wallet::ed25519(6).submit(0, Command::VoteSubmission(VoteSubmission::default()));

        let errs = rejected(pipeline().admit(&tx).unwrap_err());

        assert_eq!(errs.get("tx.input_data.nonce"), vec![&Cause::MustBePositive]);
        assert_eq!(errs.len(), 3);
    }

    #[test]
    fn test_missing_command_is_required() {
        let tx = Wallet::ed25519(8).sign(&InputData { nonce: 1, command: None });

        let err = pipeline().admit(&tx).unwrap_err();
        assert_eq!(err.to_string(), "tx.input_data.command (is required)");
    }

    #[test]
    fn test_unknown_command_is_not_supported() {
        let tx = Wallet::ed25519(8).submit(1, Command::Unknown { tag: 1023 });

        let err = pipeline().admit(&tx).unwrap_err();
        assert_eq!(err.to_string(), "tx.input_data.command (is not supported)");
    }

    #[test]
    fn test_unknown_proposal_change_is_not_valid() {
        let proposal = Command::ProposalSubmission(ProposalSubmission {
            reference: "listing".into(),
            terms: Some(ProposalTerms {
                closing_timestamp: 100,
                enactment_timestamp: 200,
                validation_timestamp: 0,
                change: Some(ProposalChange::Unknown { tag: 150 }),
            }),
            rationale: Some(ProposalRationale {
                title: "Future change".into(),
                description: "Sent by a newer wallet".into(),
            }),
        });
        let tx = Wallet::ed25519(10).submit(1, proposal);

        let err = pipeline().admit(&tx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "proposal_submission.terms.change (is not a valid value)"
        );
    }

    // =========================================================================
    // STRUCTURAL AND SIGNATURE REJECTION
    // =========================================================================

    #[test]
    fn test_bare_transaction_is_structural() {
        let tx = Transaction { input_data: Vec::new(), signature: None, from: None };

        let err = pipeline().admit(&tx).unwrap_err();

        assert_eq!(
            err,
            TransactionError::Structural(StructuralError {
                missing: vec![
                    TransactionField::InputData,
                    TransactionField::Signature,
                    TransactionField::From,
                ],
            })
        );
        assert_eq!(
            err.to_string(),
            "tx.input_data is required, tx.signature is required, tx.from is required"
        );
    }

    #[test]
    fn test_other_chain_signature_is_invalid() {
        let tx = Wallet::ed25519(9).on_chain("vega-mainnet-0011").submit(1, vote());

        assert_eq!(
            pipeline().admit(&tx).unwrap_err(),
            TransactionError::Signature(SignatureError::Invalid)
        );
    }

    #[test]
    fn test_disabled_algorithm_is_unknown() {
        let config = AdmissionConfig {
            chain_id: CHAIN_ID.into(),
            signature_algorithms: vec![tx_admission::ED25519.into()],
        };
        let pipeline = TransactionPipeline::from_config(&config).unwrap();
        let tx = Wallet::secp256k1().submit(1, vote());

        assert!(matches!(
            pipeline.admit(&tx),
            Err(TransactionError::Signature(SignatureError::UnknownAlgorithm(_)))
        ));
    }

    #[test]
    fn test_stage_names_match_log_fields() {
        let names: Vec<_> = [Stage::Structural, Stage::Signature, Stage::Decode, Stage::Semantic]
            .iter()
            .map(|stage| stage.to_string())
            .collect();
        assert_eq!(names, ["structural", "signature", "decode", "semantic"]);
    }
}
