//! # Bincode Codec
//!
//! Wire layout of signed input data:
//!
//! ```text
//! WireInputData { nonce: u64, command: Option<WireCommand { tag: u32, body: bytes }> }
//! ```
//!
//! `body` is the bincode encoding of the command message named by `tag`;
//! an empty body stands for the zero-valued message. A tag this node does not
//! know is not a decode failure: it becomes [`Command::Unknown`] and is
//! rejected by the semantic checks.
//!
//! Every buffer goes through [`shared_types::wire`], which rejects trailing
//! bytes: a signed payload decodes completely or not at all.

use crate::domain::errors::DecodeError;
use crate::ports::outbound::CommandDecoder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_types::{wire, BodyCodec, Command, CommandKind, InputData, Transaction};

/// Envelope of a command inside input data.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCommand {
    pub tag: u32,
    #[serde_as(as = "Bytes")]
    pub body: Vec<u8>,
}

/// Input data as it travels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireInputData {
    pub nonce: u64,
    pub command: Option<WireCommand>,
}

/// [`CommandDecoder`] over bincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl BodyCodec for BincodeCodec {
    type Error = bincode::Error;

    fn decode<T: DeserializeOwned + Default>(&self, body: &[u8]) -> Result<T, Self::Error> {
        wire::decode_body(body)
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        wire::encode(value)
    }
}

impl BincodeCodec {
    /// Encode input data the way a wallet does before signing.
    pub fn encode_input_data(&self, input: &InputData) -> Result<Vec<u8>, bincode::Error> {
        let command = input
            .command
            .as_ref()
            .map(|command| {
                Ok::<_, bincode::Error>(WireCommand {
                    tag: command.tag(),
                    body: command.encode_body(self)?,
                })
            })
            .transpose()?;

        wire::encode(&WireInputData { nonce: input.nonce, command })
    }

    /// Encode a transaction envelope.
    pub fn encode_transaction(&self, transaction: &Transaction) -> Result<Vec<u8>, bincode::Error> {
        wire::encode(transaction)
    }
}

impl CommandDecoder for BincodeCodec {
    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction, DecodeError> {
        wire::decode(bytes).map_err(|err| DecodeError::Transaction(err.to_string()))
    }

    fn decode_input_data(&self, bytes: &[u8]) -> Result<InputData, DecodeError> {
        let input: WireInputData =
            wire::decode(bytes).map_err(|err| DecodeError::InputData(err.to_string()))?;

        let command = match input.command {
            None => None,
            Some(WireCommand { tag, body }) => match CommandKind::from_tag(tag) {
                Some(kind) => Some(Command::decode_body(kind, &body, self).map_err(|err| {
                    DecodeError::CommandBody {
                        tag,
                        reason: err.to_string(),
                    }
                })?),
                None => {
                    tracing::trace!(tag, "unknown command tag");
                    Some(Command::Unknown { tag })
                }
            },
        };

        Ok(InputData {
            nonce: input.nonce,
            command,
        })
    }
}
