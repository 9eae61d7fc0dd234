//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::AdmittedCommand;
use crate::domain::errors::TransactionError;
use shared_types::{InputData, Transaction};

/// Transaction admission API.
///
/// Stateless and synchronous; implementations must be thread-safe
/// (`Send + Sync`) so one instance can serve concurrent callers.
pub trait TransactionAdmissionApi: Send + Sync {
    /// Run every stage against a transaction envelope.
    fn admit(&self, transaction: &Transaction) -> Result<AdmittedCommand, TransactionError>;

    /// Decode a raw envelope, then [`admit`](Self::admit) it.
    fn admit_raw(&self, bytes: &[u8]) -> Result<AdmittedCommand, TransactionError>;

    /// Decode and semantically check input data whose signature was already
    /// verified elsewhere.
    fn check_input_data(&self, input_data: &[u8]) -> Result<InputData, TransactionError>;
}
