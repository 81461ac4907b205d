use crate::common::id::{AccountId, OwnerId};
use crate::common::money::Money;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Validation outcomes of ledger operations. None of these are system
/// faults; a returned error means no account state was touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("owner not found: {0}")]
    OwnerNotFound(OwnerId),
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("withdrawal account not found: {0}")]
    WithdrawalAccountNotFound(AccountId),
    #[error("deposit account not found: {0}")]
    DepositAccountNotFound(AccountId),
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),
    #[error("withdrawal limit exceeded: {amount} is over the {limit} cap")]
    WithdrawalLimitExceeded { amount: Money, limit: Money },
    #[error("cannot transfer within the same account: {0}")]
    SameAccountTransfer(AccountId),
    #[error("accounts have different owners: {0} and {1}")]
    OwnerMismatch(OwnerId, OwnerId),
}
