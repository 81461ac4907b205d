use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{id::AccountId, money::Money};

/// An immutable entry in an account's transaction log.
///
/// The amount is a signed delta: credits positive, debits negative. The
/// counterparty is only present on the two legs of a transfer, where each
/// leg names the account on the other side.
#[derive(Debug, Clone)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Utc>,
    counterparty: Option<AccountId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl Transaction {
    /// Stamps the current UTC time.
    pub(crate) fn new(kind: TransactionKind, amount: Money, counterparty: Option<AccountId>) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            counterparty,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn counterparty(&self) -> Option<AccountId> {
        self.counterparty
    }
}
