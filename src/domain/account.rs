use serde::{Deserialize, Serialize};

use crate::common::{
    id::{AccountId, OwnerId},
    money::Money,
};
use crate::domain::transaction::{Transaction, TransactionKind};

/// Account categories. The kind is fixed when the account is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Checking,
    InvestmentIndividual,
    InvestmentCorporate,
}

impl AccountKind {
    /// Per-transaction cap applied to withdrawals and transfer debits.
    /// `None` means the kind is uncapped.
    pub fn withdrawal_cap(&self) -> Option<Money> {
        match self {
            AccountKind::InvestmentIndividual => Some(Money::from_units(500)),
            AccountKind::Checking | AccountKind::InvestmentCorporate => None,
        }
    }
}

/// A balance-bearing account with an append-only transaction log.
///
/// Invariant: `balance == opening_balance + sum of recorded deltas`. The
/// balance and the log change only through [`Account::record`], so the two
/// stay in lockstep.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    owner_id: OwnerId,
    kind: AccountKind,
    opening_balance: Money,
    balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    /// The opening balance is seeded directly; it is not a transaction.
    pub(crate) fn open(owner_id: OwnerId, opening_balance: Money, kind: AccountKind) -> Self {
        Self {
            id: AccountId::new(),
            owner_id,
            kind,
            opening_balance,
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a transaction and adjust the balance by its signed amount,
    /// returning the new balance.
    ///
    /// This is the only path that changes an account, and it performs no
    /// validation: callers run every business-rule check first.
    pub(crate) fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        counterparty: Option<AccountId>,
    ) -> Money {
        self.transactions.push(Transaction::new(kind, amount, counterparty));
        self.balance += amount;
        self.balance
    }
}
