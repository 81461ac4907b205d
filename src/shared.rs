//! Lock-guarded access to a bank shared across threads.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::common::{
    error::LedgerResult,
    id::{AccountId, OwnerId},
    money::Money,
};
use crate::domain::{account::AccountKind, bank::Bank};

/// A cloneable handle that serializes every ledger operation behind a
/// single lock.
///
/// In single-threaded use, `&mut Bank` already makes each operation
/// exclusive. Shared use needs that exclusivity spelled out: each method
/// here holds the lock for the whole validate-then-mutate sequence, so a
/// transfer's two legs are applied atomically and no reader can observe
/// only one of them. Reads run under the same lock and see a consistent
/// snapshot.
#[derive(Clone)]
pub struct SharedBank {
    inner: Arc<Mutex<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bank)),
        }
    }

    pub fn add_owner(&self, name: impl Into<String>) -> OwnerId {
        self.lock().add_owner(name)
    }

    pub fn open_account(
        &self,
        owner: OwnerId,
        opening_balance: Money,
        kind: AccountKind,
    ) -> LedgerResult<AccountId> {
        self.lock().open_account(owner, opening_balance, kind)
    }

    pub fn deposit(&self, account: AccountId, amount: Money) -> LedgerResult<Money> {
        self.lock().deposit(account, amount)
    }

    pub fn withdraw(&self, account: AccountId, amount: Money) -> LedgerResult<Money> {
        self.lock().withdraw(account, amount)
    }

    pub fn transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Money,
    ) -> LedgerResult<(Money, Money)> {
        self.lock().transfer(source, destination, amount)
    }

    pub fn balance(&self, account: AccountId) -> Option<Money> {
        self.lock().account(account).map(|acc| acc.balance())
    }

    /// Run a closure against a consistent view of the ledger.
    pub fn read<R>(&self, f: impl FnOnce(&Bank) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Bank> {
        // A panic can only poison the lock mid-read; the ledger itself is
        // mutated in one step after validation, so the state stays usable.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
