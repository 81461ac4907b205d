use std::collections::HashMap;

use crate::common::{
    error::LedgerResult,
    id::{AccountId, OwnerId},
    money::Money,
};
use crate::domain::{
    account::{Account, AccountKind},
    owner::AccountOwner,
};
use crate::ops;

/// The aggregate root: owns every owner and account, and is the only entry
/// point for the operations that move money.
///
/// All lookups are id-keyed with explicit not-found handling; no operation
/// mutates anything until every validation on it has passed.
#[derive(Debug)]
pub struct Bank {
    name: String,
    tagline: String,
    owners: HashMap<OwnerId, AccountOwner>,
    accounts: HashMap<AccountId, Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: tagline.into(),
            owners: HashMap::new(),
            accounts: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Register a new owner. Always succeeds and returns the fresh id.
    pub fn add_owner(&mut self, name: impl Into<String>) -> OwnerId {
        let owner = AccountOwner::new(name);
        let id = owner.id();
        self.owners.insert(id, owner);
        id
    }

    /// Open an account for an existing owner with a nonnegative opening
    /// balance.
    pub fn open_account(
        &mut self,
        owner: OwnerId,
        opening_balance: Money,
        kind: AccountKind,
    ) -> LedgerResult<AccountId> {
        ops::open_account::handle(self, owner, opening_balance, kind)
    }

    /// Credit an account, returning its new balance.
    pub fn deposit(&mut self, account: AccountId, amount: Money) -> LedgerResult<Money> {
        ops::deposit::handle(self, account, amount)
    }

    /// Debit an account, returning its new balance.
    pub fn withdraw(&mut self, account: AccountId, amount: Money) -> LedgerResult<Money> {
        ops::withdraw::handle(self, account, amount)
    }

    /// Move money between two accounts of the same owner, returning the
    /// new `(source, destination)` balances.
    pub fn transfer(
        &mut self,
        source: AccountId,
        destination: AccountId,
        amount: Money,
    ) -> LedgerResult<(Money, Money)> {
        ops::transfer::handle(self, source, destination, amount)
    }

    pub fn owner(&self, id: OwnerId) -> Option<&AccountOwner> {
        self.owners.get(&id)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn owners(&self) -> &HashMap<OwnerId, AccountOwner> {
        &self.owners
    }

    pub fn accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    pub(crate) fn contains_owner(&self, id: OwnerId) -> bool {
        self.owners.contains_key(&id)
    }

    pub(crate) fn insert_account(&mut self, account: Account) -> AccountId {
        let id = account.id();
        self.accounts.insert(id, account);
        id
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Mutable access to two distinct accounts at once, for the two legs
    /// of a transfer.
    pub(crate) fn account_pair_mut(
        &mut self,
        first: AccountId,
        second: AccountId,
    ) -> Option<(&mut Account, &mut Account)> {
        if first == second {
            return None;
        }
        let [a, b] = self.accounts.get_disjoint_mut([&first, &second]);
        Some((a?, b?))
    }
}
