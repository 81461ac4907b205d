use tracing::debug;

use crate::{
    common::{
        error::{LedgerError, LedgerResult},
        id::{AccountId, OwnerId},
        money::Money,
    },
    domain::{
        account::{Account, AccountKind},
        bank::Bank,
    },
};

pub fn handle(
    bank: &mut Bank,
    owner: OwnerId,
    opening_balance: Money,
    kind: AccountKind,
) -> LedgerResult<AccountId> {
    if !bank.contains_owner(owner) {
        return Err(LedgerError::OwnerNotFound(owner));
    }

    // Zero is a valid opening balance; only negative is rejected. The
    // opening balance is seeded directly, not recorded as a transaction.
    if opening_balance.is_negative() {
        return Err(LedgerError::InvalidAmount(opening_balance));
    }

    let id = bank.insert_account(Account::open(owner, opening_balance, kind));
    debug!(account = %id, %owner, ?kind, %opening_balance, "account opened");
    Ok(id)
}
