use tracing::debug;

use crate::{
    common::{
        error::{LedgerError, LedgerResult},
        id::AccountId,
        money::Money,
    },
    domain::{bank::Bank, transaction::TransactionKind},
};

pub fn handle(bank: &mut Bank, account: AccountId, amount: Money) -> LedgerResult<Money> {
    let Some(acc) = bank.account_mut(account) else {
        return Err(LedgerError::AccountNotFound(account));
    };

    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount));
    }

    // The cap bounds a single withdrawal; it is not a balance floor, so
    // balances may still go negative.
    if let Some(limit) = acc.kind().withdrawal_cap() {
        if amount > limit {
            return Err(LedgerError::WithdrawalLimitExceeded { amount, limit });
        }
    }

    let balance = acc.record(TransactionKind::Withdrawal, -amount, None);
    debug!(%account, %amount, %balance, "withdrawal applied");
    Ok(balance)
}
