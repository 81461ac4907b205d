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

    let balance = acc.record(TransactionKind::Deposit, amount, None);
    debug!(%account, %amount, %balance, "deposit applied");
    Ok(balance)
}
