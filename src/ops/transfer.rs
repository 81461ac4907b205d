use tracing::debug;

use crate::{
    common::{
        error::{LedgerError, LedgerResult},
        id::AccountId,
        money::Money,
    },
    domain::{bank::Bank, transaction::TransactionKind},
};

/// Checks run in a fixed order so callers see stable error outcomes; no
/// leg is applied until every check has passed.
pub fn handle(
    bank: &mut Bank,
    source: AccountId,
    destination: AccountId,
    amount: Money,
) -> LedgerResult<(Money, Money)> {
    if source == destination {
        return Err(LedgerError::SameAccountTransfer(source));
    }

    let Some(src) = bank.account(source) else {
        return Err(LedgerError::WithdrawalAccountNotFound(source));
    };
    let Some(dst) = bank.account(destination) else {
        return Err(LedgerError::DepositAccountNotFound(destination));
    };

    // Transfers are restricted to accounts of one owner by policy.
    if src.owner_id() != dst.owner_id() {
        return Err(LedgerError::OwnerMismatch(src.owner_id(), dst.owner_id()));
    }

    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount));
    }

    // Only the debit leg is capped; the destination kind does not matter.
    if let Some(limit) = src.kind().withdrawal_cap() {
        if amount > limit {
            return Err(LedgerError::WithdrawalLimitExceeded { amount, limit });
        }
    }

    let Some((src, dst)) = bank.account_pair_mut(source, destination) else {
        return Err(LedgerError::WithdrawalAccountNotFound(source));
    };
    let source_balance = src.record(TransactionKind::Transfer, -amount, Some(destination));
    let destination_balance = dst.record(TransactionKind::Transfer, amount, Some(source));
    debug!(
        %source,
        %destination,
        %amount,
        %source_balance,
        %destination_balance,
        "transfer applied"
    );
    Ok((source_balance, destination_balance))
}
