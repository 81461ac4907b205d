use std::str::FromStr;

use bank_ledger::{AccountId, AccountKind, Bank, LedgerError, Money, TransactionKind};

struct Fixture {
    bank: Bank,
    checking: AccountId,
    investment: AccountId,
    other_checking: AccountId,
    corporate: AccountId,
}

// Two owners with two accounts each, mirroring a small retail bank:
// owner one holds a checking (500) + individual investment (3000) pair,
// owner two a checking (1000) + corporate investment (10000) pair.
fn fixture() -> Fixture {
    let mut bank = Bank::new(
        "The Simple Bank",
        "Banking made simple... because it has to be :)",
    );

    let owner1 = bank.add_owner("John Deer");
    let owner2 = bank.add_owner("Jane Doe");

    let checking = bank
        .open_account(owner1, Money::from_units(500), AccountKind::Checking)
        .unwrap();
    let investment = bank
        .open_account(owner1, Money::from_units(3_000), AccountKind::InvestmentIndividual)
        .unwrap();
    let other_checking = bank
        .open_account(owner2, Money::from_units(1_000), AccountKind::Checking)
        .unwrap();
    let corporate = bank
        .open_account(owner2, Money::from_units(10_000), AccountKind::InvestmentCorporate)
        .unwrap();

    Fixture {
        bank,
        checking,
        investment,
        other_checking,
        corporate,
    }
}

#[test]
fn deposit_into_a_fresh_checking_account() {
    let mut f = fixture();

    let balance = f.bank.deposit(f.checking, Money::from_units(100)).unwrap();

    assert_eq!(balance, Money::from_units(600));
}

#[test]
fn deposit_of_a_negative_amount_is_rejected_everywhere() {
    let mut f = fixture();

    for account in [f.checking, f.investment, f.other_checking, f.corporate] {
        let err = f.bank.deposit(account, Money::from_units(-1)).unwrap_err();
        assert_eq!(err, LedgerError::InvalidAmount(Money::from_units(-1)));
        assert!(f.bank.account(account).unwrap().transactions().is_empty());
    }
}

#[test]
fn withdrawal_cap_boundary_on_an_individual_investment_account() {
    let mut f = fixture();

    let balance = f.bank.withdraw(f.investment, Money::from_units(500)).unwrap();
    assert_eq!(balance, Money::from_units(2_500));

    let over = Money::from_str("500.01").unwrap();
    let err = f.bank.withdraw(f.investment, over).unwrap_err();
    assert_eq!(
        err,
        LedgerError::WithdrawalLimitExceeded {
            amount: over,
            limit: Money::from_units(500),
        }
    );
    assert_eq!(
        f.bank.account(f.investment).unwrap().balance(),
        Money::from_units(2_500)
    );
}

#[test]
fn transfer_to_the_same_account_is_rejected() {
    let mut f = fixture();

    let err = f
        .bank
        .transfer(f.checking, f.checking, Money::from_units(100))
        .unwrap_err();

    assert_eq!(err, LedgerError::SameAccountTransfer(f.checking));
}

#[test]
fn transfer_across_owners_is_rejected_and_touches_nothing() {
    let mut f = fixture();

    let err = f
        .bank
        .transfer(f.checking, f.other_checking, Money::from_units(100))
        .unwrap_err();

    assert!(matches!(err, LedgerError::OwnerMismatch(..)));
    assert_eq!(
        f.bank.account(f.checking).unwrap().balance(),
        Money::from_units(500)
    );
    assert_eq!(
        f.bank.account(f.other_checking).unwrap().balance(),
        Money::from_units(1_000)
    );
}

#[test]
fn transfer_between_sibling_accounts_moves_the_full_amount() {
    let mut f = fixture();

    let (source_balance, destination_balance) = f
        .bank
        .transfer(f.checking, f.investment, Money::from_units(500))
        .unwrap();

    assert_eq!(source_balance, Money::ZERO);
    assert_eq!(destination_balance, Money::from_units(3_500));

    // Both legs are in the logs and name each other.
    let debit = f.bank.account(f.checking).unwrap().transactions().last().unwrap().clone();
    assert_eq!(debit.kind(), TransactionKind::Transfer);
    assert_eq!(debit.counterparty(), Some(f.investment));

    let credit = f.bank.account(f.investment).unwrap().transactions().last().unwrap().clone();
    assert_eq!(credit.kind(), TransactionKind::Transfer);
    assert_eq!(credit.counterparty(), Some(f.checking));
}

#[test]
fn every_operation_keeps_balances_in_lockstep_with_the_logs() {
    let mut f = fixture();

    f.bank.deposit(f.checking, Money::from_units(75)).unwrap();
    f.bank.withdraw(f.checking, Money::from_units(30)).unwrap();
    f.bank
        .transfer(f.checking, f.investment, Money::from_units(200))
        .unwrap();
    f.bank.withdraw(f.investment, Money::from_units(480)).unwrap();
    f.bank
        .transfer(f.corporate, f.other_checking, Money::from_units(4_000))
        .unwrap();
    // A few rejected calls mixed in; they must not show up in any log.
    let _ = f.bank.deposit(f.checking, Money::ZERO);
    let _ = f.bank.withdraw(f.investment, Money::from_units(501));
    let _ = f.bank.transfer(f.checking, f.other_checking, Money::from_units(10));

    for account in f.bank.accounts().values() {
        let log_total = account
            .transactions()
            .iter()
            .fold(Money::ZERO, |acc, tx| acc + tx.amount());
        assert_eq!(account.balance(), account.opening_balance() + log_total);
    }
}

#[test]
fn operations_against_unknown_accounts_fail_cleanly() {
    let mut f = fixture();
    let missing = AccountId::new();

    assert_eq!(
        f.bank.deposit(missing, Money::from_units(10)).unwrap_err(),
        LedgerError::AccountNotFound(missing)
    );
    assert_eq!(
        f.bank.withdraw(missing, Money::from_units(10)).unwrap_err(),
        LedgerError::AccountNotFound(missing)
    );
    assert_eq!(
        f.bank
            .transfer(missing, f.checking, Money::from_units(10))
            .unwrap_err(),
        LedgerError::WithdrawalAccountNotFound(missing)
    );
    assert_eq!(
        f.bank
            .transfer(f.checking, missing, Money::from_units(10))
            .unwrap_err(),
        LedgerError::DepositAccountNotFound(missing)
    );
}

#[test]
fn fractional_amounts_stay_exact_over_many_operations() {
    let mut f = fixture();

    // 0.1 has no exact binary-float representation; fixed point keeps the
    // running total exact across repeated additions.
    for _ in 0..1_000 {
        f.bank.deposit(f.checking, Money::from_str("0.1").unwrap()).unwrap();
    }

    assert_eq!(
        f.bank.account(f.checking).unwrap().balance(),
        Money::from_units(600)
    );
}
